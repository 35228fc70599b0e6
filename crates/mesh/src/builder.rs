//! Vertex deduplication and index accumulation for indexed loads.

use std::collections::HashMap;

use crate::error::{ObjError, ObjResult};
use crate::mesh::{MeshData, MeshVertex};

/// Identity of a vertex for deduplication: resolved zero-based indices
/// into the position/texcoord/normal tables. `None` marks an omitted
/// field. Two face corners naming the same triple share one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexKey {
    pub position: usize,
    pub texcoord: Option<usize>,
    pub normal: Option<usize>,
}

/// Accumulates unique vertices and triangle indices during one load
/// call. Growth is monotonic; [`bake`](Self::bake) finalizes the
/// buffers and consumes the builder.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    slots: HashMap<VertexKey, u32>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot assigned to `key`, appending `vertex` only if the key is
    /// unseen. Slots are handed out in first-seen order.
    pub fn add_vertex(&mut self, key: VertexKey, vertex: MeshVertex) -> ObjResult<u32> {
        if let Some(&slot) = self.slots.get(&key) {
            return Ok(slot);
        }
        let slot = u32::try_from(self.vertices.len()).map_err(|_| ObjError::TooManyVertices)?;
        self.vertices.push(vertex);
        self.slots.insert(key, slot);
        Ok(slot)
    }

    /// Appends one triangle. Slots must already exist in the vertex list.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        debug_assert!(
            (a as usize) < self.vertices.len()
                && (b as usize) < self.vertices.len()
                && (c as usize) < self.vertices.len()
        );
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Fan-triangulates a face given its deduplicated slots in encounter
    /// order: `(slots[0], slots[i], slots[i+1])` for each interior edge.
    /// Faces with fewer than three corners emit nothing.
    pub fn push_face(&mut self, slots: &[u32]) {
        if slots.len() < 3 {
            return;
        }
        for i in 1..slots.len() - 1 {
            self.push_triangle(slots[0], slots[i], slots[i + 1]);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Finalize into an immutable mesh.
    pub fn bake(self) -> MeshData {
        MeshData::new(self.vertices, self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(p: usize, t: Option<usize>, n: Option<usize>) -> VertexKey {
        VertexKey {
            position: p,
            texcoord: t,
            normal: n,
        }
    }

    #[test]
    fn duplicate_key_reuses_slot() {
        let mut b = MeshBuilder::new();
        let first = b.add_vertex(key(0, Some(0), Some(0)), MeshVertex::default()).unwrap();
        let second = b.add_vertex(key(0, Some(0), Some(0)), MeshVertex::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(b.vertex_count(), 1);
    }

    #[test]
    fn distinct_keys_get_fresh_slots() {
        let mut b = MeshBuilder::new();
        let a = b.add_vertex(key(0, None, None), MeshVertex::default()).unwrap();
        let c = b.add_vertex(key(0, Some(1), None), MeshVertex::default()).unwrap();
        let d = b.add_vertex(key(1, None, None), MeshVertex::default()).unwrap();
        assert_eq!((a, c, d), (0, 1, 2));
        assert_eq!(b.vertex_count(), 3);
    }

    #[test]
    fn quad_fans_into_two_triangles() {
        let mut b = MeshBuilder::new();
        for p in 0..4 {
            b.add_vertex(key(p, None, None), MeshVertex::default()).unwrap();
        }
        b.push_face(&[0, 1, 2, 3]);
        assert_eq!(b.bake().indices(), &[0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn pentagon_fans_into_three_triangles() {
        let mut b = MeshBuilder::new();
        for p in 0..5 {
            b.add_vertex(key(p, None, None), MeshVertex::default()).unwrap();
        }
        b.push_face(&[0, 1, 2, 3, 4]);
        assert_eq!(b.bake().indices(), &[0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn degenerate_face_emits_nothing() {
        let mut b = MeshBuilder::new();
        b.add_vertex(key(0, None, None), MeshVertex::default()).unwrap();
        b.add_vertex(key(1, None, None), MeshVertex::default()).unwrap();
        b.push_face(&[0, 1]);
        b.push_face(&[0]);
        b.push_face(&[]);
        assert_eq!(b.triangle_count(), 0);
        assert!(b.bake().indices().is_empty());
    }
}
