//! CPU-side mesh buffers produced by the OBJ loader.

use bytemuck::{Pod, Zeroable};

/// UV used when a face reference omits its texcoord field.
pub const DEFAULT_UV: [f32; 2] = [0.0, 0.0];
/// Normal used when a face reference omits its normal field.
pub const DEFAULT_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

/// Interleaved vertex: object-space position/normal/uv plus the uniform
/// color supplied by the caller. `repr(C)` + `Pod` so the baked buffer
/// uploads as raw bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2], color: [f32; 4]) -> Self {
        Self {
            position,
            normal,
            uv,
            color,
        }
    }
}

/// Baked indexed triangle mesh. Construction goes through
/// [`MeshBuilder::bake`](crate::builder::MeshBuilder::bake); no mutation
/// afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
}

impl MeshData {
    pub(crate) fn new(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer contents, ready for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents, ready for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Returns `true` if the index list is whole triangles and every
    /// index points at an existing vertex.
    pub fn is_valid(&self) -> bool {
        self.indices.len() % 3 == 0
            && self
                .indices
                .iter()
                .all(|&i| (i as usize) < self.vertices.len())
    }
}

/// Flat, non-indexed buffers for simple per-frame geometry: four
/// parallel arrays with one entry per face-vertex occurrence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameData {
    positions: Vec<f32>,
    colors: Vec<f32>,
    normals: Vec<f32>,
    uvs: Vec<f32>,
}

impl FrameData {
    pub(crate) fn push(
        &mut self,
        position: [f32; 3],
        color: [f32; 4],
        normal: [f32; 3],
        uv: [f32; 2],
    ) {
        self.positions.extend_from_slice(&position);
        self.colors.extend_from_slice(&color);
        self.normals.extend_from_slice(&normal);
        self.uvs.extend_from_slice(&uv);
    }

    /// Number of face-vertex entries.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// 3 floats per entry.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// 4 floats per entry, broadcast from the caller's uniform color.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// 3 floats per entry.
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// 2 floats per entry.
    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    /// Returns `true` if the four buffers describe the same entry count.
    pub fn is_valid(&self) -> bool {
        let n = self.len();
        self.positions.len() == n * 3
            && self.colors.len() == n * 4
            && self.normals.len() == n * 3
            && self.uvs.len() == n * 2
    }
}
