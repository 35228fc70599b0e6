//! OBJ parser supporting positions, normals and texture coordinates.
//!
//! Face references follow the `POS[/[TEX]/[NORM]]` grammar with signed
//! indices; negative values count back from the most recent attribute
//! record. Indexed loads deduplicate (position, uv, normal) triples into
//! a compact vertex/index pair; frame loads emit flat parallel buffers
//! with one entry per face-vertex occurrence.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::builder::{MeshBuilder, VertexKey};
use crate::error::{ObjError, ObjResult};
use crate::index::{ResolveError, resolve_index};
use crate::mesh::{DEFAULT_NORMAL, DEFAULT_UV, FrameData, MeshData, MeshVertex};

/// Load an indexed OBJ mesh from a file path. Every produced vertex is
/// tinted with the caller-supplied uniform `color`; the file itself
/// never carries color.
pub fn load_obj_from_path(path: impl AsRef<Path>, color: [f32; 4]) -> ObjResult<MeshData> {
    let path = path.as_ref();
    let file = open(path)?;
    let mesh = parse_obj(BufReader::new(file), color)?;
    log::info!(
        "Loaded OBJ mesh {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Load an indexed OBJ mesh from a [`BufRead`] implementation.
pub fn load_obj_from_reader<R: BufRead>(reader: R, color: [f32; 4]) -> ObjResult<MeshData> {
    parse_obj(reader, color)
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str, color: [f32; 4]) -> ObjResult<MeshData> {
    parse_obj(io::Cursor::new(contents), color)
}

/// Load flat per-face-vertex buffers from a file path. No vertex
/// sharing takes place; callers that need an index buffer should use
/// [`load_obj_from_path`] instead.
pub fn load_frame_from_path(path: impl AsRef<Path>, color: [f32; 4]) -> ObjResult<FrameData> {
    let path = path.as_ref();
    let file = open(path)?;
    let frame = parse_frame(BufReader::new(file), color)?;
    log::info!(
        "Loaded OBJ frame {}: {} face-vertex entries",
        path.display(),
        frame.len()
    );
    Ok(frame)
}

/// Load flat per-face-vertex buffers from a [`BufRead`] implementation.
pub fn load_frame_from_reader<R: BufRead>(reader: R, color: [f32; 4]) -> ObjResult<FrameData> {
    parse_frame(reader, color)
}

/// Convenience helper to parse flat buffers from a string literal.
pub fn load_frame_from_str(contents: &str, color: [f32; 4]) -> ObjResult<FrameData> {
    parse_frame(io::Cursor::new(contents), color)
}

fn open(path: &Path) -> ObjResult<File> {
    File::open(path).map_err(|source| ObjError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Raw attribute records in file order. All tables are local to one
/// load call; faces resolve against the sizes seen so far.
#[derive(Debug, Default)]
struct AttributeTables {
    positions: Vec<[f32; 3]>,
    texcoords: Vec<[f32; 2]>,
    normals: Vec<[f32; 3]>,
}

impl AttributeTables {
    /// Consume a `v`/`vt`/`vn` record. Returns `false` if `tag` is not
    /// an attribute command, leaving `parts` untouched for the caller.
    fn accumulate<'a>(
        &mut self,
        tag: &str,
        mut parts: impl Iterator<Item = &'a str>,
        line: usize,
    ) -> ObjResult<bool> {
        match tag {
            "v" => {
                let x = parse_f32(parts.next(), line, "x coordinate")?;
                let y = parse_f32(parts.next(), line, "y coordinate")?;
                let z = parse_f32(parts.next(), line, "z coordinate")?;
                self.positions.push([x, y, z]);
            }
            "vt" => {
                let u = parse_f32(parts.next(), line, "u coordinate")?;
                let v = parse_f32(parts.next(), line, "v coordinate")?;
                self.texcoords.push([u, v]);
            }
            "vn" => {
                let nx = parse_f32(parts.next(), line, "nx coordinate")?;
                let ny = parse_f32(parts.next(), line, "ny coordinate")?;
                let nz = parse_f32(parts.next(), line, "nz coordinate")?;
                self.normals.push([nx, ny, nz]);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Resolve one face element against the current table sizes.
    fn resolve(&self, token: &str, line: usize) -> ObjResult<FaceVertex> {
        let mut fields = token.split('/');
        let position = resolve_field(fields.next().unwrap_or(""), self.positions.len(), line)?
            .ok_or_else(|| ObjError::MalformedFace {
                line,
                token: token.to_string(),
            })?;
        let texcoord = resolve_field(fields.next().unwrap_or(""), self.texcoords.len(), line)?;
        let normal = resolve_field(fields.next().unwrap_or(""), self.normals.len(), line)?;
        Ok(FaceVertex {
            position,
            texcoord,
            normal,
        })
    }

    /// Materialize a resolved reference. Indices were range-checked at
    /// resolve time; omitted fields fall back to the defaults.
    fn fetch(&self, fv: FaceVertex, color: [f32; 4]) -> MeshVertex {
        let position = self.positions[fv.position];
        let uv = fv.texcoord.map_or(DEFAULT_UV, |i| self.texcoords[i]);
        let normal = fv.normal.map_or(DEFAULT_NORMAL, |i| self.normals[i]);
        MeshVertex::new(position, normal, uv, color)
    }
}

/// One fully resolved face corner.
#[derive(Clone, Copy, Debug)]
struct FaceVertex {
    position: usize,
    texcoord: Option<usize>,
    normal: Option<usize>,
}

impl FaceVertex {
    fn key(self) -> VertexKey {
        VertexKey {
            position: self.position,
            texcoord: self.texcoord,
            normal: self.normal,
        }
    }
}

fn parse_obj<R: BufRead>(reader: R, color: [f32; 4]) -> ObjResult<MeshData> {
    let mut tables = AttributeTables::default();
    let mut builder = MeshBuilder::new();
    let mut face_slots: Vec<u32> = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line.map_err(|source| ObjError::Read {
            line: line_no,
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let Some(tag) = parts.next() else { continue };
        if tables.accumulate(tag, &mut parts, line_no)? {
            continue;
        }
        if tag != "f" {
            // Other directives (o/g/s/usemtl/etc.) are no-ops.
            continue;
        }

        face_slots.clear();
        for token in parts {
            let fv = tables.resolve(token, line_no)?;
            let slot = builder.add_vertex(fv.key(), tables.fetch(fv, color))?;
            face_slots.push(slot);
        }
        if face_slots.len() < 3 {
            log::warn!(
                "Dropping degenerate face with {} corner(s) on line {}",
                face_slots.len(),
                line_no
            );
            continue;
        }
        builder.push_face(&face_slots);
    }

    if builder.triangle_count() == 0 {
        log::warn!("OBJ input produced no triangles");
    }
    Ok(builder.bake())
}

fn parse_frame<R: BufRead>(reader: R, color: [f32; 4]) -> ObjResult<FrameData> {
    let mut tables = AttributeTables::default();
    let mut frame = FrameData::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line.map_err(|source| ObjError::Read {
            line: line_no,
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let Some(tag) = parts.next() else { continue };
        if tables.accumulate(tag, &mut parts, line_no)? {
            continue;
        }
        if tag != "f" {
            continue;
        }

        for token in parts {
            let fv = tables.resolve(token, line_no)?;
            let v = tables.fetch(fv, color);
            frame.push(v.position, v.color, v.normal, v.uv);
        }
    }

    Ok(frame)
}

fn parse_f32(value: Option<&str>, line: usize, what: &'static str) -> ObjResult<f32> {
    let token = value.ok_or(ObjError::MissingField { line, what })?;
    token.parse::<f32>().map_err(|_| ObjError::MalformedNumber {
        line,
        token: token.to_string(),
    })
}

fn resolve_field(field: &str, len: usize, line: usize) -> ObjResult<Option<usize>> {
    if field.is_empty() {
        return Ok(None);
    }
    let raw: i32 = field.parse().map_err(|_| ObjError::MalformedFace {
        line,
        token: field.to_string(),
    })?;
    match resolve_index(raw, len) {
        Ok(idx) => Ok(Some(idx)),
        Err(ResolveError::Zero) => Err(ObjError::ZeroIndex { line }),
        Err(ResolveError::OutOfRange) => Err(ObjError::IndexOutOfRange { line, raw, len }),
    }
}
