//! OBJ mesh loading: text parsing, vertex deduplication, fan
//! triangulation and baking into renderer-ready buffers.
//!
//! Two entry-point families share the parser: `load_obj_*` produces a
//! compact indexed mesh, `load_frame_*` produces flat parallel buffers
//! for throwaway per-frame geometry.

pub mod builder;
pub mod error;
pub mod index;
pub mod mesh;
pub mod obj;

pub use error::{ObjError, ObjResult};
pub use mesh::{FrameData, MeshData, MeshVertex};
pub use obj::{
    load_frame_from_path, load_frame_from_reader, load_frame_from_str, load_obj_from_path,
    load_obj_from_reader, load_obj_from_str,
};
