//! Loader errors. Every parse defect is reported explicitly; there is
//! no partial-success return. Line numbers are 1-based.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjError {
    #[error("failed to open OBJ file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read OBJ input at line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("missing {what} on line {line}")]
    MissingField { line: usize, what: &'static str },

    #[error("malformed number '{token}' on line {line}")]
    MalformedNumber { line: usize, token: String },

    #[error("malformed face element '{token}' on line {line}")]
    MalformedFace { line: usize, token: String },

    #[error("OBJ indices are 1-based; found 0 on line {line}")]
    ZeroIndex { line: usize },

    #[error("index {raw} resolved out of range (table holds {len} entries) on line {line}")]
    IndexOutOfRange { line: usize, raw: i32, len: usize },

    #[error("too many unique vertices for a u32 index buffer")]
    TooManyVertices,
}

pub type ObjResult<T> = Result<T, ObjError>;
