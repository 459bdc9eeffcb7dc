//! Error management.

use crate::types::VId;
use derive_more::{Display, From};

#[derive(Debug, Display, From)]
pub enum Err {
    #[display(fmt = "vertex {} is out of range (num_vertices: {})", vid, num_vertices)]
    #[from(ignore)]
    OutOfRangeVertex { vid: VId, num_vertices: usize },
    #[display(fmt = "invalid edge {} -> {}", src, dst)]
    #[from(ignore)]
    InvalidEdge { src: VId, dst: VId },
    #[display(fmt = "malformed row offsets: {}", _0)]
    #[from(ignore)]
    MalformedOffsets(String),
    #[display(fmt = "too many vertices: {}", _0)]
    #[from(ignore)]
    TooManyVertices(String),
    #[display(fmt = "unknown property {}", _0)]
    #[from(ignore)]
    UnknownProperty(String),
    #[display(fmt = "compute fault at vertex {} in superstep {}: {}", vid, superstep, message)]
    #[from(ignore)]
    ComputeFault {
        vid: VId,
        superstep: usize,
        message: String,
    },
    #[display(fmt = "cannot {} while {}", action, from)]
    #[from(ignore)]
    InvalidStateTransition { from: String, action: String },
    #[display(fmt = "superstep limit {} reached with active vertices", limit)]
    #[from(ignore)]
    SuperstepLimit { limit: usize },
    #[display(fmt = "failed to build worker pool: {}", _0)]
    #[from(ignore)]
    ThreadPool(String),
    #[display(fmt = "line {}: {}", line, message)]
    #[from(ignore)]
    Parse { line: usize, message: String },
    Io(std::io::Error),
}

impl std::error::Error for Err {}

pub type Result<T> = std::result::Result<T, Err>;
