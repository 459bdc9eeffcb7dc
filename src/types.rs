//! Various types shared by the graph store and the engine.

use derive_more::Display;

/// The vertex id type.
///
/// Real vertices are numbered `0..num_vertices`.
pub type VId = usize;

/// The direction of the edges followed by a neighbor query.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[display(fmt = "incoming")]
    Incoming,
    #[display(fmt = "outgoing")]
    Outgoing,
    #[display(fmt = "both")]
    Both,
}
