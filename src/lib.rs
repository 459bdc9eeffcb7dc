//! Vertex-centric computation over condensed graphs.
//!
//! A graph store ([`graph`]) is built once, wrapped in a [`VertexCentric`] engine and
//! handed a [`ComputeTask`]; the engine runs the task in parallel supersteps until every
//! vertex has voted to halt and publishes the final values under the task's name.
//!
//! [`VertexCentric`]: vertex_centric::VertexCentric
//! [`ComputeTask`]: vertex_centric::ComputeTask

pub mod error;
pub mod graph;
pub mod io;
pub mod tasks;
pub mod types;
pub mod vertex_centric;

pub(crate) mod tools;
