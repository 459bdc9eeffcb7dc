//! The vertex-centric engine.
//!
//! A [`ComputeTask`] runs once per active vertex per superstep until every vertex has
//! voted to halt. Within a superstep a vertex sees its neighbors' values as they were
//! committed at the end of the previous superstep, so the outcome does not depend on the
//! number of workers or on the order in which vertices are visited.

pub use config::EngineConfig;
pub use engine::{EngineState, RunStats, VertexCentric};
pub use property::PropertyTable;
pub use view::{EngineHandle, NeighborView, NeighborViews, VertexView};

use crate::types::VId;

mod config;
mod engine;
mod property;
mod view;

/// The error a compute call may fail with.
pub type TaskError = Box<dyn std::error::Error + Send + Sync>;

/// Per-vertex logic, published under [`name`](ComputeTask::name).
///
/// A vertex stays active until its compute call passes it to
/// [`EngineHandle::vote_to_halt`]; a halted vertex is never computed again in the same run.
pub trait ComputeTask<V>: Sync {
    /// The property the results are stored under.
    fn name(&self) -> &str;

    /// The value of `vid` before superstep 0.
    ///
    /// `engine` reports superstep 0 and the size of the graph the task runs on.
    fn initial_value(&self, vid: VId, engine: &EngineHandle) -> V;

    fn compute(
        &self,
        vertex: &mut VertexView<'_, V>,
        engine: &EngineHandle,
    ) -> Result<(), TaskError>;
}

/// A [`ComputeTask`] made of closures.
pub struct FnTask<I, F> {
    name: String,
    init: I,
    compute: F,
}

impl<I, F> FnTask<I, F> {
    pub fn new<V>(name: &str, init: I, compute: F) -> Self
    where
        I: Fn(VId, &EngineHandle) -> V + Sync,
        F: Fn(&mut VertexView<'_, V>, &EngineHandle) -> Result<(), TaskError> + Sync,
    {
        Self {
            name: String::from(name),
            init,
            compute,
        }
    }
}

impl<V, I, F> ComputeTask<V> for FnTask<I, F>
where
    I: Fn(VId, &EngineHandle) -> V + Sync,
    F: Fn(&mut VertexView<'_, V>, &EngineHandle) -> Result<(), TaskError> + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn initial_value(&self, vid: VId, engine: &EngineHandle) -> V {
        (self.init)(vid, engine)
    }

    fn compute(
        &self,
        vertex: &mut VertexView<'_, V>,
        engine: &EngineHandle,
    ) -> Result<(), TaskError> {
        (self.compute)(vertex, engine)
    }
}
