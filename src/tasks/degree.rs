use crate::{
    types::{Direction, VId},
    vertex_centric::{ComputeTask, EngineHandle, TaskError, VertexView},
};

/// Counts the distinct neighbors of every vertex in one superstep.
#[derive(Debug, Clone)]
pub struct Degree {
    direction: Direction,
}

impl Degree {
    /// Counts neighbors in both directions.
    pub fn new() -> Self {
        Self {
            direction: Direction::Both,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

impl Default for Degree {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeTask<usize> for Degree {
    fn name(&self) -> &str {
        "Degree"
    }

    fn initial_value(&self, _vid: VId, _engine: &EngineHandle) -> usize {
        0
    }

    fn compute(
        &self,
        vertex: &mut VertexView<'_, usize>,
        engine: &EngineHandle,
    ) -> Result<(), TaskError> {
        vertex.set_value(0);
        for _ in vertex.neighbors(self.direction)? {
            *vertex.value_mut() += 1;
        }
        engine.vote_to_halt(vertex);
        Ok(())
    }
}
