use super::{ComputeTask, EngineConfig, EngineHandle, PropertyTable, VertexView};
use crate::{
    error::{Err, Result},
    graph::Graph,
    tools::panic_message,
    types::VId,
};
use derive_more::Display;
use log::{debug, info};
use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    #[display(fmt = "idle")]
    Idle,
    #[display(fmt = "running superstep {}", superstep)]
    Running { superstep: usize },
    #[display(fmt = "halted after {} supersteps", supersteps)]
    Halted { supersteps: usize },
}

/// What a finished run looked like.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    supersteps: usize,
    active_per_superstep: Vec<usize>,
}

impl RunStats {
    pub fn supersteps(&self) -> usize {
        self.supersteps
    }

    /// The size of the active set at the start of each superstep.
    pub fn active_per_superstep(&self) -> &[usize] {
        &self.active_per_superstep
    }
}

/// Runs [`ComputeTask`]s over a graph in barrier-synchronized supersteps.
///
/// Each superstep has two phases. In the compute phase the active vertices are split
/// across the workers; a compute call writes only its own pending slot and reads the
/// committed values of everyone else. In the reconciliation phase, after all compute calls
/// returned, the pending values of the vertices that ran are committed and the halt votes
/// shrink the active set. The run ends once the active set is empty.
///
/// ```
/// use vcgraph::{graph::ExpandedGraph, tasks::Degree, vertex_centric::VertexCentric};
///
/// let graph = ExpandedGraph::new(3, vec![(0, 1), (1, 2)], false).unwrap();
/// let mut engine = VertexCentric::new(graph);
/// engine.run(&Degree::new()).unwrap();
/// assert_eq!(engine.values("Degree").unwrap(), [1, 2, 1]);
/// ```
pub struct VertexCentric<G, V> {
    graph: G,
    config: EngineConfig,
    pool: Option<rayon::ThreadPool>,
    state: EngineState,
    properties: PropertyTable<V>,
}

impl<G, V> VertexCentric<G, V>
where
    G: Graph + Sync,
    V: Clone + Send + Sync,
{
    /// Creates an engine running on rayon's global pool.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            config: EngineConfig::new(),
            pool: None,
            state: EngineState::Idle,
            properties: PropertyTable::new(),
        }
    }

    pub fn with_config(graph: G, config: EngineConfig) -> Result<Self> {
        let pool = match config.get_num_workers() {
            Some(num_workers) => {
                debug!("building a pool of {} workers", num_workers);
                Some(
                    rayon::ThreadPoolBuilder::new()
                        .num_threads(num_workers)
                        .thread_name(|i| format!("vcgraph-worker-{}", i))
                        .build()
                        .map_err(|e| Err::ThreadPool(e.to_string()))?,
                )
            }
            None => None,
        };
        Ok(Self {
            graph,
            config,
            pool,
            state: EngineState::Idle,
            properties: PropertyTable::new(),
        })
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn properties(&self) -> &PropertyTable<V> {
        &self.properties
    }

    /// The values published under `name`, indexed by vertex id.
    pub fn values(&self, name: &str) -> Result<&[V]> {
        self.properties.column(name)
    }

    pub fn value(&self, name: &str, vid: VId) -> Result<&V> {
        self.graph.check_vertex(vid)?;
        self.properties.get(name, vid)
    }

    /// Returns the engine to [`EngineState::Idle`], e.g. after a failed run.
    ///
    /// Published properties are kept.
    pub fn reset(&mut self) {
        self.state = EngineState::Idle;
    }

    pub fn into_parts(self) -> (G, PropertyTable<V>) {
        (self.graph, self.properties)
    }

    /// Runs `task` until every vertex has voted to halt and publishes the values under
    /// `task.name()`, replacing a previous column of that name.
    ///
    /// A failing compute call aborts the run: the column is dropped and the engine stays
    /// in [`EngineState::Running`] until [`reset`](VertexCentric::reset).
    pub fn run<T>(&mut self, task: &T) -> Result<RunStats>
    where
        T: ComputeTask<V> + ?Sized,
    {
        if let EngineState::Running { .. } = self.state {
            return Err(Err::InvalidStateTransition {
                from: self.state.to_string(),
                action: format!("run {}", task.name()),
            });
        }
        let start_time = Instant::now();
        let num_vertices = self.graph.num_vertices();
        info!("running {} on {} vertices", task.name(), num_vertices);
        self.properties.remove(task.name());
        let initial = EngineHandle::new(0, num_vertices);
        let mut committed: Vec<V> = (0..num_vertices)
            .map(|vid| task.initial_value(vid, &initial))
            .collect();
        let mut active: Vec<VId> = (0..num_vertices).collect();
        let mut stats = RunStats::default();
        let mut superstep = 0;
        while !active.is_empty() {
            self.state = EngineState::Running { superstep };
            if let Some(limit) = self.config.get_max_supersteps() {
                if superstep >= limit {
                    return Err(Err::SuperstepLimit { limit });
                }
            }
            stats.active_per_superstep.push(active.len());
            let time_now = Instant::now();
            let graph: &(dyn Graph + Sync) = &self.graph;
            let min_partition = self.config.get_min_partition();
            let (values, ids) = (&committed, &active);
            let updates = self.install(|| {
                compute_phase(graph, task, superstep, min_partition, values, ids)
            })?;
            active = reconcile(&mut committed, updates);
            debug!(
                "superstep {}: {} active, {} remaining, {}ms",
                superstep,
                stats.active_per_superstep[superstep],
                active.len(),
                time_now.elapsed().as_millis()
            );
            superstep += 1;
        }
        self.properties.insert(task.name(), committed);
        self.state = EngineState::Halted {
            supersteps: superstep,
        };
        stats.supersteps = superstep;
        info!(
            "{} halted after {} supersteps in {}ms",
            task.name(),
            superstep,
            start_time.elapsed().as_millis()
        );
        Ok(stats)
    }
}

// Private methods.
impl<G, V> VertexCentric<G, V> {
    fn install<R, F>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}

/// Runs `task` for every active vertex; the first failing call aborts the phase.
///
/// `active` is split across the workers. Returns the new value and the halt vote of each
/// active vertex, in the order of `active`.
fn compute_phase<V, T>(
    graph: &(dyn Graph + Sync),
    task: &T,
    superstep: usize,
    min_partition: usize,
    committed: &[V],
    active: &[VId],
) -> Result<Vec<(VId, V, bool)>>
where
    V: Clone + Send + Sync,
    T: ComputeTask<V> + ?Sized,
{
    let engine = EngineHandle::new(superstep, committed.len());
    active
        .par_iter()
        .with_min_len(min_partition)
        .map(|&vid| {
            let mut value = committed[vid].clone();
            let mut vertex = VertexView::new(vid, &mut value, committed, graph);
            match catch_unwind(AssertUnwindSafe(|| task.compute(&mut vertex, &engine))) {
                Ok(Ok(())) => {
                    let halted = vertex.halted();
                    Ok((vid, value, halted))
                }
                Ok(Err(e)) => Err(Err::ComputeFault {
                    vid,
                    superstep,
                    message: e.to_string(),
                }),
                Err(payload) => Err(Err::ComputeFault {
                    vid,
                    superstep,
                    message: panic_message(payload),
                }),
            }
        })
        .collect()
}

/// Commits the values computed in the superstep and applies the halt votes.
///
/// Returns the vertices active in the next superstep, still in ascending order.
fn reconcile<V>(committed: &mut [V], updates: Vec<(VId, V, bool)>) -> Vec<VId> {
    updates
        .into_iter()
        .filter_map(|(vid, value, halted)| {
            committed[vid] = value;
            if halted {
                None
            } else {
                Some(vid)
            }
        })
        .collect()
}
