/// Engine settings.
///
/// ```
/// use vcgraph::vertex_centric::EngineConfig;
///
/// let config = EngineConfig::new().num_workers(4).max_supersteps(100);
/// assert_eq!(config.get_num_workers(), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    num_workers: Option<usize>,
    max_supersteps: Option<usize>,
    min_partition: usize,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            num_workers: None,
            max_supersteps: None,
            min_partition: 64,
        }
    }

    /// Runs supersteps on a dedicated pool of `num_workers` threads instead of the global one.
    pub fn num_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = Some(num_workers);
        self
    }

    /// Fails the run once `max_supersteps` supersteps completed with vertices still active.
    pub fn max_supersteps(mut self, max_supersteps: usize) -> Self {
        self.max_supersteps = Some(max_supersteps);
        self
    }

    /// The fewest vertices a worker is handed at once.
    pub fn min_partition(mut self, min_partition: usize) -> Self {
        self.min_partition = min_partition.max(1);
        self
    }

    pub fn get_num_workers(&self) -> Option<usize> {
        self.num_workers
    }

    pub fn get_max_supersteps(&self) -> Option<usize> {
        self.max_supersteps
    }

    pub fn get_min_partition(&self) -> usize {
        self.min_partition
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
