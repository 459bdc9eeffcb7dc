//! Reading graphs from edge lists and writing results.

pub use export::{write_gml, write_graphml, write_plain};
pub use load::{load_edge_list, read_edge_list};

mod export;
mod load;
