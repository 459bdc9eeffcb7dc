//! Ready-made compute tasks.

pub use degree::Degree;
pub use page_rank::PageRank;

mod degree;
mod page_rank;
