pub mod deque;
pub mod error;
pub mod grid;
pub mod randbag;
pub mod stats;
pub mod unionfind;

mod macros;


pub use deque::LinearDeque;
pub use error::Error;
pub use grid::ConnectivityGrid;
pub use randbag::RandomizedBag;
pub use stats::PercolationStats;
pub use unionfind::UnionFind;
