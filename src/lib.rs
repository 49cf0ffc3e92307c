pub mod bench;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod report;

pub use bench::{run, BenchConfig, BenchRow};
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
