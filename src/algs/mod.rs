//! Topology-mutating algorithms.

pub mod renumber;
pub mod shuffle;
pub mod sort;
pub mod split;

pub use renumber::permute_elements;
pub use shuffle::{ShuffleOutcome, TopologyShuffler, shuffle_elements};
pub use sort::{SortOutcome, sort_elements};
pub use split::{SplitOutcome, split_seams};
