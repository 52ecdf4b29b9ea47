//! Tree comparison
//!
//! - `diff_record`: nodes of the resulting diff tree
//! - `oracle`: content equality for files, symlinks and special files
//! - `tree_diff`: the recursive walk over two directory trees
//!
//! The comparator decides *which* names differ; the oracle decides *whether* two
//! same-typed leaves hold the same data, reading as little as possible.

pub mod diff_record;
pub mod oracle;
pub mod tree_diff;
