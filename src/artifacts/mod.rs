//! Comparison data structures and algorithms
//!
//! - `diff`: diff records, the content oracle and the tree comparator
//! - `filter`: glob-based ignore and prune filters
//! - `progress`: interactive progress reporting

pub mod diff;
pub mod filter;
pub mod progress;
