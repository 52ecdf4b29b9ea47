//! User-facing operations
//!
//! - `compare`: run the tree comparison for two roots
//! - `render`: print the diff tree with its legend
//! - `patch`: save unified patches for differing directories
//!
//! `compare` and `render` are implemented on [`Session`](crate::areas::session::Session),
//! which owns the output writer.

pub mod compare;
pub mod patch;
pub mod render;
