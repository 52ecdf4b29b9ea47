//! Runtime components of a comparison run
//!
//! - `filesystem`: filesystem access behind a swappable trait
//! - `session`: output writer, filesystem and progress sink shared by the commands

pub mod filesystem;
pub mod session;
