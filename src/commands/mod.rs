//! Command implementations
//!
//! - `porcelain`: the user-facing operations exposed by the binary

pub mod porcelain;
