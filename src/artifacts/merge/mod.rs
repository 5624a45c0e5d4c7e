//! Merge algorithms
//!
//! - `common_ancestor`: ancestor-chain walking and nearest common ancestor
//! - `three_way`: per-path conflict classification against the ancestor

pub mod common_ancestor;
pub mod three_way;
