//! Repository data structures and algorithms
//!
//! - `branch`: branch names and the branch table record
//! - `index`: staging entries
//! - `merge`: ancestor walking and three-way classification
//! - `objects`: digests, commits and the commit graph
//! - `status`: ignore rules and working tree status

pub mod branch;
pub mod index;
pub mod merge;
pub mod objects;
pub mod status;
