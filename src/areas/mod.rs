//! Stateful repository areas
//!
//! - `database`: object store for commits and blobs, plus atomic record I/O
//! - `index`: staging area persistence
//! - `refs`: branch table persistence
//! - `workspace`: working tree scanning and file access
//! - `lock`: repository-wide advisory lock
//! - `repository`: the facade wiring the areas together

pub mod database;
pub mod index;
pub mod lock;
pub mod refs;
pub mod repository;
pub mod workspace;
