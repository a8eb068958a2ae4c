//! Gridfall (workspace facade crate).
//!
//! This package keeps the `gridfall::{core,term,types}` public API
//! stable while the implementation lives in dedicated crates under
//! `crates/`. The CLI driver sits here because it is the only piece
//! that touches the filesystem.

pub mod cli;

pub use gridfall_core as core;
pub use gridfall_term as term;
pub use gridfall_types as types;
