//! Text rendering module.
//!
//! Maps fields back into their canonical text form, plus the step-trace
//! format used by the CLI's `--steps` mode. Rendering is pure (no I/O)
//! and can be unit-tested.

pub mod view;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use view::{render_field, render_trace};
