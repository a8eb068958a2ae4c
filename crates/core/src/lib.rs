//! Core simulation logic - pure, deterministic, and testable
//!
//! This module contains the field model, the input parser, and the
//! gravity simulation. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: the same input always produces the same result
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: usable from a CLI, a service, or a test harness
//!
//! # Module Structure
//!
//! - [`field`]: the validated grid value (dimensions, figure, terrain)
//! - [`parse`]: text format parsing with typed errors
//! - [`connect`]: 4-connectivity check for the figure
//! - [`gravity`]: the step-wise fall simulation
//!
//! # Simulation Rules
//!
//! - The figure is a single 4-connected region of cells.
//! - Each step moves every figure cell down one row simultaneously.
//! - A step is blocked when any cell would leave the bottom of the
//!   field or land on terrain; a blocked step leaves the field
//!   unchanged.
//! - Fields are immutable values: each step produces a new [`Field`],
//!   and the simulation ends at the first fixed point (structural
//!   equality between a field and its stepped successor).
//!
//! # Example
//!
//! ```
//! use gridfall_core::{parse_field, settle};
//!
//! let field = parse_field("2 3\n.p.\n...").unwrap();
//! let settled = settle(field, false);
//! assert_eq!(settled.field.figure().len(), 1);
//! ```

pub mod connect;
pub mod field;
pub mod gravity;
pub mod parse;

pub use gridfall_types as types;

// Re-export commonly used items for convenience
pub use connect::is_connected;
pub use field::Field;
pub use gravity::{settle, step, Settled};
pub use parse::{parse_field, ParseError};
