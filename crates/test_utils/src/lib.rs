//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! dormitory billing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `harness`: A billing engine wired to fresh in-memory adapters

pub mod builders;
pub mod fixtures;
pub mod harness;

pub use builders::*;
pub use fixtures::*;
pub use harness::*;
