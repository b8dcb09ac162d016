//! Validation helpers shared across handlers.

pub mod common;

pub use common::*;
