//! Request models for API endpoints.

pub mod file;
pub mod sample;

pub use file::*;
pub use sample::*;
