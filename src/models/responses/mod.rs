//! Response models for API endpoints.

pub mod api;
pub mod file;
pub mod sample;

pub use api::*;
pub use file::*;
pub use sample::*;
