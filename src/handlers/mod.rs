//! HTTP request handlers organized by domain.

pub mod file_handler;
pub mod sample_handler;

pub use file_handler::*;
pub use sample_handler::*;
