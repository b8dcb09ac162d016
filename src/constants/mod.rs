//! Application constants module.

pub mod messages;
pub mod pagination;

pub use messages::*;
pub use pagination::*;
