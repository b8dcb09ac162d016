//! Services organized by domain concern.

pub mod file_service;
pub mod upload_policy;

pub use file_service::{FileService, FileServiceError};
pub use upload_policy::{PolicyConfigError, UploadCategory, UploadPolicy, UploadPolicyRegistry};
