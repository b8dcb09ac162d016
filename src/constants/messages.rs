//! Success message constants used throughout the application.

// File messages
pub const MSG_FILE_UPLOADED: &str = "File uploaded successfully";
pub const MSG_FILE_DELETED: &str = "File deleted successfully";

// Sample messages
pub const MSG_SAMPLE_CREATED: &str = "Sample created successfully";
pub const MSG_SAMPLES_RETRIEVED: &str = "Samples retrieved";
