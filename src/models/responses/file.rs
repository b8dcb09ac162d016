//! File operation results.

use serde::Serialize;

/// Metadata of a successfully stored upload, returned to the caller.
///
/// `stored_name` is derived from a random 128-bit identifier, never from the
/// client-supplied name, so it is collision-free and injection-safe.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFileRecord {
    pub original_name: String,
    pub stored_name: String,
    pub storage_path: String,
    pub size_bytes: u64,
}
