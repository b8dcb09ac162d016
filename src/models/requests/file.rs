//! Inbound file payloads.

use serde::Deserialize;

/// A fully received file payload handed to the file service.
#[derive(Debug, Clone)]
pub struct InboundFile {
    pub original_name: String,
    pub data: Vec<u8>,
}

impl InboundFile {
    pub fn new(original_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            original_name: original_name.into(),
            data,
        }
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Query parameters for deleting a stored file.
#[derive(Debug, Deserialize)]
pub struct DeleteFileQuery {
    /// Storage path of the file, as returned by the upload endpoint.
    pub path: String,
}
