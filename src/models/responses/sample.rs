//! Sample listing responses.

use serde::Serialize;

/// Resolved paging and sorting for a sample list request. Row retrieval
/// belongs to the persistence layer, which is a separate collaborator.
#[derive(Debug, Serialize)]
pub struct SamplePage {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}
