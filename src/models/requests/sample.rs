//! Sample content requests with field validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

/// Body for creating a sample entry.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateSampleRequest {
    #[validate(length(min = 1, max = 30, message = "title must be 1-30 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 150, message = "content must be 1-150 characters"))]
    pub content: String,
}

/// Query parameters for listing samples.
#[derive(Debug, Deserialize)]
pub struct SampleListQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
    pub sort: Option<String>,
}

fn default_page() -> u32 {
    DEFAULT_PAGE_NUMBER
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, content: &str) -> CreateSampleRequest {
        CreateSampleRequest {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_valid_sample_passes() {
        assert!(request("a title", "some content").validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(request("", "some content").validate().is_err());
    }

    #[test]
    fn test_title_over_30_chars_rejected() {
        assert!(request(&"x".repeat(31), "some content").validate().is_err());
        assert!(request(&"x".repeat(30), "some content").validate().is_ok());
    }

    #[test]
    fn test_content_over_150_chars_rejected() {
        assert!(request("a title", &"x".repeat(151)).validate().is_err());
        assert!(request("a title", &"x".repeat(150)).validate().is_ok());
    }
}
