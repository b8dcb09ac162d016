//! Per-category rules for what an upload may contain and where it lands.

use std::fmt;
use std::str::FromStr;

use crate::errors::{DomainError, ErrorKind};

/// The closed set of upload categories the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadCategory {
    Sample,
    User,
}

impl UploadCategory {
    /// Directory name under the upload root where this category's files land.
    pub fn subpath(&self) -> &'static str {
        match self {
            UploadCategory::Sample => "sample",
            UploadCategory::User => "user",
        }
    }
}

impl fmt::Display for UploadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subpath())
    }
}

impl FromStr for UploadCategory {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "sample" => Ok(UploadCategory::Sample),
            "user" => Ok(UploadCategory::User),
            _ => Err(DomainError::with_message(
                ErrorKind::BadRequestText,
                format!("unknown upload category: {raw}"),
            )),
        }
    }
}

/// What one category may accept and where it is stored. Built once at startup
/// and read-only afterwards.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub category: UploadCategory,
    pub destination_subpath: String,
    /// Stored lower-cased; inputs are lower-cased before membership checks.
    pub allowed_extensions: Vec<String>,
    pub max_size_bytes: u64,
}

impl UploadPolicy {
    fn new(category: UploadCategory, allowed_extensions: &[&str], max_size_bytes: u64) -> Self {
        Self {
            category,
            destination_subpath: category.subpath().to_string(),
            allowed_extensions: allowed_extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
            max_size_bytes,
        }
    }

    /// Case-insensitive extension check.
    pub fn allows_extension(&self, extension: &str) -> bool {
        let normalized = extension.to_lowercase();
        self.allowed_extensions.iter().any(|ext| *ext == normalized)
    }
}

/// A policy configuration rejected at startup. Never surfaced per-request.
#[derive(Debug)]
pub enum PolicyConfigError {
    EmptyExtensions(UploadCategory),
    ZeroMaxSize(UploadCategory),
}

impl fmt::Display for PolicyConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyConfigError::EmptyExtensions(category) => {
                write!(f, "upload policy for '{category}' allows no extensions")
            }
            PolicyConfigError::ZeroMaxSize(category) => {
                write!(f, "upload policy for '{category}' has a zero size limit")
            }
        }
    }
}

impl std::error::Error for PolicyConfigError {}

/// One validated policy per category.
///
/// The category set is closed, so lookups are total; all invariant checking
/// happens in [`UploadPolicyRegistry::new`] before the server starts serving.
#[derive(Debug, Clone)]
pub struct UploadPolicyRegistry {
    sample: UploadPolicy,
    user: UploadPolicy,
}

impl UploadPolicyRegistry {
    /// Build the default registry. Both categories accept png/jpg/jpeg up to
    /// `max_size_bytes`.
    pub fn new(max_size_bytes: u64) -> Result<Self, PolicyConfigError> {
        let registry = Self {
            sample: UploadPolicy::new(UploadCategory::Sample, &["png", "jpg", "jpeg"], max_size_bytes),
            user: UploadPolicy::new(UploadCategory::User, &["png", "jpg", "jpeg"], max_size_bytes),
        };

        for policy in [&registry.sample, &registry.user] {
            if policy.allowed_extensions.is_empty() {
                return Err(PolicyConfigError::EmptyExtensions(policy.category));
            }
            if policy.max_size_bytes == 0 {
                return Err(PolicyConfigError::ZeroMaxSize(policy.category));
            }
        }

        Ok(registry)
    }

    pub fn policy_for(&self, category: UploadCategory) -> &UploadPolicy {
        match category {
            UploadCategory::Sample => &self.sample,
            UploadCategory::User => &self.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_rejects_zero_max_size() {
        assert!(matches!(
            UploadPolicyRegistry::new(0),
            Err(PolicyConfigError::ZeroMaxSize(_))
        ));
    }

    #[test]
    fn test_policy_lookup_returns_category_policy() {
        let registry = UploadPolicyRegistry::new(1024).unwrap();
        assert_eq!(
            registry.policy_for(UploadCategory::Sample).destination_subpath,
            "sample"
        );
        assert_eq!(
            registry.policy_for(UploadCategory::User).destination_subpath,
            "user"
        );
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let registry = UploadPolicyRegistry::new(1024).unwrap();
        let policy = registry.policy_for(UploadCategory::Sample);

        assert!(policy.allows_extension("png"));
        assert!(policy.allows_extension("PNG"));
        assert!(policy.allows_extension("JpEg"));
        assert!(!policy.allows_extension("gif"));
        assert!(!policy.allows_extension("pdf"));
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("SAMPLE".parse::<UploadCategory>().unwrap(), UploadCategory::Sample);
        assert_eq!("user".parse::<UploadCategory>().unwrap(), UploadCategory::User);

        let err = "archive".parse::<UploadCategory>().unwrap_err();
        assert_eq!(err.kind().status_code(), 400);
        assert_eq!(err.message(), "unknown upload category: archive");
    }
}
