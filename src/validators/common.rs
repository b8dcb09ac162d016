//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::errors::{DomainError, ErrorKind};

/// Fields samples may legally be sorted by.
pub const SAMPLE_SORT_FIELDS: [&str; 2] = ["createdDate", "id"];

/// Convert validator errors to a single 400 DomainError.
///
/// Each rejected field renders as "[field] message"; entries are joined with
/// ", ". HashMap iteration order is unstable, so entries are sorted to keep
/// the message deterministic.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_domain_error)?;
/// ```
pub fn validation_errors_to_domain_error(errors: ValidationErrors) -> DomainError {
    let mut parts: Vec<String> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .clone()
                .unwrap_or_else(|| "invalid value".into());
            parts.push(format!("[{field}] {message}"));
        }
    }
    parts.sort();

    DomainError::with_message(ErrorKind::BadRequestText, parts.join(", "))
}

/// Reject sort fields outside the legal set.
pub fn validate_sort_field(field: &str, allowed: &[&str]) -> Result<(), DomainError> {
    if allowed.contains(&field) {
        Ok(())
    } else {
        Err(DomainError::invalid_sort_field_with_allowed(field, allowed))
    }
}
