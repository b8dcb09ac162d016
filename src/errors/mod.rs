//! Typed business errors and the boundary that translates them to the wire.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

pub mod dispatch;
mod kind;
mod response;

pub use kind::ErrorKind;
pub use response::ErrorResponse;

/// An expected business-rule violation.
///
/// Carries one [`ErrorKind`] and, optionally, a message overriding the kind's
/// default. Constructed at the point a rule is violated and propagated
/// untouched until the error dispatcher renders it; never used for control
/// flow within a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    kind: ErrorKind,
    message: Option<String>,
}

impl DomainError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// Rejection of an unknown sort field on a list request.
    pub fn invalid_sort_field(field: &str) -> Self {
        Self::with_message(
            ErrorKind::InvalidSortField,
            format!("invalid sort field: {field}"),
        )
    }

    /// Rejection of an unknown sort field, naming the fields that are legal.
    pub fn invalid_sort_field_with_allowed(field: &str, allowed: &[&str]) -> Self {
        Self::with_message(
            ErrorKind::InvalidSortField,
            format!(
                "invalid sort field: {field} (allowed: {})",
                allowed.join(", ")
            ),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The message presented to the client: the explicit override if one was
    /// supplied, else the kind's default.
    pub fn message(&self) -> &str {
        match &self.message {
            Some(message) => message,
            None => self.kind.message(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DomainError {}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    // Fallback rendering for apps running without the dispatcher middleware;
    // the dispatcher rewrites this body with the real request path.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(
            "",
            self.kind.status_code(),
            self.message().to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_comes_from_kind() {
        let err = DomainError::new(ErrorKind::NoFileDataError);
        assert_eq!(err.message(), "no file attachment found");
        assert_eq!(err.kind().status_code(), 404);
    }

    #[test]
    fn test_explicit_message_overrides_kind_default() {
        let err = DomainError::with_message(ErrorKind::BadRequestText, "[title] too long");
        assert_eq!(err.message(), "[title] too long");
        assert_eq!(err.kind().status_code(), 400);
    }

    #[test]
    fn test_status_always_follows_kind() {
        for kind in ErrorKind::ALL {
            assert_eq!(
                DomainError::new(kind).kind().status_code(),
                kind.status_code()
            );
        }
    }

    #[test]
    fn test_invalid_sort_field_without_allowed_set() {
        let err = DomainError::invalid_sort_field("xyz");
        assert_eq!(err.message(), "invalid sort field: xyz");
        assert_eq!(err.kind(), ErrorKind::InvalidSortField);
    }

    #[test]
    fn test_invalid_sort_field_with_allowed_set() {
        let err = DomainError::invalid_sort_field_with_allowed("xyz", &["createdDate", "id"]);
        assert_eq!(
            err.message(),
            "invalid sort field: xyz (allowed: createdDate, id)"
        );
        assert_eq!(err.kind().status_code(), 400);
    }

    #[test]
    fn test_response_error_status_matches_kind() {
        let err = DomainError::new(ErrorKind::FileSizeExceedingError);
        assert_eq!(ResponseError::status_code(&err).as_u16(), 413);
    }
}
