//! The single boundary translating every escaped failure into the wire shape.
//!
//! Registered as an `ErrorHandlers` middleware over the whole app: any
//! response with an error status is rewritten here into the canonical
//! [`ErrorResponse`] body, classified by the failure attached to the response
//! (most specific first) or, when nothing is attached, by the status the
//! framework produced (unmatched route, disallowed method, media type guard).

use actix_multipart::MultipartError;
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::{header, StatusCode};
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{dev::ServiceResponse, HttpRequest, HttpResponse};
use log::{debug, error};

use crate::errors::{DomainError, ErrorKind, ErrorResponse};
use crate::services::FileServiceError;

/// Content types the API's handlers can consume, for the 415 message.
const SUPPORTED_CONTENT_TYPES: [&str; 2] = ["application/json", "multipart/form-data"];

/// Build the dispatcher middleware. Wrap the `App` with this once.
pub fn error_dispatcher<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(render_failure)
}

fn render_failure<B: 'static>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, res) = res.into_parts();
    let (status, message) = classify(&req, &res);

    let body = ErrorResponse::new(req.path(), status.as_u16(), message);
    let rendered = HttpResponse::build(status).json(body);

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, rendered).map_into_right_body(),
    ))
}

/// Map the failure behind an error response to its status and client message.
///
/// Total: every arm produces a well-formed (status, message) pair, and body
/// construction downstream cannot fail.
fn classify<B>(req: &HttpRequest, res: &HttpResponse<B>) -> (StatusCode, String) {
    let status = res.status();

    let Some(err) = res.error() else {
        // Framework-produced responses carry no error value; the status is
        // the only signal.
        return match status {
            StatusCode::NOT_FOUND => not_found(),
            StatusCode::METHOD_NOT_ALLOWED => method_not_allowed(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => {
                error!("unsupported media type on {}", req.path());
                (status, unsupported_media_type_message(req))
            }
            StatusCode::FORBIDDEN => {
                error!("access denied on {}", req.path());
                (status, ErrorKind::ForbiddenError.message().to_string())
            }
            other if other.is_server_error() => {
                error!("{} produced for {} with no error detail", other, req.path());
                (other, ErrorKind::ServerError.message().to_string())
            }
            other => (
                other,
                other.canonical_reason().unwrap_or("error").to_string(),
            ),
        };
    };

    if let Some(domain) = err.as_error::<DomainError>() {
        // Expected business failure: reported to the client, not an incident.
        debug!("business error on {}: {}", req.path(), domain);
        return (
            status_of(domain.kind().status_code()),
            domain.message().to_string(),
        );
    }

    if let Some(service_err) = err.as_error::<FileServiceError>() {
        return match service_err {
            FileServiceError::Domain(domain) => {
                debug!("business error on {}: {}", req.path(), domain);
                (
                    status_of(domain.kind().status_code()),
                    domain.message().to_string(),
                )
            }
            FileServiceError::Io(io) => {
                error!("file storage failure on {}: {}", req.path(), io);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{} [{}]", ErrorKind::ServerError.message(), io),
                )
            }
        };
    }

    if let Some(json_err) = err.as_error::<JsonPayloadError>() {
        error!("request body rejected on {}: {}", req.path(), json_err);
        return match json_err {
            JsonPayloadError::ContentType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                unsupported_media_type_message(req),
            ),
            _ => (
                StatusCode::BAD_REQUEST,
                ErrorKind::BadRequestText.message().to_string(),
            ),
        };
    }

    if let Some(path_err) = err.as_error::<PathError>() {
        error!("path parameter rejected on {}: {}", req.path(), path_err);
        let raw = match path_err {
            PathError::Deserialize(inner) => inner.to_string(),
            other => other.to_string(),
        };
        return (StatusCode::BAD_REQUEST, type_mismatch_message(&raw));
    }

    if let Some(query_err) = err.as_error::<QueryPayloadError>() {
        error!("query rejected on {}: {}", req.path(), query_err);
        let raw = match query_err {
            QueryPayloadError::Deserialize(inner) => inner.to_string(),
            other => other.to_string(),
        };
        return (StatusCode::BAD_REQUEST, query_rejection_message(&raw));
    }

    if let Some(multipart_err) = err.as_error::<MultipartError>() {
        error!("multipart rejected on {}: {}", req.path(), multipart_err);
        return (
            StatusCode::BAD_REQUEST,
            ErrorKind::RequiredFileError.message().to_string(),
        );
    }

    error!("unhandled failure on {}: {}", req.path(), err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("{} [{}]", ErrorKind::ServerError.message(), err),
    )
}

fn status_of(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn not_found() -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        ErrorKind::NoUrlError.message().to_string(),
    )
}

fn method_not_allowed() -> (StatusCode, String) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorKind::MethodNotAllowed.message().to_string(),
    )
}

fn unsupported_media_type_message(req: &HttpRequest) -> String {
    match req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    {
        Some(given) => format!(
            "unsupported content type: {given}. supported: {}",
            SUPPORTED_CONTENT_TYPES.join(", ")
        ),
        None => ErrorKind::UnsupportedMediaType.message().to_string(),
    }
}

/// Rewrite actix's `can not parse "value" to a Type` into the client-facing
/// shape; anything unrecognized passes through verbatim.
fn type_mismatch_message(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix("can not parse \"") {
        if let Some((value, expected)) = rest.split_once("\" to a ") {
            return format!("'{value}' is invalid; expected type {expected}");
        }
    }
    raw.to_string()
}

/// Missing required parameters render as "<name> is required"; other query
/// failures fall through to the type-mismatch shape.
fn query_rejection_message(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix("missing field `") {
        if let Some(name) = rest.strip_suffix('`') {
            return format!("{name} is required");
        }
    }
    type_mismatch_message(raw)
}
