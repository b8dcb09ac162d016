//! The closed taxonomy of recognized failure conditions.
//!
//! Every expected failure the API can report maps to exactly one kind here,
//! pairing a human-readable default message with the HTTP status it is served
//! under. The set is fixed at compile time; there is no dynamic registration.

/// A named (message, HTTP status) pair.
///
/// Kinds are matched exhaustively wherever behavior depends on them, so adding
/// a variant forces every dispatch site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // 2xx
    NoData,

    // 4xx
    BadRequestText,
    InvalidSortField,
    NoDataError,
    NoUrlError,
    MethodNotAllowed,
    UnsupportedMediaType,

    // token
    ExpiredTokenError,
    UnauthorizedError,
    UnauthorizedTokenError,
    ForbiddenError,

    // user
    LoginIdFailError,
    LoginPwdFailError,
    IdConflictError,
    PhoneConflictError,
    EmailConflictError,

    // file
    RequiredFileError,
    FileUploadError,
    NoFileDataError,
    FileSizeExceedingError,
    FileExtensionError,

    // 5xx
    ServerError,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 22] = [
        ErrorKind::NoData,
        ErrorKind::BadRequestText,
        ErrorKind::InvalidSortField,
        ErrorKind::NoDataError,
        ErrorKind::NoUrlError,
        ErrorKind::MethodNotAllowed,
        ErrorKind::UnsupportedMediaType,
        ErrorKind::ExpiredTokenError,
        ErrorKind::UnauthorizedError,
        ErrorKind::UnauthorizedTokenError,
        ErrorKind::ForbiddenError,
        ErrorKind::LoginIdFailError,
        ErrorKind::LoginPwdFailError,
        ErrorKind::IdConflictError,
        ErrorKind::PhoneConflictError,
        ErrorKind::EmailConflictError,
        ErrorKind::RequiredFileError,
        ErrorKind::FileUploadError,
        ErrorKind::NoFileDataError,
        ErrorKind::FileSizeExceedingError,
        ErrorKind::FileExtensionError,
        ErrorKind::ServerError,
    ];

    /// The default message presented to clients when no override is supplied.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::NoData => "no data",
            ErrorKind::BadRequestText => "malformed request body",
            ErrorKind::InvalidSortField => "invalid sort field",
            ErrorKind::NoDataError => "no data found",
            ErrorKind::NoUrlError => "invalid URL",
            ErrorKind::MethodNotAllowed => "HTTP method not allowed for this request",
            ErrorKind::UnsupportedMediaType => "unsupported media type",
            ErrorKind::ExpiredTokenError => "expired token",
            ErrorKind::UnauthorizedError => "authentication required",
            ErrorKind::UnauthorizedTokenError => "invalid token",
            ErrorKind::ForbiddenError => "access denied",
            ErrorKind::LoginIdFailError => "no account registered with this id",
            ErrorKind::LoginPwdFailError => "wrong password",
            ErrorKind::IdConflictError => "duplicate id",
            ErrorKind::PhoneConflictError => "duplicate phone number",
            ErrorKind::EmailConflictError => "duplicate email",
            ErrorKind::RequiredFileError => "a required file attachment is missing",
            ErrorKind::FileUploadError => "an error occurred while uploading the file",
            ErrorKind::NoFileDataError => "no file attachment found",
            ErrorKind::FileSizeExceedingError => "file size limit exceeded",
            ErrorKind::FileExtensionError => "file extension not allowed",
            ErrorKind::ServerError => "an error occurred on the server",
        }
    }

    /// The HTTP status the kind is served under.
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::NoData => 204,
            ErrorKind::BadRequestText => 400,
            ErrorKind::InvalidSortField => 400,
            ErrorKind::NoDataError => 404,
            ErrorKind::NoUrlError => 404,
            ErrorKind::MethodNotAllowed => 405,
            ErrorKind::UnsupportedMediaType => 415,
            ErrorKind::ExpiredTokenError => 401,
            ErrorKind::UnauthorizedError => 401,
            ErrorKind::UnauthorizedTokenError => 401,
            ErrorKind::ForbiddenError => 403,
            ErrorKind::LoginIdFailError => 404,
            ErrorKind::LoginPwdFailError => 401,
            ErrorKind::IdConflictError => 409,
            ErrorKind::PhoneConflictError => 409,
            ErrorKind::EmailConflictError => 409,
            ErrorKind::RequiredFileError => 400,
            ErrorKind::FileUploadError => 404,
            ErrorKind::NoFileDataError => 404,
            ErrorKind::FileSizeExceedingError => 413,
            ErrorKind::FileExtensionError => 415,
            ErrorKind::ServerError => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_valid_http_status() {
        for kind in ErrorKind::ALL {
            let code = kind.status_code();
            assert!(
                (100..=599).contains(&code),
                "{:?} has out-of-range status {}",
                kind,
                code
            );
        }
    }

    #[test]
    fn test_every_kind_has_nonempty_message() {
        for kind in ErrorKind::ALL {
            assert!(!kind.message().is_empty(), "{:?} has empty message", kind);
        }
    }

    #[test]
    fn test_file_kinds_match_expected_statuses() {
        assert_eq!(ErrorKind::RequiredFileError.status_code(), 400);
        assert_eq!(ErrorKind::FileUploadError.status_code(), 404);
        assert_eq!(ErrorKind::NoFileDataError.status_code(), 404);
        assert_eq!(ErrorKind::FileSizeExceedingError.status_code(), 413);
        assert_eq!(ErrorKind::FileExtensionError.status_code(), 415);
        assert_eq!(ErrorKind::ServerError.status_code(), 500);
    }
}
