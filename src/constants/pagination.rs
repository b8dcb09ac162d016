//! Pagination constants for list endpoints.

/// Default starting page number.
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Default number of items per page when not specified in the request.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
