/// Page requested when the caller does not supply one
pub const DEFAULT_PAGE: i64 = 1;

/// Rows per page when the caller does not supply a page size
pub const DEFAULT_PAGE_SIZE: i64 = 7;
