// src/constants.rs
//! Domain constants that define how a page of records is requested and shaped.
//!
//! Each constant is named for the domain concept it constrains. The paging
//! constants are tied together: the fetch limit is one more than the page the
//! caller sees, and both the offset step and the trim threshold are the
//! display size.

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

/// How many records a caller sees on one page.
pub const PAGE_DISPLAY_SIZE: u32 = 10;

/// How many records are requested per page.
///
/// One more than `PAGE_DISPLAY_SIZE`: the extra record is the lookahead
/// sentinel. If it comes back, a next page exists; it is never shown.
pub const PAGE_FETCH_LIMIT: u32 = PAGE_DISPLAY_SIZE + 1;

/// The page number used when the caller does not ask for one.
pub const FIRST_PAGE: u32 = 1;

// ---------------------------------------------------------------------------
// Records endpoint
// ---------------------------------------------------------------------------

/// Listing endpoint used when neither the command line nor the environment
/// names one.
pub const DEFAULT_RECORDS_ENDPOINT: &str = "http://localhost:3000/records";

/// Environment variable that overrides the default endpoint.
pub const RECORDS_ENDPOINT_ENV: &str = "RECORDS_API_URL";

/// Query-string key for the color filter, repeated once per color.
pub const COLOR_FILTER_PARAM: &str = "color[]";

/// Seconds to wait for the endpoint before giving up on a request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unreadable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
