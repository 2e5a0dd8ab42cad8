//! Grepable error codes for structured logging.

/// Stable, grepable error code and retryable flag for operational errors.
/// Route handlers log these alongside the human-readable message so failures
/// can be counted and alerted on without string-matching.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
