//! Stable error codes shared by gateway error types.

/// Machine-readable classification attached to error log lines.
pub trait ErrorCode {
    /// Stable code, e.g. `"E_MISSING_QUERY"`.
    fn error_code(&self) -> &'static str;

    /// Whether the same request could succeed if sent again unchanged.
    fn retryable(&self) -> bool {
        false
    }
}
