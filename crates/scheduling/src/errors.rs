use thiserror::Error;

/// Crate-level error type for the fallible boundaries of the scheduling core.
///
/// The grid builder itself is total: once inputs are parsed into their typed
/// forms it cannot fail. Errors only arise when untrusted input (a month
/// selector string, a raw posts payload) is converted into those forms.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Invalid month selector '{0}': expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid posts payload: {0}")]
    Payload(#[from] serde_json::Error),
}
