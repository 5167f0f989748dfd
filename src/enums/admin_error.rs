use thiserror::Error;

/// Failures an operator script is expected to branch on.
///
/// Transport and decode errors are not listed here; they travel through
/// `anyhow::Error` unchanged. Every variant survives `anyhow::Context`
/// wrapping and can be recovered with `downcast_ref::<AdminError>()`.
#[derive(Debug, Error)]
pub enum AdminError {
    /// A pattern-based bulk operation found nothing to act on.
    #[error("no indices match pattern: {pattern}")]
    NoMatch { pattern: String },

    #[error("invalid index pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The cluster answered with a status code >= 400.
    #[error("{context}: {body}")]
    Api {
        context: String,
        status: u16,
        body: String,
    },

    #[error("request cancelled")]
    Cancelled,
}

impl AdminError {
    pub fn api(context: &str, status: u16, body: String) -> Self {
        AdminError::Api {
            context: context.to_string(),
            status,
            body,
        }
    }
}
