//!
//! Error type shared by the flow network and the debt simplifier
//!
use thiserror::Error;

/// Errors raised on a violated precondition of a public call.
///
/// These are caller-input errors; nothing inside the solver retries on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// negative capacity, label-count mismatch, absent edge collection,
    /// or a node index out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FlowError {
    pub(crate) fn invalid(msg: impl Into<String>) -> FlowError {
        FlowError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_message() {
        let e = FlowError::invalid("Capacity < 0");
        assert_eq!(e.to_string(), "invalid argument: Capacity < 0");
        assert!(matches!(e, FlowError::InvalidArgument(_)));
    }
}
