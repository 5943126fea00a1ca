use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport-level failure from the login call: a non-success HTTP status,
/// a network error, or an undecodable body.
///
/// This is the only error the client surfaces. There is no retry and no
/// user-facing error banner; callers log it through the diagnostic channel
/// and leave the session untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "login transport failed: {}", self.message)
    }
}

impl std::error::Error for TransportError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_includes_message() {
        let err = TransportError::new("connection refused");
        assert_eq!(
            format!("{err}"),
            "login transport failed: connection refused"
        );
    }

    #[test]
    fn roundtrip_through_json() {
        let err = TransportError::new("HTTP 503");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: TransportError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
