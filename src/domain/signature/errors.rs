//! Signature verification error types.
//!
//! The three outcomes must stay distinguishable: a caller that never signed
//! (missing header), a caller whose signature does not match, and a receiver
//! that cannot verify anything because no secret is configured.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors from signing or verifying a webhook payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// No signature header was supplied.
    #[error("missing signature")]
    MissingSignature,

    /// A signature was supplied but does not match the payload.
    #[error("invalid signature")]
    InvalidSignature,

    /// The shared secret is not configured. A deployment problem, not a
    /// property of the request.
    #[error("webhook secret is not configured")]
    MissingSecret,
}

impl SignatureError {
    /// Maps the error to the HTTP status the gate responds with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SignatureError::MissingSignature => StatusCode::UNAUTHORIZED,
            SignatureError::InvalidSignature => StatusCode::FORBIDDEN,
            SignatureError::MissingSecret => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_signature_is_unauthorized() {
        assert_eq!(
            SignatureError::MissingSignature.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn invalid_signature_is_forbidden() {
        assert_eq!(
            SignatureError::InvalidSignature.status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn missing_secret_is_internal_error() {
        assert_eq!(
            SignatureError::MissingSecret.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn all_three_outcomes_stay_distinguishable() {
        let codes = [
            SignatureError::MissingSignature.status_code(),
            SignatureError::InvalidSignature.status_code(),
            SignatureError::MissingSecret.status_code(),
        ];
        assert_eq!(codes[0], StatusCode::UNAUTHORIZED);
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }
}
