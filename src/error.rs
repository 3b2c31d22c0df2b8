//! API Failure Taxonomy
//!
//! Every request against the inventory API resolves into one of these
//! conditions. Views catch them at the boundary and render a single
//! error banner; there is no retry anywhere.

use std::fmt;

/// Common result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No token present when an authenticated action was attempted.
    /// The request is never sent.
    AuthMissing,
    /// The server answered 401; the stored token has been cleared.
    AuthExpired,
    /// Any other non-success status.
    RequestFailed(u16),
    /// Transport-level failure before a status was available.
    Network(String),
    /// A success response whose body did not match the expected shape.
    MalformedResponse(String),
}

impl ApiError {
    /// Classify a non-success status from an authenticated request.
    pub fn from_status(status: u16) -> Self {
        if status == 401 {
            ApiError::AuthExpired
        } else {
            ApiError::RequestFailed(status)
        }
    }

    /// True when the failure already invalidated the local session and
    /// redirected; views skip the banner for these.
    pub fn is_auth_loss(&self) -> bool {
        matches!(self, ApiError::AuthMissing | ApiError::AuthExpired)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::AuthMissing => write!(f, "No authentication token found"),
            ApiError::AuthExpired => write!(f, "Authentication token expired"),
            ApiError::RequestFailed(status) => write!(f, "API request failed (status {})", status),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_status_expires_the_session() {
        assert_eq!(ApiError::from_status(401), ApiError::AuthExpired);
    }

    #[test]
    fn other_statuses_carry_through() {
        assert_eq!(ApiError::from_status(404), ApiError::RequestFailed(404));
        assert_eq!(ApiError::from_status(500), ApiError::RequestFailed(500));
    }

    #[test]
    fn auth_loss_covers_both_token_conditions() {
        assert!(ApiError::AuthMissing.is_auth_loss());
        assert!(ApiError::AuthExpired.is_auth_loss());
        assert!(!ApiError::RequestFailed(500).is_auth_loss());
        assert!(!ApiError::Network("refused".into()).is_auth_loss());
    }
}
