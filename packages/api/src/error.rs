use thiserror::Error;

/// Failure of a call to the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered `401`. The interceptor has already torn the session down.
    #[error("session expired")]
    Unauthorized,
    /// Any other non-success status, with the server's `message` when it sent one.
    #[error("server returned {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Server { status: u16, message: Option<String> },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a notification: the server-provided message when present,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 409,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.user_message("Please try again."), "Email already registered");
        assert_eq!(err.to_string(), "server returned 409: Email already registered");
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Please try again."), "Please try again.");
        assert_eq!(err.to_string(), "server returned 500");

        let blank = ApiError::Server {
            status: 400,
            message: Some(" ".to_string()),
        };
        assert_eq!(blank.user_message("fallback"), "fallback");

        assert_eq!(ApiError::Unauthorized.user_message("fallback"), "fallback");
        assert!(ApiError::Unauthorized.is_unauthorized());
    }
}
