use thiserror::Error;

/// Shown whenever the backend did not supply its own error text
pub const FALLBACK_MESSAGE: &str = "Failed to fetch your order history";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderHistoryError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("Order history request failed with status {status}")]
    Server { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl OrderHistoryError {
    /// Text for the error banner
    pub fn user_message(&self) -> String {
        match self {
            OrderHistoryError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_shown_verbatim() {
        let err = OrderHistoryError::Server {
            status: 429,
            message: Some("rate limited".into()),
        };
        assert_eq!(err.user_message(), "rate limited");
    }

    #[test]
    fn test_fallback_message() {
        let cases = [
            OrderHistoryError::AuthenticationRequired,
            OrderHistoryError::Network("offline".into()),
            OrderHistoryError::Decode("expected array".into()),
            OrderHistoryError::Server { status: 500, message: None },
            OrderHistoryError::Server { status: 502, message: Some("  ".into()) },
        ];
        for err in cases {
            assert_eq!(err.user_message(), FALLBACK_MESSAGE, "{:?}", err);
        }
    }
}
