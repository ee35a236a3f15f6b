//! Telegram client error types.

/// Errors that can occur when sending a message.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Bot token was rejected
    #[error("unauthorized: check telegram_api_key")]
    Unauthorized,

    /// API returned an error status
    #[error("Telegram API error {status}: {message}")]
    Api { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TelegramError::Api {
            status: 400,
            message: "Bad Request: chat not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Telegram API error 400: Bad Request: chat not found"
        );
    }
}
