use thiserror::Error;

pub(crate) const GENERIC_SERVICE_MESSAGE: &str = "Failed to generate questions";

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    /// The completion service answered with a non-success status.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The success body did not have the chat-completion shape.
    #[error("Unexpected completion response: {0}")]
    Response(String),

    /// The model's reply could not be read as a JSON array.
    #[error("Failed to parse quiz questions")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing configuration: {0}")]
    Config(String),
}

impl QuizError {
    pub(crate) fn service(status: u16, message: Option<&str>) -> Self {
        let message = match message {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => GENERIC_SERVICE_MESSAGE.to_string(),
        };
        QuizError::Service { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_displays_reported_message() {
        let err = QuizError::service(429, Some("rate limited"));
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn service_error_falls_back_to_generic_message() {
        assert_eq!(
            QuizError::service(500, None).to_string(),
            GENERIC_SERVICE_MESSAGE
        );
        assert_eq!(
            QuizError::service(500, Some("")).to_string(),
            GENERIC_SERVICE_MESSAGE
        );
    }
}
