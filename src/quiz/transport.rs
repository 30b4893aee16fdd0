use serde::Serialize;

use super::QuizError;

/// Status and raw body of an HTTP exchange, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST authorized with a bearer credential.
///
/// Non-success statuses come back as an [`HttpReply`], only failures to
/// complete the exchange are errors.
pub trait ChatTransport {
    fn post_json<B: Serialize>(
        &self,
        url: &str,
        api_key: &str,
        payload: &B,
    ) -> Result<HttpReply, QuizError>;
}

#[derive(Debug, Default, Clone)]
pub struct UreqTransport;

impl ChatTransport for UreqTransport {
    fn post_json<B: Serialize>(
        &self,
        url: &str,
        api_key: &str,
        payload: &B,
    ) -> Result<HttpReply, QuizError> {
        let response = match ureq::post(url)
            .set("Authorization", &format!("Bearer {}", api_key))
            .set("Content-Type", "application/json")
            .send_json(payload)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(other) => return Err(QuizError::Http(other)),
        };

        let status = response.status();
        let body = response.into_string()?;

        Ok(HttpReply { status, body })
    }
}
