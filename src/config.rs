use std::{env, fmt};

use crate::quiz::QuizError;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 8000;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const API_URL_VAR: &str = "SMARTQUE_API_URL";
pub const MODEL_VAR: &str = "SMARTQUE_MODEL";

#[derive(Clone)]
pub struct RequesterConfig {
    /// chat-completion endpoint
    pub api_url: String,

    /// bearer credential, sent as is
    pub api_key: String,

    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl RequesterConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Reads the credential and optional endpoint/model overrides from the
    /// process environment.
    pub fn from_env() -> Result<Self, QuizError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, QuizError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| QuizError::Config(format!("{} is not set", API_KEY_VAR)))?;

        let mut config = Self::new(api_key);
        if let Some(url) = lookup(API_URL_VAR) {
            config.api_url = url;
        }
        if let Some(model) = lookup(MODEL_VAR) {
            config.model = model;
        }
        Ok(config)
    }
}

impl fmt::Debug for RequesterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequesterConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config = RequesterConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-test")])).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 8000);
    }

    #[test]
    fn overrides_apply() {
        let config = RequesterConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "sk-test"),
            (API_URL_VAR, "http://localhost:8080/v1/chat/completions"),
            (MODEL_VAR, "gpt-4o"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/v1/chat/completions");
        assert_eq!(config.model, "gpt-4o");
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = RequesterConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, QuizError::Config(_)));

        let err = RequesterConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "")])).unwrap_err();
        assert!(matches!(err, QuizError::Config(_)));
    }

    #[test]
    fn debug_hides_key() {
        let rendered = format!("{:?}", RequesterConfig::new("sk-secret"));
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
