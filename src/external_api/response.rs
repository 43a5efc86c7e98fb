use std::collections::BTreeMap;

use reqwest::{header::HeaderMap, StatusCode};

/// Response exactly as the transport delivered it
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    /// Error envelope of the instance, if the body is one
    pub fn error_envelope(&self) -> Option<ErrorEnvelope> {
        serde_json::from_str::<ErrorEnvelope>(&self.body)
            .ok()
            .filter(|envelope| !envelope.is_empty())
    }

    /// Human readable reason of a failed request.
    ///
    /// Falls back to the raw body when it is not an error envelope.
    pub fn error_message(&self) -> String {
        match self.error_envelope() {
            Some(envelope) => envelope.to_string(),
            None => self.body.trim().to_string(),
        }
    }
}

/// Decoded body together with the raw response it came from
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub raw: RawResponse,
}

/// Standard error body of the issue tracker
#[derive(serde::Deserialize, serde::Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error_messages: Vec<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

impl ErrorEnvelope {
    pub fn is_empty(&self) -> bool {
        self.error_messages.is_empty() && self.errors.is_empty()
    }
}

impl std::fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = self.error_messages.clone();
        parts.extend(
            self.errors
                .iter()
                .map(|(field, message)| format!("{field}: {message}")),
        );
        write!(f, "{}", parts.join("; "))
    }
}
