pub mod field_api;
pub mod response;

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::{header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE}, Client, Method, RequestBuilder, Url};
use thiserror::Error;
use tracing::{debug, warn};

pub use response::{ApiResponse, ErrorEnvelope, RawResponse};

const APPLICATION_JSON: &str = "application/json";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Request build error: {0}")]
    Build(#[source] reqwest::Error),
    #[error("Api error {}: {}", .0.status, .0.error_message())]
    Api(RawResponse),
    #[error("Deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Serialization error: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("URL parse error: {0}")]
    Parse(String),
    #[error("The {0} must not be empty")]
    EmptySegment(&'static str),
    #[error("Next page URL <{0}> does not belong to the configured instance")]
    ForeignNextPage(String),
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to retrieve the user's directories")]
    NotFoundUserDir,
    #[error("The string entered must be a URL")]
    InvalidUrl,
    #[error("Your token failed validation, please try again")]
    InvalidToken,
    #[error("Unsupported API version: {0}, expected 2 or 3")]
    InvalidApiVersion(String),
    #[error("Couldn't create a config")]
    CantCreateConfig,
    #[error("Nothing to update: pass --value or --disabled")]
    NothingToUpdate,
}

impl ApiError {
    /// The request was rejected before anything was sent
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            ApiError::Parse(_)
                | ApiError::Build(_)
                | ApiError::EmptySegment(_)
                | ApiError::Encode(_)
                | ApiError::ForeignNextPage(_)
                | ApiError::InvalidApiKey
        )
    }

    /// Raw response of a failed call, when the server answered
    pub fn raw_response(&self) -> Option<&RawResponse> {
        match self {
            ApiError::Api(raw) => Some(raw),
            _ => None,
        }
    }
}

/// Credentials sent with every request
#[derive(Debug, Clone, PartialEq)]
pub enum Auth {
    /// Cloud instances: account email and API token
    Basic { email: String, api_token: String },
    /// Data Center instances: personal access token
    Bearer(String),
}

impl Auth {
    fn header_value(&self) -> Result<HeaderValue, ApiError> {
        let value = match self {
            Auth::Basic { email, api_token } => {
                format!("Basic {}", STANDARD.encode(format!("{email}:{api_token}")))
            }
            Auth::Bearer(token) => format!("Bearer {token}"),
        };
        let mut value = HeaderValue::from_str(&value).map_err(|_| ApiError::InvalidApiKey)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// Basic api client
#[derive(Debug, Clone)]
pub struct BaseApiClient {
    client: Client,
    pub base_url: Url,
}

impl BaseApiClient {

    /// Base url + path segments + query.
    ///
    /// Every segment is percent-encoded, `?` is only added for a non-empty query.
    pub fn build_url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::Parse(self.base_url.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    /// Same scheme, host and port as the base url
    pub fn is_same_origin(&self, url: &Url) -> bool {
        url.origin() == self.base_url.origin()
    }

    fn get_default_headers(auth: &Auth) -> Result<HeaderMap, ApiError>{
        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(AUTHORIZATION, auth.header_value()?);
        Ok(headers)
    }

    async fn read_raw_response(response: reqwest::Response) -> Result<RawResponse, ApiError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(RawResponse { status, headers, body })
    }

    async fn send(&self, method: Method, request: RequestBuilder) -> Result<RawResponse, ApiError> {
        let request = request.build().map_err(ApiError::Build)?;
        debug!(method = %method, url = %request.url(), "sending request");
        let response = self.client.execute(request).await?;
        let raw = Self::read_raw_response(response).await?;
        debug!(method = %method, status = %raw.status, "received response");

        if !raw.status.is_success() {
            warn!(method = %method, status = %raw.status, "request failed: {}", raw.error_message());
            return Err(ApiError::Api(raw));
        }
        Ok(raw)
    }

    fn handle_response<T: serde::de::DeserializeOwned> (
        raw: RawResponse
    ) -> Result<ApiResponse<T>, ApiError> {
        let body = if raw.body.trim().is_empty() { "null" } else { raw.body.as_str() };
        let data = serde_json::from_str(body)?;
        Ok(ApiResponse { data, raw })
    }

    fn encode_body<B: serde::Serialize>(body: &B) -> Result<Vec<u8>, ApiError> {
        serde_json::to_vec(body).map_err(ApiError::Encode)
    }

    fn parse_base_url(base_url: &str) -> Result<Url, ApiError> {
        let parse_base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        if parse_base_url.cannot_be_a_base() {
            return Err(ApiError::Parse(base_url.to_string()));
        }
        Ok(parse_base_url)
    }

    /// Client with default headers and auth.
    ///
    /// Without `timeout` the request waits as long as reqwest does by default.
    pub fn new(base_url: &str, auth: &Auth, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let default_headers = Self::get_default_headers(auth)?;

        let mut builder = Client::builder().default_headers(default_headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Build)?;

        Ok(
            Self {
                client,
                base_url: Self::parse_base_url(base_url)?,
        })
    }

    /// Wrap a preconfigured reqwest client, its headers, auth and timeouts are used as is
    pub fn from_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        Ok(Self { client, base_url: Self::parse_base_url(base_url)? })
    }

    pub async fn get<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<ApiResponse<T>, ApiError> {
        let raw = self.send(Method::GET, self.client.get(url)).await?;
        Self::handle_response(raw)
    }

    pub async fn post<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<ApiResponse<T>, ApiError> {
        let body = Self::encode_body(body)?;
        let raw = self.send(Method::POST, self.client.post(url).body(body)).await?;
        Self::handle_response(raw)
    }

    pub async fn put<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<ApiResponse<T>, ApiError> {
        let body = Self::encode_body(body)?;
        let raw = self.send(Method::PUT, self.client.put(url).body(body)).await?;
        Self::handle_response(raw)
    }

    /// DELETE has no body to decode, the raw response is the result
    pub async fn delete(&self, url: Url) -> Result<RawResponse, ApiError> {
        self.send(Method::DELETE, self.client.delete(url)).await
    }
}
