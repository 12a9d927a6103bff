//! Request execution with tracing instrumentation.
//!
//! This module provides [`ApiClient`], the single point of HTTP access to the
//! tour backend, and its [`ApiClientBuilder`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{Span, debug, instrument, warn};
use url::Url;

use crate::config::{ClientConfig, IDENTITY_FIELD};
use crate::error::{ApiError, BodyError, ConfigError, HttpError};
use crate::method::RestMethod;

const PREFER: &str = "prefer";
const RETURN_REPRESENTATION: &str = "return=representation";

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    config: ClientConfig,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    fn new(config: ClientConfig) -> Self {
        Self {
            config,
            timeout: None,
        }
    }

    /// Sets a request timeout. Requests have no timeout unless one is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidToken`] if the token cannot be sent as a
    /// header, or [`ConfigError::ClientBuild`] if the transport fails to start.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let mut authorization = HeaderValue::try_from(format!("Bearer {}", self.config.token()))
            .map_err(|_| ConfigError::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ConfigError::ClientBuild)?;

        Ok(ApiClient {
            client,
            config: Arc::new(self.config),
        })
    }
}

/// Async client for the tour backend.
///
/// Holds only immutable configuration and the transport handle, so clones are
/// cheap and concurrent calls never interfere.
///
/// ## Examples
///
/// ```rust,ignore
/// use tourguide_lib::{ApiClient, ClientConfig};
///
/// let config = ClientConfig::new("https://tours.example.com/api", token, "s1234")?;
/// let client = ApiClient::new(config)?;
///
/// let found = client.get_location(42).await?;
/// if let Some(location) = found.first() {
///     println!("{}", location.location_name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Creates a new builder for configuring a client.
    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder::new(config)
    }

    /// Creates a client with default settings.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Self::builder(config).build()
    }

    /// Returns the client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues one request and normalizes the response.
    ///
    /// `endpoint` is a collection path with an optional query string, appended
    /// verbatim to the base URL. A supplied `body` must serialize to a JSON
    /// object; its `username` field is set to the configured identity,
    /// replacing any value the caller put there.
    ///
    /// Returns `{}` for 204 and 205 responses and the parsed JSON body for any
    /// other success.
    ///
    /// ## Errors
    ///
    /// - [`ApiError::Http`] for a non-2xx status, carrying the raw body text
    /// - [`ApiError::Transport`] for network failures, unchanged
    /// - [`ApiError::Parse`] if a success body is not JSON
    /// - [`ApiError::Body`] if the body is not an object (nothing is sent)
    /// - [`ApiError::InvalidEndpoint`] if `endpoint` does not start with `/`
    #[instrument(
        name = "api_request",
        skip(self, method, body),
        fields(
            http.method = %method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    pub async fn perform<B>(
        &self,
        endpoint: &str,
        method: RestMethod,
        body: Option<&B>,
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;
        Span::current().record("http.url", url.as_str());

        let payload = match body {
            Some(body) => Some(self.stamp_identity(body)?),
            None => None,
        };

        let mut request = self.client.request(method.to_reqwest(), url);
        if method.requests_representation() {
            request = request.header(PREFER, RETURN_REPRESENTATION);
        }
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let response = request
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "request failed"))?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            debug!("response has no content");
            return Ok(Value::Object(Map::new()));
        }

        if !status.is_success() {
            let text = response.text().await.ok();
            let err = HttpError::from_body(status.as_u16(), text);
            warn!(status = err.status, body = %err.message, "backend rejected request");
            return Err(err.into());
        }

        let bytes = response.bytes().await?;
        debug!(bytes = bytes.len(), "response received");
        serde_json::from_slice(&bytes).map_err(ApiError::Parse)
    }

    /// GETs `endpoint` and decodes the result as records.
    pub(crate) async fn fetch_records<T>(&self, endpoint: &str) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let value = self.perform::<Value>(endpoint, RestMethod::Get, None).await?;
        decode_records(value)
    }

    /// Sends a write and decodes the echoed representation.
    pub(crate) async fn write_records<T, B>(
        &self,
        endpoint: &str,
        method: RestMethod,
        body: &B,
    ) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.perform(endpoint, method, Some(body)).await?;
        decode_records(value)
    }

    /// DELETEs `endpoint`, discarding any body.
    pub(crate) async fn delete_records(&self, endpoint: &str) -> Result<(), ApiError> {
        self.perform::<Value>(endpoint, RestMethod::Delete, None)
            .await
            .map(|_| ())
    }

    /// Joins base URL and endpoint by concatenation so a base path survives.
    ///
    /// The endpoint must start with `/`; anything else would extend the host.
    fn endpoint_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        let invalid = || ApiError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
        };
        if !endpoint.starts_with('/') {
            return Err(invalid());
        }
        let base = self.config.base_url().as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{endpoint}")).map_err(|_| invalid())
    }

    /// Serializes a body with the configured identity written last.
    fn stamp_identity<B>(&self, body: &B) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut value = serde_json::to_value(body).map_err(BodyError::Serialize)?;
        match &mut value {
            Value::Object(fields) => {
                fields.insert(
                    IDENTITY_FIELD.to_string(),
                    Value::String(self.config.username().to_string()),
                );
            }
            other => {
                return Err(BodyError::NotAnObject {
                    kind: json_kind(other),
                }
                .into());
            }
        }
        Ok(serde_json::to_vec(&value).map_err(BodyError::Serialize)?)
    }
}

/// Decodes a response into records.
///
/// The backend answers with an array; a bare object is wrapped, and the
/// empty `{}` of a no-content response yields no records.
fn decode_records<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    match value {
        Value::Array(_) => serde_json::from_value(value).map_err(ApiError::Parse),
        Value::Object(ref fields) if fields.is_empty() => Ok(Vec::new()),
        other => serde_json::from_value(other)
            .map(|record| vec![record])
            .map_err(ApiError::Parse),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
