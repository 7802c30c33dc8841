/*
[INPUT]:  API token, client options (base URL, sandbox, language), per-call options
[OUTPUT]: Configured client and the single request/response executor
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;

use reqwest::header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::{ApiError, Result, TransferwiseError};
use crate::types::Language;

/// Base URLs for the Transferwise API
pub const PRODUCTION_BASE_URL: &str = "https://api.transferwise.com/";
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.transferwise.tech/";

/// Environment variables read by [`TransferwiseClient::from_env`]
pub const TOKEN_ENV: &str = "TRANSFERWISE_API_TOKEN";
pub const SANDBOX_ENV: &str = "TRANSFERWISE_SANDBOX";
pub const LANGUAGE_ENV: &str = "TRANSFERWISE_LANGUAGE";

/// Statuses treated as success: 200 OK through 226 IM Used
const SUCCESS_STATUS_MIN: u16 = 200;
const SUCCESS_STATUS_MAX: u16 = 226;

/// Construction-time option, applied in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientOption {
    /// Use an arbitrary base URL
    BaseUrl(String),
    /// Use the sandbox base URL
    Sandbox,
    /// Default `Accept-Language` for every call
    Language(Language),
}

/// Per-call option, applied after the client defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOption {
    /// Override `Accept-Language` for this call only
    Language(Language),
}

/// HTTP client for the Transferwise API
///
/// Read-only after construction; share it freely between callers.
#[derive(Clone)]
pub struct TransferwiseClient {
    http_client: Client,
    base_url: Url,
    authorization: HeaderValue,
    language: Option<Language>,
}

impl fmt::Debug for TransferwiseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferwiseClient")
            .field("base_url", &self.base_url.as_str())
            .field("authorization", &"Bearer <redacted>")
            .field("language", &self.language)
            .finish()
    }
}

impl TransferwiseClient {
    /// Create a client for the production API, then apply `options` in order.
    pub fn new(
        token: impl Into<String>,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(TransferwiseError::Config("API token must not be empty".to_string()));
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| TransferwiseError::Config("API token is not a valid header value".to_string()))?;
        authorization.set_sensitive(true);

        let http_client = Client::builder()
            .user_agent(concat!("transferwise-adapter/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut client = Self {
            http_client,
            base_url: parse_base_url(PRODUCTION_BASE_URL)?,
            authorization,
            language: None,
        };

        for option in options {
            client.apply(option)?;
        }

        debug!(base_url = %client.base_url, language = ?client.language, "client configured");
        Ok(client)
    }

    /// Create a client from `TRANSFERWISE_API_TOKEN`, `TRANSFERWISE_SANDBOX`
    /// and `TRANSFERWISE_LANGUAGE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(TOKEN_ENV)
            .ok_or_else(|| TransferwiseError::Config(format!("{TOKEN_ENV} not set")))?;

        let mut options = Vec::new();
        if let Some(flag) = lookup(SANDBOX_ENV) {
            if matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes") {
                options.push(ClientOption::Sandbox);
            }
        }
        if let Some(tag) = lookup(LANGUAGE_ENV) {
            let language = tag.parse().map_err(TransferwiseError::Config)?;
            options.push(ClientOption::Language(language));
        }

        Self::new(token, options)
    }

    fn apply(&mut self, option: ClientOption) -> Result<()> {
        match option {
            ClientOption::BaseUrl(url) => self.base_url = parse_base_url(&url)?,
            ClientOption::Sandbox => self.base_url = parse_base_url(SANDBOX_BASE_URL)?,
            ClientOption::Language(language) => self.language = Some(language),
        }
        Ok(())
    }

    /// Base URL every request path is joined onto
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default `Accept-Language`, if configured
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Build full URL for a path relative to the base URL
    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn headers(&self, options: &[RequestOption]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(language) = self.language {
            headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(language.as_str()));
        }
        for option in options {
            match option {
                RequestOption::Language(language) => {
                    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(language.as_str()));
                }
            }
        }
        headers
    }

    /// Build request builder with auth, content type and language headers
    pub(crate) fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &[RequestOption],
    ) -> Result<RequestBuilder>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        debug!(%method, %url, has_body = body.is_some(), "sending request");

        let builder = self
            .http_client
            .request(method, url)
            .headers(self.headers(options));
        match body {
            Some(body) => Ok(builder.body(serde_json::to_vec(body)?)),
            None => Ok(builder),
        }
    }

    /// Send one request and decode the success body into `T`.
    ///
    /// Statuses outside 200..=226 become [`TransferwiseError::Api`].
    pub async fn execute<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &[RequestOption],
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path, body, options)?;
        self.send_json(builder).await
    }

    /// Send one request whose success body carries nothing of interest
    pub async fn execute_no_content<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &[RequestOption],
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, path, body, options)?;
        self.dispatch(builder).await.map(|_| ())
    }

    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.execute::<(), T>(Method::GET, path, None, &[]).await
    }

    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let (status, body) = self.dispatch(builder).await?;
        serde_json::from_slice(&body).map_err(|source| {
            warn!(status = status.as_u16(), error = %source, "response body did not match expected type");
            TransferwiseError::Decode { status, source }
        })
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<(StatusCode, Vec<u8>)> {
        let response = builder.send().await?;
        let status = response.status();

        if !is_success(status) {
            let body = response.bytes().await.unwrap_or_default();
            let error = ApiError::from_body(&body);
            warn!(
                status = status.as_u16(),
                errors = error.errors.len(),
                "API returned error status"
            );
            return Err(TransferwiseError::Api { status, error });
        }

        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");
        Ok((status, body.to_vec()))
    }
}

fn is_success(status: StatusCode) -> bool {
    (SUCCESS_STATUS_MIN..=SUCCESS_STATUS_MAX).contains(&status.as_u16())
}

/// Parse a base URL, ensuring a trailing `/` so relative paths join beneath it
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|err| TransferwiseError::Config(format!("invalid base URL {raw:?}: {err}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
