//! HTTP seam between the sync layer and the network.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::COOKIE;
use serde_json::Value;
use std::time::Duration;

use super::SyncError;
use crate::infra::CredentialReader;

/// A request against the notes API, relative to the server's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a completed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the body of a 2xx response, or an `Http` error carrying the body text.
    pub fn into_success(self) -> Result<String, SyncError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(SyncError::Http {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// Sends API requests (allows faking the server in tests).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, SyncError>;
}

/// `reqwest`-backed transport that attaches the user's cookies to every request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
    credentials: CredentialReader,
}

impl HttpTransport {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        credentials: CredentialReader,
    ) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SyncError::ClientSetup(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, SyncError> {
        let url = format!("{}{}", self.base_url, request.path);
        log::debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.clone(), &url);
        if let Some(cookie) = self.credentials.cookie_header() {
            builder = builder.header(COOKIE, cookie);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;

        log::debug!("{} {} -> {}", request.method, url, status);
        Ok(ApiResponse { status, body })
    }
}
