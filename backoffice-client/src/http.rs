//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use bytes::Bytes;
use reqwest::{Client, multipart::Form};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::ApiResponse;

/// HTTP client for making network requests to the restaurant backend
///
/// Every call is fire-and-await: no cancellation tokens, no automatic
/// retry. Failures are returned to the caller to surface and retry.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.apply_auth(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(path, response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.apply_auth(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(path, response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.apply_auth(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(path, response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.apply_auth(self.client.delete(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(path, response).await
    }

    /// Make a POST request with a multipart form
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ClientResult<T> {
        let request = self.apply_auth(self.client.post(self.url(path)).multipart(form));
        let response = request.send().await?;
        Self::handle_response(path, response).await
    }

    /// Make a GET request returning the raw body bytes (blob downloads)
    pub async fn get_bytes(&self, path: &str) -> ClientResult<Bytes> {
        let request = self.apply_auth(self.client.get(self.url(path)));
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(path, %status, "blob download failed");
            return Err(ClientError::from_status(status, text));
        }
        Ok(response.bytes().await?)
    }

    /// Handle a JSON response wrapped in the standard envelope
    async fn handle_response<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(path, %status, "request failed");
            return Err(ClientError::from_status(status, text));
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.is_success() {
            tracing::warn!(path, code = %envelope.code, "backend returned error envelope");
            return Err(ClientError::Internal(envelope.message));
        }
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse(format!("missing data for {}", path)))
    }
}
