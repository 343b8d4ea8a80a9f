//! HTTP client for a running Hexboard server.
//!
//! Used by `hexboard status` to check on a server and report its session.
//! The base URL defaults to `HEXBOARD_URL`, falling back to
//! `http://127.0.0.1:3000/api/v1`.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{LoginInput, SessionResponse};

/// Default URL for a local server.
const DEFAULT_URL: &str = "http://127.0.0.1:3000/api/v1";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct HexboardClient {
    base_url: String,
    client: Client,
}

impl HexboardClient {
    /// Create client from the `HEXBOARD_URL` environment variable.
    pub fn from_env() -> Self {
        let base_url = std::env::var("HEXBOARD_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client.request(method, format!("{}{}", self.base_url, path))
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(body)),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self.request(reqwest::Method::GET, "/health").send().await?;
        self.handle_response(response).await
    }

    pub async fn session(&self) -> Result<SessionResponse, ClientError> {
        let response = self.request(reqwest::Method::GET, "/session").send().await?;
        self.handle_response(response).await
    }

    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionResponse, ClientError> {
        let input = LoginInput {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .request(reqwest::Method::POST, "/session/login")
            .json(&input)
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn logout(&self) -> Result<SessionResponse, ClientError> {
        let response = self
            .request(reqwest::Method::POST, "/session/logout")
            .send()
            .await?;
        self.handle_response(response).await
    }
}
