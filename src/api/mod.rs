//! Backend API Wrappers
//!
//! HTTP transport plus frontend bindings to the REST API, organized by domain.

mod auth;
mod project;
mod task;

#[cfg(test)]
pub mod mock;

use std::fmt;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

// Re-export all public items
pub use auth::*;
pub use project::*;
pub use task::*;

// ========================
// Transport
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// One outbound call; `path` is relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Moves a request over the wire. Only network failures are errors here;
/// HTTP error statuses come back as a normal `ApiResponse`.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Browser `fetch` via reqwest's wasm backend
pub struct FetchTransport {
    client: reqwest::Client,
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: &str) -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self {
            client: reqwest::Client::new(),
            base_url: resolve_base_url(base_url, origin.as_deref()),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

/// reqwest needs absolute URLs; a root-relative base is joined to the page origin
fn resolve_base_url(base_url: &str, origin: Option<&str>) -> String {
    let base = base_url.trim_end_matches('/');
    match origin {
        Some(origin) if base.starts_with('/') => format!("{}{}", origin.trim_end_matches('/'), base),
        _ => base.to_string(),
    }
}

// ========================
// Client
// ========================

/// Shared handle used by every service call; attaches the bearer token
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut current) = self.token.write() {
            *current = token;
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        let body = self.send(Method::Get, path, query, None).await?;
        decode(&body)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError> {
        let json = body.map(encode).transpose()?;
        let body = self.send(Method::Post, path, &[], json).await?;
        decode(&body)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError> {
        let json = body.map(encode).transpose()?;
        let body = self.send(Method::Put, path, &[], json).await?;
        decode(&body)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, &[], None).await.map(|_| ())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<String, ApiError> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            query: query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            body,
            bearer: self.token(),
        };

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("[API] {} {} failed: {}", method, path, e);
                return Err(e);
            }
        };

        if (200..300).contains(&response.status) {
            log::debug!("[API] {} {} -> {}", method, path, response.status);
            Ok(response.body)
        } else {
            log::warn!("[API] {} {} -> {}", method, path, response.status);
            Err(ApiError::from_status(response.status, &response.body))
        }
    }
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Empty 2xx bodies decode as JSON `null`, so `()` responses work
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
