//! HTTP transport types and the `Transport` capability.
//!
//! # Design
//! Requests and responses are plain data. Services build an `HttpRequest`,
//! hand it to a `Transport`, and parse the `HttpResponse` that comes back.
//! The `build_*`/`parse_*` halves never touch the network, so every payload
//! shape and status mapping is testable without a server.
//!
//! `path` is relative to the backend root (`/dogs/1`); the transport owns the
//! base URL. Query parameters stay structured until the transport encodes them.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A bodiless GET.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A request carrying `payload` serialized as JSON.
    pub fn json<T: Serialize>(
        method: HttpMethod,
        path: impl Into<String>,
        payload: &T,
    ) -> Result<Self, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

/// Executes one request against the backend.
///
/// Implementations return non-2xx responses as data; only a request that
/// produced no response at all is an `Err`, and it must be
/// `ApiError::Transport`. Implementations never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
