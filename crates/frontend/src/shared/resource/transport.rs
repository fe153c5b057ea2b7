//! HTTP seam of the resource layer.
//!
//! Controllers only see [`Transport`]; the browser build plugs in
//! [`GlooTransport`], unit tests plug in scripted fakes.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Request relative to the API base, e.g. `GET /api/branches/b1`
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    /// JSON body
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_json(method: HttpMethod, path: impl Into<String>, body: String) -> Self {
        Self {
            method,
            path: path.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
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

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// Sends one request and returns the raw response.
///
/// `Err` means the request could not complete at all (offline, CORS, aborted);
/// HTTP error statuses are returned as `Ok` and classified by the caller.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String>;
}

/// `fetch`-based transport carrying the stored bearer token on every request
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl GlooTransport {
    fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
        let builder = match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Patch => Request::patch(url),
            HttpMethod::Delete => Request::delete(url),
        };
        storage::auth_headers()
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, &value))
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        let url = api_url(&request.path);
        let builder = Self::builder(request.method, &url);

        let prepared = match request.body {
            Some(body) => builder.header("Content-Type", "application/json").body(body),
            None => builder.build(),
        }
        .map_err(|e| format!("Failed to build request: {}", e))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        let status = response.status();
        // Error bodies are optional; an unreadable body is treated as empty.
        let body = response.text().await.unwrap_or_default();

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_classification() {
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(404, "").is_success());
        assert!(ApiResponse::new(401, "").is_unauthorized());
    }
}
