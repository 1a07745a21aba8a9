//! REST API HTTP client implementation.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{AppError, Result};

/// Longest error body echoed back to the user.
const MAX_ERROR_LEN: usize = 200;

/// University platform REST API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// List responses come either bare or wrapped in a pagination envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Results { results: Vec<T> },
    Data { data: Vec<T> },
}

impl<T> ListBody<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            ListBody::Bare(items) | ListBody::Results { results: items } | ListBody::Data { data: items } => items,
        }
    }
}

impl ApiClient {
    /// Create a new client from API settings.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.trim().is_empty()),
        })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{base}/{path}", base = self.base_url, path = path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{method} {url}");

        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET a single JSON document.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path).send().await?;
        decode(check_status(response, path).await?).await
    }

    /// GET a list, accepting bare arrays and `results`/`data` envelopes.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<T>> {
        let mut builder = self.request(Method::GET, path);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let response = builder.send().await?;
        let body: ListBody<T> = decode(check_status(response, path).await?).await?;
        Ok(body.into_vec())
    }

    /// POST a JSON body and decode the created record.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        decode(check_status(response, path).await?).await
    }

    /// PUT a JSON body and decode the updated record.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        decode(check_status(response, path).await?).await
    }

    /// DELETE a resource. Any success status counts, body ignored.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        check_status(response, path).await?;
        Ok(())
    }

    /// Check that the API answers on its health endpoint.
    pub async fn health_check(&self) -> Result<bool> {
        let response = self.request(Method::GET, "/health/").send().await?;
        Ok(response.status().is_success())
    }
}

/// Map non-success statuses to `AppError`.
async fn check_status(response: Response, path: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!("{path} answered {status}: {body}");

    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized,
        StatusCode::NOT_FOUND => AppError::not_found(path.to_string()),
        _ => AppError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        },
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| AppError::decode(e.to_string()))
}

/// Extract a human-readable message from an error body.
///
/// Prefers a `detail`, `message`, or `error` string field; falls back to the raw text.
pub fn error_message(body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message", "error"] {
            if let Some(serde_json::Value::String(msg)) = map.get(key) {
                return msg.clone();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response".to_string();
    }
    match trimmed.char_indices().nth(MAX_ERROR_LEN) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/api/".to_string(),
            ..Default::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.url("/colleges/"), "http://localhost:8000/api/colleges/");
        assert_eq!(client.url("colleges/3/"), "http://localhost:8000/api/colleges/3/");
    }

    #[test]
    fn test_blank_token_ignored() {
        let config = ApiConfig {
            token: Some("  ".to_string()),
            ..Default::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert!(client.token.is_none());
    }

    #[test]
    fn test_error_message_prefers_detail() {
        assert_eq!(error_message(r#"{"detail": "Code already exists"}"#), "Code already exists");
        assert_eq!(error_message(r#"{"error": "bad input", "code": 12}"#), "bad input");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("Internal Server Error"), "Internal Server Error");
        assert_eq!(error_message(r#"{"name": ["required"]}"#), r#"{"name": ["required"]}"#);
        assert_eq!(error_message("  "), "empty response");
    }

    #[test]
    fn test_error_message_truncates() {
        let body = "x".repeat(500);
        let msg = error_message(&body);
        assert_eq!(msg.len(), MAX_ERROR_LEN + 3);
        assert!(msg.ends_with("..."));
    }

    #[test]
    fn test_list_body_shapes() {
        let bare: ListBody<i32> = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(bare.into_vec(), vec![1, 2]);

        let paged: ListBody<i32> = serde_json::from_str(r#"{"count": 1, "results": [5]}"#).unwrap();
        assert_eq!(paged.into_vec(), vec![5]);

        let data: ListBody<i32> = serde_json::from_str(r#"{"data": [7, 8]}"#).unwrap();
        assert_eq!(data.into_vec(), vec![7, 8]);
    }
}
