//! Pure HTTP client wrapper for the records endpoint.
//!
//! This module provides a thin wrapper around reqwest for fetching pages.
//! It knows the endpoint and how to send a request; status handling lives in
//! the parser, and paging logic lives outside the api module altogether.

use super::parser::parse_page_response;
use super::query_string::build_url;
use super::RecordSource;
use crate::config::RetrieveConfig;
use crate::error::{AppError, FetchError};
use crate::query::QueryParams;
use crate::types::Endpoint;
use reqwest::{header, Client, Response};
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = concat!("managed-records/", env!("CARGO_PKG_VERSION"));

/// A thin wrapper around reqwest Client bound to one records endpoint.
#[derive(Clone)]
pub struct RecordsHttpClient {
    client: Client,
    endpoint: Endpoint,
}

impl RecordsHttpClient {
    /// Creates a client for `endpoint` with the given request timeout.
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Creates a client from resolved configuration.
    pub fn from_config(config: &RetrieveConfig) -> Result<Self, AppError> {
        Self::new(config.endpoint.clone(), config.timeout)
    }

    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers
    }

    /// Makes a GET request for the given page parameters.
    pub async fn get(&self, params: &QueryParams) -> Result<Response, FetchError> {
        let url = build_url(&self.endpoint, params);
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        log::debug!("Response {} from {}", response.status(), response.url());

        Ok(response)
    }
}

#[async_trait::async_trait]
impl RecordSource for RecordsHttpClient {
    async fn fetch_page(&self, query: &QueryParams) -> Result<Value, FetchError> {
        let response = self.get(query).await?;
        let result = extract_response_text(response).await?;
        parse_page_response(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text along with status and URL.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, FetchError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
