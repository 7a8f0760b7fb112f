// src/core/service_client.rs
//! Unified HTTP service client - every JSON call goes through the envelope unwrapping step

use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, trace};

use super::endpoint::Endpoint;
use super::envelope::{
    ensure_transport_ok, trace_business_failure, unwrap_envelope, TRANSPORT_FAILURE_MESSAGE,
};
use super::error::{ApiError, Result};

#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ServiceClient {
    /// Create a client bound to one base URL with a fixed per-call timeout
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.clone(),
        })
    }

    /// Generic GET request
    pub async fn get<R>(&self, endpoint: &Endpoint) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = self.request(Method::GET, endpoint)?;
        self.execute(request, endpoint).await
    }

    /// GET with query string parameters
    pub async fn get_with_query<Q, R>(&self, endpoint: &Endpoint, query: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.request(Method::GET, endpoint)?.query(query);
        self.execute(request, endpoint).await
    }

    /// Generic POST request with JSON
    pub async fn post_json<T, R>(&self, endpoint: &Endpoint, payload: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.request(Method::POST, endpoint)?.json(payload);
        self.execute(request, endpoint).await
    }

    /// Generic PUT request with JSON
    pub async fn put_json<T, R>(&self, endpoint: &Endpoint, payload: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.request(Method::PUT, endpoint)?.json(payload);
        self.execute(request, endpoint).await
    }

    pub async fn delete<R>(&self, endpoint: &Endpoint) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = self.request(Method::DELETE, endpoint)?;
        self.execute(request, endpoint).await
    }

    /// Multipart upload; reqwest sets the boundary in the content type
    pub async fn post_multipart<R>(&self, endpoint: &Endpoint, form: Form) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = self.request(Method::POST, endpoint)?.multipart(form);
        self.execute(request, endpoint).await
    }

    /// Binary download. The body is returned as-is and never parsed as an envelope;
    /// any failure carries `failure_message`.
    pub async fn get_bytes(&self, endpoint: &Endpoint, failure_message: &str) -> Result<Vec<u8>> {
        let request = self.request(Method::GET, endpoint)?;

        let response = request
            .send()
            .await
            .map_err(|e| network_failure(failure_message, e))?;

        let status = response.status();
        trace!("Response status for {}: {}", endpoint, status);
        ensure_transport_ok(status, failure_message)?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| network_failure(failure_message, e))?;

        debug!("Downloaded {} bytes from {}", bytes.len(), endpoint);
        Ok(bytes.to_vec())
    }

    fn request(&self, method: Method, endpoint: &Endpoint) -> Result<RequestBuilder> {
        let url = endpoint.resolve(&self.base_url)?;
        debug!("Calling {} {}", method, url);
        Ok(self.client.request(method, url))
    }

    async fn execute<R>(&self, request: RequestBuilder, endpoint: &Endpoint) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| network_failure(TRANSPORT_FAILURE_MESSAGE, e))?;

        let status = response.status();
        trace!("Response status for {}: {}", endpoint, status);
        ensure_transport_ok(status, TRANSPORT_FAILURE_MESSAGE)?;

        let body = response
            .bytes()
            .await
            .map_err(|e| network_failure(TRANSPORT_FAILURE_MESSAGE, e))?;

        trace_business_failure(unwrap_envelope(&body), &endpoint.to_string())
    }
}

fn network_failure(message: &str, source: reqwest::Error) -> ApiError {
    error!("HTTP request failed: {}", source);
    ApiError::network(message, source)
}
