//! HTTP GET transport.
//!
//! Uses the curl crate (libcurl). Each request runs on tokio's blocking pool
//! so the async fetch chain never stalls a runtime worker.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::error::FetchError;
use crate::config::HttpConfig;

/// Status and body of a completed request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body, or `FetchError::Http` for non-2xx responses.
    pub fn into_success_body(self) -> Result<Vec<u8>, FetchError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(FetchError::Http(self.status))
        }
    }
}

pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, FetchError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, FetchError>> + Send {
        (**self).get(url)
    }
}

/// libcurl-backed transport.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
    headers: Vec<(String, String)>,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

impl CurlTransport {
    pub fn new(http: &HttpConfig) -> Self {
        Self {
            connect_timeout: http.connect_timeout(),
            timeout: http.timeout(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
        }
    }

    /// Performs a GET and collects the body. Follows redirects.
    /// Runs in the current thread; `Transport::get` wraps it in `spawn_blocking`.
    pub fn get_blocking(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        for (k, v) in &self.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

impl Transport for CurlTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let this = self.clone();
        let url = url.to_string();
        tokio::task::spawn_blocking(move || this.get_blocking(&url)).await?
    }
}
