//! HTTP client abstraction for testability

use async_trait::async_trait;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over HTTP client for dependency injection.
///
/// Futures are not `Send`: the browser implementation wraps `fetch`.
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> crate::Result<HttpResponse>;

    /// Send a POST request without a body
    async fn post(&self, url: &str) -> crate::Result<HttpResponse>;

    /// Send a POST request with a JSON body
    async fn post_json(&self, url: &str, body: &str) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[cfg(feature = "native")]
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(feature = "native")]
impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    async fn finish(
        method: &str,
        url: &str,
        sent: std::result::Result<reqwest::Response, reqwest::Error>,
    ) -> crate::Result<HttpResponse> {
        let response = sent.map_err(|e| {
            crate::LessonWatchError::Http(format!("{} {} failed: {}", method, url, e))
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            crate::LessonWatchError::Http(format!("Reading response body: {}", e))
        })?;

        tracing::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

#[cfg(feature = "native")]
#[async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let sent = self.client.get(url).send().await;
        Self::finish("GET", url, sent).await
    }

    async fn post(&self, url: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("POST {}", url);
        let sent = self.client.post(url).send().await;
        Self::finish("POST", url, sent).await
    }

    async fn post_json(&self, url: &str, body: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("POST {} ({} bytes)", url, body.len());
        let sent = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await;
        Self::finish("POST", url, sent).await
    }
}
