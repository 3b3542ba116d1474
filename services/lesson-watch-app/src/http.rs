//! Browser `fetch` transport for the lesson watch API

use async_trait::async_trait;
use lesson_watch::io::{HttpClient, HttpResponse};
use lesson_watch::LessonWatchError;

/// [`HttpClient`] over `gloo-net`. Without the `csr` feature every request
/// fails, since there is no browser to send it.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHttpClient;

#[cfg(feature = "csr")]
async fn finish(
    method: &str,
    url: &str,
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> lesson_watch::Result<HttpResponse> {
    let response =
        sent.map_err(|e| LessonWatchError::Http(format!("{} {} failed: {}", method, url, e)))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| LessonWatchError::Http(format!("Reading response body: {}", e)))?;

    tracing::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
    Ok(HttpResponse { status, body })
}

#[cfg(not(feature = "csr"))]
fn offline(method: &str, url: &str) -> lesson_watch::Result<HttpResponse> {
    Err(LessonWatchError::Http(format!(
        "{} {} failed: no browser transport",
        method, url
    )))
}

#[async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn get(&self, url: &str) -> lesson_watch::Result<HttpResponse> {
        #[cfg(feature = "csr")]
        {
            let sent = gloo_net::http::Request::get(url).send().await;
            finish("GET", url, sent).await
        }

        #[cfg(not(feature = "csr"))]
        {
            offline("GET", url)
        }
    }

    async fn post(&self, url: &str) -> lesson_watch::Result<HttpResponse> {
        #[cfg(feature = "csr")]
        {
            let sent = gloo_net::http::Request::post(url).send().await;
            finish("POST", url, sent).await
        }

        #[cfg(not(feature = "csr"))]
        {
            offline("POST", url)
        }
    }

    async fn post_json(&self, url: &str, body: &str) -> lesson_watch::Result<HttpResponse> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::post(url)
                .header("Content-Type", "application/json")
                .body(body.to_string())
                .map_err(|e| LessonWatchError::Http(format!("POST {} failed: {}", url, e)))?;
            let sent = request.send().await;
            finish("POST", url, sent).await
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            offline("POST", url)
        }
    }
}
