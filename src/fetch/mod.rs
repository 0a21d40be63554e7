//! Minimal HTTP plumbing for outbound lookups.

mod api_key;
mod basic;

pub use api_key::ApiKeyParam;
pub use basic::BasicClient;

use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::{Request, Response};

/// Something that can execute a prepared request. Wrappers such as
/// [`ApiKeyParam`] decorate another client.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

/// GETs `url` and returns the body, failing on a non-success status.
pub async fn fetch_bytes<C: HttpClient + ?Sized>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("request failed with status {}: {}", status, body);
    }

    Ok(resp.bytes().await?.to_vec())
}


#[cfg(test)]
mod tests {
    use super::test_server::{DirectClient, serve_once};
    use super::*;

    #[tokio::test]
    async fn test_fetch_bytes_returns_body() {
        let (base_url, request) = serve_once("200 OK", "{\"results\":[]}").await;

        let body = fetch_bytes(&DirectClient::new(), &format!("{base_url}/ping"))
            .await
            .unwrap();

        assert_eq!(body, b"{\"results\":[]}");
        assert_eq!(request.await.unwrap(), "GET /ping HTTP/1.1");
    }

    #[tokio::test]
    async fn test_fetch_bytes_fails_on_error_status() {
        let (base_url, _request) = serve_once("503 Service Unavailable", "try later").await;

        let err = fetch_bytes(&DirectClient::new(), &base_url)
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("503"), "{message}");
        assert!(message.contains("try later"), "{message}");
    }

    #[tokio::test]
    async fn test_fetch_bytes_rejects_bad_url() {
        assert!(fetch_bytes(&DirectClient::new(), "not a url").await.is_err());
    }
}
