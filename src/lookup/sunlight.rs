use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use super::config::LookupConfig;
use super::{Legislator, LegislatorDirectory};
use crate::clean::ZipCode;
use crate::fetch::{ApiKeyParam, BasicClient, HttpClient, fetch_bytes};

const API_KEY_PARAM: &str = "apikey";

#[derive(Deserialize)]
struct LocateResponse {
    results: Vec<Legislator>,
}

/// Legislator lookup against the Sunlight congress API.
pub struct SunlightDirectory<C = BasicClient> {
    client: ApiKeyParam<C>,
    base_url: String,
}

impl SunlightDirectory<BasicClient> {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let client = BasicClient::with_timeout(config.timeout)?;
        Ok(Self::with_client(client, config))
    }
}

impl<C: HttpClient> SunlightDirectory<C> {
    pub fn with_client(client: C, config: &LookupConfig) -> Self {
        Self {
            client: ApiKeyParam::new(client, API_KEY_PARAM, config.api_key.clone()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn locate_url(&self, zipcode: &ZipCode) -> Result<Url> {
        let endpoint = format!("{}/legislators/locate", self.base_url);
        Url::parse_with_params(&endpoint, &[("zip", zipcode.as_str())])
            .with_context(|| format!("invalid lookup endpoint {endpoint}"))
    }
}

#[async_trait]
impl<C: HttpClient> LegislatorDirectory for SunlightDirectory<C> {
    async fn in_zipcode(&self, zipcode: &ZipCode) -> Result<Vec<Legislator>> {
        let url = self.locate_url(zipcode)?;
        let bytes = fetch_bytes(&self.client, url.as_str())
            .await
            .with_context(|| format!("legislator lookup failed for zip {zipcode}"))?;
        let legislators = parse_locate_response(&bytes)?;
        debug!(%zipcode, count = legislators.len(), "Legislators located");
        Ok(legislators)
    }
}

/// Decodes a `/legislators/locate` response body.
pub fn parse_locate_response(bytes: &[u8]) -> Result<Vec<Legislator>> {
    let response: LocateResponse =
        serde_json::from_slice(bytes).context("failed to parse legislator response")?;
    Ok(response.results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::normalize_zipcode;
    use crate::fetch::test_server::{DirectClient, serve_once};

    struct Unreachable;

    #[async_trait]
    impl HttpClient for Unreachable {
        async fn execute(&self, _req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
            unreachable!("no requests in unit tests")
        }
    }

    #[test]
    fn test_parse_locate_response() {
        let body = br#"{
            "results": [
                {"title": "Rep", "first_name": "Eleanor", "last_name": "Norton", "party": "D", "chamber": "house"},
                {"title": "Sen", "first_name": "Bob", "last_name": "Smith", "party": "R"}
            ],
            "count": 2
        }"#;

        let legislators = parse_locate_response(body).unwrap();
        assert_eq!(legislators.len(), 2);
        assert_eq!(legislators[0].display_name(), "Rep E. Norton (D)");
        assert_eq!(legislators[1].last_name, "Smith");
    }

    #[test]
    fn test_parse_locate_response_rejects_other_shapes() {
        assert!(parse_locate_response(b"[]").is_err());
        assert!(parse_locate_response(b"not json").is_err());
    }

    #[tokio::test]
    async fn test_in_zipcode_queries_with_key_and_parses() {
        let body = r#"{"results":[{"title":"Rep","first_name":"Albio","last_name":"Sires","party":"D"}]}"#;
        let (base_url, request) = serve_once("200 OK", body).await;

        let config = LookupConfig::new("k3y").with_base_url(base_url);
        let directory = SunlightDirectory::with_client(DirectClient::new(), &config);
        let legislators = directory
            .in_zipcode(&normalize_zipcode(Some("7306")))
            .await
            .unwrap();

        assert_eq!(legislators.len(), 1);
        assert_eq!(legislators[0].display_name(), "Rep A. Sires (D)");
        assert_eq!(
            request.await.unwrap(),
            "GET /legislators/locate?zip=07306&apikey=k3y HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_in_zipcode_reports_service_errors() {
        let (base_url, _request) = serve_once("403 Forbidden", "bad key").await;

        let config = LookupConfig::new("wrong").with_base_url(base_url);
        let directory = SunlightDirectory::with_client(DirectClient::new(), &config);
        let err = directory
            .in_zipcode(&normalize_zipcode(Some("20010")))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("20010"));
        assert!(format!("{err:#}").contains("403"));
    }

    #[test]
    fn test_locate_url_carries_zip() {
        let config = LookupConfig::new("key").with_base_url("https://example.org/");
        let directory = SunlightDirectory::with_client(Unreachable, &config);

        let url = directory.locate_url(&normalize_zipcode(Some("7306"))).unwrap();
        assert_eq!(url.as_str(), "https://example.org/legislators/locate?zip=07306");
    }
}
