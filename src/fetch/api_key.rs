use super::HttpClient;
use async_trait::async_trait;

/// An [`HttpClient`] wrapper that appends an API key as a URL query parameter.
///
/// The key is handed in at construction; nothing is read from process-wide state.
pub struct ApiKeyParam<C> {
    pub inner: C,
    pub param_name: String,
    pub key: String,
}

impl<C> ApiKeyParam<C> {
    pub fn new(inner: C, param_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            inner,
            param_name: param_name.into(),
            key: key.into(),
        }
    }

    fn sign(&self, req: &mut reqwest::Request) {
        req.url_mut()
            .query_pairs_mut()
            .append_pair(&self.param_name, &self.key);
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for ApiKeyParam<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.sign(&mut req);
        self.inner.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_appends_key_to_existing_query() {
        let wrapper = ApiKeyParam::new((), "apikey", "s3cr3t");
        let mut req = reqwest::Request::new(
            reqwest::Method::GET,
            "https://example.org/legislators/locate?zip=20010"
                .parse()
                .unwrap(),
        );

        wrapper.sign(&mut req);

        assert_eq!(
            req.url().as_str(),
            "https://example.org/legislators/locate?zip=20010&apikey=s3cr3t"
        );
    }
}
