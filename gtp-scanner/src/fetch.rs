use crate::error::Result;
use reqwest::Client;
use tracing::debug;

/// Page-fetch collaborator: topic URL in, raw markup out.
///
/// The walker is generic over this so the traversal state machine can be
/// exercised against scripted pages in tests.
pub trait PageFetch {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches article markup over HTTP.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("gtp/0.1 (https://github.com/gtp-rs/gtp)")
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl PageFetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalkError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_page_text() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Topic"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string("<html><p>hello</p></html>"),
            )
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new();
        let markup = fetcher
            .fetch(&format!("{}/wiki/Topic", mock_server.uri()))
            .await
            .unwrap();
        assert!(markup.contains("<p>hello</p>"));
    }

    #[tokio::test]
    async fn non_success_status_is_a_fetch_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new();
        let result = fetcher
            .fetch(&format!("{}/wiki/Missing", mock_server.uri()))
            .await;
        assert!(matches!(result, Err(WalkError::Http(_))));
    }
}
