use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{NbStatsError, Result};

/// Thin JSON-over-HTTP client for the NBStats backend.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL and path are joined as-is; the base is expected to carry its
    /// own trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Base URL with each segment appended percent-encoded, so `/`, `?` and
    /// `#` inside a segment stay part of it.
    pub fn segment_url(&self, segments: &[&str]) -> Result<Url> {
        let invalid =
            |reason: String| NbStatsError::InvalidUrl(format!("{}: {reason}", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.fetch_json(self.endpoint(path)).await
    }

    /// Like [`ApiClient::get`], for paths built from untrusted segments.
    pub async fn get_segments<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.segment_url(segments)?;
        self.fetch_json(url.into()).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(NbStatsError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| NbStatsError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_matches;
    use serde_json::Value;

    #[test]
    fn test_endpoint_concatenates() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(
            client.endpoint("teams/all"),
            "https://api.example.com/teams/all"
        );
    }

    #[test]
    fn test_endpoint_does_not_normalise() {
        let client = ApiClient::new("https://api.example.com/api/v1");
        assert_eq!(
            client.endpoint("teams/all"),
            "https://api.example.com/api/v1teams/all"
        );
    }

    #[test]
    fn test_segment_url_encodes_segments() {
        let client = ApiClient::new("http://localhost:8000/api/v1/");
        let url = client.segment_url(&["teams", "LAL#x"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/teams/LAL%23x");

        let url = client.segment_url(&["teams", "a/b?c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/teams/a%2Fb%3Fc");
    }

    #[test]
    fn test_segment_url_rejects_unparseable_base() {
        let client = ApiClient::new("not a url");
        assert_matches!(
            client.segment_url(&["teams", "LAL"]),
            Err(NbStatsError::InvalidUrl(_))
        );
    }

    #[tokio::test]
    async fn test_get_decodes_json() -> anyhow::Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let client = ApiClient::new(format!("{}/", server.url()));
        let value: Value = client.get("ping").await?;

        assert_eq!(value["ok"], Value::Bool(true));
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_get_reports_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("Not found")
            .create_async()
            .await;

        let client = ApiClient::new(format!("{}/", server.url()));
        let result = client.get::<Value>("missing").await;

        assert_matches!(
            result,
            Err(NbStatsError::ApiError { status: 404, ref message }) if message == "Not found"
        );
    }

    #[tokio::test]
    async fn test_get_reports_decode_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/broken")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = ApiClient::new(format!("{}/", server.url()));
        let result = client.get::<Value>("broken").await;

        assert_matches!(result, Err(NbStatsError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_get_reports_transport_failure() {
        let client = ApiClient::new("http://127.0.0.1:1/");
        let result = client.get::<Value>("teams/all").await;

        assert_matches!(result, Err(NbStatsError::Http(_)));
    }
}
