use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::config::RelaySourceConfig;
use crate::core::rates::RawRateRow;
use crate::core::source::{FetchError, RateSource};

const DEFAULT_USER_AGENT: &str = "fxboard/1.0";

/// Reads rate rows from the HTTP relay in front of the rate sheet. The relay
/// answers a bare GET with a JSON array of `{Currency, BUY, SELL}` objects.
pub struct RelayRateSource {
    url: String,
    client: reqwest::Client,
}

impl RelayRateSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        Self::with_user_agent(url, timeout, DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(RelayRateSource {
            url: url.to_string(),
            client,
        })
    }

    pub fn from_config(config: &RelaySourceConfig) -> Result<Self> {
        Self::with_user_agent(
            &config.url,
            Duration::from_secs(config.timeout_secs),
            config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT),
        )
    }
}

#[async_trait]
impl RateSource for RelayRateSource {
    #[instrument(name = "RelayFetch", skip(self), fields(url = %self.url))]
    async fn fetch_rows(&self) -> Result<Vec<RawRateRow>, FetchError> {
        debug!("Requesting rate rows from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| {
                FetchError::transport(format!("Request error: {} for URL: {}", e, self.url))
            })?;

        if !response.status().is_success() {
            return Err(FetchError::transport(format!(
                "HTTP error: {} for URL: {}",
                response.status(),
                self.url
            )));
        }

        let text = response.text().await.map_err(|e| {
            FetchError::transport(format!("Failed to read response body from {}: {}", self.url, e))
        })?;

        let rows = RawRateRow::parse_payload(&text)?;
        debug!(rows = rows.len(), "Received rate rows");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(template)
            .expect(1)
            .mount(&mock_server)
            .await;

        mock_server
    }

    fn source_for(mock_server: &MockServer) -> RelayRateSource {
        RelayRateSource::new(
            &format!("{}/api", mock_server.uri()),
            Duration::from_secs(2),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_successful_rows_fetch() {
        let mock_response = r#"[
            {"Currency": "USD-KES", "BUY": "129.0", "SELL": "132.0"},
            {"Currency": "EUR-KES", "BUY": "140.5", "SELL": ""}
        ]"#;
        let mock_server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(mock_response)).await;

        let rows = source_for(&mock_server).fetch_rows().await.unwrap();
        assert_eq!(
            rows,
            vec![
                RawRateRow::new("USD-KES", "129.0", "132.0"),
                RawRateRow::new("EUR-KES", "140.5", ""),
            ]
        );
    }

    #[tokio::test]
    async fn test_sends_user_agent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "board-test/0.1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let config = RelaySourceConfig {
            url: mock_server.uri(),
            timeout_secs: 2,
            user_agent: Some("board-test/0.1".to_string()),
        };
        let rows = RelayRateSource::from_config(&config)
            .unwrap()
            .fetch_rows()
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_relay_error_response() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(500)
                .set_body_string(r#"{"message": "Error fetching data", "error": "quota"}"#),
        )
        .await;

        let err = source_for(&mock_server).fetch_rows().await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(
            err.to_string(),
            format!(
                "transport error: HTTP error: 500 Internal Server Error for URL: {}/api",
                mock_server.uri()
            )
        );
    }

    #[tokio::test]
    async fn test_relay_malformed_response() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(200).set_body_string(r#"{"values": [["USD-KES"]]}"#),
        )
        .await;

        let err = source_for(&mock_server).fetch_rows().await.unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("expected an array of rate objects"));
    }

    #[tokio::test]
    async fn test_relay_unreachable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api", listener.local_addr().unwrap());
        drop(listener);

        let source = RelayRateSource::new(&url, Duration::from_secs(2)).unwrap();
        let err = source.fetch_rows().await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("Request error"));
    }

    #[tokio::test]
    async fn test_relay_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("[]")
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&mock_server)
            .await;

        let source = RelayRateSource::new(&mock_server.uri(), Duration::from_millis(200)).unwrap();
        let err = source.fetch_rows().await.unwrap_err();
        assert!(err.is_transport());
    }
}
