use crate::config::settings::HttpSettings;
use crate::utils::error::{Result, StatsError};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Builds the client shared by every source in a run.
pub fn build_client(settings: &HttpSettings) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_seconds))
        .user_agent(settings.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Sends `request` and parses the body into `T` exactly once.
///
/// A non-success status is returned as [`StatsError::HttpStatus`] before the
/// body is touched; a body that does not match `T` becomes
/// [`StatsError::MalformedResponse`].
pub async fn fetch_page<T: DeserializeOwned>(request: RequestBuilder, source_name: &str) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().to_string();

    tracing::debug!(source = source_name, %url, %status, "API response received");

    if !status.is_success() {
        return Err(StatsError::HttpStatus {
            source_name: source_name.to_string(),
            status: status.as_u16(),
            url,
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| StatsError::MalformedResponse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: u32,
    }

    fn client() -> Client {
        build_client(&HttpSettings::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_page_parses_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/probe");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"value": 7}));
        });

        let probe: Probe = fetch_page(client().get(server.url("/probe")), "probe")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(probe.value, 7);
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/probe");
            then.status(500);
        });

        let result = fetch_page::<Probe>(client().get(server.url("/probe")), "probe").await;

        match result {
            Err(StatsError::HttpStatus { status, source_name, .. }) => {
                assert_eq!(status, 500);
                assert_eq!(source_name, "probe");
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_reports_missing_field() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/probe");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"other": 1}));
        });

        let result = fetch_page::<Probe>(client().get(server.url("/probe")), "probe").await;

        assert!(matches!(result, Err(StatsError::MalformedResponse { .. })));
    }

    #[tokio::test]
    async fn test_client_sends_user_agent() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/probe")
                .header("user-agent", "stats-test/1.0");
            then.status(200).json_body(serde_json::json!({"value": 1}));
        });

        let settings = HttpSettings {
            user_agent: "stats-test/1.0".to_string(),
            ..HttpSettings::default()
        };
        let client = build_client(&settings).unwrap();
        fetch_page::<Probe>(client.get(server.url("/probe")), "probe")
            .await
            .unwrap();

        api_mock.assert();
    }
}
