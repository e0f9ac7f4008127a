use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use svc_utils::{MetadataConfig, MetadataSource, SvcError, VideoMetadataClient, VideoRequest};

const VIDEO_URL: &str = "https://example.com/video.mp4";

fn test_config(server: &MockServer) -> MetadataConfig {
    MetadataConfig {
        endpoint: server.url("/metadata"),
        api_key: Some("dummy".to_string()),
        api_key_env: "SVC_UTILS_TEST_UNUSED_KEY".to_string(),
        timeout_seconds: 5,
        retry_attempts: 3,
        retry_delay_ms: 0,
    }
}

#[tokio::test]
async fn test_fetch_metadata_success() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/metadata")
            .query_param("url", VIDEO_URL)
            .header("Authorization", "Bearer dummy");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"title": "test"}));
    });

    let client = VideoMetadataClient::new(test_config(&server)).unwrap();
    let request = VideoRequest::new(VIDEO_URL).unwrap();
    let data = client.fetch_metadata(&request).await.unwrap();

    assert_eq!(data, json!({"title": "test"}));
    api_mock.assert();
}

#[tokio::test]
async fn test_fetch_metadata_key_from_env() {
    std::env::set_var("SVC_UTILS_TEST_ENV_API_KEY", "env-secret");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/metadata")
            .header("Authorization", "Bearer env-secret");
        then.status(200).json_body(json!({"title": "from env"}));
    });

    let config = MetadataConfig {
        api_key: None,
        api_key_env: "SVC_UTILS_TEST_ENV_API_KEY".to_string(),
        ..test_config(&server)
    };
    let client = VideoMetadataClient::new(config).unwrap();
    let request = VideoRequest::new(VIDEO_URL).unwrap();
    let result = client.fetch_metadata(&request).await;

    std::env::remove_var("SVC_UTILS_TEST_ENV_API_KEY");

    assert_eq!(result.unwrap(), json!({"title": "from env"}));
    api_mock.assert();
}

#[tokio::test]
async fn test_fetch_metadata_missing_key() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/metadata");
        then.status(200).json_body(json!({}));
    });

    let config = MetadataConfig {
        api_key: None,
        api_key_env: "SVC_UTILS_TEST_NEVER_SET_KEY".to_string(),
        ..test_config(&server)
    };
    let client = VideoMetadataClient::new(config).unwrap();
    let request = VideoRequest::new(VIDEO_URL).unwrap();

    let err = client.fetch_metadata(&request).await.unwrap_err();
    assert!(matches!(err, SvcError::MissingApiKey));
    assert_eq!(err.to_string(), "Missing API key");
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_fetch_metadata_retries_then_fails() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/metadata");
        then.status(500);
    });

    let client = VideoMetadataClient::new(test_config(&server)).unwrap();
    let request = VideoRequest::new(VIDEO_URL).unwrap();

    let err = client.fetch_metadata(&request).await.unwrap_err();
    match &err {
        SvcError::ApiRequestFailed { attempts, source } => {
            assert_eq!(*attempts, 3);
            assert_eq!(source.status().map(|s| s.as_u16()), Some(500));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.to_string(), "API request failed");
    api_mock.assert_hits(3);
}

#[tokio::test]
async fn test_fetch_metadata_single_attempt() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/metadata");
        then.status(404);
    });

    let config = MetadataConfig {
        retry_attempts: 1,
        ..test_config(&server)
    };
    let client = VideoMetadataClient::new(config).unwrap();
    let request = VideoRequest::new(VIDEO_URL).unwrap();

    assert!(client.fetch_metadata(&request).await.is_err());
    api_mock.assert_hits(1);
}

#[tokio::test]
async fn test_malformed_body_is_not_retried() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/metadata");
        then.status(200).body("not json");
    });

    let client = VideoMetadataClient::new(test_config(&server)).unwrap();
    let request = VideoRequest::new(VIDEO_URL).unwrap();

    let err = client.fetch_metadata(&request).await.unwrap_err();
    assert!(matches!(err, SvcError::SerializationError(_)));
    api_mock.assert_hits(1);
}

#[tokio::test]
async fn test_client_as_metadata_source() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/metadata");
        then.status(200).json_body(json!({"title": "trait", "duration": 12}));
    });

    let source: Box<dyn MetadataSource> = Box::new(VideoMetadataClient::new(test_config(&server))?);
    let request = VideoRequest::new(VIDEO_URL)?;

    let data = source.fetch_metadata(&request).await?;
    assert_eq!(data["duration"], json!(12));
    Ok(())
}
