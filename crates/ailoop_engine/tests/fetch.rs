use std::time::Duration;

use ailoop_engine::{FailureKind, FetchSettings, JsonFetcher, ReqwestFetcher};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn url(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{route}", server.uri())).unwrap()
}

#[tokio::test]
async fn fetcher_parses_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [1, 2, 3]})))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let value = fetcher.get_json(&url(&server, "/doc")).await.expect("fetch ok");
    assert_eq!(value, json!({"items": [1, 2, 3]}));
}

#[tokio::test]
async fn non_200_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quota"))
        .respond_with(ResponseTemplate::new(403).set_body_string("quotaExceeded"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.get_json(&url(&server, "/quota")).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(403));
    assert_eq!(err.message, "quotaExceeded");
    assert_eq!(err.to_string(), "HTTP 403: quotaExceeded");
}

#[tokio::test]
async fn other_success_codes_are_still_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accepted"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({})))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.get_json(&url(&server, "/accepted")).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(202));
}

#[tokio::test]
async fn invalid_json_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.get_json(&url(&server, "/broken")).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher.get_json(&url(&server, "/slow")).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[0,1,2,3,4,5]"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher.get_json(&url(&server, "/large")).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(13)
        }
    );
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
    // Nothing listens on port 1.
    let dead = Url::parse("http://127.0.0.1:1/gone").unwrap();
    let settings = FetchSettings {
        connect_timeout: Duration::from_secs(2),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher.get_json(&dead).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn non_http_scheme_is_rejected() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher
        .get_json(&Url::parse("file:///etc/passwd").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
