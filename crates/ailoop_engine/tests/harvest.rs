use std::sync::{Mutex, Once};
use std::time::Duration;

use ailoop_core::StopReason;
use ailoop_engine::{
    harvest_channel, ApiError, Credentials, FailureKind, FetchError, FetchSettings,
    HarvestSettings, JsonFetcher, ReqwestFetcher,
};
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ailoop_logging::initialize_for_tests);
}

fn credentials() -> Credentials {
    Credentials {
        api_key: "TEST_KEY".into(),
        channel_id: "UC_TEST".into(),
        contact_form_key: None,
    }
}

fn search_body(ids: &[String], next: Option<&str>) -> Value {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "kind": "youtube#searchResult",
                "id": {"kind": "youtube#video", "videoId": id},
            })
        })
        .collect();
    match next {
        Some(token) => json!({"items": items, "nextPageToken": token}),
        None => json!({"items": items}),
    }
}

fn details_body(ids: &[String], duration_for: impl Fn(&str) -> &'static str) -> Value {
    let items: Vec<Value> = ids
        .iter()
        .enumerate()
        .map(|(n, id)| {
            json!({
                "id": id,
                "snippet": {
                    "title": format!("Episode {id}"),
                    "description": "",
                    "publishedAt": format!("2025-01-01T00:{:02}:00Z", n % 60),
                },
                "contentDetails": {"duration": duration_for(id)},
            })
        })
        .collect();
    json!({"items": items})
}

fn ids(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|n| format!("vid{n:02}")).collect()
}

#[tokio::test]
async fn two_page_channel_end_to_end() {
    init_logging();
    let server = MockServer::start().await;
    let page_one = ids(0..50);
    let page_two = ids(50..60);

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("pageToken", "PAGE_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&page_two, None)))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("key", "TEST_KEY"))
        .and(query_param("channelId", "UC_TEST"))
        .and(query_param("part", "snippet"))
        .and(query_param("type", "video"))
        .and(query_param("order", "date"))
        .and(query_param("maxResults", "50"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(search_body(&page_one, Some("PAGE_2"))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", page_one.join(",").as_str()))
        .and(query_param("part", "snippet,contentDetails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_body(&page_one, |id| {
            if id == "vid07" {
                "PT30S"
            } else {
                "PT5M"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", page_two.join(",").as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(details_body(&page_two, |_| "PT1H2M3S")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let settings = HarvestSettings {
        api_base: server.uri(),
        page_delay: Duration::from_millis(10),
        ..HarvestSettings::default()
    };

    let report = harvest_channel(&fetcher, &credentials(), &settings)
        .await
        .expect("harvest ok");

    assert_eq!(report.videos.len(), 59);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.pages, 2);
    assert_eq!(report.pauses, 1);
    assert_eq!(report.stop_reason, StopReason::LastPage);
    assert!(report.videos.iter().all(|v| v.id != "vid07"));
    assert_eq!(report.videos[0].id, "vid00");
    assert_eq!(report.videos[58].duration, "1:02:03");
    assert_eq!(report.videos[0].description, "Learn more about this topic");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
}

#[tokio::test]
async fn details_failure_aborts_the_run() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&ids(0..3), None)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend error"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let settings = HarvestSettings {
        api_base: server.uri(),
        ..HarvestSettings::default()
    };
    let err = harvest_channel(&fetcher, &credentials(), &settings)
        .await
        .unwrap_err();

    match err {
        ApiError::Fetch { endpoint, source } => {
            assert_eq!(endpoint, "videos");
            assert_eq!(source.kind, FailureKind::HttpStatus(500));
            assert_eq!(source.message, "backend error");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_payload_is_reported_with_endpoint() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": "nope"})))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let settings = HarvestSettings {
        api_base: server.uri(),
        ..HarvestSettings::default()
    };
    let err = harvest_channel(&fetcher, &credentials(), &settings)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Payload { endpoint: "search", .. }));
}

/// Answers every search with one video and a next-page token, forever.
#[derive(Default)]
struct EndlessChannel {
    requests: Mutex<Vec<Url>>,
}

impl EndlessChannel {
    fn endpoints(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|url| url.path().trim_start_matches('/').to_string())
            .collect()
    }
}

#[async_trait::async_trait]
impl JsonFetcher for EndlessChannel {
    async fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(url.clone());
        let n = requests.len();
        if url.path().ends_with("/search") {
            Ok(search_body(&[format!("v{n}")], Some("MORE")))
        } else {
            let id = url
                .query_pairs()
                .find(|(k, _)| k == "id")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default();
            Ok(details_body(&[id], |_| "PT2M"))
        }
    }
}

#[tokio::test]
async fn pagination_stops_at_ten_pages() {
    init_logging();
    let fetcher = EndlessChannel::default();
    let settings = HarvestSettings {
        api_base: "https://api.invalid/youtube/v3".into(),
        page_delay: Duration::ZERO,
        ..HarvestSettings::default()
    };

    let report = harvest_channel(&fetcher, &credentials(), &settings)
        .await
        .expect("harvest ok");

    assert_eq!(report.pages, 10);
    assert_eq!(report.pauses, 9);
    assert_eq!(report.videos.len(), 10);
    assert_eq!(report.stop_reason, StopReason::PageLimit);

    let endpoints = fetcher.endpoints();
    assert_eq!(endpoints.len(), 20);
    let expected: Vec<String> = (0..10)
        .flat_map(|_| ["youtube/v3/search".to_string(), "youtube/v3/videos".to_string()])
        .collect();
    assert_eq!(endpoints, expected);
}

#[tokio::test]
async fn empty_first_page_yields_empty_harvest() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"pageInfo": {"totalResults": 0}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let settings = HarvestSettings {
        api_base: server.uri(),
        ..HarvestSettings::default()
    };
    let report = harvest_channel(&fetcher, &credentials(), &settings)
        .await
        .unwrap();

    assert!(report.videos.is_empty());
    assert_eq!(report.stop_reason, StopReason::NoResults);
    assert_eq!(report.pauses, 0);
}

#[tokio::test]
async fn search_items_without_video_ids_do_not_end_the_run() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("pageToken", "PAGE_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&ids(0..2), None)))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"kind": "youtube#searchResult", "id": {"kind": "youtube#channel"}}],
            "nextPageToken": "PAGE_2",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(details_body(&ids(0..2), |_| "PT3M")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let settings = HarvestSettings {
        api_base: server.uri(),
        page_delay: Duration::from_millis(10),
        ..HarvestSettings::default()
    };
    let report = harvest_channel(&fetcher, &credentials(), &settings)
        .await
        .unwrap();

    assert_eq!(report.pages, 2);
    assert_eq!(report.videos.len(), 2);
    assert_eq!(report.stop_reason, StopReason::LastPage);
}
