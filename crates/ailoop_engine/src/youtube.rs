//! YouTube Data API v3: `search`, `videos` and `channels` endpoints.
use ailoop_core::{SearchPage, VideoDetails};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::config::Credentials;
use crate::fetch::JsonFetcher;
use crate::FetchError;

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_PAGE_SIZE: u32 = 50;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Fetch {
        endpoint: &'static str,
        #[source]
        source: FetchError,
    },
    #[error("unexpected {endpoint} payload: {source}")]
    Payload {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid api base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("channel {0} not found")]
    ChannelNotFound(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    snippet: VideoSnippet,
    #[serde(default)]
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    published_at: String,
}

#[derive(Debug, Default, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: String,
}

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
struct ChannelItem {
    statistics: StatisticsWire,
}

/// Counts arrive as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatisticsWire {
    subscriber_count: Option<String>,
    view_count: Option<String>,
    video_count: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelStatistics {
    pub subscribers: u64,
    pub views: u64,
    pub videos: u64,
}

/// Builds endpoint URLs for one channel and decodes their payloads.
pub struct YouTubeClient<'a> {
    fetcher: &'a dyn JsonFetcher,
    credentials: &'a Credentials,
    api_base: String,
    page_size: u32,
}

impl<'a> YouTubeClient<'a> {
    pub fn new(fetcher: &'a dyn JsonFetcher, credentials: &'a Credentials) -> Self {
        Self {
            fetcher,
            credentials,
            api_base: YOUTUBE_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    fn endpoint(&self, name: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let base = format!("{}/{name}", self.api_base.trim_end_matches('/'));
        Ok(Url::parse_with_params(&base, params)?)
    }

    pub fn search_url(&self, page_token: Option<&str>) -> Result<Url, ApiError> {
        let page_size = self.page_size.to_string();
        let mut params = vec![
            ("key", self.credentials.api_key.as_str()),
            ("channelId", self.credentials.channel_id.as_str()),
            ("part", "snippet"),
            ("type", "video"),
            ("order", "date"),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = page_token.filter(|t| !t.is_empty()) {
            params.push(("pageToken", token));
        }
        self.endpoint("search", &params)
    }

    pub fn videos_url(&self, video_ids: &[String]) -> Result<Url, ApiError> {
        let ids = video_ids.join(",");
        self.endpoint(
            "videos",
            &[
                ("key", self.credentials.api_key.as_str()),
                ("id", ids.as_str()),
                ("part", "snippet,contentDetails"),
            ],
        )
    }

    pub fn channels_url(&self) -> Result<Url, ApiError> {
        self.endpoint(
            "channels",
            &[
                ("key", self.credentials.api_key.as_str()),
                ("id", self.credentials.channel_id.as_str()),
                ("part", "statistics"),
            ],
        )
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: Url,
    ) -> Result<T, ApiError> {
        let value = self
            .fetcher
            .get_json(&url)
            .await
            .map_err(|source| ApiError::Fetch { endpoint, source })?;
        serde_json::from_value(value).map_err(|source| ApiError::Payload { endpoint, source })
    }

    /// One page of the channel's videos, newest first.
    pub async fn search_page(&self, page_token: Option<&str>) -> Result<SearchPage, ApiError> {
        let response: SearchListResponse = self.get("search", self.search_url(page_token)?).await?;
        let item_count = response.items.len();
        let video_ids: Vec<String> = response
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();
        Ok(SearchPage {
            items_without_id: item_count - video_ids.len(),
            video_ids,
            next_page_token: response.next_page_token,
        })
    }

    pub async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoDetails>, ApiError> {
        let response: VideoListResponse = self.get("videos", self.videos_url(video_ids)?).await?;
        Ok(response
            .items
            .into_iter()
            .map(|item| VideoDetails {
                id: item.id,
                title: item.snippet.title,
                description: item.snippet.description,
                published_at: item.snippet.published_at,
                duration: item.content_details.duration,
            })
            .collect())
    }

    pub async fn channel_statistics(&self) -> Result<ChannelStatistics, ApiError> {
        let response: ChannelListResponse = self.get("channels", self.channels_url()?).await?;
        let stats = response
            .items
            .into_iter()
            .next()
            .map(|item| item.statistics)
            .ok_or_else(|| ApiError::ChannelNotFound(self.credentials.channel_id.clone()))?;
        Ok(ChannelStatistics {
            subscribers: parse_count(stats.subscriber_count.as_deref()),
            views: parse_count(stats.view_count.as_deref()),
            videos: parse_count(stats.video_count.as_deref()),
        })
    }
}

fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}
