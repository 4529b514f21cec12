use serde::Serialize;

use crate::category::{classify_title, VideoCategory};
use crate::duration::{display_duration, duration_seconds};

/// Videos shorter than this are short-form and never harvested.
pub const MIN_VIDEO_SECONDS: u64 = 60;
pub const MAX_DESCRIPTION_CHARS: usize = 150;
pub const DESCRIPTION_PLACEHOLDER: &str = "Learn more about this topic";

/// One page of channel search results, reduced to what the harvest needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    pub video_ids: Vec<String>,
    pub next_page_token: Option<String>,
    /// Result items that carried no video id.
    pub items_without_id: usize,
}

impl SearchPage {
    /// True only when the API returned no items at all.
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty() && self.items_without_id == 0
    }
}

/// Snippet and content details for a single video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetails {
    pub id: String,
    pub title: String,
    pub description: String,
    pub published_at: String,
    /// Raw ISO-8601 duration, e.g. `PT12M5S`.
    pub duration: String,
}

impl VideoDetails {
    pub fn duration_seconds(&self) -> u64 {
        duration_seconds(&self.duration)
    }

    pub fn is_short(&self) -> bool {
        self.duration_seconds() < MIN_VIDEO_SECONDS
    }
}

/// A harvested video as emitted into the generated module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub youtube_id: String,
    pub category: VideoCategory,
    pub duration: String,
    pub published_at: String,
}

impl VideoRecord {
    pub fn from_details(details: &VideoDetails) -> Self {
        Self {
            id: details.id.clone(),
            title: details.title.clone(),
            description: summarize_description(&details.description),
            youtube_id: details.id.clone(),
            category: classify_title(&details.title),
            duration: display_duration(&details.duration),
            published_at: details.published_at.clone(),
        }
    }
}

fn summarize_description(description: &str) -> String {
    let truncated: String = description.chars().take(MAX_DESCRIPTION_CHARS).collect();
    if truncated.is_empty() {
        DESCRIPTION_PLACEHOLDER.to_string()
    } else {
        truncated
    }
}
