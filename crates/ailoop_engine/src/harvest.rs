use std::time::Duration;

use ailoop_core::{
    update, HarvestEffect, HarvestMsg, HarvestState, StopReason, VideoRecord, DEFAULT_MAX_PAGES,
};
use ailoop_logging::{pipeline_debug, pipeline_info};

use crate::config::Credentials;
use crate::fetch::JsonFetcher;
use crate::youtube::{ApiError, YouTubeClient, DEFAULT_PAGE_SIZE, YOUTUBE_API_BASE};

#[derive(Debug, Clone)]
pub struct HarvestSettings {
    pub api_base: String,
    pub max_pages: u32,
    pub page_size: u32,
    /// Courtesy delay between search pages.
    pub page_delay: Duration,
}

impl Default for HarvestSettings {
    fn default() -> Self {
        Self {
            api_base: YOUTUBE_API_BASE.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            page_size: DEFAULT_PAGE_SIZE,
            page_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestReport {
    /// In feed order; sorting happens at emit time.
    pub videos: Vec<VideoRecord>,
    pub pages: u32,
    pub skipped: usize,
    pub pauses: u32,
    pub stop_reason: StopReason,
}

/// Runs one harvest to completion.
///
/// Any fetch or payload error aborts the run and drops whatever was
/// accumulated so far.
pub async fn harvest_channel(
    fetcher: &dyn JsonFetcher,
    credentials: &Credentials,
    settings: &HarvestSettings,
) -> Result<HarvestReport, ApiError> {
    let client = YouTubeClient::new(fetcher, credentials)
        .with_api_base(settings.api_base.clone())
        .with_page_size(settings.page_size);

    pipeline_info!("Fetching videos from channel {}", credentials.channel_id);
    let (mut state, mut pending) = update(HarvestState::new(settings.max_pages), HarvestMsg::Start);

    while !pending.is_empty() {
        let mut next_msgs = Vec::new();
        for effect in pending.drain(..) {
            match effect {
                HarvestEffect::FetchSearchPage { page, page_token } => {
                    pipeline_info!("Fetching page {page}...");
                    let search = client.search_page(page_token.as_deref()).await?;
                    pipeline_debug!(
                        "Page {page}: {} ids, next token {}",
                        search.video_ids.len(),
                        search.next_page_token.is_some()
                    );
                    next_msgs.push(HarvestMsg::SearchPageLoaded(search));
                }
                HarvestEffect::FetchVideoDetails { page, video_ids } => {
                    pipeline_debug!(
                        "Fetching details for {} videos on page {page}",
                        video_ids.len()
                    );
                    let details = client.video_details(&video_ids).await?;
                    next_msgs.push(HarvestMsg::DetailsLoaded(details));
                }
                HarvestEffect::NoteSkipped { title, seconds } => {
                    pipeline_info!("Skipping short: {title} ({seconds}s)");
                }
                HarvestEffect::Pause => {
                    tokio::time::sleep(settings.page_delay).await;
                    next_msgs.push(HarvestMsg::PauseElapsed);
                }
                HarvestEffect::Finished { reason } => match reason {
                    StopReason::NoResults => pipeline_info!("No more videos found"),
                    StopReason::LastPage => pipeline_debug!("Reached the last page"),
                    StopReason::PageLimit => {
                        pipeline_info!("Stopping at the {} page limit", settings.max_pages)
                    }
                },
            }
        }
        for msg in next_msgs {
            let (next, effects) = update(state, msg);
            state = next;
            pending.extend(effects);
        }
    }

    let stop_reason = state.stop_reason().unwrap_or(StopReason::LastPage);
    let pages = state.pages_fetched();
    let skipped = state.skipped().len();
    let pauses = state.pauses();
    let videos = state.into_videos();
    pipeline_info!("Found {} videos (excluding shorts)", videos.len());

    Ok(HarvestReport {
        videos,
        pages,
        skipped,
        pauses,
        stop_reason,
    })
}
