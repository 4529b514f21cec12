use crate::effect::{HarvestEffect, StopReason};
use crate::msg::HarvestMsg;
use crate::state::{HarvestPhase, HarvestState, SkippedVideo};
use crate::video::{VideoDetails, VideoRecord};

/// Pure update function: applies a message to the harvest and returns the effects to run.
///
/// Messages that do not fit the current phase are ignored.
pub fn update(mut state: HarvestState, msg: HarvestMsg) -> (HarvestState, Vec<HarvestEffect>) {
    let effects = match (state.phase(), msg) {
        (HarvestPhase::Idle, HarvestMsg::Start) => vec![request_search_page(&mut state)],
        (HarvestPhase::AwaitingSearchPage, HarvestMsg::SearchPageLoaded(page)) => {
            if page.is_empty() {
                vec![finish(&mut state, StopReason::NoResults)]
            } else if page.video_ids.is_empty() {
                // Nothing to look up, but the feed may continue.
                state.hold_next_token(page.next_page_token);
                after_details(&mut state, Vec::new())
            } else {
                state.hold_next_token(page.next_page_token);
                state.set_phase(HarvestPhase::AwaitingDetails);
                vec![HarvestEffect::FetchVideoDetails {
                    page: state.pages_fetched(),
                    video_ids: page.video_ids,
                }]
            }
        }
        (HarvestPhase::AwaitingDetails, HarvestMsg::DetailsLoaded(details)) => {
            after_details(&mut state, details)
        }
        (HarvestPhase::Pausing, HarvestMsg::PauseElapsed) => {
            state.record_pause();
            vec![request_search_page(&mut state)]
        }
        _ => Vec::new(),
    };

    (state, effects)
}

/// Accumulates one page's videos, then stops or schedules the next page.
fn after_details(state: &mut HarvestState, details: Vec<VideoDetails>) -> Vec<HarvestEffect> {
    let mut effects = accumulate(state, details);
    let has_next = state.advance_cursor().is_some();
    if !has_next {
        effects.push(finish(state, StopReason::LastPage));
    } else if state.pages_fetched() >= state.max_pages() {
        effects.push(finish(state, StopReason::PageLimit));
    } else {
        state.set_phase(HarvestPhase::Pausing);
        effects.push(HarvestEffect::Pause);
    }
    effects
}

fn request_search_page(state: &mut HarvestState) -> HarvestEffect {
    let (page, page_token) = state.begin_page();
    state.set_phase(HarvestPhase::AwaitingSearchPage);
    HarvestEffect::FetchSearchPage { page, page_token }
}

fn finish(state: &mut HarvestState, reason: StopReason) -> HarvestEffect {
    state.set_phase(HarvestPhase::Done(reason));
    HarvestEffect::Finished { reason }
}

fn accumulate(state: &mut HarvestState, details: Vec<VideoDetails>) -> Vec<HarvestEffect> {
    let mut effects = Vec::new();
    for video in details {
        let seconds = video.duration_seconds();
        if video.is_short() {
            effects.push(HarvestEffect::NoteSkipped {
                title: video.title.clone(),
                seconds,
            });
            state.push_skipped(SkippedVideo {
                title: video.title,
                seconds,
            });
        } else {
            state.push_video(VideoRecord::from_details(&video));
        }
    }
    effects
}
