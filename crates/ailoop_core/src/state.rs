use crate::effect::StopReason;
use crate::video::VideoRecord;

pub const DEFAULT_MAX_PAGES: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HarvestPhase {
    #[default]
    Idle,
    AwaitingSearchPage,
    AwaitingDetails,
    Pausing,
    Done(StopReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedVideo {
    pub title: String,
    pub seconds: u64,
}

/// Accumulated state of one harvest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestState {
    phase: HarvestPhase,
    max_pages: u32,
    page: u32,
    pending_token: Option<String>,
    next_page_token: Option<String>,
    videos: Vec<VideoRecord>,
    skipped: Vec<SkippedVideo>,
    pauses: u32,
}

impl Default for HarvestState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PAGES)
    }
}

impl HarvestState {
    pub fn new(max_pages: u32) -> Self {
        Self {
            phase: HarvestPhase::Idle,
            max_pages: max_pages.max(1),
            page: 0,
            pending_token: None,
            next_page_token: None,
            videos: Vec::new(),
            skipped: Vec::new(),
            pauses: 0,
        }
    }

    pub fn phase(&self) -> HarvestPhase {
        self.phase
    }

    /// Number of search pages requested so far.
    pub fn pages_fetched(&self) -> u32 {
        self.page
    }

    pub fn pauses(&self) -> u32 {
        self.pauses
    }

    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    pub fn skipped(&self) -> &[SkippedVideo] {
        &self.skipped
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, HarvestPhase::Done(_))
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        match self.phase {
            HarvestPhase::Done(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn into_videos(self) -> Vec<VideoRecord> {
        self.videos
    }

    pub(crate) fn set_phase(&mut self, phase: HarvestPhase) {
        self.phase = phase;
    }

    pub(crate) fn max_pages(&self) -> u32 {
        self.max_pages
    }

    pub(crate) fn begin_page(&mut self) -> (u32, Option<String>) {
        self.page += 1;
        (self.page, self.next_page_token.clone())
    }

    pub(crate) fn hold_next_token(&mut self, token: Option<String>) {
        self.pending_token = token.filter(|t| !t.is_empty());
    }

    /// Promotes the token held since the search page into the cursor.
    pub(crate) fn advance_cursor(&mut self) -> Option<&str> {
        self.next_page_token = self.pending_token.take();
        self.next_page_token.as_deref()
    }

    pub(crate) fn push_video(&mut self, video: VideoRecord) {
        self.videos.push(video);
    }

    pub(crate) fn push_skipped(&mut self, skipped: SkippedVideo) {
        self.skipped.push(skipped);
    }

    pub(crate) fn record_pause(&mut self) {
        self.pauses += 1;
    }
}
