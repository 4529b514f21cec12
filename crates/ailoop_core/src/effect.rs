/// Work the harvest runner must perform on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestEffect {
    FetchSearchPage {
        page: u32,
        page_token: Option<String>,
    },
    FetchVideoDetails {
        page: u32,
        video_ids: Vec<String>,
    },
    /// A short-form video was dropped; report it.
    NoteSkipped { title: String, seconds: u64 },
    /// Rate-limit courtesy delay before the next search page.
    Pause,
    Finished { reason: StopReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A search page came back without items.
    NoResults,
    /// The last search page carried no next-page token.
    LastPage,
    /// The page cap was reached while more pages were available.
    PageLimit,
}
