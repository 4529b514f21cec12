use crate::video::{SearchPage, VideoDetails};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestMsg {
    /// Begin a harvest run from page one.
    Start,
    /// The runner fetched the search page it was asked for.
    SearchPageLoaded(SearchPage),
    /// The runner fetched details for the current page's video ids.
    DetailsLoaded(Vec<VideoDetails>),
    /// The inter-page pause has elapsed.
    PauseElapsed,
}
