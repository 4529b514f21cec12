//! Content pipeline core: pure harvest state machine, codecs and article synthesis.
pub mod articles;
mod category;
mod duration;
mod effect;
mod msg;
mod state;
mod summary;
mod update;
mod video;

pub use category::{classify_title, VideoCategory, ALL_CATEGORIES_LABEL};
pub use duration::{
    display_duration, duration_seconds, parse_iso_duration, DurationError, IsoDuration,
};
pub use effect::{HarvestEffect, StopReason};
pub use msg::HarvestMsg;
pub use state::{HarvestPhase, HarvestState, SkippedVideo, DEFAULT_MAX_PAGES};
pub use summary::{category_histogram, format_count, sort_newest_first};
pub use update::update;
pub use video::{
    SearchPage, VideoDetails, VideoRecord, DESCRIPTION_PLACEHOLDER, MAX_DESCRIPTION_CHARS,
    MIN_VIDEO_SECONDS,
};
