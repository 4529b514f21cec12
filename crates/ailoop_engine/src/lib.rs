//! Content pipeline engine: credentials, HTTP, YouTube ingestion and artifact output.
mod config;
mod emit;
mod fetch;
mod harvest;
mod persist;
mod types;
mod youtube;

pub use config::{
    parse_env_pairs, ConfigError, Credentials, API_KEY_VAR, CHANNEL_ID_VAR, CONTACT_FORM_KEY_VAR,
    DEFAULT_ENV_FILE,
};
pub use emit::{
    emit_articles, emit_videos, render_article_module, render_video_module, utc_clock, Clock,
    EmitError, EmitSummary, VideoEmitOptions, ARTICLE_MODULE_PATH, VIDEO_MODULE_PATH,
};
pub use fetch::{FetchSettings, JsonFetcher, ReqwestFetcher};
pub use harvest::{harvest_channel, HarvestReport, HarvestSettings};
pub use persist::{ensure_output_dir, write_artifact, AtomicFileWriter, PersistError};
pub use types::{FailureKind, FetchError};
pub use youtube::{
    ApiError, ChannelStatistics, YouTubeClient, DEFAULT_PAGE_SIZE, YOUTUBE_API_BASE,
};
