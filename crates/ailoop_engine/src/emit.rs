//! Generated TypeScript modules consumed by the website.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ailoop_core::articles::ArticleRecord;
use ailoop_core::{category_histogram, sort_newest_first, VideoCategory, VideoRecord};
use ailoop_logging::pipeline_info;
use chrono::{SecondsFormat, Utc};

use crate::persist::{write_artifact, PersistError};

pub const VIDEO_MODULE_PATH: &str = "src/data/aiLoopVideos.ts";
pub const ARTICLE_MODULE_PATH: &str = "src/data/allArticles.ts";

/// Supplies the `Generated on` stamp.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

pub fn utc_clock() -> Clock {
    Arc::new(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("could not serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write artifact: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Clone)]
pub struct VideoEmitOptions {
    pub output_path: PathBuf,
    pub generated_at: Clock,
}

impl Default for VideoEmitOptions {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(VIDEO_MODULE_PATH),
            generated_at: utc_clock(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    pub output_path: PathBuf,
    pub count: usize,
    pub histogram: Vec<(VideoCategory, usize)>,
}

pub fn render_video_module(
    videos: &[VideoRecord],
    generated_at: &str,
) -> Result<String, EmitError> {
    let records = serde_json::to_string_pretty(videos)?;
    let labels = VideoCategory::filter_labels()
        .iter()
        .map(|label| format!("  '{label}'"))
        .collect::<Vec<_>>()
        .join(",\n");

    Ok(format!(
        "// Auto-generated file - DO NOT EDIT MANUALLY
// Generated on: {generated_at}
// Total videos: {count}

export interface VideoItem {{
  id: string;
  title: string;
  description: string;
  youtubeId: string;
  category: string;
  duration: string;
  publishedAt: string;
}}

export const aiLoopVideos: VideoItem[] = {records};

export const videoCategories = [
{labels}
];
",
        count = videos.len(),
    ))
}

/// Sorts newest first, writes the module in one atomic step, and logs the category histogram.
pub fn emit_videos(
    mut videos: Vec<VideoRecord>,
    options: &VideoEmitOptions,
) -> Result<EmitSummary, EmitError> {
    sort_newest_first(&mut videos);
    let content = render_video_module(&videos, &(options.generated_at)())?;
    let output_path = write_artifact(&options.output_path, &content)?;
    pipeline_info!("Generated {}", output_path.display());

    let histogram = category_histogram(&videos);
    pipeline_info!("Category statistics:");
    for (category, count) in &histogram {
        pipeline_info!("   {category}: {count} videos");
    }

    Ok(EmitSummary {
        output_path,
        count: videos.len(),
        histogram,
    })
}

pub fn render_article_module(articles: &[ArticleRecord]) -> Result<String, EmitError> {
    let records = serde_json::to_string_pretty(articles)?;
    let mut categories: Vec<&str> = articles.iter().map(|a| a.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();
    Ok(format!(
        "// Auto-generated comprehensive article content
// {count} SEO-optimized articles ({per_category} per category)
// Each article is 1200+ words with proper formatting
// Updated for 2026 with curated cover images

export interface FullArticle {{
  id: string;
  title: string;
  description: string;
  category: string;
  type: 'Article' | 'Ebook' | 'Guide';
  date: string;
  thumbnail: string;
  readTime: string;
  content: {{
    intro: string;
    agenda: string[];
    body: {{
      heading: string;
      content: string;
    }}[];
    conclusion: string;
  }};
  keywords: string[];
  metaDescription: string;
}}

export const fullArticles: FullArticle[] = {records};

export default fullArticles;
",
        count = articles.len(),
        per_category = articles.len() / categories.len().max(1),
    ))
}

pub fn emit_articles(
    articles: &[ArticleRecord],
    output_path: &Path,
) -> Result<PathBuf, EmitError> {
    let content = render_article_module(articles)?;
    let written = write_artifact(output_path, &content)?;
    pipeline_info!("Generated {} articles into {}", articles.len(), written.display());
    Ok(written)
}
