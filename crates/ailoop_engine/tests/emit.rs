use std::fs;
use std::sync::Arc;

use ailoop_core::articles::{synthesize_articles, ARTICLE_CATALOG};
use ailoop_core::{VideoCategory, VideoRecord};
use ailoop_engine::{
    emit_articles, emit_videos, render_article_module, render_video_module, VideoEmitOptions,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn record(id: &str, category: VideoCategory, published_at: &str) -> VideoRecord {
    VideoRecord {
        id: id.to_string(),
        title: format!("Title {id}"),
        description: "Learn more about this topic".to_string(),
        youtube_id: id.to_string(),
        category,
        duration: "5:00".to_string(),
        published_at: published_at.to_string(),
    }
}

fn fixed_clock(output_path: std::path::PathBuf) -> VideoEmitOptions {
    VideoEmitOptions {
        output_path,
        generated_at: Arc::new(|| "2025-06-01T12:00:00.000Z".to_string()),
    }
}

#[test]
fn video_module_layout_is_exact() {
    let videos = vec![record("abc", VideoCategory::ChatGpt, "2025-05-01T10:00:00Z")];
    let module = render_video_module(&videos, "2025-06-01T12:00:00.000Z").unwrap();

    let expected = r#"// Auto-generated file - DO NOT EDIT MANUALLY
// Generated on: 2025-06-01T12:00:00.000Z
// Total videos: 1

export interface VideoItem {
  id: string;
  title: string;
  description: string;
  youtubeId: string;
  category: string;
  duration: string;
  publishedAt: string;
}

export const aiLoopVideos: VideoItem[] = [
  {
    "id": "abc",
    "title": "Title abc",
    "description": "Learn more about this topic",
    "youtubeId": "abc",
    "category": "ChatGPT Tutorials",
    "duration": "5:00",
    "publishedAt": "2025-05-01T10:00:00Z"
  }
];

export const videoCategories = [
  'All',
  'ChatGPT Tutorials',
  'Google Gemini Tutorials',
  'AI Roadmap',
  'Video Generation Tools',
  'Image Generation Tools',
  'Productivity Tutorials'
];
"#;
    assert_eq!(module, expected);
}

#[test]
fn empty_video_list_renders_empty_array() {
    let module = render_video_module(&[], "now").unwrap();
    assert!(module.contains("// Total videos: 0\n"));
    assert!(module.contains("export const aiLoopVideos: VideoItem[] = [];"));
}

#[test]
fn emit_sorts_newest_first_and_reports_histogram() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("src/data/aiLoopVideos.ts");
    let videos = vec![
        record("old", VideoCategory::AiRoadmap, "2024-01-01T00:00:00Z"),
        record("broken", VideoCategory::ChatGpt, "not a date"),
        record("new", VideoCategory::AiRoadmap, "2025-01-01T00:00:00Z"),
        record("mid", VideoCategory::ChatGpt, "2024-06-01T00:00:00Z"),
        record("mid2", VideoCategory::AiRoadmap, "2024-06-01T00:00:00Z"),
    ];

    let summary = emit_videos(videos, &fixed_clock(target.clone())).unwrap();

    assert_eq!(summary.output_path, target);
    assert_eq!(summary.count, 5);
    assert_eq!(
        summary.histogram,
        vec![(VideoCategory::AiRoadmap, 3), (VideoCategory::ChatGpt, 2)]
    );

    let written = fs::read_to_string(&target).unwrap();
    let order: Vec<usize> = ["\"new\"", "\"mid\"", "\"mid2\"", "\"old\"", "\"broken\""]
        .iter()
        .map(|needle| written.find(&format!("\"id\": {needle}")).unwrap())
        .collect();
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(order, sorted);
}

#[test]
fn emit_replaces_previous_artifact() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("aiLoopVideos.ts");
    fs::write(&target, "stale").unwrap();

    emit_videos(
        vec![record("x", VideoCategory::Productivity, "2025-01-01T00:00:00Z")],
        &fixed_clock(target.clone()),
    )
    .unwrap();

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("// Auto-generated file - DO NOT EDIT MANUALLY\n"));
    assert!(!written.contains("stale"));
    let leftovers = fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn article_module_has_header_and_default_export() {
    let articles = synthesize_articles(ARTICLE_CATALOG);
    let module = render_article_module(&articles).unwrap();

    assert!(module.starts_with(
        "// Auto-generated comprehensive article content\n\
         // 60 SEO-optimized articles (10 per category)\n\
         // Each article is 1200+ words with proper formatting\n\
         // Updated for 2026 with curated cover images\n\n\
         export interface FullArticle {\n"
    ));
    assert!(module.contains("export const fullArticles: FullArticle[] = [\n"));
    assert!(module.contains("\"type\": \"Guide\""));
    assert!(module.contains("\"readTime\": \"12 min read\""));
    assert!(module.ends_with("\nexport default fullArticles;\n"));
}

#[test]
fn article_module_is_byte_identical_across_runs() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("allArticles.ts");

    emit_articles(&synthesize_articles(ARTICLE_CATALOG), &target).unwrap();
    let first = fs::read(&target).unwrap();
    emit_articles(&synthesize_articles(ARTICLE_CATALOG), &target).unwrap();
    let second = fs::read(&target).unwrap();

    assert_eq!(first, second);
}
