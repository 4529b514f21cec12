use std::fmt;

use serde::Serialize;

/// Display bucket for a harvested video.
///
/// Declaration order is classification precedence: a title is tested against
/// each category's keywords in the order of [`VideoCategory::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VideoCategory {
    #[serde(rename = "ChatGPT Tutorials")]
    ChatGpt,
    #[serde(rename = "Google Gemini Tutorials")]
    GoogleGemini,
    #[serde(rename = "AI Roadmap")]
    AiRoadmap,
    #[serde(rename = "Video Generation Tools")]
    VideoGeneration,
    #[serde(rename = "Image Generation Tools")]
    ImageGeneration,
    #[serde(rename = "Productivity Tutorials")]
    Productivity,
}

/// Sentinel shown first in the generated category filter list.
pub const ALL_CATEGORIES_LABEL: &str = "All";

impl VideoCategory {
    pub const ALL: [VideoCategory; 6] = [
        VideoCategory::ChatGpt,
        VideoCategory::GoogleGemini,
        VideoCategory::AiRoadmap,
        VideoCategory::VideoGeneration,
        VideoCategory::ImageGeneration,
        VideoCategory::Productivity,
    ];

    /// Returned when no keyword matches.
    pub const FALLBACK: VideoCategory = VideoCategory::AiRoadmap;

    pub fn label(self) -> &'static str {
        match self {
            VideoCategory::ChatGpt => "ChatGPT Tutorials",
            VideoCategory::GoogleGemini => "Google Gemini Tutorials",
            VideoCategory::AiRoadmap => "AI Roadmap",
            VideoCategory::VideoGeneration => "Video Generation Tools",
            VideoCategory::ImageGeneration => "Image Generation Tools",
            VideoCategory::Productivity => "Productivity Tutorials",
        }
    }

    /// Lowercase substrings that place a title in this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            VideoCategory::ChatGpt => &["chatgpt", "gpt", "openai", "chat gpt"],
            VideoCategory::GoogleGemini => &["gemini", "google", "bard", "firebase", "veo"],
            VideoCategory::AiRoadmap => {
                &["roadmap", "guide", "learn", "beginner", "tutorial", "course"]
            }
            VideoCategory::VideoGeneration => {
                &["video", "veo", "sora", "gen-2", "runway", "heygen", "synthesis"]
            }
            VideoCategory::ImageGeneration => &[
                "image",
                "dall-e",
                "midjourney",
                "stable diffusion",
                "imagen",
                "picture",
                "art",
            ],
            VideoCategory::Productivity => {
                &["productivity", "workflow", "automation", "tool", "app", "efficiency"]
            }
        }
    }

    /// Labels for the generated filter list, `"All"` first.
    pub fn filter_labels() -> Vec<&'static str> {
        std::iter::once(ALL_CATEGORIES_LABEL)
            .chain(Self::ALL.iter().map(|c| c.label()))
            .collect()
    }
}

impl fmt::Display for VideoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First category whose keyword list has a substring match in the lowercased title.
pub fn classify_title(title: &str) -> VideoCategory {
    let lowered = title.to_lowercase();
    VideoCategory::ALL
        .into_iter()
        .find(|category| {
            category
                .keywords()
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
        .unwrap_or(VideoCategory::FALLBACK)
}
