//! Deterministic long-form article synthesis from the fixed catalog.
mod catalog;
mod prose;

use chrono::{Days, NaiveDate};
use serde::Serialize;

pub use catalog::{ArticleCategory, ArticleTemplate, ARTICLE_CATALOG};

use prose::{BODY_SECTIONS, CONCLUSION, INTRO};

/// Every article in a category is dated this day plus its index.
pub const ARTICLE_BASE_DATE: (i32, u32, u32) = (2026, 1, 15);
pub const BODY_SECTION_COUNT: usize = BODY_SECTIONS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArticleKind {
    Guide,
    Article,
    Ebook,
}

impl ArticleKind {
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => ArticleKind::Guide,
            1 => ArticleKind::Article,
            _ => ArticleKind::Ebook,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodySection {
    pub heading: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleContent {
    pub intro: String,
    pub agenda: Vec<String>,
    pub body: Vec<BodySection>,
    pub conclusion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: ArticleKind,
    pub date: String,
    pub thumbnail: String,
    pub read_time: String,
    pub keywords: Vec<String>,
    pub meta_description: String,
    pub content: ArticleContent,
}

/// Expands every template of every category, in catalog order.
pub fn synthesize_articles(catalog: &[ArticleCategory]) -> Vec<ArticleRecord> {
    catalog
        .iter()
        .flat_map(|category| {
            category
                .templates
                .iter()
                .enumerate()
                .map(move |(index, template)| (category, index, template))
        })
        .enumerate()
        .map(|(ordinal, (category, index, template))| {
            build_article(ordinal + 1, category, index, template)
        })
        .collect()
}

fn build_article(
    sequence: usize,
    category: &ArticleCategory,
    index: usize,
    template: &ArticleTemplate,
) -> ArticleRecord {
    let primary = template.keywords.first().copied().unwrap_or(template.title);
    let secondary = template.keywords.get(1).copied().unwrap_or(primary);
    let thumbnail = if category.cover_images.is_empty() {
        String::new()
    } else {
        category.cover_images[index % category.cover_images.len()].to_string()
    };

    ArticleRecord {
        id: format!("article-{sequence:03}"),
        title: template.title.to_string(),
        description: format!(
            "Comprehensive guide to {primary}. Learn advanced techniques, best practices, real-world applications, and expert strategies for {secondary} in 2026."
        ),
        category: category.label.to_string(),
        kind: ArticleKind::for_index(index),
        date: article_date(index),
        thumbnail,
        read_time: format!("{} min read", 12 + index % 8),
        keywords: template.keywords.iter().map(|k| k.to_string()).collect(),
        meta_description: format!(
            "Complete {} guide for 2026. Master {primary} with expert strategies, practical examples, and proven techniques.",
            template.title
        ),
        content: render_content(category.label, template.title, primary),
    }
}

/// `Jan 15, 2026` shifted by `offset_days`.
pub fn article_date(offset_days: usize) -> String {
    let (year, month, day) = ARTICLE_BASE_DATE;
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|base| base.checked_add_days(Days::new(offset_days as u64)))
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

fn render_content(category: &str, title: &str, keyword: &str) -> ArticleContent {
    let fill = |text: &str| {
        text.replace("{keyword}", keyword)
            .replace("{title}", title)
            .replace("{category}", category)
    };
    let join = |paragraphs: &[&str]| {
        paragraphs
            .iter()
            .copied()
            .map(&fill)
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    let body: Vec<BodySection> = BODY_SECTIONS
        .iter()
        .map(|section| BodySection {
            heading: fill(section.heading),
            content: join(section.paragraphs),
        })
        .collect();

    ArticleContent {
        intro: join(INTRO),
        agenda: body.iter().map(|section| section.heading.clone()).collect(),
        body,
        conclusion: join(CONCLUSION),
    }
}
