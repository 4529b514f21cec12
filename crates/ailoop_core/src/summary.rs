use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::category::VideoCategory;
use crate::video::VideoRecord;

fn published_at(record: &VideoRecord) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&record.published_at)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Newest first. The sort is stable, and unparseable timestamps go last.
pub fn sort_newest_first(videos: &mut [VideoRecord]) {
    videos.sort_by_cached_key(|video| Reverse(published_at(video)));
}

/// Per-category counts, largest first; ties keep first-seen order.
pub fn category_histogram(videos: &[VideoRecord]) -> Vec<(VideoCategory, usize)> {
    let mut counts: Vec<(VideoCategory, usize)> = Vec::new();
    for video in videos {
        match counts.iter_mut().find(|(category, _)| *category == video.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((video.category, 1)),
        }
    }
    counts.sort_by_key(|(_, count)| Reverse(*count));
    counts
}

/// Compact subscriber/view counts: `1.2K`, `3.4M`.
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}
