use ailoop_core::{category_histogram, sort_newest_first, VideoCategory, VideoRecord};

fn record(id: &str, published_at: &str, category: VideoCategory) -> VideoRecord {
    VideoRecord {
        id: id.to_string(),
        title: id.to_string(),
        description: String::new(),
        youtube_id: id.to_string(),
        category,
        duration: "1:00".to_string(),
        published_at: published_at.to_string(),
    }
}

fn ids(videos: &[VideoRecord]) -> Vec<&str> {
    videos.iter().map(|v| v.id.as_str()).collect()
}

#[test]
fn newest_first() {
    let mut videos = vec![
        record("old", "2024-01-01T00:00:00Z", VideoCategory::AiRoadmap),
        record("new", "2025-06-01T12:00:00Z", VideoCategory::AiRoadmap),
        record("mid", "2024-09-15T08:30:00Z", VideoCategory::AiRoadmap),
    ];
    sort_newest_first(&mut videos);
    assert_eq!(ids(&videos), vec!["new", "mid", "old"]);
}

#[test]
fn equal_timestamps_keep_input_order() {
    let mut videos = vec![
        record("a", "2025-01-01T00:00:00Z", VideoCategory::AiRoadmap),
        record("b", "2025-02-01T00:00:00Z", VideoCategory::AiRoadmap),
        record("c", "2025-01-01T00:00:00Z", VideoCategory::AiRoadmap),
        record("d", "2025-01-01T00:00:00Z", VideoCategory::AiRoadmap),
    ];
    sort_newest_first(&mut videos);
    assert_eq!(ids(&videos), vec!["b", "a", "c", "d"]);
}

#[test]
fn offsets_are_compared_as_instants() {
    let mut videos = vec![
        record("utc", "2025-01-01T10:00:00Z", VideoCategory::AiRoadmap),
        // 09:30 UTC
        record("plus_two", "2025-01-01T11:30:00+02:00", VideoCategory::AiRoadmap),
    ];
    sort_newest_first(&mut videos);
    assert_eq!(ids(&videos), vec!["utc", "plus_two"]);
}

#[test]
fn unparseable_timestamps_sink_to_the_end() {
    let mut videos = vec![
        record("junk1", "yesterday", VideoCategory::AiRoadmap),
        record("ok", "2020-01-01T00:00:00Z", VideoCategory::AiRoadmap),
        record("junk2", "", VideoCategory::AiRoadmap),
    ];
    sort_newest_first(&mut videos);
    assert_eq!(ids(&videos), vec!["ok", "junk1", "junk2"]);
}

#[test]
fn histogram_is_sorted_by_count_with_stable_ties() {
    let ts = "2025-01-01T00:00:00Z";
    let videos = vec![
        record("1", ts, VideoCategory::Productivity),
        record("2", ts, VideoCategory::ChatGpt),
        record("3", ts, VideoCategory::ChatGpt),
        record("4", ts, VideoCategory::ImageGeneration),
        record("5", ts, VideoCategory::ChatGpt),
        record("6", ts, VideoCategory::ImageGeneration),
    ];
    assert_eq!(
        category_histogram(&videos),
        vec![
            (VideoCategory::ChatGpt, 3),
            (VideoCategory::ImageGeneration, 2),
            (VideoCategory::Productivity, 1),
        ]
    );

    let tied = vec![
        record("1", ts, VideoCategory::VideoGeneration),
        record("2", ts, VideoCategory::GoogleGemini),
    ];
    assert_eq!(
        category_histogram(&tied),
        vec![
            (VideoCategory::VideoGeneration, 1),
            (VideoCategory::GoogleGemini, 1),
        ]
    );
    assert!(category_histogram(&[]).is_empty());
}
