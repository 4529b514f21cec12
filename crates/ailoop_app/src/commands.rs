use std::path::Path;

use ailoop_core::articles::{synthesize_articles, ARTICLE_CATALOG};
use ailoop_core::format_count;
use ailoop_engine::{
    emit_articles, emit_videos, harvest_channel, Credentials, FetchSettings, HarvestSettings,
    ReqwestFetcher, VideoEmitOptions, YouTubeClient,
};
use ailoop_logging::{pipeline_info, pipeline_warn};
use anyhow::Context;

use crate::cli::Command;

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::FetchVideos {
            env_file,
            output,
            max_pages,
        } => fetch_videos(&env_file, &output, max_pages).await,
        Command::GenerateArticles { output } => generate_articles(&output),
        Command::ChannelStats { env_file } => channel_stats(&env_file).await,
    }
}

fn load_credentials(env_file: &Path) -> anyhow::Result<Credentials> {
    let credentials = Credentials::load(env_file)
        .with_context(|| format!("loading credentials from {}", env_file.display()))?;
    pipeline_info!("Loaded credentials from {}", env_file.display());
    Ok(credentials)
}

async fn fetch_videos(env_file: &Path, output: &Path, max_pages: u32) -> anyhow::Result<()> {
    let credentials = load_credentials(env_file)?;
    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let settings = HarvestSettings {
        max_pages,
        ..HarvestSettings::default()
    };

    let report = harvest_channel(&fetcher, &credentials, &settings)
        .await
        .context("harvesting channel videos")?;
    pipeline_info!(
        "Harvest finished after {} pages ({:?}): {} kept, {} shorts skipped, {} pauses",
        report.pages,
        report.stop_reason,
        report.videos.len(),
        report.skipped,
        report.pauses
    );

    if report.videos.is_empty() {
        pipeline_warn!("No videos found, leaving {} untouched", output.display());
        return Ok(());
    }

    let options = VideoEmitOptions {
        output_path: output.to_path_buf(),
        ..VideoEmitOptions::default()
    };
    let summary = emit_videos(report.videos, &options).context("writing video module")?;
    pipeline_info!(
        "Wrote {} videos to {}",
        summary.count,
        summary.output_path.display()
    );
    Ok(())
}

fn generate_articles(output: &Path) -> anyhow::Result<()> {
    let articles = synthesize_articles(ARTICLE_CATALOG);
    emit_articles(&articles, output).context("writing article module")?;
    Ok(())
}

async fn channel_stats(env_file: &Path) -> anyhow::Result<()> {
    let credentials = load_credentials(env_file)?;
    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let stats = YouTubeClient::new(&fetcher, &credentials)
        .channel_statistics()
        .await
        .context("fetching channel statistics")?;

    pipeline_info!("Subscribers: {}", format_count(stats.subscribers));
    pipeline_info!("Views: {}", format_count(stats.views));
    pipeline_info!("Videos: {}", format_count(stats.videos));
    Ok(())
}
