use std::path::PathBuf;

use ailoop_core::DEFAULT_MAX_PAGES;
use ailoop_engine::{ARTICLE_MODULE_PATH, DEFAULT_ENV_FILE, VIDEO_MODULE_PATH};
use clap::{Parser, Subcommand};

/// Content generators for the AI Loop website.
#[derive(Parser, Debug)]
#[command(name = "ailoop", version)]
pub struct Cli {
    /// Log debug detail, including request paths.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Also write the log to ./ailoop.log.
    #[arg(long, global = true)]
    pub log_file: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Harvest the channel's long-form videos into the generated video module.
    FetchVideos {
        #[arg(long, default_value = DEFAULT_ENV_FILE)]
        env_file: PathBuf,
        #[arg(long, default_value = VIDEO_MODULE_PATH)]
        output: PathBuf,
        /// Upper bound on search pages requested.
        #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
        max_pages: u32,
    },
    /// Regenerate the article module from the built-in catalog.
    GenerateArticles {
        #[arg(long, default_value = ARTICLE_MODULE_PATH)]
        output: PathBuf,
    },
    /// Print subscriber, view and video counts for the channel.
    ChannelStats {
        #[arg(long, default_value = DEFAULT_ENV_FILE)]
        env_file: PathBuf,
    },
}
