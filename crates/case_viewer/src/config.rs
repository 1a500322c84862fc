use case_feed::{FeedConfig, DEFAULT_ENDPOINT};
use clap::Parser;
use std::{path::PathBuf, time::Duration};

/// `case_viewer` - Scatters the latest England case count as a 3D point cloud.
///
/// Fetches the daily case series once, builds the point cloud and the overlay
/// panel from the most recent record, and writes the scene description and
/// the overlay page for a WebGL front end to pick up.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Full URL of the case series endpoint.
    #[arg(long, env = "CASE_FEED_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Upper bound on the fetch, in milliseconds.
    #[arg(long, env = "CASE_FEED_TIMEOUT_MS", default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Directory that receives `scene.json` and `index.html`.
    #[arg(long, env = "CASE_VIEWER_OUT_DIR", default_value = "out")]
    pub out_dir: PathBuf,

    /// Seed for marker placement. Random when absent.
    #[arg(long, env = "CASE_VIEWER_SEED")]
    pub seed: Option<u64>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}

impl Config {
    pub fn feed(&self) -> FeedConfig {
        FeedConfig {
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}
