//! Entry point for the case viewer.

use anyhow::{Context, Result};
use case_feed::CaseFeed;
use case_viewer::{app::Viewer, config::Config};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

const PAGE_TITLE: &str = "Covid Cases 3D Visualisation";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();
    let config = Config::parse();
    tracing::info!(config = ?config, "Viewer starting with configuration");

    let feed = CaseFeed::new(config.feed())?;
    let mut viewer = Viewer::new(config.width, config.height, config.seed);

    // A failed fetch ends the process; nothing is written.
    let outcome = viewer.run(&feed).await?;

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating {}", config.out_dir.display()))?;

    let scene_path = config.out_dir.join("scene.json");
    let scene_json = viewer.scene.to_json().context("serializing scene")?;
    std::fs::write(&scene_path, scene_json)
        .with_context(|| format!("writing {}", scene_path.display()))?;

    let page_path = config.out_dir.join("index.html");
    std::fs::write(&page_path, viewer.page.to_document(PAGE_TITLE))
        .with_context(|| format!("writing {}", page_path.display()))?;

    tracing::info!(
        date = %outcome.date,
        count = outcome.count,
        markers = outcome.markers,
        scene = %scene_path.display(),
        page = %page_path.display(),
        "Viewer output written"
    );
    Ok(())
}
