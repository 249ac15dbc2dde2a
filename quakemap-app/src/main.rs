//! Composes the earthquake map, loads both feeds and writes the scene
//! description for a renderer.

use anyhow::Context;
use clap::Parser;
use quakemap::{
    constants, core::config::FeedLoadingProfile, HttpFeedFetcher, MapBuilder, OverlayKind,
    RadiusPolicy,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quakemap-app")]
#[command(about = "Live earthquake and tectonic plate map", long_about = None)]
struct Cli {
    /// Id of the element the map renders into
    #[arg(long, default_value = "map")]
    container: String,

    /// Write the scene JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Per-request feed timeout
    #[arg(long, default_value = "15000")]
    timeout_ms: u64,

    /// Retries per feed after the first attempt
    #[arg(long, default_value = "2")]
    retries: u32,

    /// Size negative magnitudes as magnitude * 4 instead of the floor radius
    #[arg(long)]
    legacy_radius: bool,

    /// Base layer shown initially (Outdoors, Satellite or Grayscale)
    #[arg(long)]
    base_layer: Option<String>,

    /// Earthquake GeoJSON feed
    #[arg(long, env = "QUAKEMAP_EARTHQUAKE_FEED", default_value = constants::EARTHQUAKE_FEED_URL)]
    earthquake_feed: String,

    /// Plate boundary GeoJSON feed
    #[arg(long, env = "QUAKEMAP_PLATES_FEED", default_value = constants::TECTONIC_PLATES_FEED_URL)]
    plates_feed: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let policy = if cli.legacy_radius {
        RadiusPolicy::Legacy
    } else {
        RadiusPolicy::Clamped
    };
    let mut map = MapBuilder::from_env()
        .with_container(cli.container)
        .with_feed_urls(cli.earthquake_feed, cli.plates_feed)
        .with_radius_policy(policy)
        .with_feed_loading(FeedLoadingProfile::Balanced)
        .with_feed_retries(cli.timeout_ms, cli.retries)
        .build()
        .context("invalid map configuration")?;

    if let Some(name) = &cli.base_layer {
        map.select_base_layer(name)?;
    }

    let fetcher = HttpFeedFetcher::new(map.config().feed_loading.clone())
        .context("failed to create HTTP client")?;
    map.load_overlays(&fetcher).await;

    for kind in OverlayKind::ALL {
        if let Some(state) = map.overlay_state(kind) {
            match state.status_message() {
                Some(message) => log::warn!("{}: {}", kind.name(), message),
                None => log::info!("{}: all features displayed", kind.name()),
            }
        }
    }

    let scene = serde_json::to_string_pretty(&map.scene()?)?;
    match cli.output {
        Some(path) => {
            std::fs::write(&path, scene)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Scene written to {}", path.display());
        }
        None => println!("{}", scene),
    }

    Ok(())
}
