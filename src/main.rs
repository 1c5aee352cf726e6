mod builder;
mod config;
mod errors;
mod languages;
mod logging;
mod models;
mod output;
mod pagination;
mod validation;
mod youtube;

use std::path::Path;
use builder::ChannelTreeBuilder;
use config::{ApiSettings, ChannelConfig};
use errors::ChefError;
use youtube::YouTubeClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ChefError> {
    let _guard = logging::init_tracing();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "channel build failed");
        return Err(e);
    }

    Ok(())
}

async fn run() -> Result<(), ChefError> {
    let config = ChannelConfig::from_env()?;
    let settings = ApiSettings::from_env()?;

    let client = YouTubeClient::new(reqwest::Client::new(), &settings.api_key, &settings.base_url);
    let builder = ChannelTreeBuilder::new(&client, &config);

    tracing::info!(channel_id = %config.youtube_channel_id, "building channel tree");
    let (tree, diagnostics) = builder.build(&config.youtube_channel_id).await?;

    validation::validate_tree(&tree)?;

    tracing::info!(
        topics = tree.topics.len(),
        videos = tree.video_count(),
        diagnostics = diagnostics.len(),
        "channel tree ready"
    );

    output::write_tree(&tree, settings.output_path.as_deref().map(Path::new))?;

    Ok(())
}
