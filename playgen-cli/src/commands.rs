//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use playgen_core::config::PlaygenConfig;
use playgen_core::player::PlayerType;
use playgen_core::render::{RenderContext, render_document};
use playgen_core::{embed, ids};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Server {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "5000")]
        port: u16,
    },
    /// Render a player document locally without the server
    Generate {
        /// Playback library (fluidplayer, jwpl, plyr, video)
        player_type: String,
        /// Direct media URL to embed
        video_url: String,
        /// Start playback automatically
        #[arg(long)]
        autoplay: bool,
        /// Hide playback controls
        #[arg(long)]
        no_controls: bool,
        /// Emit the data-URI iframe snippet instead of the raw document
        #[arg(long)]
        embed: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Server { host, port } => start_server(host, port).await,
        Commands::Generate {
            player_type,
            video_url,
            autoplay,
            no_controls,
            embed,
        } => generate(&player_type, &video_url, autoplay, !no_controls, embed),
    }
}

async fn start_server(host: String, port: u16) -> Result<()> {
    let mut config = PlaygenConfig::from_env();
    config.server.host = host;
    config.server.port = port;
    tracing::info!(
        "starting server with base URL {}",
        config.deployment.base_url
    );

    playgen_web::run_server(config)
        .await
        .map_err(|e| anyhow::anyhow!("server failed: {e}"))
}

fn generate(
    player_type: &str,
    video_url: &str,
    autoplay: bool,
    controls: bool,
    as_embed: bool,
) -> Result<()> {
    let player_type: PlayerType = player_type
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("valid types: fluidplayer, jwpl, plyr, video")?;

    if video_url.trim().is_empty() {
        anyhow::bail!("video URL must not be empty");
    }

    let config = PlaygenConfig::from_env();
    let element_id = ids::element_id();
    let document = render_document(&RenderContext {
        player_type,
        video_url,
        autoplay,
        controls,
        element_id: &element_id,
        assets: &config.assets,
    });

    if as_embed {
        println!("{}", embed::iframe_snippet(&document));
    } else {
        println!("{document}");
    }

    Ok(())
}
