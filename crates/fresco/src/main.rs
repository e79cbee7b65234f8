//! Fresco CLI binary.
//!
//! Command-line access to the studio:
//! - Create a story for a character and theme
//! - Inspect the current story
//! - Generate scene images and video clips

use clap::Parser;
use fresco_core::AssetKind;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands};

    // API keys come from the environment, optionally via a .env file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let service = cli::build_service(&cli.data_dir)?;

    match cli.command {
        Commands::Story {
            character,
            theme,
            image,
        } => {
            cli::create_story(&service, &character, &theme, image).await?;
        }

        Commands::Show => {
            cli::show_story(&service).await?;
        }

        Commands::Image { scene, style } => {
            cli::generate_scene_asset(&service, AssetKind::Image, scene, &style).await?;
        }

        Commands::ImageAll { style } => {
            cli::generate_all_assets(&service, AssetKind::Image, &style).await?;
        }

        Commands::Video { scene } => {
            cli::generate_scene_asset(&service, AssetKind::Video, scene, "default").await?;
        }
    }

    Ok(())
}
