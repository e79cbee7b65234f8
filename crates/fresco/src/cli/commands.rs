//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fresco - character story generation with scene asset orchestration
#[derive(Parser, Debug)]
#[command(name = "fresco")]
#[command(about = "Character story generation with scene asset orchestration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Directory for the story file and diagnostics
    #[arg(long, global = true, default_value = "fresco-data")]
    pub data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new story, replacing the current one
    Story {
        /// Character id, e.g. "gefo" or "pinkcat"
        #[arg(long)]
        character: String,

        /// Free-text theme for the story
        #[arg(long)]
        theme: String,

        /// Optional reference image sent to the vision model
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Print the current story as JSON
    Show,

    /// Generate the image for one scene of the current story
    Image {
        /// Scene number
        #[arg(long)]
        scene: u32,

        /// Visual style name
        #[arg(long, default_value = "default")]
        style: String,
    },

    /// Generate images for every scene of the current story
    ImageAll {
        /// Visual style name
        #[arg(long, default_value = "default")]
        style: String,
    },

    /// Generate the video clip for one scene of the current story
    Video {
        /// Scene number
        #[arg(long)]
        scene: u32,
    },
}
