//! Command-line interface for the Fresco studio.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{build_service, create_story, generate_all_assets, generate_scene_asset, show_story};
