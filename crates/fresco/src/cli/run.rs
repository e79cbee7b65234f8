//! CLI command handlers.

use fresco_core::AssetKind;
use fresco_models::{LeonardoClient, OpenAiVisionClient, StubVideoBackend};
use fresco_store::JsonFileStore;
use fresco_studio::{FileDiagnostics, SceneAssetOrchestrator, StoryService};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Build the production service against a data directory.
pub fn build_service(data_dir: &Path) -> Result<StoryService, Box<dyn std::error::Error>> {
    let driver = Arc::new(OpenAiVisionClient::from_env()?);
    let images = SceneAssetOrchestrator::new(Arc::new(LeonardoClient::from_env()?));
    let videos = SceneAssetOrchestrator::new(Arc::new(StubVideoBackend::new()));
    let store = Arc::new(JsonFileStore::new(data_dir));
    let service = StoryService::new(driver, store, images, videos)
        .with_diagnostics(FileDiagnostics::new(data_dir.join("diagnostics")));
    Ok(service)
}

/// Handle `fresco story`.
pub async fn create_story(
    service: &StoryService,
    character: &str,
    theme: &str,
    image: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let reference_image = match image {
        Some(path) => {
            let bytes = std::fs::read(&path)?;
            Some((Some(mime_for(&path)), bytes))
        }
        None => None,
    };

    let story = service.create_story(character, theme, reference_image).await?;
    info!(scenes = story.scenes.len(), "Story created");
    println!("{}", story.summary);
    for scene in &story.scenes {
        println!("{:>3}. {} ({:.1}s)", scene.scene, scene.description, scene.duration_seconds);
    }
    Ok(())
}

/// Handle `fresco show`.
pub async fn show_story(service: &StoryService) -> Result<(), Box<dyn std::error::Error>> {
    match service.current_story().await? {
        Some(story) => println!("{}", serde_json::to_string_pretty(&story)?),
        None => println!("No current story. Create one with `fresco story`."),
    }
    Ok(())
}

/// Handle `fresco image` and `fresco video`.
pub async fn generate_scene_asset(
    service: &StoryService,
    kind: AssetKind,
    scene: u32,
    style: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = service.generate_scene_asset(kind, scene, style).await?;
    println!("scene {scene}: {url}");
    Ok(())
}

/// Handle `fresco image-all`.
pub async fn generate_all_assets(
    service: &StoryService,
    kind: AssetKind,
    style: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let outcomes = service.generate_all_assets(kind, style).await?;
    let mut failures = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(url) => println!("scene {}: {url}", outcome.scene),
            Err(e) => {
                failures += 1;
                eprintln!("scene {}: FAILED: {e}", outcome.scene);
            }
        }
    }
    if failures > 0 {
        Err(format!("{failures} of {} scenes failed", outcomes.len()).into())
    } else {
        Ok(())
    }
}

fn mime_for(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
    .to_string()
}
