//! The story service: the studio's single entry point.

use crate::diagnostics::FileDiagnostics;
use crate::orchestrator::{SceneAssetOrchestrator, SceneOutcome};
use crate::prompt::{story_system_prompt, story_user_prompt};
use fresco_core::{
    AssetKind, CharacterProfile, CharacterRegistry, GenerateRequest, Input, MediaSource, Message,
    Role, StoryDocument, StyleCatalog,
};
use fresco_error::{ConfigError, ConfigErrorKind, FrescoResult, StoreError, StoreErrorKind};
use fresco_extract::ExtractionEngine;
use fresco_interface::{StoryStore, VisionDriver};
use std::sync::Arc;
use tracing::{info, instrument, warn};

const STORY_MAX_TOKENS: u32 = 3000;
const STORY_TEMPERATURE: f32 = 0.9;

/// Orchestrates the full story lifecycle: model invocation, extraction,
/// persistence, and per-scene asset generation.
///
/// The service holds one orchestrator per asset kind so image and video
/// backends can carry different poll policies.
pub struct StoryService {
    driver: Arc<dyn VisionDriver>,
    store: Arc<dyn StoryStore>,
    images: SceneAssetOrchestrator,
    videos: SceneAssetOrchestrator,
    engine: ExtractionEngine,
    characters: CharacterRegistry,
    styles: StyleCatalog,
    diagnostics: Option<FileDiagnostics>,
}

impl StoryService {
    /// Creates a service with the stock character registry and style
    /// catalog.
    pub fn new(
        driver: Arc<dyn VisionDriver>,
        store: Arc<dyn StoryStore>,
        images: SceneAssetOrchestrator,
        videos: SceneAssetOrchestrator,
    ) -> Self {
        Self {
            driver,
            store,
            images,
            videos,
            engine: ExtractionEngine::default(),
            characters: CharacterRegistry::with_defaults(),
            styles: StyleCatalog::with_defaults(),
            diagnostics: None,
        }
    }

    /// Replace the extraction engine.
    pub fn with_engine(mut self, engine: ExtractionEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Replace the character registry.
    pub fn with_characters(mut self, characters: CharacterRegistry) -> Self {
        self.characters = characters;
        self
    }

    /// Replace the style catalog.
    pub fn with_styles(mut self, styles: StyleCatalog) -> Self {
        self.styles = styles;
        self
    }

    /// Record unparsable model responses to disk.
    pub fn with_diagnostics(mut self, diagnostics: FileDiagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Create a story for a character and theme, replacing the current one.
    ///
    /// The reference image, when given, travels to the vision model
    /// alongside the theme. The raw model response is pushed through the
    /// extraction engine; responses neither grammar could read are recorded
    /// by the diagnostics sink before the error propagates.
    #[instrument(skip(self, theme, reference_image), fields(provider = self.driver.provider_name()))]
    pub async fn create_story(
        &self,
        character_id: &str,
        theme: &str,
        reference_image: Option<(Option<String>, Vec<u8>)>,
    ) -> FrescoResult<StoryDocument> {
        let profile = self.profile(character_id)?;

        let mut user_content = vec![Input::Text(story_user_prompt(theme))];
        if let Some((mime, bytes)) = reference_image {
            user_content.push(Input::Image {
                mime,
                source: MediaSource::Binary(bytes),
            });
        }

        let request = GenerateRequest {
            messages: vec![
                Message::text(
                    Role::System,
                    story_system_prompt(profile, self.engine.config()),
                ),
                Message {
                    role: Role::User,
                    content: user_content,
                },
            ],
            max_tokens: Some(STORY_MAX_TOKENS),
            temperature: Some(STORY_TEMPERATURE),
            model: None,
        };

        let raw = self.driver.generate(&request).await?.text();
        let story = match self.engine.extract(&raw, character_id, theme) {
            Ok(story) => story,
            Err(e) => {
                if let (Some(diagnostics), Some(raw_text)) = (&self.diagnostics, e.raw_text()) {
                    diagnostics.record(raw_text);
                }
                return Err(e.into());
            }
        };

        self.store.save(&story).await?;
        info!(scenes = story.scenes.len(), "Created and saved new story");
        Ok(story)
    }

    /// The current story, if one has been saved.
    pub async fn current_story(&self) -> FrescoResult<Option<StoryDocument>> {
        Ok(self.store.load().await?)
    }

    /// Generate one asset for one scene of the current story and persist
    /// the resolved URL into the scene record.
    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn generate_scene_asset(
        &self,
        kind: AssetKind,
        scene_id: u32,
        style_name: &str,
    ) -> FrescoResult<String> {
        let mut story = self.require_story().await?;
        let profile = self.profile(&story.character)?;
        let style = self.styles.resolve(style_name);

        let url = self
            .orchestrator(kind)
            .generate_for_scene(&story, scene_id, profile, style)
            .await?;

        if let Some(scene) = story.scene_mut(scene_id) {
            scene.set_asset_url(kind, url.clone());
        }
        self.store.save(&story).await?;
        Ok(url)
    }

    /// Generate assets for every scene of the current story, sequentially.
    ///
    /// Successful scenes get their URLs persisted even when other scenes
    /// fail; the caller receives one outcome per scene.
    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn generate_all_assets(
        &self,
        kind: AssetKind,
        style_name: &str,
    ) -> FrescoResult<Vec<SceneOutcome>> {
        let mut story = self.require_story().await?;
        let profile = self.profile(&story.character)?;
        let style = self.styles.resolve(style_name);

        let outcomes = self
            .orchestrator(kind)
            .generate_all(&story, profile, style)
            .await;

        let mut resolved = 0usize;
        for outcome in &outcomes {
            if let Ok(url) = &outcome.result {
                if let Some(scene) = story.scene_mut(outcome.scene) {
                    scene.set_asset_url(kind, url.clone());
                    resolved += 1;
                }
            }
        }
        self.store.save(&story).await?;

        if resolved < outcomes.len() {
            warn!(
                resolved,
                total = outcomes.len(),
                "Batch finished with failed scenes"
            );
        } else {
            info!(resolved, "Batch finished, all scenes resolved");
        }
        Ok(outcomes)
    }

    fn orchestrator(&self, kind: AssetKind) -> &SceneAssetOrchestrator {
        match kind {
            AssetKind::Image => &self.images,
            AssetKind::Video => &self.videos,
        }
    }

    fn profile(&self, character_id: &str) -> Result<&CharacterProfile, ConfigError> {
        self.characters.get(character_id).ok_or_else(|| {
            ConfigError::new(ConfigErrorKind::UnknownCharacter(character_id.to_string()))
        })
    }

    async fn require_story(&self) -> FrescoResult<StoryDocument> {
        self.store
            .load()
            .await?
            .ok_or_else(|| StoreError::new(StoreErrorKind::NoCurrentStory).into())
    }
}
