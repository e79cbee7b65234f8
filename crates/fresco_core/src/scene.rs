//! Story document and scene record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel value for optional free-text scene attributes that were absent
/// from the model response. Never a parse failure.
pub const UNKNOWN_ATTRIBUTE: &str = "unknown";

/// Fallback duration in seconds for scenes with an unparsable `video_time`.
pub const DEFAULT_SCENE_DURATION: f32 = 2.0;

/// Which kind of generated asset a scene slot holds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// A generated still image
    #[display("image")]
    Image,
    /// A generated video clip
    #[display("video")]
    Video,
}

/// One unit of the story: a discrete narrative beat with visual, camera and
/// timing attributes.
///
/// # Examples
///
/// ```
/// use fresco_core::{AssetKind, SceneRecord};
///
/// let mut scene = SceneRecord::new(1, "Hero jumps.");
/// assert_eq!(scene.camera, "unknown");
/// assert_eq!(scene.duration_seconds, 2.0);
///
/// scene.set_asset_url(AssetKind::Image, "https://cdn.example/1.png");
/// assert!(scene.asset_url(AssetKind::Image).is_some());
/// assert!(scene.asset_url(AssetKind::Video).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    /// 1-based scene number, unique within a document, defines ordering
    pub scene: u32,
    /// Narrative content of the scene; never empty after extraction
    pub description: String,
    /// Camera direction, or the "unknown" sentinel when absent
    #[serde(default = "unknown_attribute")]
    pub camera: String,
    /// Character pose, or the "unknown" sentinel when absent
    #[serde(default = "unknown_attribute")]
    pub pose: String,
    /// Facial expression, or the "unknown" sentinel when absent
    #[serde(default = "unknown_attribute")]
    pub face: String,
    /// Scene duration in seconds; falls back to 2.0 when unparsable
    #[serde(default = "default_duration")]
    pub duration_seconds: f32,
    /// Prompt used to drive image generation; when `None`, a prompt is
    /// synthesized from the description and character profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    /// Short voice-over annotation; "none" and absent are equivalent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_over_text: Option<String>,
    /// Short sound-effect annotation; "none" and absent are equivalent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_effect_cue: Option<String>,
    /// Short on-screen-text annotation; "none" and absent are equivalent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_screen_text: Option<String>,
    /// Resolved image URL; absent until an image generation run succeeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Resolved video URL; absent until a video generation run succeeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

fn unknown_attribute() -> String {
    UNKNOWN_ATTRIBUTE.to_string()
}

fn default_duration() -> f32 {
    DEFAULT_SCENE_DURATION
}

impl SceneRecord {
    /// Create a scene with the given number and description; all optional
    /// attributes take their documented defaults.
    pub fn new(scene: u32, description: impl Into<String>) -> Self {
        Self {
            scene,
            description: description.into(),
            camera: unknown_attribute(),
            pose: unknown_attribute(),
            face: unknown_attribute(),
            duration_seconds: DEFAULT_SCENE_DURATION,
            image_prompt: None,
            voice_over_text: None,
            sound_effect_cue: None,
            on_screen_text: None,
            image_url: None,
            video_url: None,
        }
    }

    /// Resolved asset URL for the given generation kind, if any.
    pub fn asset_url(&self, kind: AssetKind) -> Option<&str> {
        match kind {
            AssetKind::Image => self.image_url.as_deref(),
            AssetKind::Video => self.video_url.as_deref(),
        }
    }

    /// Set the asset URL slot for the given generation kind.
    ///
    /// Idempotently overwritable: a later successful run replaces the URL.
    pub fn set_asset_url(&mut self, kind: AssetKind, url: impl Into<String>) {
        let url = url.into();
        match kind {
            AssetKind::Image => self.image_url = Some(url),
            AssetKind::Video => self.video_url = Some(url),
        }
    }
}

/// A complete extracted story: summary plus ordered scenes.
///
/// A document is created atomically by a successful extraction and is the
/// sole unit of persistence. `SceneRecord` asset URLs are the only fields
/// mutated post-creation, always through a read-modify-write of the whole
/// document.
///
/// # Examples
///
/// ```
/// use fresco_core::{SceneRecord, StoryDocument};
///
/// let doc = StoryDocument::new(
///     "gefo",
///     "a day at the beach",
///     "A hero rises.",
///     vec![SceneRecord::new(1, "Hero jumps.")],
/// );
/// assert!(doc.scene(1).is_some());
/// assert!(doc.scene(2).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryDocument {
    /// Identifier selecting a known character profile
    pub character: String,
    /// The original user prompt, immutable once created
    pub theme: String,
    /// Narrative summary; never empty after extraction
    pub summary: String,
    /// Ordered scenes with unique, dense 1-based scene numbers
    pub scenes: Vec<SceneRecord>,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
}

impl StoryDocument {
    /// Create a document stamped with the current time.
    pub fn new(
        character: impl Into<String>,
        theme: impl Into<String>,
        summary: impl Into<String>,
        scenes: Vec<SceneRecord>,
    ) -> Self {
        Self {
            character: character.into(),
            theme: theme.into(),
            summary: summary.into(),
            scenes,
            created_at: Utc::now(),
        }
    }

    /// Look up a scene by its scene number.
    pub fn scene(&self, scene_id: u32) -> Option<&SceneRecord> {
        self.scenes.iter().find(|s| s.scene == scene_id)
    }

    /// Mutable scene lookup, used for asset URL patching.
    pub fn scene_mut(&mut self, scene_id: u32) -> Option<&mut SceneRecord> {
        self.scenes.iter_mut().find(|s| s.scene == scene_id)
    }

    /// Sum of scene durations in seconds.
    ///
    /// The configured total (around 60 seconds) is a soft target; deviation
    /// is a warning at extraction time, not an error.
    pub fn total_duration(&self) -> f32 {
        self.scenes.iter().map(|s| s.duration_seconds).sum()
    }
}
