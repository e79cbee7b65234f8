//! Character profiles and the injectable character registry.
//!
//! Character profiles drive prompt construction: tone and personality shape
//! the system prompt, while the visual style feeds synthesized image
//! prompts. The registry replaces hardcoded character branches so new
//! characters can be added without code changes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A character the studio can build stories around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    /// Display name used inside prompts
    pub name: String,
    /// Speaking tone, e.g. "upbeat and playful"
    pub tone: String,
    /// Personality sketch fed to the model
    pub personality: String,
    /// Visual theme, e.g. "flame-themed action hero"
    pub visual_style: String,
    /// Movement style for animation guidance
    pub animation_style: String,
    /// Default pose when none is specified
    pub default_pose: String,
    /// Facial expressions the character is drawn with
    pub face_expressions: Vec<String>,
    /// Example cutscene block in the line grammar, used as a few-shot hint
    pub sample_cutscene: String,
}

/// Injectable registry mapping character ids to profiles.
///
/// # Examples
///
/// ```
/// use fresco_core::CharacterRegistry;
///
/// let registry = CharacterRegistry::with_defaults();
/// assert!(registry.get("gefo").is_some());
/// assert!(registry.get("nobody").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CharacterRegistry {
    profiles: HashMap<String, CharacterProfile>,
}

impl CharacterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the stock characters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert(
            "gefo",
            CharacterProfile {
                name: "gefo".to_string(),
                tone: "upbeat, cheerful and slightly exaggerated".to_string(),
                personality: "curious, strong sense of justice, a bit clumsy".to_string(),
                visual_style: "flame-themed action hero".to_string(),
                animation_style: "fast, exaggerated motion with dynamic poses".to_string(),
                default_pose: "hands on waist, confident stance".to_string(),
                face_expressions: vec![
                    "grinning".to_string(),
                    "determined".to_string(),
                    "shocked".to_string(),
                    "smirking".to_string(),
                ],
                sample_cutscene: "\
1. gefo bursts into the scene with a heroic pose.\n\
  camera: dynamic wide-angle\n\
  pose: arms raised, legs apart\n\
  face: confident\n\
  video_time: 2.0\n\
\n\
2. gefo spots danger in the distance and clenches his fist.\n\
  camera: over-the-shoulder\n\
  pose: preparing to leap\n\
  face: serious\n\
  video_time: 2.0\n"
                    .to_string(),
            },
        );
        registry.insert(
            "pinkcat",
            CharacterProfile {
                name: "pinkcat".to_string(),
                tone: "cute, bubbly and childlike".to_string(),
                personality: "curious and full of mischief".to_string(),
                visual_style: "pink cat costume with ribbons and whimsical props".to_string(),
                animation_style: "rhythmic motion with bouncy hops".to_string(),
                default_pose: "two hands up, playful bounce".to_string(),
                face_expressions: vec![
                    "playful".to_string(),
                    "curious".to_string(),
                    "pouting".to_string(),
                    "excited".to_string(),
                ],
                sample_cutscene: "\
1. pinkcat twirls in place, looking around curiously.\n\
  camera: medium shot\n\
  pose: arms swinging\n\
  face: playful\n\
  video_time: 1.8\n"
                    .to_string(),
            },
        );
        registry
    }

    /// Register or replace a character profile.
    pub fn insert(&mut self, id: impl Into<String>, profile: CharacterProfile) {
        self.profiles.insert(id.into(), profile);
    }

    /// Look up a profile by character id.
    pub fn get(&self, id: &str) -> Option<&CharacterProfile> {
        self.profiles.get(id)
    }

    /// Registered character ids, unordered.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}
