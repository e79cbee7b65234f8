//! Structured grammar: a JSON story object embedded in prose.
//!
//! The model is instructed to respond with raw JSON, but responses are
//! frequently wrapped in explanations or markdown fences and carry the
//! quoting defects handled by [`crate::normalize`]. This grammar locates
//! the candidate object span, repairs it, and parses it leniently: unknown
//! keys are ignored and `video_time` accepts either a number or a string.

use crate::normalize::normalize_json_candidate;
use fresco_core::{SceneRecord, UNKNOWN_ATTRIBUTE};
use serde::Deserialize;

/// Lenient wire shape of a structured story response.
#[derive(Debug, Deserialize)]
struct RawStory {
    summary: String,
    #[serde(default)]
    cutscenes: Vec<RawCutscene>,
}

/// One cutscene as the model writes it. Scene numbers are accepted but
/// ignored: ordering is positional because generative numbering is
/// unreliable.
#[derive(Debug, Deserialize)]
struct RawCutscene {
    #[serde(default)]
    #[allow(dead_code)]
    scene: Option<serde_json::Value>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    camera: Option<String>,
    #[serde(default)]
    pose: Option<String>,
    #[serde(default)]
    face: Option<String>,
    #[serde(default)]
    video_time: Option<NumberOrText>,
    #[serde(default)]
    image_prompt: Option<String>,
    #[serde(default)]
    voice_over_text: Option<String>,
    #[serde(default)]
    sound_effect_cue: Option<String>,
    #[serde(default)]
    on_screen_text: Option<String>,
}

/// `video_time` arrives as `1.5` or `"1.5"` depending on the model's mood.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f32),
    Text(String),
}

impl NumberOrText {
    fn to_duration(&self, fallback: f32) -> f32 {
        match self {
            NumberOrText::Number(n) if *n > 0.0 => *n,
            NumberOrText::Number(_) => fallback,
            NumberOrText::Text(t) => t.trim().parse::<f32>().ok().filter(|n| *n > 0.0).unwrap_or(fallback),
        }
    }
}

/// Locate the candidate JSON object span: first `{` through last `}`.
pub(crate) fn candidate_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Attempt the structured grammar.
///
/// Returns `None` when no candidate span exists, when strict parsing fails
/// even after normalization, or when the parsed object would violate the
/// document invariants (empty summary or an empty scene description). The
/// caller then falls back to the line grammar.
pub(crate) fn parse(raw: &str, fallback_duration: f32) -> Option<(String, Vec<SceneRecord>)> {
    let span = candidate_span(raw)?;
    let repaired = normalize_json_candidate(span);

    let story: RawStory = match serde_json::from_str(&repaired) {
        Ok(story) => story,
        Err(e) => {
            tracing::debug!(error = %e, "structured grammar rejected candidate span");
            return None;
        }
    };

    let summary = story.summary.trim().to_string();
    if summary.is_empty() {
        tracing::debug!("structured grammar produced an empty summary");
        return None;
    }

    let mut scenes = Vec::with_capacity(story.cutscenes.len());
    for raw_scene in story.cutscenes {
        let description = raw_scene
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if description.is_empty() {
            tracing::debug!("structured grammar found a scene without a description");
            return None;
        }

        // Scene numbers are assigned positionally by the engine afterwards.
        let mut scene = SceneRecord::new(0, description);
        scene.camera = attribute_or_unknown(raw_scene.camera);
        scene.pose = attribute_or_unknown(raw_scene.pose);
        scene.face = attribute_or_unknown(raw_scene.face);
        scene.duration_seconds = raw_scene
            .video_time
            .map(|v| v.to_duration(fallback_duration))
            .unwrap_or(fallback_duration);
        scene.image_prompt = clean_optional(raw_scene.image_prompt);
        scene.voice_over_text = clean_optional(raw_scene.voice_over_text);
        scene.sound_effect_cue = clean_optional(raw_scene.sound_effect_cue);
        scene.on_screen_text = clean_optional(raw_scene.on_screen_text);
        scenes.push(scene);
    }

    if scenes.is_empty() {
        tracing::debug!("structured grammar parsed an empty cutscene list");
        return None;
    }

    Some((summary, scenes))
}

/// Absent or blank free-text attributes become the "unknown" sentinel.
pub(crate) fn attribute_or_unknown(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => UNKNOWN_ATTRIBUTE.to_string(),
    }
}

/// Optional annotations: blank and the literal "none" are equivalent to
/// absent.
pub(crate) fn clean_optional(value: Option<String>) -> Option<String> {
    let v = value?;
    let trimmed = v.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(trimmed.to_string())
    }
}
