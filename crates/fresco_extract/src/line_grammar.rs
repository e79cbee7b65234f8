//! Fallback grammar: a marker-delimited plain-text story.
//!
//! When the structured grammar rejects a response, the same text often
//! still carries a usable story in the prompt's display format:
//!
//! ```text
//! 📘 Summary: A hero rises.
//!
//! 🎬 Cutscenes:
//! 1. Hero jumps over the canyon.
//! camera: wide shot
//! video_time: 1.5
//! 2. Hero lands safely.
//! ```
//!
//! Scene blocks are delimited by numbered lines. Within a block the first
//! line that is not key-value shaped is the description; later lines are
//! matched against the known attribute keys and anything else is ignored.

use crate::json_grammar::{attribute_or_unknown, clean_optional};
use fresco_core::SceneRecord;
use fresco_error::{ExtractionError, ExtractionErrorKind};
use regex::Regex;
use std::sync::LazyLock;

// Requires whitespace (or end of line) after the period so prose that
// opens with a decimal number, like "2.5 meters below", is not mistaken
// for a scene delimiter.
static SCENE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.(?:\s+(.*))?\s*$").unwrap());
static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(\w+):\s*(.*)$").unwrap());

/// True when either section marker appears, meaning the response is close
/// enough to this grammar that its failures should be reported as typed
/// extraction errors rather than as unparsable text.
pub(crate) fn has_markers(raw: &str, summary_marker: &str, cutscenes_marker: &str) -> bool {
    raw.contains(summary_marker) || raw.contains(cutscenes_marker)
}

/// Parse the marker-delimited format.
pub(crate) fn parse(
    raw: &str,
    summary_marker: &str,
    cutscenes_marker: &str,
    fallback_duration: f32,
) -> Result<(String, Vec<SceneRecord>), ExtractionError> {
    let summary_at = raw
        .find(summary_marker)
        .ok_or_else(|| ExtractionError::new(ExtractionErrorKind::MissingSection("summary".into())))?;
    let after_summary = &raw[summary_at + summary_marker.len()..];
    let cutscenes_at = after_summary.find(cutscenes_marker).ok_or_else(|| {
        ExtractionError::new(ExtractionErrorKind::MissingSection("cutscenes".into()))
    })?;

    let summary = after_summary[..cutscenes_at].trim().to_string();
    if summary.is_empty() {
        return Err(ExtractionError::new(ExtractionErrorKind::EmptySummary));
    }

    let body = &after_summary[cutscenes_at + cutscenes_marker.len()..];
    let scenes = parse_scene_blocks(body, fallback_duration);
    if scenes.is_empty() {
        return Err(ExtractionError::new(ExtractionErrorKind::NoScenesFound));
    }

    Ok((summary, scenes))
}

fn parse_scene_blocks(body: &str, fallback_duration: f32) -> Vec<SceneRecord> {
    let mut scenes = Vec::new();
    let mut current: Option<SceneBuilder> = None;

    for line in body.lines() {
        if let Some(caps) = SCENE_DELIMITER.captures(line) {
            if let Some(builder) = current.take() {
                if let Some(scene) = builder.build(fallback_duration) {
                    scenes.push(scene);
                }
            }
            let mut builder = SceneBuilder::default();
            if let Some(remainder) = caps.get(1) {
                let remainder = remainder.as_str().trim();
                if !remainder.is_empty() {
                    builder.description = remainder.to_string();
                }
            }
            current = Some(builder);
            continue;
        }

        // Prose before the first numbered line is ignored.
        let Some(builder) = current.as_mut() else {
            continue;
        };

        if let Some(caps) = KEY_VALUE.captures(line) {
            builder.apply(&caps[1], caps[2].trim());
        } else if builder.description.is_empty() && !line.trim().is_empty() {
            builder.description = line.trim().to_string();
        }
    }

    if let Some(builder) = current.take() {
        if let Some(scene) = builder.build(fallback_duration) {
            scenes.push(scene);
        }
    }

    scenes
}

#[derive(Debug, Default)]
struct SceneBuilder {
    description: String,
    camera: Option<String>,
    pose: Option<String>,
    face: Option<String>,
    video_time: Option<String>,
    image_prompt: Option<String>,
    voice_over_text: Option<String>,
    sound_effect_cue: Option<String>,
    on_screen_text: Option<String>,
}

impl SceneBuilder {
    /// Keys are matched case-sensitively; unknown keys are dropped.
    fn apply(&mut self, key: &str, value: &str) {
        let value = value.to_string();
        match key {
            "camera" => self.camera = Some(value),
            "pose" => self.pose = Some(value),
            "face" => self.face = Some(value),
            "video_time" => self.video_time = Some(value),
            "image_prompt" => self.image_prompt = Some(value),
            "voice_over_text" => self.voice_over_text = Some(value),
            "sound_effect_cue" => self.sound_effect_cue = Some(value),
            "on_screen_text" => self.on_screen_text = Some(value),
            _ => {}
        }
    }

    /// Blocks that never acquired a description are discarded.
    fn build(self, fallback_duration: f32) -> Option<SceneRecord> {
        if self.description.is_empty() {
            return None;
        }
        let mut scene = SceneRecord::new(0, self.description);
        scene.camera = attribute_or_unknown(self.camera);
        scene.pose = attribute_or_unknown(self.pose);
        scene.face = attribute_or_unknown(self.face);
        scene.duration_seconds = self
            .video_time
            .and_then(|v| v.trim().parse::<f32>().ok())
            .filter(|n| *n > 0.0)
            .unwrap_or(fallback_duration);
        scene.image_prompt = clean_optional(self.image_prompt);
        scene.voice_over_text = clean_optional(self.voice_over_text);
        scene.sound_effect_cue = clean_optional(self.sound_effect_cue);
        scene.on_screen_text = clean_optional(self.on_screen_text);
        Some(scene)
    }
}
