//! The extraction engine: classification, grammar dispatch, validation.

use crate::{json_grammar, line_grammar};
use fresco_core::{DEFAULT_SCENE_DURATION, SceneRecord, StoryDocument};
use fresco_error::{ExtractionError, ExtractionErrorKind};
use tracing::{debug, warn};

/// Tunable knobs for the extraction pipeline.
///
/// The defaults match the production prompt: thirty scenes of roughly two
/// seconds each, for a minute of footage.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Number of scenes the prompt asks the model for.
    pub scene_target: usize,
    /// Duration assigned when a scene omits `video_time` or supplies a
    /// value that is not a positive number.
    pub fallback_duration: f32,
    /// Soft target for the summed scene durations, in seconds.
    pub target_total_duration: f32,
    /// Marker opening the summary section of the line grammar.
    pub summary_marker: String,
    /// Marker opening the cutscenes section of the line grammar.
    pub cutscenes_marker: String,
    /// Lowercased phrases that identify a policy refusal.
    pub refusal_markers: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            scene_target: 30,
            fallback_duration: DEFAULT_SCENE_DURATION,
            target_total_duration: 60.0,
            summary_marker: "\u{1F4D8} Summary:".to_string(),
            cutscenes_marker: "\u{1F3AC} Cutscenes:".to_string(),
            refusal_markers: vec!["i'm sorry".to_string(), "i cannot".to_string()],
        }
    }
}

/// Deterministic free-text to [`StoryDocument`] extraction.
///
/// # Examples
///
/// ```
/// use fresco_extract::ExtractionEngine;
///
/// let engine = ExtractionEngine::default();
/// let raw = r#"{"summary": "A hero rises.", "cutscenes": [
///     {"scene": 1, "description": "Hero jumps.", "video_time": 1.5}
/// ]}"#;
/// let story = engine.extract(raw, "gefo", "a canyon adventure").unwrap();
/// assert_eq!(story.scenes.len(), 1);
/// assert_eq!(story.scenes[0].scene, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractionEngine {
    config: ExtractionConfig,
}

impl ExtractionEngine {
    /// Build an engine with explicit configuration.
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract a validated story document from a raw model response.
    ///
    /// Classification order:
    /// 1. refusals, reported as [`ExtractionErrorKind::ModelRefused`];
    /// 2. the structured grammar, when a `{`..`}` span is present;
    /// 3. the line grammar, when either section marker is present, with
    ///    its typed errors propagated as-is;
    /// 4. otherwise [`ExtractionErrorKind::UnparsableResponse`], carrying
    ///    the verbatim raw text.
    pub fn extract(
        &self,
        raw: &str,
        character: &str,
        theme: &str,
    ) -> Result<StoryDocument, ExtractionError> {
        if self.is_refusal(raw) {
            return Err(ExtractionError::new(ExtractionErrorKind::ModelRefused));
        }

        let parsed = match json_grammar::parse(raw, self.config.fallback_duration) {
            Some(parsed) => parsed,
            None if line_grammar::has_markers(
                raw,
                &self.config.summary_marker,
                &self.config.cutscenes_marker,
            ) =>
            {
                debug!("structured grammar failed, falling back to line grammar");
                line_grammar::parse(
                    raw,
                    &self.config.summary_marker,
                    &self.config.cutscenes_marker,
                    self.config.fallback_duration,
                )?
            }
            None => {
                return Err(ExtractionError::new(
                    ExtractionErrorKind::UnparsableResponse {
                        raw: raw.to_string(),
                    },
                ));
            }
        };

        let (summary, mut scenes) = parsed;
        renumber(&mut scenes);

        let story = StoryDocument::new(character, theme, summary, scenes);
        self.check_duration(&story);
        if story.scenes.len() != self.config.scene_target {
            debug!(
                got = story.scenes.len(),
                target = self.config.scene_target,
                "scene count differs from prompt target"
            );
        }
        Ok(story)
    }

    /// A refusal is a response that contains a refusal phrase and offers no
    /// structured content: neither a JSON object span nor a section marker.
    /// Responses that carry a story alongside an apology, or dialogue that
    /// happens to contain a refusal phrase, still get a parse attempt.
    fn is_refusal(&self, raw: &str) -> bool {
        if json_grammar::candidate_span(raw).is_some()
            || line_grammar::has_markers(
                raw,
                &self.config.summary_marker,
                &self.config.cutscenes_marker,
            )
        {
            return false;
        }
        let lowered = raw.to_lowercase();
        self.config.refusal_markers.iter().any(|m| lowered.contains(m))
    }

    fn check_duration(&self, story: &StoryDocument) {
        let total = story.total_duration();
        let target = self.config.target_total_duration;
        if (total - target).abs() > target / 6.0 {
            warn!(
                total_seconds = total,
                target_seconds = target,
                "story duration is far from target"
            );
        }
    }
}

/// Scene numbers become dense 1-based positions, overriding whatever the
/// model wrote.
fn renumber(scenes: &mut [SceneRecord]) {
    for (index, scene) in scenes.iter_mut().enumerate() {
        scene.scene = index as u32 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresco_core::UNKNOWN_ATTRIBUTE;

    fn extract(raw: &str) -> Result<StoryDocument, ExtractionError> {
        ExtractionEngine::default().extract(raw, "gefo", "a canyon adventure")
    }

    #[test]
    fn structured_response_with_defects_extracts() {
        let raw = "Here you go!\n{summary: \u{201C}A hero rises.\u{201D}, cutscenes: [\n  {scene: 7, description: 'Hero jumps', camera: 'wide', video_time: '1.5'},\n  {scene: 9, description: 'Hero lands'}\n]}";
        let story = extract(raw).unwrap();
        assert_eq!(story.summary, "A hero rises.");
        assert_eq!(story.scenes.len(), 2);
        // Model numbering is discarded in favor of position.
        assert_eq!(story.scenes[0].scene, 1);
        assert_eq!(story.scenes[1].scene, 2);
        assert_eq!(story.scenes[0].camera, "wide");
        assert_eq!(story.scenes[0].duration_seconds, 1.5);
        assert_eq!(story.scenes[1].camera, UNKNOWN_ATTRIBUTE);
        assert_eq!(story.scenes[1].duration_seconds, 2.0);
    }

    #[test]
    fn line_grammar_response_extracts() {
        let raw = "\u{1F4D8} Summary: A hero rises.\n\n\u{1F3AC} Cutscenes:\n1. Hero jumps over the canyon.\ncamera: wide shot\nvideo_time: 1.5\n2. Hero lands safely.";
        let story = extract(raw).unwrap();
        assert_eq!(story.summary, "A hero rises.");
        assert_eq!(story.scenes.len(), 2);
        assert_eq!(story.scenes[0].camera, "wide shot");
        assert_eq!(story.scenes[1].scene, 2);
    }

    #[test]
    fn refusal_without_payload_is_classified() {
        let err = extract("I'm sorry, but I can't help with that request.").unwrap_err();
        assert!(matches!(err.kind, ExtractionErrorKind::ModelRefused));
    }

    #[test]
    fn refusal_phrase_in_dialogue_does_not_mask_a_marker_story() {
        let raw = "\u{1F4D8} Summary: A hero doubts, then rises.\n\n\u{1F3AC} Cutscenes:\n1. Hero whispers \"I cannot give up now\".\nface: determined";
        let story = extract(raw).unwrap();
        assert_eq!(story.scenes.len(), 1);
        assert_eq!(story.scenes[0].face, "determined");
    }

    #[test]
    fn apology_wrapped_story_still_parses() {
        let raw = "I'm sorry for the earlier confusion. {\"summary\": \"A tale\", \"cutscenes\": [{\"description\": \"Hero jumps.\"}]}";
        let story = extract(raw).unwrap();
        assert_eq!(story.summary, "A tale");
    }

    #[test]
    fn marker_bearing_garbage_reports_section_errors() {
        let raw = "\u{1F4D8} Summary: A hero rises.\nno cutscenes follow";
        let err = extract(raw).unwrap_err();
        assert!(matches!(
            &err.kind,
            ExtractionErrorKind::MissingSection(section) if section.as_str() == "cutscenes"
        ));
    }

    #[test]
    fn unrecognizable_text_preserves_the_raw_response() {
        let raw = "complete nonsense with no grammar at all";
        let err = extract(raw).unwrap_err();
        assert_eq!(err.raw_text(), Some(raw));
    }

    #[test]
    fn broken_json_with_markers_falls_back_to_line_grammar() {
        let raw = "\u{1F4D8} Summary: A hero rises.\n\n\u{1F3AC} Cutscenes:\n1. Hero jumps {mid-sentence brace}.\n2. Hero lands.";
        let story = extract(raw).unwrap();
        assert_eq!(story.scenes.len(), 2);
        assert_eq!(story.scenes[0].description, "Hero jumps {mid-sentence brace}.");
    }

    #[test]
    fn unparsable_video_time_falls_back_without_touching_siblings() {
        let raw = "\u{1F4D8} Summary:\nA hero rises.\n\u{1F3AC} Cutscenes:\n1. Hero jumps.\n  camera: wide\n  video_time: two\n";
        let story = extract(raw).unwrap();
        assert_eq!(story.summary, "A hero rises.");
        assert_eq!(story.scenes.len(), 1);
        let scene = &story.scenes[0];
        assert_eq!(scene.scene, 1);
        assert_eq!(scene.description, "Hero jumps.");
        assert_eq!(scene.camera, "wide");
        assert_eq!(scene.duration_seconds, 2.0);
    }

    #[test]
    fn duration_totals_come_from_scene_times() {
        let raw = r#"{"summary": "A tale", "cutscenes": [
            {"description": "one", "video_time": 2.5},
            {"description": "two"}
        ]}"#;
        let story = extract(raw).unwrap();
        assert_eq!(story.total_duration(), 4.5);
    }
}
