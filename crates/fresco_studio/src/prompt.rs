//! Prompt construction for story extraction and image generation.

use fresco_core::{CharacterProfile, SceneRecord};
use fresco_extract::ExtractionConfig;

/// System prompt teaching the model the story format for one character.
///
/// The response format is stated twice (JSON first, display format second)
/// because models reliably follow the last format they saw; the extractor
/// accepts either.
pub fn story_system_prompt(profile: &CharacterProfile, config: &ExtractionConfig) -> String {
    let scene_seconds = config.target_total_duration / config.scene_target as f32;
    format!(
        "You are a short-form video scriptwriter for the character \"{name}\".\n\
         Character tone: {tone}.\n\
         Personality: {personality}.\n\
         Visual style: {visual_style}.\n\
         Animation style: {animation_style}.\n\
         Default pose when unspecified: {default_pose}.\n\
         Known facial expressions: {expressions}.\n\
         \n\
         Given a theme and an optional reference image, write a story as\n\
         exactly {scene_target} cutscenes of about {scene_seconds:.1} seconds each\n\
         (about {total:.0} seconds total).\n\
         \n\
         Respond with a single raw JSON object and nothing else:\n\
         {{\"summary\": \"...\", \"cutscenes\": [{{\"scene\": 1, \"description\": \"...\",\n\
         \"camera\": \"...\", \"pose\": \"...\", \"face\": \"...\", \"video_time\": 2.0,\n\
         \"image_prompt\": \"...\", \"voice_over_text\": \"...\",\n\
         \"sound_effect_cue\": \"...\", \"on_screen_text\": \"...\"}}]}}\n\
         Use \"none\" for annotations that do not apply.\n\
         \n\
         If you cannot produce JSON, use this display format instead:\n\
         {summary_marker} <one-paragraph summary>\n\
         {cutscenes_marker}\n\
         {sample}",
        name = profile.name,
        tone = profile.tone,
        personality = profile.personality,
        visual_style = profile.visual_style,
        animation_style = profile.animation_style,
        default_pose = profile.default_pose,
        expressions = profile.face_expressions.join(", "),
        scene_target = config.scene_target,
        total = config.target_total_duration,
        summary_marker = config.summary_marker,
        cutscenes_marker = config.cutscenes_marker,
        sample = profile.sample_cutscene,
    )
}

/// User prompt wrapping the free-text theme.
pub fn story_user_prompt(theme: &str) -> String {
    format!("Theme: {theme}\nKeep the story fun, lighthearted and family-friendly.")
}

/// Resolve the image generation prompt for one scene.
///
/// An explicit `image_prompt` from the story wins; otherwise one is
/// synthesized from the scene description and the character's visual style.
pub fn resolve_image_prompt(scene: &SceneRecord, profile: &CharacterProfile) -> String {
    match &scene.image_prompt {
        Some(prompt) => prompt.clone(),
        None => format!(
            "{}, {} character, {}, cinematic lighting",
            scene.description, profile.name, profile.visual_style
        ),
    }
}
