//! End-to-end story service behavior with fake collaborators.

mod common;

use common::{FakeBackend, FakeDriver};
use fresco_core::AssetKind;
use fresco_error::{
    ConfigErrorKind, ExtractionErrorKind, FrescoErrorKind, GenerationErrorKind, StoreErrorKind,
};
use fresco_interface::{JobPoll, PollPolicy, StoryStore};
use fresco_store::MemoryStore;
use fresco_studio::{FileDiagnostics, SceneAssetOrchestrator, StoryService};
use std::sync::Arc;

const STORY_JSON: &str = r#"{
    "summary": "A hero rises.",
    "cutscenes": [
        {"scene": 1, "description": "Hero jumps over the canyon.", "camera": "wide", "video_time": 1.5},
        {"scene": 2, "description": "Hero lands safely.", "image_prompt": "hero landing, dust cloud"}
    ]
}"#;

struct Harness {
    driver: Arc<FakeDriver>,
    store: MemoryStore,
    image_backend: Arc<FakeBackend>,
    service: StoryService,
}

fn harness(responses: &[&str], image_jobs: Vec<Vec<JobPoll>>) -> Harness {
    let driver = Arc::new(FakeDriver::with_responses(responses.iter().copied()));
    let store = MemoryStore::new();
    let image_backend = Arc::new(FakeBackend::new(AssetKind::Image, image_jobs));
    let video_backend = Arc::new(FakeBackend::rejecting(AssetKind::Video));
    let service = StoryService::new(
        driver.clone(),
        Arc::new(store.clone()),
        SceneAssetOrchestrator::with_policy(image_backend.clone(), PollPolicy::immediate(10)),
        SceneAssetOrchestrator::with_policy(video_backend, PollPolicy::immediate(10)),
    );
    Harness {
        driver,
        store,
        image_backend,
        service,
    }
}

#[tokio::test]
async fn create_story_extracts_and_persists() {
    let h = harness(&[STORY_JSON], vec![]);
    let story = h
        .service
        .create_story("gefo", "a canyon adventure", None)
        .await
        .unwrap();

    assert_eq!(story.character, "gefo");
    assert_eq!(story.theme, "a canyon adventure");
    assert_eq!(story.scenes.len(), 2);
    assert_eq!(h.driver.call_count(), 1);

    let persisted = h.store.load().await.unwrap().unwrap();
    assert_eq!(persisted.summary, "A hero rises.");
}

#[tokio::test]
async fn unknown_character_fails_without_invoking_the_model() {
    let h = harness(&[STORY_JSON], vec![]);
    let err = h
        .service
        .create_story("robo", "a canyon adventure", None)
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        FrescoErrorKind::Config(e)
            if matches!(&e.kind, ConfigErrorKind::UnknownCharacter(id) if id.as_str() == "robo")
    ));
    assert_eq!(h.driver.call_count(), 0);
    assert!(h.store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn refusals_surface_as_model_refused() {
    let h = harness(&["I'm sorry, I can't write that story."], vec![]);
    let err = h
        .service
        .create_story("gefo", "something disallowed", None)
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        FrescoErrorKind::Extraction(e) if matches!(e.kind, ExtractionErrorKind::ModelRefused)
    ));
    assert!(h.store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn unparsable_responses_are_recorded_for_diagnosis() {
    let dir = tempfile::tempdir().unwrap();
    let h = harness(&["total nonsense with no story in it"], vec![]);
    let service = h.service.with_diagnostics(FileDiagnostics::new(dir.path()));

    let err = service
        .create_story("gefo", "a canyon adventure", None)
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        FrescoErrorKind::Extraction(e)
            if matches!(e.kind, ExtractionErrorKind::UnparsableResponse { .. })
    ));
    let recorded: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(recorded.len(), 1);
}

#[tokio::test]
async fn scene_asset_url_is_persisted_into_the_story() {
    let h = harness(
        &[STORY_JSON],
        vec![vec![JobPoll::complete("https://cdn/img-1.png")]],
    );
    h.service
        .create_story("gefo", "a canyon adventure", None)
        .await
        .unwrap();

    let url = h
        .service
        .generate_scene_asset(AssetKind::Image, 1, "simple cartoon")
        .await
        .unwrap();
    assert_eq!(url, "https://cdn/img-1.png");

    let persisted = h.store.load().await.unwrap().unwrap();
    assert_eq!(
        persisted.scene(1).unwrap().asset_url(AssetKind::Image),
        Some("https://cdn/img-1.png")
    );
    assert!(persisted.scene(2).unwrap().asset_url(AssetKind::Image).is_none());
}

#[tokio::test]
async fn batch_persists_successes_despite_failures() {
    let h = harness(
        &[STORY_JSON],
        vec![
            vec![JobPoll::complete("https://cdn/img-1.png")],
            vec![JobPoll::failed("content filter")],
        ],
    );
    h.service
        .create_story("gefo", "a canyon adventure", None)
        .await
        .unwrap();

    let outcomes = h
        .service
        .generate_all_assets(AssetKind::Image, "simple cartoon")
        .await
        .unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].result.is_ok());
    assert!(outcomes[1].result.is_err());
    assert_eq!(h.image_backend.submit_count(), 2);

    let persisted = h.store.load().await.unwrap().unwrap();
    assert_eq!(
        persisted.scene(1).unwrap().asset_url(AssetKind::Image),
        Some("https://cdn/img-1.png")
    );
    assert!(persisted.scene(2).unwrap().asset_url(AssetKind::Image).is_none());
}

#[tokio::test]
async fn video_generation_reports_the_missing_backend() {
    let h = harness(&[STORY_JSON], vec![]);
    h.service
        .create_story("gefo", "a canyon adventure", None)
        .await
        .unwrap();

    let err = h
        .service
        .generate_scene_asset(AssetKind::Video, 1, "default")
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        FrescoErrorKind::Generation(e)
            if matches!(e.kind, GenerationErrorKind::SubmissionRejected(_))
    ));
}

#[tokio::test]
async fn asset_generation_without_a_story_is_rejected() {
    let h = harness(&[], vec![]);
    let err = h
        .service
        .generate_scene_asset(AssetKind::Image, 1, "default")
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        FrescoErrorKind::Store(e) if matches!(e.kind, StoreErrorKind::NoCurrentStory)
    ));
    assert_eq!(h.image_backend.submit_count(), 0);
}
