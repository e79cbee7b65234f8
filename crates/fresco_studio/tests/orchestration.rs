//! Submit/poll orchestration behavior against scripted backends.

mod common;

use common::FakeBackend;
use fresco_core::{AssetKind, CharacterRegistry, SceneRecord, StoryDocument, StyleCatalog};
use fresco_error::GenerationErrorKind;
use fresco_interface::{JobPoll, JobStatus, PollPolicy};
use fresco_studio::SceneAssetOrchestrator;
use std::sync::Arc;

fn story(scene_count: u32) -> StoryDocument {
    let scenes = (1..=scene_count)
        .map(|n| SceneRecord::new(n, format!("Scene {n} happens.")))
        .collect();
    StoryDocument::new("gefo", "a canyon adventure", "A hero rises.", scenes)
}

fn orchestrator(backend: FakeBackend, max_attempts: u32) -> (Arc<FakeBackend>, SceneAssetOrchestrator) {
    let backend = Arc::new(backend);
    let orchestrator = SceneAssetOrchestrator::with_policy(
        backend.clone(),
        PollPolicy::immediate(max_attempts),
    );
    (backend, orchestrator)
}

fn running_then(terminal: JobPoll, running_polls: usize) -> Vec<JobPoll> {
    let mut polls = vec![JobPoll::running(); running_polls];
    polls.push(terminal);
    polls
}

#[tokio::test]
async fn job_completing_on_the_last_attempt_succeeds() {
    let backend = FakeBackend::new(
        AssetKind::Image,
        [running_then(JobPoll::complete("https://cdn/img-1.png"), 9)],
    );
    let (backend, orchestrator) = orchestrator(backend, 10);
    let registry = CharacterRegistry::with_defaults();
    let profile = registry.get("gefo").unwrap();
    let styles = StyleCatalog::with_defaults();

    let url = orchestrator
        .generate_for_scene(&story(1), 1, profile, styles.resolve("simple cartoon"))
        .await
        .unwrap();

    assert_eq!(url, "https://cdn/img-1.png");
    assert_eq!(backend.submit_count(), 1);
    assert_eq!(backend.poll_count(), 10);
}

#[tokio::test]
async fn job_still_running_after_the_attempt_ceiling_times_out() {
    let backend = FakeBackend::new(AssetKind::Image, [vec![JobPoll::running()]]);
    let (backend, orchestrator) = orchestrator(backend, 10);
    let registry = CharacterRegistry::with_defaults();
    let profile = registry.get("gefo").unwrap();
    let styles = StyleCatalog::with_defaults();

    let err = orchestrator
        .generate_for_scene(&story(1), 1, profile, styles.resolve("default"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind,
        GenerationErrorKind::GenerationTimeout { attempts: 10 }
    ));
    assert_eq!(backend.poll_count(), 10);
}

#[tokio::test]
async fn provider_failure_carries_the_reason() {
    let backend = FakeBackend::new(
        AssetKind::Image,
        [running_then(JobPoll::failed("content filter"), 2)],
    );
    let (_, orchestrator) = orchestrator(backend, 10);
    let registry = CharacterRegistry::with_defaults();
    let profile = registry.get("gefo").unwrap();
    let styles = StyleCatalog::with_defaults();

    let err = orchestrator
        .generate_for_scene(&story(1), 1, profile, styles.resolve("default"))
        .await
        .unwrap_err();

    assert!(matches!(
        &err.kind,
        GenerationErrorKind::GenerationFailed(reason) if reason == "content filter"
    ));
}

#[tokio::test]
async fn unrecognized_status_consumes_an_attempt_without_aborting() {
    let backend = FakeBackend::new(
        AssetKind::Image,
        [vec![
            JobPoll {
                status: JobStatus::Unknown("QUEUED_V2".to_string()),
                asset_url: None,
                failure_reason: None,
            },
            JobPoll::complete("https://cdn/img.png"),
        ]],
    );
    let (backend, orchestrator) = orchestrator(backend, 10);
    let registry = CharacterRegistry::with_defaults();
    let profile = registry.get("gefo").unwrap();
    let styles = StyleCatalog::with_defaults();

    let url = orchestrator
        .generate_for_scene(&story(1), 1, profile, styles.resolve("default"))
        .await
        .unwrap();

    assert_eq!(url, "https://cdn/img.png");
    assert_eq!(backend.poll_count(), 2);
}

#[tokio::test]
async fn unknown_scene_fails_before_any_backend_call() {
    let backend = FakeBackend::new(AssetKind::Image, Vec::<Vec<JobPoll>>::new());
    let (backend, orchestrator) = orchestrator(backend, 10);
    let registry = CharacterRegistry::with_defaults();
    let profile = registry.get("gefo").unwrap();
    let styles = StyleCatalog::with_defaults();

    let err = orchestrator
        .generate_for_scene(&story(3), 99, profile, styles.resolve("default"))
        .await
        .unwrap_err();

    assert!(matches!(err.kind, GenerationErrorKind::SceneNotFound(99)));
    assert_eq!(backend.submit_count(), 0);
    assert_eq!(backend.poll_count(), 0);
}

#[tokio::test]
async fn batch_continues_past_a_failing_scene() {
    let backend = FakeBackend::new(
        AssetKind::Image,
        [
            vec![JobPoll::complete("https://cdn/img-1.png")],
            running_then(JobPoll::failed("content filter"), 1),
            vec![JobPoll::complete("https://cdn/img-3.png")],
        ],
    );
    let (backend, orchestrator) = orchestrator(backend, 10);
    let registry = CharacterRegistry::with_defaults();
    let profile = registry.get("gefo").unwrap();
    let styles = StyleCatalog::with_defaults();

    let outcomes = orchestrator
        .generate_all(&story(3), profile, styles.resolve("simple cartoon"))
        .await;

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].scene, 1);
    assert_eq!(outcomes[0].result.as_deref().unwrap(), "https://cdn/img-1.png");
    assert!(matches!(
        outcomes[1].result.as_ref().unwrap_err().kind,
        GenerationErrorKind::GenerationFailed(_)
    ));
    assert_eq!(outcomes[2].result.as_deref().unwrap(), "https://cdn/img-3.png");
    assert_eq!(backend.submit_count(), 3);
}

#[tokio::test]
async fn malformed_poll_observation_is_treated_as_still_running() {
    let backend = FakeBackend::new(
        AssetKind::Image,
        [vec![JobPoll::complete("https://cdn/img.png")]],
    )
    .with_poll_errors([GenerationErrorKind::MalformedResponse(
        "garbled provider body".to_string(),
    )]);
    let (backend, orchestrator) = orchestrator(backend, 10);
    let registry = CharacterRegistry::with_defaults();
    let profile = registry.get("gefo").unwrap();
    let styles = StyleCatalog::with_defaults();

    let url = orchestrator
        .generate_for_scene(&story(1), 1, profile, styles.resolve("default"))
        .await
        .unwrap();

    assert_eq!(url, "https://cdn/img.png");
    assert_eq!(backend.poll_count(), 2);
}

#[tokio::test]
async fn malformed_polls_still_count_toward_the_ceiling() {
    let backend = FakeBackend::new(AssetKind::Image, [vec![JobPoll::running()]])
        .with_poll_errors(vec![
            GenerationErrorKind::MalformedResponse("garbled provider body".to_string());
            10
        ]);
    let (backend, orchestrator) = orchestrator(backend, 10);
    let registry = CharacterRegistry::with_defaults();
    let profile = registry.get("gefo").unwrap();
    let styles = StyleCatalog::with_defaults();

    let err = orchestrator
        .generate_for_scene(&story(1), 1, profile, styles.resolve("default"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind,
        GenerationErrorKind::GenerationTimeout { attempts: 10 }
    ));
    assert_eq!(backend.poll_count(), 10);
}

#[tokio::test]
async fn complete_without_a_url_keeps_polling() {
    let backend = FakeBackend::new(
        AssetKind::Image,
        [vec![
            JobPoll {
                status: JobStatus::Complete,
                asset_url: None,
                failure_reason: None,
            },
            JobPoll::complete("https://cdn/late.png"),
        ]],
    );
    let (_, orchestrator) = orchestrator(backend, 10);
    let registry = CharacterRegistry::with_defaults();
    let profile = registry.get("gefo").unwrap();
    let styles = StyleCatalog::with_defaults();

    let url = orchestrator
        .generate_for_scene(&story(1), 1, profile, styles.resolve("default"))
        .await
        .unwrap();
    assert_eq!(url, "https://cdn/late.png");
}
