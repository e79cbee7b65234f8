//! Scripted collaborator fakes shared by the studio integration tests.

// Each test binary uses a subset of these helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use fresco_core::{AssetKind, GenerateRequest, GenerateResponse, Output};
use fresco_error::{GenerationError, GenerationErrorKind, ModelError};
use fresco_interface::{GenerationBackend, GenerationRequest, JobPoll, VisionDriver};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Vision driver that replays canned responses.
pub struct FakeDriver {
    responses: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
}

impl FakeDriver {
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionDriver for FakeDriver {
    async fn generate(&self, _req: &GenerateRequest) -> Result<GenerateResponse, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let raw = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("FakeDriver ran out of scripted responses");
        Ok(GenerateResponse {
            outputs: vec![Output::Text(raw)],
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-vision"
    }
}

/// One scripted job: the polls a submission will step through.
pub type ScriptedJob = Vec<JobPoll>;

/// Generation backend that replays scripted jobs.
///
/// Each `submit` consumes the next scripted job; each `poll` consumes the
/// next observation of the active job, repeating the final one if the
/// orchestrator polls past the script.
pub struct FakeBackend {
    kind: AssetKind,
    jobs: Mutex<VecDeque<ScriptedJob>>,
    active: Mutex<VecDeque<JobPoll>>,
    poll_errors: Mutex<VecDeque<GenerationErrorKind>>,
    submits: AtomicUsize,
    polls: AtomicUsize,
    reject_submissions: bool,
}

impl FakeBackend {
    pub fn new(kind: AssetKind, jobs: impl IntoIterator<Item = ScriptedJob>) -> Self {
        Self {
            kind,
            jobs: Mutex::new(jobs.into_iter().collect()),
            active: Mutex::new(VecDeque::new()),
            poll_errors: Mutex::new(VecDeque::new()),
            submits: AtomicUsize::new(0),
            polls: AtomicUsize::new(0),
            reject_submissions: false,
        }
    }

    /// Script errors for the leading polls; once drained, polling falls
    /// through to the active job script.
    pub fn with_poll_errors(self, errors: impl IntoIterator<Item = GenerationErrorKind>) -> Self {
        *self.poll_errors.lock().unwrap() = errors.into_iter().collect();
        self
    }

    pub fn rejecting(kind: AssetKind) -> Self {
        let mut backend = Self::new(kind, Vec::<ScriptedJob>::new());
        backend.reject_submissions = true;
        backend
    }

    pub fn submit_count(&self) -> usize {
        self.submits.load(Ordering::SeqCst)
    }

    pub fn poll_count(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationBackend for FakeBackend {
    fn kind(&self) -> AssetKind {
        self.kind
    }

    async fn submit(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        let n = self.submits.fetch_add(1, Ordering::SeqCst);
        if self.reject_submissions {
            return Err(GenerationError::new(
                GenerationErrorKind::SubmissionRejected("scripted rejection".to_string()),
            ));
        }
        let job = self
            .jobs
            .lock()
            .unwrap()
            .pop_front()
            .expect("FakeBackend ran out of scripted jobs");
        *self.active.lock().unwrap() = job.into();
        Ok(format!("job-{n}"))
    }

    async fn poll(&self, _job_id: &str) -> Result<JobPoll, GenerationError> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        if let Some(kind) = self.poll_errors.lock().unwrap().pop_front() {
            return Err(GenerationError::new(kind));
        }
        let mut active = self.active.lock().unwrap();
        match active.len() {
            0 => panic!("poll with no active scripted job"),
            1 => Ok(active.front().cloned().unwrap()),
            _ => Ok(active.pop_front().unwrap()),
        }
    }
}
