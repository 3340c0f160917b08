//! Debounced auto-run
//!
//! [`Debouncer`] is a clock-agnostic quiet-period tracker for callers that
//! drive their own event loop. [`AutoRunner`] wraps a [`PreviewPipeline`] in a
//! tokio task that coalesces bursts of edits and runs the pipeline once the
//! buffers have been quiet for the configured interval.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{PreviewError, PreviewResult};
use crate::pipeline::{PreviewPipeline, SandboxRenderer};

/// Tracks the quiet period after the most recent edit
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    last_edit: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            last_edit: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Record an edit at `now`, restarting the quiet period
    pub fn touch(&mut self, now: Instant) {
        self.last_edit = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_edit.is_some()
    }

    /// When the pending edit becomes ready to run
    pub fn deadline(&self) -> Option<Instant> {
        self.last_edit.map(|edit| edit + self.quiet)
    }

    pub fn is_ready(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }

    /// Consume the pending edit if its quiet period has elapsed
    pub fn take_ready(&mut self, now: Instant) -> bool {
        if self.is_ready(now) {
            self.last_edit = None;
            true
        } else {
            false
        }
    }
}

#[derive(Debug)]
struct Snapshot {
    markup: String,
    style: String,
}

/// Background task applying debounced edits to a preview pipeline
pub struct AutoRunner<R> {
    sender: mpsc::UnboundedSender<Snapshot>,
    handle: JoinHandle<PreviewPipeline<R>>,
}

impl<R> AutoRunner<R>
where
    R: SandboxRenderer + Send + 'static,
{
    /// Spawn the runner on the current tokio runtime
    pub fn spawn(pipeline: PreviewPipeline<R>, quiet: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_loop(pipeline, receiver, Debouncer::new(quiet)));
        Self { sender, handle }
    }

    /// Queue the latest buffer contents
    pub fn submit(&self, markup: impl Into<String>, style: impl Into<String>) -> PreviewResult<()> {
        self.sender
            .send(Snapshot {
                markup: markup.into(),
                style: style.into(),
            })
            .map_err(|_| PreviewError::AutoRunStopped)
    }

    /// Stop accepting edits, flush any pending one and hand the pipeline back
    pub async fn shutdown(self) -> PreviewResult<PreviewPipeline<R>> {
        drop(self.sender);
        self.handle
            .await
            .map_err(|e| PreviewError::TaskFailed(e.to_string()))
    }
}

async fn run_loop<R: SandboxRenderer>(
    mut pipeline: PreviewPipeline<R>,
    mut receiver: mpsc::UnboundedReceiver<Snapshot>,
    mut debouncer: Debouncer,
) -> PreviewPipeline<R> {
    let mut latest: Option<Snapshot> = None;

    loop {
        let deadline = debouncer.deadline();
        tokio::select! {
            next = receiver.recv() => match next {
                Some(snapshot) => {
                    debouncer.touch(runtime_now());
                    latest = Some(snapshot);
                }
                None => break,
            },
            _ = wait_until(deadline) => {
                if debouncer.take_ready(runtime_now()) {
                    if let Some(snapshot) = latest.take() {
                        flush(&mut pipeline, &snapshot);
                    }
                }
            }
        }
    }

    if let Some(snapshot) = latest.take() {
        flush(&mut pipeline, &snapshot);
    }
    pipeline
}

/// Current time on the runtime clock, so the runner follows a paused test clock
fn runtime_now() -> Instant {
    tokio::time::Instant::now().into_std()
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}

fn flush<R: SandboxRenderer>(pipeline: &mut PreviewPipeline<R>, snapshot: &Snapshot) {
    let outcome = pipeline.run(&snapshot.markup, &snapshot.style);
    debug!(?outcome, "auto-run fired");
}
