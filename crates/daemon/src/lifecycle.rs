// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service lifecycle: start validation, the cleanup timer, and stop.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sweep_adapters::{notify_best_effort, FileRemover, NotifyAdapter};
use sweep_core::{
    Clock, ConfigError, ConfigStore, LifecycleEvent, RetentionPolicy, ServiceState, Settings,
};
use sweep_engine::CleanupEngine;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info, warn};

pub const STARTED_MESSAGE: &str = "✅ sweep service started";
pub const STOPPED_MESSAGE: &str = "🛑 sweep service stopped";

/// Reasons the service refuses to start
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load settings: {0}")]
    Config(#[from] ConfigError),
    #[error("target folder is not set; configure one before starting the service")]
    NoTarget,
    #[error("target folder must be an absolute path: {0}")]
    RelativeTarget(PathBuf),
    #[error("target folder does not exist: {0}")]
    TargetMissing(PathBuf),
    #[error("service cannot start while {0}")]
    InvalidState(ServiceState),
}

/// Builds the notifier from the settings loaded for a run
pub type NotifierFactory<N> = Arc<dyn Fn(&Settings) -> N + Send + Sync>;

/// Called with the verbose flag of every freshly loaded policy
pub type VerbosityHook = Arc<dyn Fn(bool) + Send + Sync>;

/// Service collaborators
pub struct ServiceDeps<R, C, N> {
    pub remover: R,
    pub clock: C,
    pub notifier: NotifierFactory<N>,
}

/// State shared between the service and its timer task
struct Worker<R, C, N> {
    store: ConfigStore,
    engine: Arc<CleanupEngine<R, C>>,
    notifier: NotifierFactory<N>,
    verbosity: Option<VerbosityHook>,
}

struct Timer {
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

/// Long-lived cleanup service driven by start/stop from the host
pub struct Service<R, C, N> {
    state: ServiceState,
    worker: Arc<Worker<R, C, N>>,
    timer: Option<Timer>,
}

impl<R, C, N> Service<R, C, N>
where
    R: FileRemover + 'static,
    C: Clock + 'static,
    N: NotifyAdapter,
{
    pub fn new(store: ConfigStore, deps: ServiceDeps<R, C, N>) -> Self {
        Self::build(store, deps, None)
    }

    /// Like [`Service::new`], re-applying the verbose flag on every reload
    pub fn with_verbosity_hook(
        store: ConfigStore,
        deps: ServiceDeps<R, C, N>,
        hook: impl Fn(bool) + Send + Sync + 'static,
    ) -> Self {
        Self::build(store, deps, Some(Arc::new(hook)))
    }

    fn build(
        store: ConfigStore,
        deps: ServiceDeps<R, C, N>,
        verbosity: Option<VerbosityHook>,
    ) -> Self {
        Self {
            state: ServiceState::Stopped,
            worker: Arc::new(Worker {
                store,
                engine: Arc::new(CleanupEngine::new(deps.remover, deps.clock)),
                notifier: deps.notifier,
                verbosity,
            }),
            timer: None,
        }
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    fn apply(&mut self, event: LifecycleEvent) {
        match self.state.transition(event) {
            Some(next) => self.state = next,
            None => warn!(target: "service", state = %self.state, ?event, "ignored lifecycle event"),
        }
    }

    /// Validate settings and arm the cleanup timer.
    ///
    /// The first run fires immediately. On error the service is back in
    /// `Stopped` and nothing was scheduled.
    pub async fn start(&mut self) -> Result<(), StartupError> {
        if self.state != ServiceState::Stopped {
            return Err(StartupError::InvalidState(self.state));
        }
        self.apply(LifecycleEvent::Start);

        let settings = match self.worker.validated_settings() {
            Ok(settings) => settings,
            Err(e) => {
                error!(target: "service", error = %e, "service refused to start");
                self.apply(LifecycleEvent::Rejected);
                return Err(e);
            }
        };
        self.apply(LifecycleEvent::Validated);

        let policy = settings.policy();
        info!(
            target: "service",
            target_path = %policy.target_path.display(),
            interval_secs = policy.poll_interval.as_secs(),
            "service started"
        );
        notify_best_effort(&(self.worker.notifier)(&settings), STARTED_MESSAGE).await;

        let (stop, stopped) = oneshot::channel();
        let task = tokio::spawn(Arc::clone(&self.worker).run_timer((settings, policy), stopped));
        self.timer = Some(Timer { stop, task });
        Ok(())
    }

    /// Disarm the timer, waiting for an in-flight run to finish.
    ///
    /// Does nothing when the service never reached `Running`.
    pub async fn stop(&mut self) {
        let Some(timer) = self.timer.take() else {
            tracing::debug!(target: "service", state = %self.state, "stop requested while not running");
            return;
        };
        self.apply(LifecycleEvent::Stop);

        let _ = timer.stop.send(());
        if let Err(e) = timer.task.await {
            error!(target: "service", error = %e, "cleanup timer task failed");
        }

        let settings = self.worker.load_or_default();
        notify_best_effort(&(self.worker.notifier)(&settings), STOPPED_MESSAGE).await;
        self.apply(LifecycleEvent::Halted);
        info!(target: "service", "service stopped");
    }
}

impl<R, C, N> Worker<R, C, N>
where
    R: FileRemover + 'static,
    C: Clock + 'static,
    N: NotifyAdapter,
{
    fn validated_settings(&self) -> Result<Settings, StartupError> {
        let settings = self.store.load()?;
        if !settings.has_target() {
            return Err(StartupError::NoTarget);
        }
        let target = settings.target_path();
        if !target.is_absolute() {
            return Err(StartupError::RelativeTarget(target));
        }
        if !target.is_dir() {
            return Err(StartupError::TargetMissing(target));
        }
        Ok(settings)
    }

    fn load_or_default(&self) -> Settings {
        self.store.load().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load settings");
            Settings::default()
        })
    }

    async fn run_timer(
        self: Arc<Self>,
        mut last_good: (Settings, RetentionPolicy),
        mut stop: oneshot::Receiver<()>,
    ) {
        let mut period = last_good.1.poll_interval;
        let mut interval = ticker(Instant::now(), period);
        let mut first = true;

        loop {
            tokio::select! {
                _ = &mut stop => break,
                _ = interval.tick() => {
                    // The snapshot validated at start is reused for the first run
                    if !first {
                        self.reload(&mut last_good);
                    }
                    first = false;

                    self.run_once(&last_good.0, &last_good.1).await;

                    if last_good.1.poll_interval != period {
                        period = last_good.1.poll_interval;
                        info!(interval_secs = period.as_secs(), "poll interval changed");
                        interval = ticker(Instant::now() + period, period);
                    }
                }
            }
        }
    }

    /// Replace the snapshot with freshly loaded settings, keeping the old
    /// one when the file cannot be read
    fn reload(&self, last_good: &mut (Settings, RetentionPolicy)) {
        match self.store.load() {
            Ok(settings) => {
                let policy = settings.policy();
                *last_good = (settings, policy);
            }
            Err(e) => warn!(error = %e, "failed to reload settings, using previous ones"),
        }
    }

    async fn run_once(&self, settings: &Settings, policy: &RetentionPolicy) {
        if let Some(hook) = &self.verbosity {
            hook(policy.verbose_logging);
        }

        let engine = Arc::clone(&self.engine);
        let snapshot = policy.clone();
        let summary = match tokio::task::spawn_blocking(move || engine.run(&snapshot)).await {
            Ok(summary) => summary,
            Err(e) => {
                error!(error = %e, "cleanup run panicked");
                return;
            }
        };

        sweep_engine::report(&(self.notifier)(settings), &summary, &policy.target_path).await;
    }
}

fn ticker(start: Instant, period: Duration) -> tokio::time::Interval {
    let mut interval = tokio::time::interval_at(start, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
