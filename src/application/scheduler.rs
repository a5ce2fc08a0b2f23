//! Delayed task scheduling.
//!
//! Every scheduled task sleeps for its delay and then runs, unless its
//! cancellation token fires first. Tasks scheduled under a parent token are
//! cancelled together with the parent.

use std::future::Future;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;

/// Handle to a spawned delayed task.
#[derive(Debug)]
pub struct ScheduledTask {
    id: u64,
    label: &'static str,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Token that cancels this task and everything scheduled under it.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the task to run or be cancelled.
    pub async fn wait(self) -> Result<(), JoinError> {
        self.handle.await
    }
}

/// Spawns delayed tasks onto the current tokio runtime.
#[derive(Debug, Clone)]
pub struct TaskScheduler {
    root: CancellationToken,
    next_id: Arc<AtomicU64>,
    active: Arc<AtomicUsize>,
    idle: Arc<Notify>,
}

impl Default for TaskScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self {
            root: CancellationToken::new(),
            next_id: Arc::new(AtomicU64::new(1)),
            active: Arc::new(AtomicUsize::new(0)),
            idle: Arc::new(Notify::new()),
        }
    }

    /// Schedules a top-level task.
    ///
    /// The task receives its own token so it can schedule children under it.
    pub fn schedule<F, Fut>(&self, label: &'static str, delay: Duration, task: F) -> ScheduledTask
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let parent = self.root.clone();
        self.schedule_under(&parent, label, delay, task)
    }

    /// Schedules a task that is cancelled when `parent` is.
    pub fn schedule_under<F, Fut>(
        &self,
        parent: &CancellationToken,
        label: &'static str,
        delay: Duration,
        task: F,
    ) -> ScheduledTask
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let token = parent.child_token();
        let task_token = token.clone();
        let guard = ActiveGuard::enter(self.active.clone(), self.idle.clone());

        tracing::debug!(task_id = id, label, delay_ms = delay.as_millis() as u64, "Task scheduled");

        let handle = tokio::spawn(async move {
            let _guard = guard;
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    tracing::debug!(task_id = id, label, "Task cancelled before running");
                }
                _ = tokio::time::sleep(delay) => {
                    task(task_token).await;
                }
            }
        });

        ScheduledTask {
            id,
            label,
            token,
            handle,
        }
    }

    /// Number of tasks that have not yet finished.
    pub fn active_count(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Resolves once no scheduled task is outstanding.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.active_count() == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Cancels every outstanding and future task.
    pub fn shutdown(&self) {
        self.root.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }
}

/// Keeps the active task count accurate even if a task panics.
struct ActiveGuard {
    active: Arc<AtomicUsize>,
    idle: Arc<Notify>,
}

impl ActiveGuard {
    fn enter(active: Arc<AtomicUsize>, idle: Arc<Notify>) -> Self {
        active.fetch_add(1, Ordering::SeqCst);
        Self { active, idle }
    }
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        if self.active.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.idle.notify_waiters();
        }
    }
}
