//! Deferred task queue tied to the host's render commit.
//!
//! Item geometry (heights, top offsets) is only trustworthy once the host
//! display engine has committed the visual tree for the current render pass.
//! Work that depends on committed geometry, such as a balance reflow, is
//! posted here as a single-shot task and drained by the host exactly once per
//! commit.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

/// A unique identifier for a deferred frame task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique task IDs.
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

/// A boxed task closure.
type BoxedTask = Box<dyn FnOnce() + Send + 'static>;

/// Internal task data.
struct TaskData {
    id: TaskId,
    task: BoxedTask,
}

/// Single-shot tasks deferred until the current render pass commits.
///
/// Tasks may be posted at any time; the host drains the queue with
/// [`process_all`](Self::process_all) after it has committed geometry. Each
/// task runs at most once and in posting order.
pub struct FrameQueue {
    /// Tasks waiting for the next commit.
    tasks: VecDeque<TaskData>,
}

impl FrameQueue {
    /// Create a new, empty frame queue.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Post a task to run after the current render pass commits.
    ///
    /// Returns the task ID that can be used to cancel the task.
    pub fn post<F>(&mut self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = next_task_id();
        self.tasks.push_back(TaskData {
            id,
            task: Box::new(task),
        });
        tracing::trace!(
            target: "horizon_cascade_core::frame",
            task_id = id.as_u64(),
            pending = self.tasks.len(),
            "posted frame task"
        );
        id
    }

    /// Cancel a pending task.
    ///
    /// Returns `true` if the task was found and cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Run every pending task in posting order.
    ///
    /// Returns the number of tasks processed.
    pub fn process_all(&mut self) -> usize {
        let count = self.tasks.len();
        while let Some(task_data) = self.tasks.pop_front() {
            (task_data.task)();
        }
        count
    }
}

impl Default for FrameQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe handle to a [`FrameQueue`].
///
/// The host owns one of these per layout surface and drains it on render
/// commit; the layout layer posts deferred work through clones of the same
/// handle.
#[derive(Clone)]
pub struct SharedFrameQueue {
    inner: Arc<Mutex<FrameQueue>>,
}

impl SharedFrameQueue {
    /// Create a new shared frame queue.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FrameQueue::new())),
        }
    }

    /// Post a task to run after the current render pass commits.
    pub fn post<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.lock().post(task)
    }

    /// Cancel a pending task.
    ///
    /// Returns `true` if the task was found and cancelled. Tasks already
    /// handed to a running [`process_all`](Self::process_all) can no longer
    /// be cancelled.
    pub fn cancel(&self, id: TaskId) -> bool {
        self.inner.lock().cancel(id)
    }

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        self.inner.lock().has_pending()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.inner.lock().pending_count()
    }

    /// Run every task that was pending when the commit started.
    ///
    /// The queue is detached before any task runs, so a task may post new
    /// work through this same handle without deadlocking; such work lands in
    /// the next commit's batch.
    ///
    /// Returns the number of tasks processed.
    pub fn process_all(&self) -> usize {
        let mut batch = {
            let mut queue = self.inner.lock();
            std::mem::take(&mut queue.tasks)
        };
        let count = batch.len();
        if count > 0 {
            tracing::trace!(
                target: "horizon_cascade_core::frame",
                count,
                "draining frame tasks on commit"
            );
        }
        while let Some(task_data) = batch.pop_front() {
            (task_data.task)();
        }
        count
    }
}

impl Default for SharedFrameQueue {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(SharedFrameQueue: Send, Sync);
