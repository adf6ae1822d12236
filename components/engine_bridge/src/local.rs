//! In-process reference engine.
//!
//! Compiles on a dedicated worker thread fed over a crossbeam channel, so
//! compilation is genuinely out-of-band from the harness's point of view.
//! Refuse and stall lists make the non-compilation and timeout paths of the
//! harness reachable from tests without a real engine.

use crate::service::{CompileRequest, CompileService};
use crossbeam::channel::{self, Sender};
use parking_lot::{Condvar, Mutex};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// State of one compilation job inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JobState {
    /// Accepted, not yet finished.
    Queued,
    /// Finished; native code installed.
    Done,
}

/// Shared job table between the service handle and the worker thread.
#[derive(Default)]
struct JobTable {
    jobs: Mutex<HashMap<String, JobState>>,
    finished: Condvar,
}

/// In-process compile service with a single worker thread.
///
/// Defaults: 1 ms simulated compile time per function and a 50 ms
/// engine-internal wait deadline per `wait_jit_compile_finish` call.
///
/// # Examples
///
/// ```
/// use engine_bridge::{CompileRequest, CompileService, LocalCompileService};
///
/// let engine = LocalCompileService::new();
/// let req = CompileRequest::new("hot_loop");
/// assert!(engine.jit_compile_async(&req));
/// assert!(engine.wait_jit_compile_finish(&req));
/// ```
pub struct LocalCompileService {
    table: Arc<JobTable>,
    queue: Option<Sender<String>>,
    worker: Option<JoinHandle<()>>,
    wait_deadline: Duration,
    refuse: HashSet<String>,
    stall: HashSet<String>,
}

impl LocalCompileService {
    /// Creates a service with default timing.
    pub fn new() -> Self {
        Self::with_compile_delay(Duration::from_millis(1))
    }

    /// Creates a service whose worker spends `delay` per compilation.
    pub fn with_compile_delay(delay: Duration) -> Self {
        let table = Arc::new(JobTable::default());
        let (tx, rx) = channel::unbounded::<String>();

        let worker_table = Arc::clone(&table);
        let worker = thread::spawn(move || {
            for name in rx {
                thread::sleep(delay);
                let mut jobs = worker_table.jobs.lock();
                jobs.insert(name, JobState::Done);
                worker_table.finished.notify_all();
            }
        });

        Self {
            table,
            queue: Some(tx),
            worker: Some(worker),
            wait_deadline: Duration::from_millis(50),
            refuse: HashSet::new(),
            stall: HashSet::new(),
        }
    }

    /// Sets the engine-internal deadline for a single wait call.
    pub fn set_wait_deadline(&mut self, deadline: Duration) {
        self.wait_deadline = deadline;
    }

    /// Marks a function the engine will decline to compile.
    ///
    /// Mirrors an engine skipping tier-up for small functions.
    pub fn refuse_function(&mut self, name: impl Into<String>) {
        self.refuse.insert(name.into());
    }

    /// Marks a function whose compilation is accepted but never finishes.
    pub fn stall_function(&mut self, name: impl Into<String>) {
        self.stall.insert(name.into());
    }

    /// Returns whether the named function's compilation has finished.
    pub fn is_compiled(&self, name: &str) -> bool {
        self.table.jobs.lock().get(name) == Some(&JobState::Done)
    }
}

impl CompileService for LocalCompileService {
    fn jit_compile_async(&self, request: &CompileRequest) -> bool {
        let name = &request.function_name;
        if self.refuse.contains(name) {
            return false;
        }

        {
            let mut jobs = self.table.jobs.lock();
            // One active compilation per function; a repeat request while
            // queued or finished is accepted without re-queueing.
            if jobs.contains_key(name) {
                return true;
            }
            jobs.insert(name.clone(), JobState::Queued);
        }

        if self.stall.contains(name) {
            // Accepted, but the job never reaches the worker.
            return true;
        }

        match &self.queue {
            Some(tx) => tx.send(name.clone()).is_ok(),
            None => false,
        }
    }

    fn wait_jit_compile_finish(&self, request: &CompileRequest) -> bool {
        let name = &request.function_name;
        let mut jobs = self.table.jobs.lock();
        match jobs.get(name) {
            // Nothing outstanding for this request.
            None => true,
            Some(JobState::Done) => true,
            Some(JobState::Queued) => {
                // The condvar can wake spuriously or for another job, so
                // the job table is re-checked after the wait either way.
                let _ = self.table.finished.wait_for(&mut jobs, self.wait_deadline);
                jobs.get(name) == Some(&JobState::Done)
            }
        }
    }
}

impl Default for LocalCompileService {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LocalCompileService {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain and exit.
        self.queue.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
