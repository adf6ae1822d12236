//! Compilation controller.
//!
//! Owns the handle lifecycle around the engine's two-operation compile
//! service: request tier-up without blocking, then wait cooperatively for
//! completion under a harness-side deadline. A handle transitions exactly
//! once out of Pending.

use engine_bridge::{CompileRequest, CompileService};
use std::thread;
use std::time::{Duration, Instant};

/// Terminal and non-terminal states of one compilation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileState {
    /// Requested; no terminal state reached yet.
    Pending,
    /// The engine finished all outstanding work for the request (which may
    /// be none at all, when the request was declined).
    Compiled,
    /// The handle was abandoned before completion (run cancellation).
    Failed,
    /// The harness deadline elapsed before completion was observed.
    TimedOut,
}

/// One probe case's compilation request and its state.
///
/// At most one handle is active per probe case; the controller hands the
/// handle out by value and takes it back for every transition.
#[derive(Debug, Clone)]
pub struct CompilationHandle {
    probe_id: String,
    request: CompileRequest,
    accepted: bool,
    state: CompileState,
}

impl CompilationHandle {
    /// The probe case this handle belongs to.
    pub fn probe_id(&self) -> &str {
        &self.probe_id
    }

    /// Current handle state.
    pub fn state(&self) -> CompileState {
        self.state
    }

    /// Whether the engine accepted the compile request.
    ///
    /// Acceptance does not guarantee compilation occurred; refusal is a
    /// valid outcome, not a failure.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Whether the function was actually promoted to the compiled tier.
    pub fn tiered_up(&self) -> bool {
        self.accepted && self.state == CompileState::Compiled
    }

    /// Whether the handle reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.state != CompileState::Pending
    }
}

/// Drives compile requests against an engine's [`CompileService`].
pub struct CompilationController<'a, S: CompileService> {
    service: &'a S,
    poll_interval: Duration,
}

impl<'a, S: CompileService> CompilationController<'a, S> {
    /// Creates a controller over the given service with a 1 ms poll slice.
    pub fn new(service: &'a S) -> Self {
        Self {
            service,
            poll_interval: Duration::from_millis(1),
        }
    }

    /// Sets the sleep slice between completion polls.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Signals tier-up intent to the engine without blocking.
    ///
    /// The returned handle records whether the request was accepted; an
    /// engine declining a small or simple function is not a failure.
    pub fn request_compile(&self, probe_id: &str) -> CompilationHandle {
        let request = CompileRequest::new(probe_id);
        let accepted = self.service.jit_compile_async(&request);
        CompilationHandle {
            probe_id: probe_id.to_string(),
            request,
            accepted,
            state: CompileState::Pending,
        }
    }

    /// Waits cooperatively until the engine reports completion or `timeout`
    /// elapses, filling in the terminal state.
    ///
    /// A zero or already-elapsed timeout transitions to TimedOut before any
    /// engine call is made. A declined request short-circuits to Compiled:
    /// there is no outstanding work to wait for. A handle already in a
    /// terminal state is returned unchanged.
    ///
    /// The two-operation interface blocks inside each engine call, so the
    /// deadline is enforced between calls: a nonzero timeout can overrun by
    /// up to one engine-internal wait deadline before TimedOut is reached.
    pub fn await_completion(
        &self,
        mut handle: CompilationHandle,
        timeout: Duration,
    ) -> CompilationHandle {
        if handle.is_terminal() {
            return handle;
        }
        if timeout.is_zero() {
            handle.state = CompileState::TimedOut;
            return handle;
        }
        if !handle.accepted {
            handle.state = CompileState::Compiled;
            return handle;
        }

        let deadline = Instant::now() + timeout;
        loop {
            if self.service.wait_jit_compile_finish(&handle.request) {
                handle.state = CompileState::Compiled;
                return handle;
            }
            let now = Instant::now();
            if now >= deadline {
                handle.state = CompileState::TimedOut;
                return handle;
            }
            // Yield the logical task; the engine compiles out-of-band.
            thread::sleep(self.poll_interval.min(deadline - now));
        }
    }

    /// Abandons a Pending handle without blocking (run cancellation).
    ///
    /// No partial state is surfaced to other cases; the engine may still
    /// finish the compilation on its own time.
    pub fn abandon(&self, mut handle: CompilationHandle) -> CompilationHandle {
        if !handle.is_terminal() {
            handle.state = CompileState::Failed;
        }
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_bridge::LocalCompileService;

    #[test]
    fn test_request_then_await_compiles() {
        let engine = LocalCompileService::new();
        let controller = CompilationController::new(&engine);
        let handle = controller.request_compile("f");
        assert_eq!(handle.state(), CompileState::Pending);
        assert!(handle.accepted());

        let handle = controller.await_completion(handle, Duration::from_secs(1));
        assert_eq!(handle.state(), CompileState::Compiled);
        assert!(handle.tiered_up());
    }

    #[test]
    fn test_zero_timeout_is_deterministically_timed_out() {
        let engine = LocalCompileService::new();
        let controller = CompilationController::new(&engine);
        let handle = controller.request_compile("f");
        let handle = controller.await_completion(handle, Duration::ZERO);
        assert_eq!(handle.state(), CompileState::TimedOut);
    }

    #[test]
    fn test_refused_request_short_circuits_to_compiled() {
        let mut engine = LocalCompileService::new();
        engine.refuse_function("tiny");
        let controller = CompilationController::new(&engine);
        let handle = controller.request_compile("tiny");
        assert!(!handle.accepted());

        let handle = controller.await_completion(handle, Duration::from_secs(1));
        assert_eq!(handle.state(), CompileState::Compiled);
        assert!(!handle.tiered_up());
    }

    #[test]
    fn test_stalled_compilation_times_out() {
        let mut engine = LocalCompileService::new();
        engine.set_wait_deadline(Duration::from_millis(2));
        engine.stall_function("stuck");
        let controller = CompilationController::new(&engine);
        let handle = controller.request_compile("stuck");
        let handle = controller.await_completion(handle, Duration::from_millis(20));
        assert_eq!(handle.state(), CompileState::TimedOut);
        assert!(!handle.tiered_up());
    }

    #[test]
    fn test_tiny_timeout_terminates_after_one_engine_wait() {
        let mut engine = LocalCompileService::new();
        engine.set_wait_deadline(Duration::from_millis(10));
        engine.stall_function("stuck");
        let controller = CompilationController::new(&engine);
        let handle = controller.request_compile("stuck");

        // Timeout shorter than one engine-internal wait: the deadline is
        // checked between engine calls, so exactly one wait happens and
        // the handle still terminates as TimedOut.
        let start = std::time::Instant::now();
        let handle = controller.await_completion(handle, Duration::from_millis(1));
        assert_eq!(handle.state(), CompileState::TimedOut);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_terminal_handle_not_retransitioned() {
        let engine = LocalCompileService::new();
        let controller = CompilationController::new(&engine);
        let handle = controller.request_compile("f");
        let handle = controller.await_completion(handle, Duration::ZERO);
        assert_eq!(handle.state(), CompileState::TimedOut);

        let handle = controller.await_completion(handle, Duration::from_secs(1));
        assert_eq!(handle.state(), CompileState::TimedOut);
    }

    #[test]
    fn test_abandon_pending_handle() {
        let engine = LocalCompileService::new();
        let controller = CompilationController::new(&engine);
        let handle = controller.request_compile("f");
        let handle = controller.abandon(handle);
        assert_eq!(handle.state(), CompileState::Failed);
    }
}
