//! One-shot completion signals
//!
//! Each animation generation owns one signal, fulfilled exactly once when the
//! animation reaches its terminal state. `restart()` installs a fresh
//! generation; handles taken from the previous generation are abandoned and
//! never complete. Abandonment is not an error - holders observing a signal
//! that never fires is the documented cancellation semantic.

use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

#[derive(Default)]
struct SignalInner {
    done: Mutex<bool>,
    cv: Condvar,
}

/// Cloneable handle to a one-shot completion notification
#[derive(Clone, Default)]
pub struct CompletionSignal {
    inner: Arc<SignalInner>,
}

impl CompletionSignal {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fulfill the signal. Idempotent.
    pub(crate) fn complete(&self) {
        let mut done = self.inner.done.lock().unwrap();
        if !*done {
            *done = true;
            self.inner.cv.notify_all();
        }
    }

    /// Whether the owning animation has finished
    pub fn is_complete(&self) -> bool {
        *self.inner.done.lock().unwrap()
    }

    /// Block until fulfilled
    ///
    /// Never returns for an abandoned generation; prefer `wait_timeout` when
    /// a restart may race the wait.
    pub fn wait(&self) {
        let mut done = self.inner.done.lock().unwrap();
        while !*done {
            done = self.inner.cv.wait(done).unwrap();
        }
    }

    /// Block until fulfilled or the timeout elapses; returns completion state
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let done = self.inner.done.lock().unwrap();
        let (done, _) = self
            .inner
            .cv
            .wait_timeout_while(done, timeout, |done| !*done)
            .unwrap();
        *done
    }
}
