#![forbid(unsafe_code)]

//! Cancellable timer scheduling.
//!
//! Timers run on background threads and deliver messages through an
//! `mpsc` channel the caller drains on its event loop. Starting a timer
//! returns a [`TimerId`]; the contract is that every started timer is
//! cancelled on the corresponding teardown path:
//!
//! - [`cancel`](Scheduler::cancel) stops one timer (restarting a sequence
//!   cancels the old handle first),
//! - [`cancel_all`](Scheduler::cancel_all) stops everything (unmount),
//! - dropping the [`Scheduler`] cancels whatever is still outstanding.
//!
//! # Invariants
//!
//! 1. After `cancel` returns, the timer's thread has exited and will send
//!    no further messages.
//! 2. A one-shot timer sends at most one message, then unregisters itself
//!    lazily (its finished handle is reaped on the next scheduler call).
//! 3. Cancelling an unknown or already-finished id is a no-op.

use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

use tracing::debug;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Cooperative cancellation flag shared with a timer thread.
///
/// Timer threads block on [`wait`](CancelToken::wait) between ticks, so
/// cancellation interrupts a sleep immediately instead of waiting out the
/// period.
#[derive(Clone)]
struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    fn new() -> Self {
        Self {
            inner: Arc::new((Mutex::new(false), Condvar::new())),
        }
    }

    /// Wait for cancellation or a timeout. Returns `true` if cancelled.
    fn wait(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut cancelled = match lock.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if *cancelled {
            return true;
        }
        match cvar.wait_timeout(cancelled, duration) {
            Ok((guard, _)) => *guard,
            Err(poisoned) => *poisoned.into_inner().0,
        }
    }

    fn cancel(&self) {
        let (lock, cvar) = &*self.inner;
        let mut cancelled = match lock.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *cancelled = true;
        cvar.notify_all();
    }
}

struct RunningTimer {
    id: TimerId,
    token: CancelToken,
    thread: Option<thread::JoinHandle<()>>,
}

impl RunningTimer {
    fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }

    fn finished(&self) -> bool {
        self.thread.as_ref().is_none_or(|t| t.is_finished())
    }
}

/// Owner of a set of cancellable timers delivering messages of type `M`.
pub struct Scheduler<M: Send + 'static> {
    sender: mpsc::Sender<M>,
    timers: Vec<RunningTimer>,
    next_id: u64,
}

impl<M: Send + 'static> std::fmt::Debug for Scheduler<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("outstanding", &self.timers.len())
            .finish()
    }
}

impl<M: Send + 'static> Scheduler<M> {
    /// Create a scheduler and the receiver its timers deliver into.
    #[must_use]
    pub fn new() -> (Self, mpsc::Receiver<M>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                sender,
                timers: Vec::new(),
                next_id: 0,
            },
            receiver,
        )
    }

    /// Schedule a one-shot message after `delay`.
    pub fn start_timeout(&mut self, delay: Duration, message: M) -> TimerId {
        let sender = self.sender.clone();
        self.spawn(move |token| {
            if !token.wait(delay) {
                let _ = sender.send(message);
            }
        })
    }

    /// Schedule a repeating message every `period` until cancelled.
    ///
    /// `tick` receives the 0-based tick count and produces the message;
    /// returning `None` ends the timer from inside (a natural completion,
    /// e.g. a reveal sequence running out of lines).
    pub fn start_interval<F>(&mut self, period: Duration, tick: F) -> TimerId
    where
        F: Fn(u64) -> Option<M> + Send + 'static,
    {
        let sender = self.sender.clone();
        self.spawn(move |token| {
            let mut count = 0u64;
            loop {
                if token.wait(period) {
                    break;
                }
                let Some(message) = tick(count) else {
                    break;
                };
                if sender.send(message).is_err() {
                    break;
                }
                count += 1;
            }
        })
    }

    /// Cancel one timer, blocking until its thread has exited.
    pub fn cancel(&mut self, id: TimerId) {
        if let Some(index) = self.timers.iter().position(|t| t.id == id) {
            debug!(?id, "timer cancelled");
            self.timers.swap_remove(index).stop();
        }
        self.reap();
    }

    /// Cancel every outstanding timer.
    pub fn cancel_all(&mut self) {
        debug!(count = self.timers.len(), "cancelling all timers");
        for timer in self.timers.drain(..) {
            timer.stop();
        }
    }

    /// Number of timers not yet finished or cancelled.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.timers.iter().filter(|t| !t.finished()).count()
    }

    fn spawn<F>(&mut self, body: F) -> TimerId
    where
        F: FnOnce(CancelToken) + Send + 'static,
    {
        self.reap();
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let token = CancelToken::new();
        let thread_token = token.clone();
        let thread = thread::spawn(move || body(thread_token));
        self.timers.push(RunningTimer {
            id,
            token,
            thread: Some(thread),
        });
        id
    }

    /// Drop bookkeeping for timers whose threads already exited.
    fn reap(&mut self) {
        self.timers.retain(|t| !t.finished());
    }
}

impl<M: Send + 'static> Drop for Scheduler<M> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
