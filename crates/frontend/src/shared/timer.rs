//! Cancellable single-shot timers and a debouncer built on them.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;

/// Runs a task once after a delay, until cancelled.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancelling a handle whose task already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// `setTimeout`-backed scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        let _ = handle.cancel();
    }
}

/// Collapses a burst of calls into the last one, run after `delay_ms` of quiet.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Replace any pending task with `task`, restarting the quiet period.
    pub fn call(&self, task: impl FnOnce() + 'static) {
        self.cancel();
        let handle = self.scheduler.schedule(self.delay_ms, Box::new(task));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending task, if any.
    pub fn cancel(&self) {
        let pending = self.pending.borrow_mut().take();
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Box<dyn FnOnce()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |value: &str| {
            let sink = sink.clone();
            let value = value.to_string();
            Box::new(move || sink.borrow_mut().push(value)) as Box<dyn FnOnce()>
        };
        (log, make)
    }

    #[test]
    fn test_only_last_call_in_burst_runs() {
        let clock = ManualScheduler::default();
        let debouncer = Debouncer::new(clock.clone(), 300);
        let (log, make) = recorder();

        debouncer.call(make("l"));
        clock.advance(100);
        debouncer.call(make("lo"));
        clock.advance(100);
        debouncer.call(make("loft"));
        assert_eq!(clock.pending(), 1);

        clock.advance(299);
        assert!(log.borrow().is_empty());
        clock.advance(1);
        assert_eq!(*log.borrow(), vec!["loft"]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_separate_bursts_each_run() {
        let clock = ManualScheduler::default();
        let debouncer = Debouncer::new(clock.clone(), 300);
        let (log, make) = recorder();

        debouncer.call(make("first"));
        clock.advance(300);
        debouncer.call(make("second"));
        clock.advance(300);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let clock = ManualScheduler::default();
        let debouncer = Debouncer::new(clock.clone(), 300);
        let (log, make) = recorder();

        debouncer.call(make("gone"));
        debouncer.cancel();
        clock.advance(1_000);
        assert!(log.borrow().is_empty());
        // Cancelling with nothing pending is fine.
        debouncer.cancel();
    }
}
