use leptos::leptos_dom::helpers::IntervalHandle;

/// A running timer that can be stopped
pub trait TimerHandle {
    fn cancel(self);
}

impl TimerHandle for IntervalHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Owner of the auto-refresh interval. At most one timer is armed at a time.
#[derive(Debug)]
pub struct RefreshTimer<H: TimerHandle> {
    armed: Option<H>,
}

impl<H: TimerHandle> Default for RefreshTimer<H> {
    fn default() -> Self {
        Self { armed: None }
    }
}

impl<H: TimerHandle> RefreshTimer<H> {
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Bring the timer in line with `should_run`.
    ///
    /// `start` is only called when no timer is armed; it may fail to start one.
    pub fn sync<F>(&mut self, should_run: bool, start: F)
    where
        F: FnOnce() -> Option<H>,
    {
        if should_run {
            if self.armed.is_none() {
                self.armed = start();
                if self.armed.is_some() {
                    log::debug!("Order history auto-refresh armed");
                }
            }
        } else {
            self.cancel();
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.armed.take() {
            handle.cancel();
            log::debug!("Order history auto-refresh stopped");
        }
    }
}
