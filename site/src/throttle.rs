//! Leading + trailing edge throttle for high-frequency events.
//!
//! The throttle only decides; the caller owns the clock and the timer. Time
//! is any monotonic `Duration` (e.g. `performance.now()` converted).

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// Handle the event now.
    Run,
    /// Skip it, and arm a timer that calls [`Throttle::trailing_due`] after the delay.
    Schedule(Duration),
    /// Skip it; a trailing run is already armed and will see the latest state.
    Coalesced,
}

#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    last_run: Option<Duration>,
    trailing_pending: bool,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_run: None,
            trailing_pending: false,
        }
    }

    pub fn call(&mut self, now: Duration) -> ThrottleDecision {
        match self.last_run {
            Some(last) if now.saturating_sub(last) < self.window => {
                if self.trailing_pending {
                    ThrottleDecision::Coalesced
                } else {
                    self.trailing_pending = true;
                    ThrottleDecision::Schedule(self.window - now.saturating_sub(last))
                }
            }
            _ => {
                self.last_run = Some(now);
                self.trailing_pending = false;
                ThrottleDecision::Run
            }
        }
    }

    /// Called when the armed timer fires. Returns whether the handler should run.
    pub fn trailing_due(&mut self, now: Duration) -> bool {
        if !self.trailing_pending {
            return false;
        }
        self.trailing_pending = false;
        self.last_run = Some(now);
        true
    }
}
