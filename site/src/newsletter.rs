//! Footer newsletter signup flow.
//!
//! The flow validates, drives the view through its busy state and delegates
//! the actual subscription to a [`SubscriptionService`]. The shipped service
//! is [`SimulatedSubscription`]: there is no backend, it waits a fixed delay
//! and accepts.
//!
//! Double submission is only guarded by the view disabling its submit
//! control while busy; a second submit landing before that is not deduplicated.

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::Result;
use crate::notice::{self, Notice};
use crate::timer::Timer;
use crate::validation::is_valid_email;

pub trait SubscriptionService {
    fn subscribe(&self, email: &str) -> impl Future<Output = Result<()>>;
}

/// Stand-in for a real signup endpoint.
pub struct SimulatedSubscription<T> {
    timer: T,
    delay: Duration,
}

impl<T: Timer> SimulatedSubscription<T> {
    pub fn new(timer: T, delay: Duration) -> Self {
        Self { timer, delay }
    }
}

impl<T: Timer> SubscriptionService for SimulatedSubscription<T> {
    async fn subscribe(&self, email: &str) -> Result<()> {
        self.timer.sleep(self.delay).await;
        info!(email, "newsletter subscription accepted (simulated)");
        Ok(())
    }
}

/// What the flow needs from the form on screen.
pub trait NewsletterView {
    fn notify(&self, notice: Notice);
    fn focus_email(&self);
    /// `true`: disable the submit control and show the busy indicator.
    /// `false`: restore its original content and enable it.
    fn set_busy(&self, busy: bool);
    fn reset_form(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Invalid address; nothing was sent.
    Rejected,
    Subscribed,
    Failed,
}

pub struct Newsletter<S> {
    service: S,
}

impl<S: SubscriptionService> Newsletter<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn submit<V: NewsletterView>(&self, view: &V, raw_email: &str) -> SubmitOutcome {
        let email = raw_email.trim();
        if !is_valid_email(email) {
            view.notify(Notice::error(notice::NEWSLETTER_INVALID));
            view.focus_email();
            return SubmitOutcome::Rejected;
        }

        view.set_busy(true);
        let outcome = match self.service.subscribe(email).await {
            Ok(()) => {
                view.notify(Notice::success(notice::NEWSLETTER_THANKS));
                view.reset_form();
                SubmitOutcome::Subscribed
            }
            Err(e) => {
                warn!("newsletter signup failed: {e}");
                view.notify(Notice::error(notice::NEWSLETTER_FAILED));
                SubmitOutcome::Failed
            }
        };
        view.set_busy(false);
        outcome
    }
}
