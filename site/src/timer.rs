//! Sleeping, abstracted over the host's clock.

use std::future::Future;
use std::time::Duration;

/// Browser builds sleep on `setTimeout`; tests sleep on tokio's paused clock.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<T: Timer + ?Sized> Timer for &T {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }
}
