use std::future::Future;
use std::time::Duration;

use criyagen_site::Timer;

/// `setTimeout`-backed [`Timer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}

/// Run `f` once after `delay`. Not cancellable; whatever `f` captures is
/// released once it has run.
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        f();
    });
}
