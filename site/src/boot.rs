//! Page start-up sequence.
//!
//! The header and footer controllers need markup that only exists once the
//! fragments are injected, so boot is one explicit sequence instead of
//! independent DOM-ready hooks:
//!
//! ```text
//! LoadFragments -> MountHeader -> MountFooter -> Tooltips -> Forms
//!               -> SmoothScroll -> LazyImages -> RemoveOverlay
//! ```
//!
//! Nothing in the sequence is fatal. A failed fragment load raises one
//! global error notice; a failing step is logged and the next one runs.

use std::fmt;
use std::future::Future;

use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::fragments::FragmentReport;
use crate::notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BootStep {
    LoadFragments,
    MountHeader,
    MountFooter,
    Tooltips,
    Forms,
    SmoothScroll,
    LazyImages,
    RemoveOverlay,
}

/// Everything after [`BootStep::LoadFragments`], in execution order.
pub const MOUNT_SEQUENCE: [BootStep; 7] = [
    BootStep::MountHeader,
    BootStep::MountFooter,
    BootStep::Tooltips,
    BootStep::Forms,
    BootStep::SmoothScroll,
    BootStep::LazyImages,
    BootStep::RemoveOverlay,
];

impl BootStep {
    pub fn as_label(&self) -> &'static str {
        match self {
            BootStep::LoadFragments => "load-fragments",
            BootStep::MountHeader => "mount-header",
            BootStep::MountFooter => "mount-footer",
            BootStep::Tooltips => "tooltips",
            BootStep::Forms => "forms",
            BootStep::SmoothScroll => "smooth-scroll",
            BootStep::LazyImages => "lazy-images",
            BootStep::RemoveOverlay => "remove-overlay",
        }
    }
}

impl fmt::Display for BootStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Done,
    /// The step's target markup is not on this page.
    Skipped,
    Failed(String),
}

/// The page the sequence runs against.
pub trait BootHost {
    fn load_fragments(&self) -> impl Future<Output = FragmentReport>;

    fn show_global_error(&self, message: &str) -> Result<()>;

    /// `Ok(false)` when the step found nothing to attach to.
    fn run_step(&self, step: BootStep) -> Result<bool>;
}

#[derive(Debug, Default)]
pub struct BootReport {
    pub fragments: FragmentReport,
    pub steps: Vec<(BootStep, StepOutcome)>,
}

impl BootReport {
    pub fn outcome(&self, step: BootStep) -> Option<&StepOutcome> {
        self.steps.iter().find(|(s, _)| *s == step).map(|(_, o)| o)
    }
}

pub async fn boot<H: BootHost>(host: &H) -> BootReport {
    let fragments = host.load_fragments().await;
    let load_outcome = if fragments.all_loaded() {
        StepOutcome::Done
    } else {
        for failure in &fragments.failures {
            if failure.is_fragment_failure() {
                error!("error loading components: {failure}");
            } else {
                warn!("component could not be placed: {failure}");
            }
        }
        if let Err(e) = host.show_global_error(notice::FRAGMENTS_FAILED) {
            warn!("could not display load error: {e}");
        }
        StepOutcome::Failed(format!("{} fragment(s) failed", fragments.failures.len()))
    };

    let mut steps = vec![(BootStep::LoadFragments, load_outcome)];
    for step in MOUNT_SEQUENCE {
        let outcome = match host.run_step(step) {
            Ok(true) => StepOutcome::Done,
            Ok(false) => {
                debug!(%step, "nothing to attach to, skipped");
                StepOutcome::Skipped
            }
            Err(e) => {
                warn!(%step, "boot step failed: {e}");
                StepOutcome::Failed(e.to_string())
            }
        };
        steps.push((step, outcome));
    }

    info!("page boot complete");
    BootReport { fragments, steps }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::SiteError;

    #[derive(Default)]
    struct ScriptedHost {
        fail_fragments: bool,
        missing: Vec<BootStep>,
        broken: Vec<BootStep>,
        log: RefCell<Vec<String>>,
    }

    impl BootHost for ScriptedHost {
        async fn load_fragments(&self) -> FragmentReport {
            self.log.borrow_mut().push("fetch".into());
            let mut report = FragmentReport::default();
            if self.fail_fragments {
                report.failures.push(SiteError::FragmentFetch {
                    name: "header".into(),
                    reason: "network down".into(),
                });
                report.failures.push(SiteError::FragmentFetch {
                    name: "footer".into(),
                    reason: "network down".into(),
                });
            } else {
                report.injected = vec!["header".into(), "footer".into()];
            }
            report
        }

        fn show_global_error(&self, message: &str) -> Result<()> {
            self.log.borrow_mut().push(format!("error: {message}"));
            Ok(())
        }

        fn run_step(&self, step: BootStep) -> Result<bool> {
            self.log.borrow_mut().push(step.to_string());
            if self.broken.contains(&step) {
                return Err(SiteError::Dom(format!("{step} exploded")));
            }
            Ok(!self.missing.contains(&step))
        }
    }

    #[tokio::test]
    async fn runs_every_step_in_order_after_fragments() {
        let host = ScriptedHost::default();
        let report = boot(&host).await;

        assert_eq!(
            *host.log.borrow(),
            vec![
                "fetch",
                "mount-header",
                "mount-footer",
                "tooltips",
                "forms",
                "smooth-scroll",
                "lazy-images",
                "remove-overlay",
            ]
        );
        assert!(report.steps.iter().all(|(_, o)| *o == StepOutcome::Done));
    }

    #[tokio::test]
    async fn fragment_failure_raises_one_notice_and_boot_continues() {
        let host = ScriptedHost {
            fail_fragments: true,
            missing: vec![BootStep::MountHeader, BootStep::MountFooter],
            ..Default::default()
        };
        let report = boot(&host).await;

        let log = host.log.borrow();
        let notices = log.iter().filter(|l| l.starts_with("error:")).count();
        assert_eq!(notices, 1);
        assert_eq!(log[1], format!("error: {}", notice::FRAGMENTS_FAILED));
        assert_eq!(log.last().map(String::as_str), Some("remove-overlay"));
        assert_eq!(
            report.outcome(BootStep::LoadFragments),
            Some(&StepOutcome::Failed("2 fragment(s) failed".into()))
        );
        assert_eq!(report.outcome(BootStep::MountHeader), Some(&StepOutcome::Skipped));
        assert_eq!(report.outcome(BootStep::Forms), Some(&StepOutcome::Done));
    }

    #[tokio::test]
    async fn failing_step_does_not_stop_later_steps() {
        let host = ScriptedHost {
            broken: vec![BootStep::Tooltips],
            ..Default::default()
        };
        let report = boot(&host).await;

        assert!(matches!(
            report.outcome(BootStep::Tooltips),
            Some(StepOutcome::Failed(msg)) if msg.contains("tooltips exploded")
        ));
        assert_eq!(report.outcome(BootStep::RemoveOverlay), Some(&StepOutcome::Done));
    }
}
