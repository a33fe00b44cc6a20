//! # criyagen_site - site chrome for the Criyagen marketing pages
//!
//! Behavior behind the shared header and footer and the page start-up
//! sequence, kept free of any DOM type so it runs and tests natively. The
//! `criyagen-site-wasm` crate binds it to the browser.
//!
//! ## Pieces
//!
//! - **Boot**: fetch header/footer fragments, inject them, then mount the
//!   controllers and page-wide features in a fixed order ([`boot`]).
//! - **Header**: active link resolution, dropdowns, mobile menu/search,
//!   hide-on-scroll ([`HeaderState`]).
//! - **Footer**: back-to-top visibility, newsletter signup ([`Newsletter`]),
//!   one-at-a-time notices ([`Slot`]).
//! - **Forms**: required/email/phone validation ([`validate_form`]).
//!
//! ```rust
//! use criyagen_site::{HeaderState, SiteConfig};
//!
//! let mut header = HeaderState::new("/services/training.html", 2, &SiteConfig::default());
//! header.toggle_mobile_menu();
//! header.toggle_mobile_search();
//! assert!(header.mobile_search_open() && !header.mobile_menu_open());
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// Public modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod boot;
pub mod config;
pub mod error;
pub mod features;
pub mod fragments;
pub mod header;
pub mod nav;
pub mod newsletter;
pub mod notice;
pub mod scroll;
pub mod slot;
pub mod throttle;
pub mod timer;
pub mod validation;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports for convenience
// ─────────────────────────────────────────────────────────────────────────────

pub use boot::{BootHost, BootReport, BootStep, MOUNT_SEQUENCE, StepOutcome, boot};
pub use config::{CONFIG_ELEMENT_ID, SiteConfig, load_config, parse_config};
pub use error::{Result, SiteError};
pub use fragments::{
    Fragment, FragmentReport, FragmentSource, FragmentTarget, load_fragments, page_fragments,
};
pub use header::{HeaderState, SearchToggle};
pub use nav::{ActiveNav, NavLink, current_page};
pub use newsletter::{
    Newsletter, NewsletterView, SimulatedSubscription, SubmitOutcome, SubscriptionService,
};
pub use notice::{Notice, NoticeKind};
pub use scroll::{HeaderScroll, ScrollTracker, back_to_top_visible};
pub use slot::{Slot, SlotId};
pub use throttle::{Throttle, ThrottleDecision};
pub use timer::Timer;
pub use validation::{FieldError, FieldKind, FormValidation, validate_field, validate_form};
