//! Page-level scenarios across the header, footer and form pieces.

use criyagen_site::{
    FieldError, FieldKind, HeaderState, NavLink, SiteConfig, Slot, back_to_top_visible,
    validate_form,
};

// ============================================
// Scroll
// ============================================

#[test]
fn scroll_down_then_back_up_toggles_header_and_back_to_top() {
    let config = SiteConfig::default();
    let mut header = HeaderState::new("/", 0, &config);

    let down = header.scroll_to(350.0);
    assert!(down.scrolled);
    assert!(back_to_top_visible(350.0, config.back_to_top_offset));

    let up = header.scroll_to(50.0);
    assert!(!up.scrolled);
    assert!(!up.hidden);
    assert!(!back_to_top_visible(50.0, config.back_to_top_offset));
}

// ============================================
// Navigation
// ============================================

fn site_links() -> Vec<NavLink> {
    vec![
        NavLink::new(Some("home"), None),
        NavLink::new(Some("about"), None),
        NavLink::new(Some("consulting"), Some(0)),
        NavLink::new(Some("training"), Some(0)),
        NavLink::new(Some("case-studies"), Some(1)),
        NavLink::new(Some("contact"), None),
    ]
}

#[test]
fn every_known_page_marks_exactly_one_link() {
    let links = site_links();
    for (path, expected_idx, dropdown) in [
        ("/", 0, None),
        ("/index.html", 0, None),
        ("/about.html", 1, None),
        ("/services/training.html", 3, Some(0)),
        ("/case-studies", 4, Some(1)),
    ] {
        let header = HeaderState::new(path, 2, &SiteConfig::default());
        let active = header.resolve_nav(&links);
        assert_eq!(active.active_count(), 1, "{path}");
        assert!(active.links[expected_idx], "{path}");
        assert_eq!(active.dropdowns.iter().next().copied(), dropdown, "{path}");
    }
}

#[test]
fn unknown_page_marks_nothing() {
    let header = HeaderState::new("/careers.html", 2, &SiteConfig::default());
    let active = header.resolve_nav(&site_links());
    assert_eq!(active.active_count(), 0);
    assert!(active.dropdowns.is_empty());
}

// ============================================
// Forms
// ============================================

#[test]
fn empty_required_field_blocks_submit_with_one_error() {
    let result = validate_form([
        (FieldKind::Other, "Ravi"),
        (FieldKind::Email, ""),
        (FieldKind::Tel, "+91 22 5550 0199"),
    ]);
    assert!(!result.is_valid());
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.fields[1], Some(FieldError::Required));
}

// ============================================
// Transient overlays
// ============================================

#[test]
fn two_tooltip_shows_leave_only_the_latest() {
    let mut tooltip = Slot::new();
    let mut on_page = Vec::new();

    for text in ["Call us", "Email us"] {
        let (_, replaced) = tooltip.show(text);
        if let Some(old) = replaced {
            on_page.retain(|t| *t != old);
        }
        on_page.push(text);
    }

    assert_eq!(on_page, vec!["Email us"]);
    assert_eq!(tooltip.current(), Some(&"Email us"));
}
