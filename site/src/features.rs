//! Small decisions behind the page-wide features: tooltip placement,
//! in-page anchor targets, lazy image sources and CSS timings.

use std::time::Duration;

/// Pixel offset between the pointer and the tooltip's top-left corner.
pub const TOOLTIP_OFFSET: f64 = 10.0;

pub fn tooltip_position(client_x: f64, client_y: f64) -> (f64, f64) {
    (client_x + TOOLTIP_OFFSET, client_y + TOOLTIP_OFFSET)
}

/// Element id an in-page link points at. `None` for the bare `#` and for
/// anything that is not a fragment link.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Real source for a lazy image: its `data-src`, else what it already has.
pub fn lazy_source<'a>(data_src: Option<&'a str>, current: &'a str) -> &'a str {
    match data_src {
        Some(src) if !src.is_empty() => src,
        _ => current,
    }
}

/// CSS `<time>` for `duration`, so animations match the removal timers.
pub fn css_time(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

/// `transition` value fading opacity over `duration`.
pub fn fade_transition(duration: Duration) -> String {
    format!("opacity {} ease", css_time(duration))
}

/// `animation` value playing `keyframes` once over `duration` and holding the end state.
pub fn exit_animation(keyframes: &str, duration: Duration) -> String {
    format!("{keyframes} {} ease forwards", css_time(duration))
}
