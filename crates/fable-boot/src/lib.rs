//! Early-boot skin application.
//!
//! Runs before the rest of the skin manager is even loaded, to close
//! the flash-of-unstyled-content window: read the raw cookie header,
//! read the raw stored document, and if they agree on a session with an
//! active skin, hand back its CSS for immediate injection.
//!
//! This crate deliberately duplicates tiny pieces of `fable-types` and
//! `fable-render` (cookie name, element id, fingerprint check) instead
//! of depending on them. The duplication is what lets it run first; a
//! shared dependency would reintroduce the load-order problem this path
//! exists to avoid. Every failure mode is a silent `None` -- this code
//! must never block or break page setup.

use serde_json::Value;

/// Name of the login cookie carrying the session fingerprint.
/// Mirrors `fable_types::SESSION_COOKIE`.
pub const SESSION_COOKIE: &str = "fable_logged_in";

/// Fixed id of the injected style element.
/// Mirrors `fable_render::STYLE_ELEMENT_ID`.
pub const STYLE_ELEMENT_ID: &str = "fable-active-skin";

/// Resolve the active skin's CSS from raw inputs.
///
/// Returns `Some(css)` only when the cookie header yields a
/// fingerprint, the stored document parses, its fingerprint matches,
/// and the active record exists with non-empty CSS. Anything else --
/// logged out, missing document, corrupt JSON, stale fingerprint, no
/// active skin -- yields `None`.
pub fn early_skin_css(cookie_header: Option<&str>, raw_document: Option<&str>) -> Option<String> {
    let fingerprint = cookie_fingerprint(cookie_header?)?;
    let doc: Value = serde_json::from_str(raw_document?).ok()?;

    if doc.get("fingerprint")?.as_str()? != fingerprint {
        return None;
    }
    let active = doc.get("active")?.as_str()?;
    let css = doc.get("data")?.get(active)?.get("css")?.as_str()?;
    if css.is_empty() {
        return None;
    }
    Some(css.to_string())
}

/// Minimal cookie-header scan for the login fingerprint.
fn cookie_fingerprint(header: &str) -> Option<&str> {
    for pair in header.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=')
            && name.trim() == SESSION_COOKIE
        {
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            return Some(value);
        }
    }
    None
}
