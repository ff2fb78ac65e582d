//! Session fingerprint extraction.
//!
//! The session identity is carried in a login cookie whose value is an
//! opaque fingerprint string. Absence of the cookie means logged out, in
//! which case every skin operation is a no-op and the UI hides its
//! affordances.

/// Name of the login cookie carrying the session fingerprint.
pub const SESSION_COOKIE: &str = "fable_logged_in";

/// Extract a named cookie value from a raw `Cookie` header.
///
/// Returns `None` when the cookie is absent or has an empty value.
pub fn fingerprint_from_cookie_header(header: &str, cookie_name: &str) -> Option<String> {
    for pair in header.split(';') {
        let Some((name, value)) = pair.trim().split_once('=') else {
            continue;
        };
        if name.trim() == cookie_name {
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            return Some(value.to_string());
        }
    }
    None
}

/// Extract the session fingerprint from a raw `Cookie` header, using the
/// standard login cookie name.
pub fn session_fingerprint(header: &str) -> Option<String> {
    fingerprint_from_cookie_header(header, SESSION_COOKIE)
}
