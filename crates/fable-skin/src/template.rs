//! Bundled starter template for user-authored skins.

/// The downloadable CSS template, with the required header fields
/// already in place.
pub fn template() -> &'static str {
    include_str!("../assets/template.css")
}
