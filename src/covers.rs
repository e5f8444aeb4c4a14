//! Artwork URL templating.
//!
//! Catalog objects carry a `dynamic_uri` with `{w}` and `{h}` placeholders.
//! Some responses hand back a URL with a baked-in resolution instead; those
//! are rewritten to the template form before the size is substituted.

// Use 3rd party
use regex::Regex;

// Use internal modules
use crate::quality::resolve_cover_resolution;

/// Builds a fetchable artwork URL at the requested square size.
///
/// The size goes through [`resolve_cover_resolution`], so oversized requests
/// come back at the 1400px cap.
pub fn artwork_url(dynamic_uri: &str, requested: u32) -> String {
    let size = resolve_cover_resolution(requested).to_string();

    let mut uri = dynamic_uri.to_owned();
    if let Ok(baked_in) = Regex::new(r"\d{3,4}x\d{3,4}") {
        if baked_in.is_match(&uri) {
            uri = baked_in.replace_all(&uri, "{w}x{h}").into_owned();
        }
    }

    uri.replace("{w}", &size).replace("{h}", &size)
}
