//! MIME allow-list for food photo uploads.

#[cfg(test)]
#[path = "mime_test.rs"]
mod mime_test;

/// MIME types the upload gate accepts. `image/jpeg` covers both `.jpg`
/// and `.jpeg` files.
pub const ALLOWED_IMAGE_MIME: [&str; 2] = ["image/jpeg", "image/png"];

/// Whether a declared MIME type is on the upload allow-list.
///
/// Matching is exact; types with parameters or different casing are
/// rejected. Only the declared type is checked — file contents are never
/// inspected.
#[must_use]
pub fn is_allowed_mime(mime: &str) -> bool {
    ALLOWED_IMAGE_MIME.contains(&mime)
}
