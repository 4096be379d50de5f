//! Object-URL lifecycle for the photo preview.
//!
//! A preview URL is created when a photo is accepted and revoked on the next
//! selection or when the page unmounts. Requires a browser environment;
//! native builds safely no-op.

use crate::state::upload::UploadedImage;

/// Create a blob URL for previewing the selected photo.
///
/// Returns `None` outside the browser.
#[must_use]
pub fn create_preview_url(image: &UploadedImage) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::Url::create_object_url_with_blob(&image.file).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = image;
        None
    }
}

/// Release a previously created blob URL. Best-effort.
pub fn revoke_preview_url(url: &str) {
    #[cfg(feature = "csr")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
