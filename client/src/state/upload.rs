//! Selected-photo handle passed from the picker to the analysis pipeline.

use crate::util::mime::is_allowed_mime;

/// A picker selection that passed the MIME allow-list.
///
/// In the browser this wraps the live `web_sys::File`; native builds (tests)
/// carry only the metadata. The handle is dropped on the next selection or
/// when the owning page unmounts.
#[derive(Clone, Debug)]
pub struct UploadedImage {
    /// File name as reported by the picker.
    pub name: String,
    /// Declared MIME type (`image/jpeg` or `image/png`).
    pub mime_type: String,
    /// Browser file handle used for the preview URL and the caption upload.
    #[cfg(feature = "csr")]
    pub file: web_sys::File,
}

impl UploadedImage {
    /// Whether the declared type is still on the allow-list. Selections are
    /// gated before construction, so this holds for every live value.
    #[must_use]
    pub fn has_allowed_mime(&self) -> bool {
        is_allowed_mime(&self.mime_type)
    }
}
