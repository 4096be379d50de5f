//! File picker for food photos with a MIME allow-list gate.

#[cfg(test)]
#[path = "image_upload_test.rs"]
mod image_upload_test;

use leptos::prelude::*;

use crate::state::upload::UploadedImage;
#[cfg(any(test, feature = "csr"))]
use crate::util::mime::is_allowed_mime;

/// Gate applied to every picker selection. The callback fires iff this
/// returns true; rejected types are dropped without user feedback.
#[cfg(any(test, feature = "csr"))]
fn accepts(mime_type: &str) -> bool {
    is_allowed_mime(mime_type)
}

/// Hidden file input behind a styled button.
///
/// Invokes `on_select` exactly once per accepted selection and never reads
/// file contents. Selections outside the allow-list are silently ignored.
#[component]
pub fn ImageUpload(on_select: Callback<UploadedImage>) -> impl IntoView {
    let on_change = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                else {
                    return;
                };
                let Some(file) = input.files().and_then(|list| list.get(0)) else {
                    return;
                };
                let mime_type = file.type_();
                if !accepts(&mime_type) {
                    return;
                }
                on_select.run(UploadedImage {
                    name: file.name(),
                    mime_type,
                    file,
                });
                // Reset so picking the same file again fires another change event.
                input.set_value("");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::Event| {
                let _ = on_select;
            }
        }
    };

    view! {
        <div class="image-upload">
            <label class="btn btn--primary image-upload__label">
                "Upload Image"
                <input
                    class="image-upload__input"
                    type="file"
                    accept="image/*"
                    on:change=on_change
                />
            </label>
        </div>
    }
}
