//! REST API helpers, one function per endpoint.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` carrying the failure detail.
//! Callers decide what the user sees; the detail itself only goes to the
//! console log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use super::types::{
    AugmentRequest, AugmentResponse, CaptionResponse, NutritionRequest, NutritionResponse,
    TestResponse,
};
use super::types::NutritionRow;
use crate::state::upload::UploadedImage;

/// Connectivity-test endpoint served by the backend.
pub const TEST_ENDPOINT: &str = "/api/test";
/// Caption stage endpoint; proxied to the image-captioning service.
pub const CAPTION_ENDPOINT: &str = "/api/analyze/caption";
/// Nutrition lookup endpoint; proxied to the USDA matching service.
pub const NUTRITION_ENDPOINT: &str = "/api/analyze/nutrition";
/// Augmentation endpoint; proxied to the nutrition-augmentation service.
pub const AUGMENT_ENDPOINT: &str = "/api/analyze/augment";

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(endpoint: &str, status: u16) -> String {
    format!("{endpoint} request failed: {status}")
}

/// Fetch the connectivity-check message from `GET /api/test`.
///
/// # Errors
///
/// Returns the underlying failure detail. The Test page shows its own fixed
/// string and logs the detail.
pub async fn fetch_test_message() -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(TEST_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(TEST_ENDPOINT, resp.status()));
        }
        let body: TestResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Caption stage: upload the photo bytes, get back the ingredient list.
///
/// The file is sent as the raw request body with its declared content type;
/// contents are never read on the client.
///
/// # Errors
///
/// Returns the failure detail if the upload or decode fails.
pub async fn caption_image(image: &UploadedImage) -> Result<Vec<String>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(CAPTION_ENDPOINT)
            .header("content-type", &image.mime_type)
            .body(image.file.clone())
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(CAPTION_ENDPOINT, resp.status()));
        }
        let body: CaptionResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.ingredients)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = image;
        Err("not available outside the browser".to_owned())
    }
}

/// Nutrition stage: match each ingredient to its closest database entry.
///
/// # Errors
///
/// Returns the failure detail if the lookup fails.
pub async fn lookup_nutrition(ingredients: &[String]) -> Result<Vec<NutritionRow>, String> {
    #[cfg(feature = "csr")]
    {
        let req = NutritionRequest {
            ingredients: ingredients.to_vec(),
        };
        let resp = gloo_net::http::Request::post(NUTRITION_ENDPOINT)
            .json(&req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(NUTRITION_ENDPOINT, resp.status()));
        }
        let body: NutritionResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.rows)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ingredients;
        Err("not available outside the browser".to_owned())
    }
}

/// Augmentation stage: turn the per-ingredient facts into whole-dish text.
///
/// # Errors
///
/// Returns the failure detail if the augmentation call fails.
pub async fn augment_nutrition(
    ingredients: &[String],
    nutrition: &[NutritionRow],
) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let req = AugmentRequest {
            ingredients: ingredients.to_vec(),
            nutrition: nutrition.to_vec(),
        };
        let resp = gloo_net::http::Request::post(AUGMENT_ENDPOINT)
            .json(&req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(AUGMENT_ENDPOINT, resp.status()));
        }
        let body: AugmentResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.summary)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ingredients, nutrition);
        Err("not available outside the browser".to_owned())
    }
}
