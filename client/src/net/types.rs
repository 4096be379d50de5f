//! Wire DTOs for the client/service boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON payloads of the backend test endpoint and the
//! analysis stage services so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `GET /api/test`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestResponse {
    pub message: String,
}

/// Caption stage output: ingredient names in caption order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptionResponse {
    pub ingredients: Vec<String>,
}

/// Request body for the nutrition lookup stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NutritionRequest {
    pub ingredients: Vec<String>,
}

/// One matched ingredient with nutrition facts per 100g.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NutritionRow {
    /// Ingredient the row was matched for.
    pub ingredient: String,
    /// Carbohydrates in grams.
    pub carbs_g: f64,
    /// Energy in kilocalories.
    pub energy_kcal: f64,
    /// Protein in grams.
    pub protein_g: f64,
    /// Fat in grams.
    pub fat_g: f64,
}

/// Nutrition lookup output: one row per matched ingredient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NutritionResponse {
    pub rows: Vec<NutritionRow>,
}

/// Request body for the augmentation stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AugmentRequest {
    pub ingredients: Vec<String>,
    pub nutrition: Vec<NutritionRow>,
}

/// Augmentation stage output: readable whole-dish summary text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AugmentResponse {
    pub summary: String,
}

/// Flat profile record rendered by the profile page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileUser {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub bio: String,
}

impl ProfileUser {
    /// Hard-coded record shown when no profile is supplied.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            avatar_url: "https://via.placeholder.com/150".to_owned(),
            bio: "Software Developer".to_owned(),
        }
    }
}
