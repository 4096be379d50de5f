//! Analysis-session state for the Main page pipeline.
//!
//! DESIGN
//! ======
//! One value drives the whole page: the current phase plus whichever stage
//! outputs have arrived. Stage setters keep the phase and the partial
//! results in lockstep so the view layer only reads, never infers.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use crate::net::types::NutritionRow;
use crate::state::upload::UploadedImage;

/// Pipeline phase for one food photo analysis.
///
/// Phases advance strictly forward; any stage failure jumps to `Failed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// No photo selected yet.
    #[default]
    Idle,
    /// Photo accepted and preview created; pipeline about to start.
    Uploading,
    /// Caption request in flight.
    Captioning,
    /// Ingredient list arrived; nutrition lookup not yet started.
    IngredientsReady,
    /// Nutrition lookup request in flight.
    NutritionLookup,
    /// Nutrition rows arrived; augmentation not yet started.
    NutritionReady,
    /// Augmentation request in flight.
    Augmenting,
    /// All stage outputs present.
    Complete,
    /// A stage failed; partial results were discarded.
    Failed,
}

/// State owned by the Main page: the selected photo, its preview, stage
/// outputs, and the single user-facing error channel.
#[derive(Clone, Debug, Default)]
pub struct AnalysisState {
    /// Generation counter, bumped by [`begin`](Self::begin). A pipeline task
    /// captures the generation it was started for; writes from a superseded
    /// generation are dropped instead of landing on the restarted state.
    pub run: u64,
    pub phase: AnalysisPhase,
    pub image: Option<UploadedImage>,
    pub preview_url: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub nutrition: Option<Vec<NutritionRow>>,
    pub augmented: Option<String>,
    pub error: Option<String>,
}

impl AnalysisState {
    /// True while a pipeline run is in flight: set the moment a photo is
    /// accepted, cleared on both terminal phases.
    #[must_use]
    pub fn loading(&self) -> bool {
        !matches!(
            self.phase,
            AnalysisPhase::Idle | AnalysisPhase::Complete | AnalysisPhase::Failed
        )
    }

    /// Accept a new photo: start a new generation, drop results from any
    /// previous run, clear the error, and enter `Uploading`. A pipeline
    /// still in flight for the old generation is thereby superseded.
    pub fn begin(&mut self, image: UploadedImage, preview_url: Option<String>) {
        self.run += 1;
        self.phase = AnalysisPhase::Uploading;
        self.image = Some(image);
        self.preview_url = preview_url;
        self.ingredients = None;
        self.nutrition = None;
        self.augmented = None;
        self.error = None;
    }

    /// Mark the caption request as in flight.
    pub fn start_caption(&mut self) {
        self.phase = AnalysisPhase::Captioning;
    }

    /// Record the captioned ingredient list.
    pub fn ingredients_ready(&mut self, ingredients: Vec<String>) {
        self.ingredients = Some(ingredients);
        self.phase = AnalysisPhase::IngredientsReady;
    }

    /// Mark the nutrition lookup as in flight.
    pub fn start_nutrition(&mut self) {
        self.phase = AnalysisPhase::NutritionLookup;
    }

    /// Record the matched nutrition rows.
    pub fn nutrition_ready(&mut self, rows: Vec<NutritionRow>) {
        self.nutrition = Some(rows);
        self.phase = AnalysisPhase::NutritionReady;
    }

    /// Mark the augmentation request as in flight.
    pub fn start_augment(&mut self) {
        self.phase = AnalysisPhase::Augmenting;
    }

    /// Record the augmentation text and finish the run.
    pub fn complete(&mut self, augmented: String) {
        self.augmented = Some(augmented);
        self.phase = AnalysisPhase::Complete;
    }

    /// Abort the run: discard partial stage outputs and surface one message.
    /// The photo and its preview stay so the user can see what failed.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.ingredients = None;
        self.nutrition = None;
        self.augmented = None;
        self.error = Some(message.into());
        self.phase = AnalysisPhase::Failed;
    }
}
