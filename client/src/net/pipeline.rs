//! Sequential driver for the three analysis stages.
//!
//! DESIGN
//! ======
//! Caption, nutrition lookup, and augmentation run strictly in order; each
//! depends on the previous stage's output. There is no fan-out, no retry,
//! and no timeout. The first failure aborts the remainder and surfaces one
//! fixed message through the page's state signal.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use leptos::prelude::*;

use super::api;
use crate::state::analysis::AnalysisState;
use crate::state::upload::UploadedImage;

/// The single user-facing message for any pipeline failure. Stage detail
/// goes to the console log only.
pub const ANALYSIS_FAILED_MESSAGE: &str = "An error occurred while processing the image.";

#[cfg(any(test, feature = "csr"))]
fn stage_log_line(stage: &str, detail: &str) -> String {
    format!("analysis {stage} stage failed: {detail}")
}

/// Run the pipeline for one accepted photo, reporting progress through the
/// Main page's state signal. The caller has already invoked
/// [`AnalysisState::begin`] so the loading flag is up before the first await.
///
/// The generation current at entry is captured; if a newer photo restarts
/// the state mid-flight, every remaining write from this run is dropped.
pub async fn run_analysis(state: RwSignal<AnalysisState>, image: UploadedImage) {
    let run = state.get_untracked().run;

    if !update_if_current(state, run, AnalysisState::start_caption) {
        return;
    }
    let ingredients = match api::caption_image(&image).await {
        Ok(ingredients) => ingredients,
        Err(detail) => return fail(state, run, "caption", &detail),
    };
    if !update_if_current(state, run, |s| s.ingredients_ready(ingredients.clone())) {
        return;
    }

    if !update_if_current(state, run, AnalysisState::start_nutrition) {
        return;
    }
    let rows = match api::lookup_nutrition(&ingredients).await {
        Ok(rows) => rows,
        Err(detail) => return fail(state, run, "nutrition", &detail),
    };
    if !update_if_current(state, run, |s| s.nutrition_ready(rows.clone())) {
        return;
    }

    if !update_if_current(state, run, AnalysisState::start_augment) {
        return;
    }
    match api::augment_nutrition(&ingredients, &rows).await {
        Ok(summary) => {
            let _ = update_if_current(state, run, |s| s.complete(summary));
        }
        Err(detail) => fail(state, run, "augment", &detail),
    }
}

/// Apply `apply` only if `run` is still the live generation. Returns false
/// once the run has been superseded by a newer upload.
fn update_if_current(
    state: RwSignal<AnalysisState>,
    run: u64,
    apply: impl FnOnce(&mut AnalysisState),
) -> bool {
    if state.get_untracked().run != run {
        return false;
    }
    state.update(apply);
    true
}

fn fail(state: RwSignal<AnalysisState>, run: u64, stage: &str, detail: &str) {
    #[cfg(feature = "csr")]
    log::error!("{}", stage_log_line(stage, detail));
    #[cfg(not(feature = "csr"))]
    let _ = (stage, detail);
    let _ = update_if_current(state, run, |s| s.fail(ANALYSIS_FAILED_MESSAGE));
}
