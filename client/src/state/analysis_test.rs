use super::*;

fn sample_image() -> UploadedImage {
    UploadedImage {
        name: "lunch.jpg".to_owned(),
        mime_type: "image/jpeg".to_owned(),
    }
}

fn sample_rows() -> Vec<NutritionRow> {
    vec![NutritionRow {
        ingredient: "raw salmon".to_owned(),
        carbs_g: 0.0,
        energy_kcal: 208.0,
        protein_g: 20.4,
        fat_g: 13.4,
    }]
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = AnalysisState::default();
    assert_eq!(state.phase, AnalysisPhase::Idle);
    assert!(state.image.is_none());
    assert!(state.preview_url.is_none());
    assert!(state.ingredients.is_none());
    assert!(state.nutrition.is_none());
    assert!(state.augmented.is_none());
    assert!(state.error.is_none());
}

#[test]
fn default_state_is_not_loading() {
    assert!(!AnalysisState::default().loading());
}

// =============================================================
// begin
// =============================================================

#[test]
fn begin_sets_loading_immediately() {
    let mut state = AnalysisState::default();
    state.begin(sample_image(), Some("blob:preview".to_owned()));
    assert_eq!(state.phase, AnalysisPhase::Uploading);
    assert!(state.loading());
    assert_eq!(state.preview_url.as_deref(), Some("blob:preview"));
}

#[test]
fn begin_records_an_allow_listed_image() {
    let mut state = AnalysisState::default();
    state.begin(sample_image(), None);
    let image = state.image.expect("image recorded");
    assert_eq!(image.name, "lunch.jpg");
    assert!(image.has_allowed_mime());
}

#[test]
fn begin_clears_prior_error_and_results() {
    let mut state = AnalysisState::default();
    state.begin(sample_image(), None);
    state.ingredients_ready(vec!["white rice".to_owned()]);
    state.fail("went wrong");

    state.begin(sample_image(), None);
    assert!(state.error.is_none());
    assert!(state.ingredients.is_none());
    assert!(state.nutrition.is_none());
    assert!(state.augmented.is_none());
}

#[test]
fn begin_starts_a_new_generation_each_time() {
    let mut state = AnalysisState::default();
    assert_eq!(state.run, 0);
    state.begin(sample_image(), None);
    assert_eq!(state.run, 1);
    state.begin(sample_image(), None);
    assert_eq!(state.run, 2);
}

// =============================================================
// Stage progression
// =============================================================

#[test]
fn stage_setters_advance_phases_in_order() {
    let mut state = AnalysisState::default();
    state.begin(sample_image(), None);

    state.start_caption();
    assert_eq!(state.phase, AnalysisPhase::Captioning);

    state.ingredients_ready(vec!["cucumber".to_owned()]);
    assert_eq!(state.phase, AnalysisPhase::IngredientsReady);

    state.start_nutrition();
    assert_eq!(state.phase, AnalysisPhase::NutritionLookup);

    state.nutrition_ready(sample_rows());
    assert_eq!(state.phase, AnalysisPhase::NutritionReady);

    state.start_augment();
    assert_eq!(state.phase, AnalysisPhase::Augmenting);

    state.complete("Roughly 350 kcal total.".to_owned());
    assert_eq!(state.phase, AnalysisPhase::Complete);
}

#[test]
fn loading_holds_through_every_in_flight_phase() {
    let mut state = AnalysisState::default();
    state.begin(sample_image(), None);
    assert!(state.loading());
    state.start_caption();
    assert!(state.loading());
    state.ingredients_ready(vec!["sesame seeds".to_owned()]);
    assert!(state.loading());
    state.start_nutrition();
    assert!(state.loading());
    state.nutrition_ready(sample_rows());
    assert!(state.loading());
    state.start_augment();
    assert!(state.loading());
}

// =============================================================
// Terminal phases
// =============================================================

#[test]
fn complete_clears_loading_and_keeps_results() {
    let mut state = AnalysisState::default();
    state.begin(sample_image(), None);
    state.ingredients_ready(vec!["white rice".to_owned()]);
    state.nutrition_ready(sample_rows());
    state.complete("Summary.".to_owned());

    assert!(!state.loading());
    assert!(state.ingredients.is_some());
    assert!(state.nutrition.is_some());
    assert_eq!(state.augmented.as_deref(), Some("Summary."));
    assert!(state.error.is_none());
}

#[test]
fn fail_clears_loading_in_the_error_outcome() {
    let mut state = AnalysisState::default();
    state.begin(sample_image(), None);
    state.fail("caption stage failed");
    assert!(!state.loading());
    assert_eq!(state.phase, AnalysisPhase::Failed);
}

#[test]
fn fail_discards_partial_results_but_keeps_the_photo() {
    let mut state = AnalysisState::default();
    state.begin(sample_image(), Some("blob:preview".to_owned()));
    state.ingredients_ready(vec!["raw salmon".to_owned()]);
    state.nutrition_ready(sample_rows());
    state.fail("nutrition stage failed");

    assert!(state.ingredients.is_none());
    assert!(state.nutrition.is_none());
    assert!(state.augmented.is_none());
    assert_eq!(state.error.as_deref(), Some("nutrition stage failed"));
    assert!(state.image.is_some());
    assert_eq!(state.preview_url.as_deref(), Some("blob:preview"));
}
