//! Main page — the food photo analysis workflow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the full pipeline state for one photo: preview, stage progress,
//! result panels, and the single error banner. Other pages share none of
//! this.


use leptos::prelude::*;

use crate::components::image_upload::ImageUpload;
use crate::net::types::NutritionRow;
use crate::state::analysis::AnalysisState;
use crate::state::upload::UploadedImage;
use crate::util::preview;

/// Main page — upload a food photo, run the analysis pipeline, and render
/// the result panels or the error banner.
#[component]
pub fn MainPage() -> impl IntoView {
    let state = RwSignal::new(AnalysisState::default());

    // Preview URLs are browser resources; release on unmount.
    on_cleanup(move || {
        if let Some(url) = state.get_untracked().preview_url {
            preview::revoke_preview_url(&url);
        }
    });

    let on_select = Callback::new(move |image: UploadedImage| {
        // A new selection replaces the previous preview.
        if let Some(url) = state.get_untracked().preview_url {
            preview::revoke_preview_url(&url);
        }
        let url = preview::create_preview_url(&image);
        state.update(|s| s.begin(image.clone(), url));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::net::pipeline::run_analysis(state, image).await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = image;
    });

    view! {
        <div class="main-page">
            <h1>"🍎 Food AI"</h1>
            <p class="main-page__tagline">
                "Analyze your food and get detailed nutritional insights! 🎉"
            </p>

            <section class="main-page__workflow">
                <h2>"📸 Upload a Food Image"</h2>
                <ImageUpload on_select=on_select/>

                <Show when=move || state.get().image.is_none()>
                    <p class="alert alert--info">
                        "Please upload a JPG, PNG, or JPEG image of your food to get started!"
                    </p>
                </Show>

                {move || {
                    state
                        .get()
                        .preview_url
                        .map(|url| {
                            view! {
                                <div class="main-page__preview">
                                    <img src=url alt="Uploaded food"/>
                                </div>
                            }
                        })
                }}

                <Show when=move || state.get().loading()>
                    <div class="main-page__spinner" aria-label="Processing"></div>
                </Show>

                {move || {
                    state
                        .get()
                        .error
                        .map(|text| {
                            view! { <p class="alert alert--error">{text}</p> }
                        })
                }}

                {move || {
                    state
                        .get()
                        .ingredients
                        .map(|items| {
                            view! {
                                <section class="main-page__panel">
                                    <h3>"🍴 Extracted Food Ingredients"</h3>
                                    <ul class="ingredient-list">
                                        {items
                                            .into_iter()
                                            .map(|item| view! { <li>{item}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </section>
                            }
                        })
                }}

                {move || {
                    state
                        .get()
                        .nutrition
                        .map(|rows| {
                            view! {
                                <section class="main-page__panel">
                                    <h3>"🍽️ Nutrition Facts (per 100g)"</h3>
                                    <NutritionTable rows=rows/>
                                </section>
                            }
                        })
                }}

                {move || {
                    state
                        .get()
                        .augmented
                        .map(|text| {
                            view! {
                                <section class="main-page__panel">
                                    <h3>"🌟 Augmented Nutrition Information"</h3>
                                    <p>{text}</p>
                                </section>
                            }
                        })
                }}

                <details class="main-page__source">
                    <summary>"📚 Source Information"</summary>
                    <p>
                        "The nutritional facts displayed above are sourced from the USDA SRLegacy \
                         Database. Our system identifies the most similar food descriptions in the \
                         database based on the ingredients we identified. While we strive to make \
                         the matches as accurate as possible, they might not always perfectly \
                         reflect the exact nutrition of your specific ingredient."
                    </p>
                </details>
            </section>
        </div>
    }
}

/// Nutrition table with one row per matched ingredient.
#[component]
fn NutritionTable(rows: Vec<NutritionRow>) -> impl IntoView {
    view! {
        <table class="nutrition-table">
            <thead>
                <tr>
                    <th>"Ingredient"</th>
                    <th>"Carbs (g)"</th>
                    <th>"Energy (kcal)"</th>
                    <th>"Protein (g)"</th>
                    <th>"Fat (g)"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.ingredient}</td>
                                <td>{format_grams(row.carbs_g)}</td>
                                <td>{format_kcal(row.energy_kcal)}</td>
                                <td>{format_grams(row.protein_g)}</td>
                                <td>{format_grams(row.fat_g)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Gram amounts render with one decimal place.
fn format_grams(value: f64) -> String {
    format!("{value:.1}")
}

/// Energy renders as whole kilocalories.
fn format_kcal(value: f64) -> String {
    format!("{value:.0}")
}
