//! Home page with navigation to the other pages.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Navigation actions offered by the home page, as (label, route) pairs.
/// Every target here must have a matching `Route` in `app`.
fn nav_links() -> [(&'static str, &'static str); 3] {
    [
        ("Go to Profile", "/profile"),
        ("Take a Test", "/test"),
        ("Go to Main", "/main"),
    ]
}

/// Landing page — a short blurb and one button per destination route.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="home-page">
            <h1>"Welcome to Food AI"</h1>
            <div class="home-page__content">
                <p>"Upload a food photo and explore its ingredients and nutrition."</p>
                <div class="home-page__nav">
                    {nav_links()
                        .into_iter()
                        .map(|(label, path)| {
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    class="nav-button"
                                    on:click=move |_| navigate(path, NavigateOptions::default())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
