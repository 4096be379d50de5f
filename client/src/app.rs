//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, main::MainPage, profile::ProfilePage, test::TestPage};

/// Root application component.
///
/// Pages own their state independently, so no shared contexts are provided
/// here; the router is the only app-wide concern.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/food-ai.css"/>
        <Title text="Food AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                // ProfilePage takes an optional prop, so it needs a closure here.
                <Route path=StaticSegment("profile") view=|| view! { <ProfilePage/> }/>
                <Route path=StaticSegment("test") view=TestPage/>
                <Route path=StaticSegment("main") view=MainPage/>
            </Routes>
        </Router>
    }
}
