//! Profile page rendering a user record with a hard-coded fallback.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::ProfileUser;

/// Pick the record to render: the supplied one, or the fallback.
fn resolve_user(user: Option<ProfileUser>) -> ProfileUser {
    user.unwrap_or_else(ProfileUser::fallback)
}

/// Profile page — pure rendering of one user record, no mutation.
#[component]
pub fn ProfilePage(#[prop(optional)] user: Option<ProfileUser>) -> impl IntoView {
    let user = resolve_user(user);

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <img class="profile-card__avatar" src=user.avatar_url alt="Profile"/>
                <h2 class="profile-card__name">{user.name}</h2>
                <p class="profile-card__email">{user.email}</p>
                <p class="profile-card__bio">{user.bio}</p>
            </div>
        </div>
    }
}
