//! Fallback error screen rendering a message from the query string.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn ErrorPage() -> impl IntoView {
    let query = use_query_map();
    let message = move || {
        query
            .read()
            .get("message")
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Unknown error occurred".to_owned())
    };

    view! {
        <div class="error-page">
            <h1>"Oops!"</h1>
            <p>"Sorry, an unexpected error has occurred."</p>
            <p class="error-page__detail">{message}</p>
            <a class="btn" href=crate::config::routes::HOME>
                "Back to home"
            </a>
        </div>
    }
}
