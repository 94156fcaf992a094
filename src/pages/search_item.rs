//! Flyer search and add-item screen for one shop list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keystrokes feed a 1000 ms debounce gate; only the last value within a
//! quiescent window issues a search request. Adding an item (typed or from a
//! flyer) issues one PUT and then returns to the list screen, which refetches
//! and shows the backend-confirmed state.

#[cfg(test)]
#[path = "search_item_test.rs"]
mod search_item_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::flyer_card::FlyerCard;
use crate::components::top_bar::TopBar;
use crate::net::api::NewItem;
use crate::net::types::FlyerItem;
use crate::pages::edit_shop_list::parse_list_id;
use crate::state::search::SearchState;
use crate::util::debounce::{DebounceGate, SEARCH_DEBOUNCE_MS};
#[cfg(feature = "hydrate")]
use crate::util::auth::redirect_to_login;

/// Build the add-item body for a free-typed term. `None` for blank input.
pub(crate) fn typed_new_item(term: &str) -> Option<NewItem> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(NewItem {
        item_name: trimmed.to_owned(),
        ..NewItem::default()
    })
}

/// Build the add-item body from a flyer match, carrying brand, description,
/// and thumbnail when the flyer has them.
pub(crate) fn flyer_to_new_item(flyer: &FlyerItem) -> NewItem {
    NewItem {
        item_name: flyer.product_name.clone(),
        brand_name: (!flyer.brand.is_empty()).then(|| flyer.brand.clone()),
        extra_info: (!flyer.description.is_empty()).then(|| flyer.description.clone()),
        thumbnail: (!flyer.image_url.is_empty()).then(|| flyer.image_url.clone()),
    }
}

/// Run one flyer search into the shared signal.
#[cfg(feature = "hydrate")]
async fn run_search(search: RwSignal<SearchState>, term: String) {
    search.update(|s| {
        s.searching = true;
        s.error = None;
    });
    let session = crate::session::Session::from_window();
    match crate::net::api::search_flyers(&session, &term).await {
        Ok(results) => search.update(|s| {
            s.results = results;
            s.searching = false;
        }),
        Err(err) if err.is_auth_failure() => redirect_to_login(),
        Err(err) => search.update(|s| {
            s.results.clear();
            s.searching = false;
            s.error = Some(err.to_string());
        }),
    }
}

/// Add an item, then return to the list screen on success.
#[cfg(feature = "hydrate")]
fn add_and_return(search: RwSignal<SearchState>, list_id: i64, item: NewItem) {
    search.update(|s| {
        s.adding = true;
        s.add_error = None;
    });
    leptos::task::spawn_local(async move {
        let session = crate::session::Session::from_window();
        match crate::net::api::add_item(&session, list_id, &item).await {
            Ok(()) => {
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .location()
                        .set_href(&crate::config::routes::shop_list(list_id));
                }
            }
            Err(err) if err.is_auth_failure() => redirect_to_login(),
            Err(err) => search.update(|s| {
                s.adding = false;
                s.add_error = Some(err.to_string());
            }),
        }
    });
}

#[component]
pub fn SearchItemPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let params = use_params_map();

    let list_id = Memo::new(move |_| parse_list_id(params.read().get("id")));
    let term = RwSignal::new(String::new());

    // Fresh state per mount; stale results from another list must not leak in.
    search.set(SearchState::default());

    let gate = DebounceGate::new();
    let cleanup_gate = gate.clone();
    on_cleanup(move || cleanup_gate.cancel());

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        term.set(value.clone());
        let trimmed = value.trim().to_owned();
        if trimmed.is_empty() {
            gate.cancel();
            search.update(|s| {
                s.results.clear();
                s.searching = false;
                s.error = None;
            });
            return;
        }
        let generation = gate.arm();
        #[cfg(feature = "hydrate")]
        {
            let gate = gate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(SEARCH_DEBOUNCE_MS))
                    .await;
                if !gate.is_current(generation) {
                    return;
                }
                run_search(search, trimmed).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = generation;
        }
    };

    let on_add_typed = move |_| {
        let (Ok(id), Some(item)) = (list_id.get_untracked(), typed_new_item(&term.get_untracked()))
        else {
            return;
        };
        #[cfg(feature = "hydrate")]
        add_and_return(search, id, item);
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, item);
        }
    };

    let on_add_flyer = Callback::new(move |flyer: FlyerItem| {
        let Ok(id) = list_id.get_untracked() else {
            return;
        };
        let item = flyer_to_new_item(&flyer);
        #[cfg(feature = "hydrate")]
        add_and_return(search, id, item);
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, item);
        }
    });

    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(history) = window.history() {
                    let _ = history.back();
                }
            }
        }
    };

    view! {
        <div class="search-page">
            <TopBar on_profile_updated=Callback::new(|()| {})/>

            <div class="search-page__panel">
                <div class="search-page__header">
                    <button class="btn" on:click=on_back>
                        "Back"
                    </button>
                    <h1>"Add Items"</h1>
                </div>

                <Show when=move || list_id.get().is_err()>
                    <p class="search-page__error">
                        {move || list_id.get().err().unwrap_or_default()}
                    </p>
                </Show>

                <div class="search-page__controls">
                    <input
                        class="search-page__input"
                        type="text"
                        placeholder="Search flyers for a product..."
                        prop:value=move || term.get()
                        on:input=on_input
                    />
                    <button
                        class="btn btn--primary"
                        disabled=move || {
                            search.get().adding || term.get().trim().is_empty()
                        }
                        on:click=on_add_typed
                    >
                        "Add as typed"
                    </button>
                </div>

                <Show when=move || search.get().add_error.is_some()>
                    <p class="search-page__error">
                        {move || search.get().add_error.unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || search.get().error.is_some()>
                    <p class="search-page__error">
                        {move || search.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || search.get().searching>
                    <p class="search-page__status">"Searching..."</p>
                </Show>

                <Show when=move || {
                    let s = search.get();
                    !s.searching && s.results.is_empty() && !term.get().trim().is_empty()
                        && s.error.is_none()
                }>
                    <p class="search-page__status">"No flyer deals found."</p>
                </Show>

                <div class="search-page__results">
                    {move || {
                        search
                            .get()
                            .results
                            .into_iter()
                            .map(|flyer| {
                                view! {
                                    <FlyerCard
                                        flyer=flyer
                                        on_add=on_add_flyer
                                        busy=Signal::derive(move || search.get().adding)
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </div>
    }
}
