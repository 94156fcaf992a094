//! Shop-list detail: items, members, sharing, and leave.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the list ID from the route, loads the full list, and refetches it
//! after every mutation (edit, toggle, remove) so the rendered state is
//! always backend-confirmed. A 404 renders the distinct not-found message
//! rather than the generic failure.

#[cfg(test)]
#[path = "edit_shop_list_test.rs"]
mod edit_shop_list_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::edit_item_dialog::EditItemDialog;
use crate::components::top_bar::TopBar;
#[cfg(feature = "hydrate")]
use crate::config::routes;
use crate::net::api::ItemPatch;
use crate::net::types::ShopListItem;
use crate::state::lists::ActiveListState;
#[cfg(feature = "hydrate")]
use crate::util::auth::redirect_to_login;

/// Parse the route's list ID. Missing or malformed values are reported with
/// the same user-facing message.
pub(crate) fn parse_list_id(raw: Option<String>) -> Result<i64, &'static str> {
    raw.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or("No shop list ID provided")
}

/// Fetch the list into the shared detail signal.
#[cfg(feature = "hydrate")]
fn load_list(active: RwSignal<ActiveListState>, id: i64) {
    active.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        let session = crate::session::Session::from_window();
        match crate::net::api::fetch_shop_list(&session, id).await {
            Ok(list) => active.update(|s| {
                s.list = Some(list);
                s.loading = false;
                s.error = None;
            }),
            Err(err) if err.is_auth_failure() => redirect_to_login(),
            Err(err) => active.update(|s| {
                s.list = None;
                s.loading = false;
                s.error = Some(err.to_string());
            }),
        }
    });
}

/// Apply an item patch, then refetch the list.
#[cfg(feature = "hydrate")]
fn patch_item(active: RwSignal<ActiveListState>, id: i64, item_id: i64, patch: ItemPatch) {
    leptos::task::spawn_local(async move {
        let session = crate::session::Session::from_window();
        match crate::net::api::edit_item(&session, id, item_id, &patch).await {
            Ok(()) => load_list(active, id),
            Err(err) if err.is_auth_failure() => redirect_to_login(),
            Err(err) => {
                log::error!("item update failed: {err}");
                active.update(|s| s.error = Some(err.to_string()));
            }
        }
    });
}

#[component]
pub fn EditShopListPage() -> impl IntoView {
    let active = expect_context::<RwSignal<ActiveListState>>();
    let params = use_params_map();

    let list_id = Memo::new(move |_| parse_list_id(params.read().get("id")));

    let edit_target = RwSignal::new(None::<ShopListItem>);
    let remove_target = RwSignal::new(None::<i64>);
    let show_leave = RwSignal::new(false);

    // Load on mount and whenever the route param changes.
    Effect::new(move || {
        active.set(ActiveListState::default());
        match list_id.get() {
            Ok(id) => {
                #[cfg(feature = "hydrate")]
                load_list(active, id);
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = id;
                }
            }
            Err(message) => active.update(|s| {
                s.loading = false;
                s.error = Some(message.to_owned());
            }),
        }
    });

    let on_toggle_bought = move |item_id: i64, bought: bool| {
        let Ok(id) = list_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        patch_item(
            active,
            id,
            item_id,
            ItemPatch {
                is_bought: Some(!bought),
                ..ItemPatch::default()
            },
        );
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, item_id, bought);
        }
    };

    let on_edit_saved = Callback::new(move |patch: ItemPatch| {
        let (Ok(id), Some(item)) = (list_id.get_untracked(), edit_target.get_untracked()) else {
            return;
        };
        edit_target.set(None);
        #[cfg(feature = "hydrate")]
        patch_item(active, id, item.id, patch);
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, item, patch);
        }
    });

    let on_remove_confirmed = Callback::new(move |()| {
        let (Ok(id), Some(item_id)) = (list_id.get_untracked(), remove_target.get_untracked())
        else {
            return;
        };
        remove_target.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = crate::session::Session::from_window();
            match crate::net::api::remove_item(&session, id, item_id).await {
                Ok(()) => load_list(active, id),
                Err(err) if err.is_auth_failure() => redirect_to_login(),
                Err(err) => {
                    log::error!("item removal failed: {err}");
                    active.update(|s| s.error = Some(err.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, item_id);
        }
    });

    let on_leave_confirmed = Callback::new(move |()| {
        let Ok(id) = list_id.get_untracked() else {
            return;
        };
        show_leave.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = crate::session::Session::from_window();
            match crate::net::api::leave_shop_list(&session, id).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(routes::MEMBER);
                    }
                }
                Err(err) if err.is_auth_failure() => redirect_to_login(),
                Err(err) => {
                    log::error!("leave shop list failed: {err}");
                    active.update(|s| s.error = Some(err.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_share = move |_| {
        let Ok(id) = list_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = crate::session::Session::from_window();
            match crate::net::api::request_share_code(&session, id).await {
                Ok(code) => active.update(|s| s.share_code = Some(code)),
                Err(err) if err.is_auth_failure() => redirect_to_login(),
                Err(err) => {
                    log::error!("share code request failed: {err}");
                    active.update(|s| s.error = Some(err.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let on_add_items = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Ok(id) = list_id.get_untracked() {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&routes::search_item(id));
                }
            }
        }
    };

    let refresh_after_profile = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        if let Ok(id) = list_id.get_untracked() {
            load_list(active, id);
        }
    });

    view! {
        <div class="edit-list-page">
            <TopBar on_profile_updated=refresh_after_profile/>

            <Show
                when=move || !active.get().loading
                fallback=|| view! { <p class="edit-list-page__loading">"Loading..."</p> }
            >
                <Show
                    when=move || active.get().error.is_none()
                    fallback=move || {
                        view! {
                            <div class="edit-list-page__error">
                                <h1>"Error"</h1>
                                <p>{move || active.get().error.unwrap_or_default()}</p>
                            </div>
                        }
                    }
                >
                    <Show when=move || active.get().list.is_some()>
                        <div class="edit-list-page__panel">
                            <div class="edit-list-page__header">
                                <h1>
                                    {move || {
                                        active.get().list.map(|l| l.name).unwrap_or_default()
                                    }}
                                </h1>
                                <div class="edit-list-page__actions">
                                    <button class="btn btn--primary" on:click=on_add_items>
                                        "Add Items"
                                    </button>
                                    <button class="btn" on:click=on_share>
                                        "Share"
                                    </button>
                                    <button
                                        class="btn btn--danger"
                                        on:click=move |_| show_leave.set(true)
                                    >
                                        "Leave"
                                    </button>
                                </div>
                            </div>

                            <div class="edit-list-page__columns">
                                <section class="edit-list-page__items">
                                    <h2>"Items"</h2>
                                    <Show
                                        when=move || {
                                            active
                                                .get()
                                                .list
                                                .is_some_and(|l| !l.items.is_empty())
                                        }
                                        fallback=|| {
                                            view! {
                                                <p class="edit-list-page__empty">
                                                    "No items added yet"
                                                </p>
                                            }
                                        }
                                    >
                                        <ul class="item-list">
                                            {move || {
                                                active
                                                    .get()
                                                    .list
                                                    .map(|l| l.items)
                                                    .unwrap_or_default()
                                                    .into_iter()
                                                    .map(|item| {
                                                        let toggle_item = item.clone();
                                                        let edit_item = item.clone();
                                                        view! {
                                                            <li class="item-list__row">
                                                                <div class="item-list__info">
                                                                    <span class="item-list__name">
                                                                        {item.item_name.clone()}
                                                                    </span>
                                                                    <Show when={
                                                                        let has_brand = !item.brand_name.is_empty();
                                                                        move || has_brand
                                                                    }>
                                                                        <span class="item-list__brand">
                                                                            "(" {item.brand_name.clone()} ")"
                                                                        </span>
                                                                    </Show>
                                                                    <Show when={
                                                                        let has_extra = !item.extra_info.is_empty();
                                                                        move || has_extra
                                                                    }>
                                                                        <span class="item-list__extra">
                                                                            {item.extra_info.clone()}
                                                                        </span>
                                                                    </Show>
                                                                </div>
                                                                <div class="item-list__controls">
                                                                    <button
                                                                        class=if item.is_bought {
                                                                            "badge badge--bought"
                                                                        } else {
                                                                            "badge badge--pending"
                                                                        }
                                                                        title="Toggle bought"
                                                                        on:click=move |_| {
                                                                            on_toggle_bought(
                                                                                toggle_item.id,
                                                                                toggle_item.is_bought,
                                                                            );
                                                                        }
                                                                    >
                                                                        {if item.is_bought { "Bought" } else { "Pending" }}
                                                                    </button>
                                                                    <button
                                                                        class="btn btn--link"
                                                                        on:click=move |_| {
                                                                            edit_target.set(Some(edit_item.clone()));
                                                                        }
                                                                    >
                                                                        "Edit"
                                                                    </button>
                                                                    <button
                                                                        class="btn btn--link item-list__remove"
                                                                        on:click=move |_| {
                                                                            remove_target.set(Some(item.id));
                                                                        }
                                                                    >
                                                                        "Remove"
                                                                    </button>
                                                                </div>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()
                                            }}
                                        </ul>
                                    </Show>
                                </section>

                                <aside class="edit-list-page__members">
                                    <h2>"Members"</h2>
                                    <Show
                                        when=move || {
                                            active
                                                .get()
                                                .list
                                                .is_some_and(|l| !l.members.is_empty())
                                        }
                                        fallback=|| {
                                            view! {
                                                <p class="edit-list-page__empty">"No members yet"</p>
                                            }
                                        }
                                    >
                                        <ul class="member-list">
                                            {move || {
                                                let owner_id = active
                                                    .get()
                                                    .list
                                                    .map(|l| l.owner.id)
                                                    .unwrap_or_default();
                                                active
                                                    .get()
                                                    .list
                                                    .map(|l| l.members)
                                                    .unwrap_or_default()
                                                    .into_iter()
                                                    .map(|member| {
                                                        let is_owner = member.id == owner_id;
                                                        view! {
                                                            <li class="member-list__row">
                                                                <span>{member.nickname.clone()}</span>
                                                                <Show when=move || is_owner>
                                                                    <span class="badge badge--owner">"Owner"</span>
                                                                </Show>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()
                                            }}
                                        </ul>
                                    </Show>
                                </aside>
                            </div>
                        </div>
                    </Show>
                </Show>
            </Show>

            <Show when=move || edit_target.get().is_some()>
                {move || {
                    edit_target
                        .get()
                        .map(|item| {
                            view! {
                                <EditItemDialog
                                    item=item
                                    on_save=on_edit_saved
                                    on_cancel=Callback::new(move |()| edit_target.set(None))
                                />
                            }
                        })
                }}
            </Show>
            <Show when=move || remove_target.get().is_some()>
                <ConfirmDialog
                    title="Remove Item"
                    message="Remove this item from the shop list?"
                    confirm_label="Remove"
                    cancel_label="Cancel"
                    on_confirm=on_remove_confirmed
                    on_cancel=Callback::new(move |()| remove_target.set(None))
                />
            </Show>
            <Show when=move || show_leave.get()>
                <ConfirmDialog
                    title="Leave Shop List"
                    message="Are you sure you want to leave this shop list?"
                    confirm_label="Leave"
                    cancel_label="Cancel"
                    on_confirm=on_leave_confirmed
                    on_cancel=Callback::new(move |()| show_leave.set(false))
                />
            </Show>
            <Show when=move || active.get().share_code.is_some()>
                <div class="dialog-backdrop">
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Share Code"</h2>
                        <p class="dialog__message">
                            "Anyone with this code can join the list:"
                        </p>
                        <p class="dialog__share-code">
                            {move || active.get().share_code.unwrap_or_default()}
                        </p>
                        <div class="dialog__actions">
                            <button
                                class="btn btn--primary"
                                on:click=move |_| active.update(|s| s.share_code = None)
                            >
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
