//! Member home: profile bootstrap and the shop-list inventory grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the profile first (a
//! 404 means the account is new and opens the first-run profile dialog),
//! then the shop lists. Every mutation is followed by a full refetch so the
//! grid never shows state the backend has not confirmed.

#[cfg(test)]
#[path = "member_home_test.rs"]
mod member_home_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::create_list_dialog::CreateListDialog;
use crate::components::join_list_dialog::JoinListDialog;
use crate::components::profile_dialog::ProfileDialog;
use crate::components::top_bar::TopBar;
#[cfg(feature = "hydrate")]
use crate::config::routes;
use crate::net::types::ShopList;
use crate::state::auth::AuthState;
use crate::state::lists::ListsState;
#[cfg(feature = "hydrate")]
use crate::util::auth::redirect_to_login;

/// Union of every item's flyer stores across the list, deduplicated in
/// first-seen order, for the "hot deals at" chips.
pub(crate) fn hot_deal_stores(list: &ShopList) -> Vec<String> {
    let mut stores = Vec::new();
    for item in &list.items {
        for store in &item.available_stores {
            if !stores.contains(store) {
                stores.push(store.clone());
            }
        }
    }
    stores
}

/// Refetch the shop-list inventory into the shared signal.
#[cfg(feature = "hydrate")]
fn load_lists(lists: RwSignal<ListsState>) {
    lists.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        let session = crate::session::Session::from_window();
        match crate::net::api::fetch_shop_lists(&session).await {
            Ok(items) => lists.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(err) if err.is_auth_failure() => redirect_to_login(),
            Err(err) => lists.update(|s| {
                s.loading = false;
                s.error = Some(err.to_string());
            }),
        }
    });
}

#[component]
pub fn MemberHomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lists = expect_context::<RwSignal<ListsState>>();

    let show_create = RwSignal::new(false);
    let show_join = RwSignal::new(false);
    let join_error = RwSignal::new(None::<String>);
    let leave_target = RwSignal::new(None::<i64>);

    // Profile bootstrap, once per mount.
    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get_untracked() {
            return;
        }
        started.set(true);
        auth.update(|a| a.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = crate::session::Session::from_window();
            // Prime the top bar from the cached copy while the fetch runs.
            if let Some(cached) = session.cached_profile() {
                auth.update(|a| a.profile = Some(cached));
            }
            match crate::net::api::fetch_profile(&session).await {
                Ok(Some(profile)) => {
                    session.set_cached_profile(&profile);
                    auth.update(|a| {
                        a.profile = Some(profile);
                        a.loading = false;
                        a.needs_profile = false;
                    });
                    load_lists(lists);
                }
                Ok(None) => auth.update(|a| {
                    a.loading = false;
                    a.needs_profile = true;
                }),
                Err(err) if err.is_auth_failure() => redirect_to_login(),
                Err(err) => {
                    log::error!("profile fetch failed: {err}");
                    auth.update(|a| a.loading = false);
                }
            }
        });
    });

    // First-run profile creation, then the deferred list load.
    let on_profile_create = Callback::new(move |(nickname, postal_code): (String, String)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = crate::session::Session::from_window();
            match crate::net::api::update_profile(&session, &nickname, &postal_code).await {
                Ok(profile) => {
                    session.set_cached_profile(&profile);
                    auth.update(|a| {
                        a.profile = Some(profile);
                        a.needs_profile = false;
                    });
                    load_lists(lists);
                }
                Err(err) if err.is_auth_failure() => redirect_to_login(),
                Err(err) => log::error!("profile create failed: {err}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (nickname, postal_code);
        }
    });

    let on_create_list = Callback::new(move |name: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = crate::session::Session::from_window();
            match crate::net::api::create_shop_list(&session, &name).await {
                Ok(()) => {
                    show_create.set(false);
                    load_lists(lists);
                }
                Err(err) if err.is_auth_failure() => redirect_to_login(),
                Err(err) => {
                    log::error!("create shop list failed: {err}");
                    show_create.set(false);
                    lists.update(|s| s.error = Some(err.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    });

    let on_join_list = Callback::new(move |share_code: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = crate::session::Session::from_window();
            match crate::net::api::join_shop_list(&session, &share_code).await {
                Ok(()) => {
                    show_join.set(false);
                    join_error.set(None);
                    load_lists(lists);
                }
                Err(err) if err.is_auth_failure() => redirect_to_login(),
                Err(_) => join_error
                    .set(Some("Invalid share code or unable to join the shop list".to_owned())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = share_code;
        }
    });

    let on_leave_confirmed = Callback::new(move |()| {
        let Some(id) = leave_target.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = crate::session::Session::from_window();
            match crate::net::api::leave_shop_list(&session, id).await {
                Ok(()) => {
                    leave_target.set(None);
                    load_lists(lists);
                }
                Err(err) if err.is_auth_failure() => redirect_to_login(),
                Err(err) => {
                    log::error!("leave shop list failed: {err}");
                    leave_target.set(None);
                    lists.update(|s| s.error = Some(err.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| {
                view! {
                    <div class="member-home">
                        <p>"Loading..."</p>
                    </div>
                }
            }
        >
            <Show when=move || auth.get().needs_profile>
                <ProfileDialog
                    cancellable=false
                    on_submit=on_profile_create
                    on_cancel=Callback::new(|()| {})
                />
            </Show>
            <Show when=move || auth.get().profile.is_some()>
                <div class="member-home">
                    <TopBar on_profile_updated=Callback::new(move |()| {
                        #[cfg(feature = "hydrate")]
                        load_lists(lists);
                    })/>

                    <div class="member-home__header">
                        <h2>"Shop lists"</h2>
                        <div class="member-home__actions">
                            <button
                                class="btn btn--secondary"
                                on:click=move |_| {
                                    join_error.set(None);
                                    show_join.set(true);
                                }
                            >
                                "Join"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                                "Add"
                            </button>
                        </div>
                    </div>

                    <Show when=move || lists.get().error.is_some()>
                        <p class="member-home__error">
                            {move || lists.get().error.unwrap_or_default()}
                        </p>
                    </Show>

                    <Show
                        when=move || !lists.get().loading
                        fallback=|| view! { <p>"Loading shop lists..."</p> }
                    >
                        <Show
                            when=move || !lists.get().items.is_empty()
                            fallback=|| {
                                view! {
                                    <p class="member-home__empty">
                                        "No shop lists yet. Create one to get started!"
                                    </p>
                                }
                            }
                        >
                            <div class="member-home__grid">
                                {
                                    move || {
                                        lists
                                            .get()
                                            .items
                                            .into_iter()
                                            .map(|list| {
                                                let stores = hot_deal_stores(&list);
                                                let id = list.id;
                                                let open = move |_| {
                                                    #[cfg(feature = "hydrate")]
                                                    {
                                                        if let Some(window) = web_sys::window() {
                                                            let _ = window
                                                                .location()
                                                                .set_href(&routes::shop_list(id));
                                                        }
                                                    }
                                                };
                                                view! {
                                                    <div class="shop-card" on:click=open>
                                                        <div class="shop-card__header">
                                                            <h3>{list.name.clone()}</h3>
                                                            <button
                                                                class="btn btn--link shop-card__leave"
                                                                title="Leave shop list"
                                                                on:click=move |ev| {
                                                                    ev.stop_propagation();
                                                                    leave_target.set(Some(id));
                                                                }
                                                            >
                                                                "Leave"
                                                            </button>
                                                        </div>
                                                        <p class="shop-card__owner">
                                                            "Owner: " {list.owner.nickname.clone()}
                                                        </p>
                                                        <Show when={
                                                            let has_stores = !stores.is_empty();
                                                            move || has_stores
                                                        }>
                                                            <p class="shop-card__deals-label">"Hot deals at:"</p>
                                                        </Show>
                                                        <div class="shop-card__stores">
                                                            {stores
                                                                .iter()
                                                                .map(|store| {
                                                                    view! {
                                                                        <span class="shop-card__store-chip">
                                                                            {store.clone()}
                                                                        </span>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()}
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }
                                }
                            </div>
                        </Show>
                    </Show>

                    <Show when=move || show_create.get()>
                        <CreateListDialog
                            on_submit=on_create_list
                            on_cancel=Callback::new(move |()| show_create.set(false))
                        />
                    </Show>
                    <Show when=move || show_join.get()>
                        <JoinListDialog
                            error=join_error
                            on_submit=on_join_list
                            on_cancel=Callback::new(move |()| {
                                show_join.set(false);
                                join_error.set(None);
                            })
                        />
                    </Show>
                    <Show when=move || leave_target.get().is_some()>
                        <ConfirmDialog
                            title="Leave Shop List"
                            message="Are you sure you want to leave this shop list? You can always rejoin later."
                            confirm_label="Leave"
                            cancel_label="Cancel"
                            on_confirm=on_leave_confirmed
                            on_cancel=Callback::new(move |()| leave_target.set(None))
                        />
                    </Show>
                </div>
            </Show>
        </Show>
    }
}
