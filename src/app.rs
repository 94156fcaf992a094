//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::callback::CallbackPage;
use crate::pages::edit_shop_list::EditShopListPage;
use crate::pages::error::ErrorPage;
use crate::pages::login::LoginPage;
use crate::pages::map_search::MapSearchPage;
use crate::pages::member_home::MemberHomePage;
use crate::pages::search_item::SearchItemPage;
use crate::state::auth::AuthState;
use crate::state::lists::{ActiveListState, ListsState};
use crate::state::search::SearchState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let lists = RwSignal::new(ListsState::default());
    let active_list = RwSignal::new(ActiveListState::default());
    let search = RwSignal::new(SearchState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(lists);
    provide_context(active_list);
    provide_context(search);
    provide_context(ui);

    // Apply the persisted theme preference once on the client.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/shopper.css"/>
        <Title text="Shopper"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=MapSearchPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("callback") view=CallbackPage/>
                <Route path=StaticSegment("error") view=ErrorPage/>
                <Route path=StaticSegment("member") view=MemberHomePage/>
                <Route
                    path=(StaticSegment("member"), StaticSegment("shoplist"), ParamSegment("id"))
                    view=EditShopListPage
                />
                <Route
                    path=(
                        StaticSegment("member"),
                        StaticSegment("searchshopitem"),
                        ParamSegment("id"),
                    )
                    view=SearchItemPage
                />
            </Routes>
        </Router>
    }
}
