//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    campaign_detail::DetailCampaignPage, campaign_edit::EditCampaignPage, campaigns::CampaignsPage,
    login::LoginPage,
};
use crate::state::auth::AuthState;

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
/// Provides the shared auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Resolve the current user once on the client; SSR leaves it loading.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.set(AuthState { user, loading: false });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sharepli.css"/>
        <Title text="SharePli"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=CampaignsPage/>
                <Route path=(StaticSegment("campaigns"), StaticSegment("new")) view=EditCampaignPage/>
                <Route
                    path=(StaticSegment("campaigns"), ParamSegment("id"), StaticSegment("edit"))
                    view=EditCampaignPage
                />
                <Route path=(StaticSegment("campaigns"), ParamSegment("id")) view=DetailCampaignPage/>
            </Routes>
        </Router>
    }
}
