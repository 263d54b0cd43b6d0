//! Campaign list page with a link to campaign creation.
//! Redirects to `/login` if the user is not authenticated.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::campaign_card::CampaignCard;
use crate::state::auth::AuthState;

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Campaign list resource — fetches on mount.
    let campaigns = LocalResource::new(|| async {
        match crate::net::api::fetch_campaigns().await {
            Ok(list) => list,
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::error!("campaign list fetch failed: {e}");
                let _ = &e;
                Vec::new()
            }
        }
    });

    view! {
        <div class="campaigns-page">
            <header class="campaigns-page__header">
                <h2>"Tweet campaigns"</h2>
                <p class="campaigns-page__subtitle">
                    "Create a tweet campaign to promote your product or service."
                </p>
                <a class="btn btn--primary" href="/campaigns/new">
                    "+ Add New Campaign"
                </a>
            </header>

            <div class="campaigns-page__list">
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        campaigns
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="campaigns-page__empty">"Add a campaign to get started."</p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="campaigns-page__cards">
                                            {list
                                                .into_iter()
                                                .map(|campaign| {
                                                    view! { <CampaignCard id=campaign.id name=campaign.name/> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
