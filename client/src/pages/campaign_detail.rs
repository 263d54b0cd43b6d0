//! Campaign detail page — share creation, clipboard copy, tracking stats.
//!
//! DESIGN
//! ======
//! The campaign and its shares load as two independent resources, so either
//! half of the page renders as soon as its own data arrives. Share creation
//! holds a single `creating` flag for the duration of the request and
//! explicitly refetches the shares resource on success — that is the one read
//! query share creation invalidates.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::toast::{Toast, show_toast};
use crate::net::api;
use crate::net::types::Share;
use crate::state::share_tracking::ShareStats;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::content::build_content;

#[cfg(feature = "hydrate")]
fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

#[cfg(not(feature = "hydrate"))]
fn copy_to_clipboard(_text: &str) {}

#[component]
pub fn DetailCampaignPage() -> impl IntoView {
    let params = use_params_map();
    let campaign_id = move || params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());

    let campaign = LocalResource::new(move || {
        let id = campaign_id();
        async move {
            match id {
                Some(id) => api::fetch_campaign(id).await.ok(),
                None => None,
            }
        }
    });
    let shares = LocalResource::new(move || {
        let id = campaign_id();
        async move {
            match id {
                Some(id) => api::fetch_shares(id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let creating = RwSignal::new(false);
    let toast = RwSignal::new(ToastState::default());

    let on_share_create = move |_| {
        if creating.get() {
            return;
        }
        let Some(id) = campaign_id() else {
            return;
        };
        let pattern = campaign
            .get()
            .flatten()
            .map(|c| c.tweet_pattern)
            .unwrap_or_default();
        creating.set(true);

        leptos::task::spawn_local(async move {
            match api::create_share(id).await {
                Ok(share) => {
                    let content = build_content(&pattern, &share.code);
                    copy_to_clipboard(&content);
                    show_toast(toast, ToastKind::Success, "Tweet pattern copied to clipboard");
                    shares.refetch();
                }
                Err(e) => {
                    #[cfg(feature = "hydrate")]
                    log::error!("share creation failed: {e}");
                    show_toast(toast, ToastKind::Error, format!("Failed to create share: {e}"));
                }
            }
            creating.set(false);
        });
    };

    view! {
        <div class="detail-page">
            <Toast state=toast/>

            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    campaign
                        .get()
                        .map(|loaded| match loaded {
                            Some(campaign) => {
                                let edit_href = format!("/campaigns/{}/edit", campaign.id);
                                view! {
                                    <section class="detail-page__campaign">
                                        <header class="detail-page__header">
                                            <h3>{campaign.name}</h3>
                                            <p class="detail-page__description">
                                                {campaign.description.unwrap_or_default()}
                                            </p>
                                        </header>
                                        <textarea
                                            class="detail-page__pattern"
                                            prop:value=campaign.tweet_pattern
                                            readonly
                                        ></textarea>
                                        <div class="detail-page__actions">
                                            <button
                                                class="btn btn--primary"
                                                disabled=move || creating.get()
                                                on:click=on_share_create
                                            >
                                                {move || {
                                                    if creating.get() { "Creating..." } else { "Copy a tweet" }
                                                }}
                                            </button>
                                            <a class="btn" href=edit_href>
                                                "Edit"
                                            </a>
                                        </div>
                                    </section>
                                }
                                    .into_any()
                            }
                            None => view! { <p class="detail-page__missing">"Campaign not found."</p> }.into_any(),
                        })
                }}
            </Suspense>

            <div class="detail-page__tracking">
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || shares.get().map(|list| view! { <ShareTracking shares=list/> })}
                </Suspense>
            </div>
        </div>
    }
}

/// Share statistics plus one chip per issued share.
#[component]
fn ShareTracking(shares: Vec<Share>) -> impl IntoView {
    let stats = ShareStats::from_shares(&shares);

    view! {
        <div class="share-tracking">
            <div class="share-tracking__summary">
                <h4>"Shares tracking"</h4>
                <div class="share-tracking__counts">
                    <p class="share-tracking__total">"Total: " {stats.total}</p>
                    <p class="share-tracking__waiting">"Waiting: " {stats.waiting()}</p>
                    <p class="share-tracking__success">"Success: " {stats.success}</p>
                </div>
            </div>

            <div class="share-tracking__chips">
                {shares
                    .into_iter()
                    .map(|share| {
                        let class = if share.success {
                            "share-chip share-chip--success"
                        } else {
                            "share-chip share-chip--waiting"
                        };
                        view! { <span class=class>{share.code}</span> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
