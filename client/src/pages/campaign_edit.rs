//! Campaign create/edit page.
//!
//! DESIGN
//! ======
//! One form serves both modes; the mode is decided solely by the presence of
//! an `id` route param. Edit mode fetches the campaign and pre-populates the
//! form exactly once, so later refetches never clobber user edits. Submit and
//! delete share the form's single in-flight flag, and store failures surface
//! as a blocking alert without resetting the form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api;
use crate::state::campaign_form::{CampaignFormState, FormError};

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(feature = "hydrate"))]
fn alert(_message: &str) {}

#[cfg(feature = "hydrate")]
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(not(feature = "hydrate"))]
fn confirm(_message: &str) -> bool {
    false
}

#[component]
pub fn EditCampaignPage() -> impl IntoView {
    let params = use_params_map();
    let campaign_id = move || params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());
    let is_editing = move || campaign_id().is_some();

    // Stored for Copy-ability: handlers are re-attached inside reactive views.
    let navigate = StoredValue::new_local(use_navigate());

    // Edit mode fetches the existing campaign; create mode skips the fetch.
    let campaign = LocalResource::new(move || {
        let id = campaign_id();
        async move {
            match id {
                Some(id) => api::fetch_campaign(id).await.ok(),
                None => None,
            }
        }
    });

    let form = RwSignal::new(CampaignFormState::default());
    let form_error = RwSignal::new(None::<FormError>);
    let populated = RwSignal::new(false);

    // Pre-populate every field once the campaign loads, exactly once.
    Effect::new(move || {
        if populated.get() {
            return;
        }
        if let Some(existing) = campaign.get().flatten() {
            form.set(CampaignFormState::from_campaign(&existing));
            populated.set(true);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let input = match form.with(CampaignFormState::validate) {
            Ok(input) => input,
            Err(e) => {
                form_error.set(Some(e));
                return;
            }
        };
        form_error.set(None);

        let mut begun = false;
        form.update(|f| begun = f.try_begin_submit());
        if !begun {
            return;
        }

        let id = campaign_id();
        let navigate = navigate.get_value();
        leptos::task::spawn_local(async move {
            let result = match id {
                Some(id) => api::update_campaign(id, &input).await,
                None => api::create_campaign(&input).await,
            };
            form.update(CampaignFormState::finish_submit);
            match result {
                Ok(saved) => {
                    navigate(&format!("/campaigns/{}", saved.id), NavigateOptions::default());
                }
                Err(e) => alert(&format!("Error: {e}")),
            }
        });
    };

    let on_delete = move |_| {
        let Some(id) = campaign_id() else {
            return;
        };
        if form.with(|f| f.submitting) {
            return;
        }

        if !confirm("Delete this campaign and all of its shares?") {
            return;
        }
        let mut begun = false;
        form.update(|f| begun = f.try_begin_submit());
        if !begun {
            return;
        }
        let navigate = navigate.get_value();
        leptos::task::spawn_local(async move {
            let result = api::delete_campaign(id).await;
            form.update(CampaignFormState::finish_submit);
            match result {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(e) => alert(&format!("Error: {e}")),
            }
        });
    };

    let missing = move || is_editing() && campaign.get().map(|loaded| loaded.is_none()).unwrap_or(false);

    view! {
        <div class="edit-page">
            <header class="edit-page__header">
                <h3>{move || if is_editing() { "Edit" } else { "Create" }} " Campaign"</h3>
            </header>

            <Show when=missing>
                <p class="edit-page__missing">"Campaign not found."</p>
            </Show>

            <form class="edit-page__form" on:submit=on_submit>
                <label class="form-label">
                    "Campaign name" <span class="form-label__required">"*"</span>
                </label>
                <input
                    class="form-input"
                    name="name"
                    required
                    placeholder="Enter campaign name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />

                <label class="form-label">"Description"</label>
                <input
                    class="form-input"
                    name="description"
                    placeholder="Enter campaign description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />

                <label class="form-label">
                    "Webhook URL" <span class="form-label__required">"*"</span>
                </label>
                <small class="form-hint">
                    "When a new tweet is created, we will send a request to this URL."
                </small>
                <input
                    class="form-input"
                    name="webhook_url"
                    type="text"
                    required
                    placeholder="https://example.com/handle-new-tweet"
                    prop:value=move || form.with(|f| f.webhook_url.clone())
                    on:input=move |ev| form.update(|f| f.webhook_url = event_target_value(&ev))
                />

                <label class="form-label">
                    "Tweet pattern" <span class="form-label__required">"*"</span>
                </label>
                <textarea
                    class="form-input form-input--pattern"
                    name="tweet_pattern"
                    required
                    rows="6"
                    placeholder="🚀 Check out our new product from #SharePli.\nhttps://example.com"
                    prop:value=move || form.with(|f| f.tweet_pattern.clone())
                    on:input=move |ev| form.update(|f| f.tweet_pattern = event_target_value(&ev))
                ></textarea>

                <Show when=move || form_error.get().is_some()>
                    <p class="form-message form-message--error">
                        {move || form_error.get().map(FormError::message)}
                    </p>
                </Show>

                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || form.with(|f| f.submitting)
                >
                    {move || if is_editing() { "Save" } else { "Create" }} " Campaign"
                </button>
            </form>

            <Show when=is_editing>
                <button
                    class="btn btn--danger"
                    disabled=move || form.with(|f| f.submitting)
                    on:click=on_delete
                >
                    "Delete Campaign"
                </button>
            </Show>
        </div>
    }
}
