//! Card component for campaign list items.

use leptos::prelude::*;

/// One row in the campaign list: the name links to the edit page, the stats
/// link opens the detail page with share tracking.
#[component]
pub fn CampaignCard(id: i64, name: String) -> impl IntoView {
    let edit_href = format!("/campaigns/{id}/edit");
    let detail_href = format!("/campaigns/{id}");

    view! {
        <div class="campaign-card">
            <a class="campaign-card__name" href=edit_href>
                {name}
            </a>
            <a class="campaign-card__stats" href=detail_href>
                "Stats"
            </a>
        </div>
    }
}
