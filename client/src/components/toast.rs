//! Toast rendering and scheduling.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 4_000;

/// Show a toast and schedule its auto-dismiss. A toast replaced before the
/// timer fires is left alone by the stale timer.
pub fn show_toast(state: RwSignal<ToastState>, kind: ToastKind, text: impl Into<String>) {
    let text = text.into();

    #[cfg(feature = "hydrate")]
    {
        let mut seq = 0;
        state.update(|toast| seq = toast.show(kind, text));
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            state.update(|toast| toast.dismiss_if_current(seq));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    state.update(|toast| {
        toast.show(kind, text);
    });
}

/// Renders the current toast, if any, with a manual dismiss control.
#[component]
pub fn Toast(state: RwSignal<ToastState>) -> impl IntoView {
    view! {
        {move || {
            state
                .get()
                .current
                .map(|toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span class="toast__text">{toast.text}</span>
                            <button class="toast__dismiss" on:click=move |_| state.update(ToastState::dismiss)>
                                "Dismiss"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
