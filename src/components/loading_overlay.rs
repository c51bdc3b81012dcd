//! Loading Overlay Component

use leptos::prelude::*;

pub const DEFAULT_MESSAGE: &str = "Processing your request...";

/// Full-screen blocking spinner shown while a mutation is in flight
#[component]
pub fn LoadingOverlay(
    #[prop(into)] visible: Signal<bool>,
    #[prop(optional, into)] message: Option<String>,
) -> impl IntoView {
    let message = message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
    view! {
        <Show when=move || visible.get()>
            <div class="loading-overlay">
                <div class="spinner"></div>
                <p>{message.clone()}</p>
            </div>
        </Show>
    }
}

/// Inline page spinner for the initial load
#[component]
pub fn PageSpinner() -> impl IntoView {
    view! {
        <div class="page-spinner">
            <div class="spinner"></div>
        </div>
    }
}
