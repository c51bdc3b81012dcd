//! Progress Bar Component

use leptos::prelude::*;

/// Horizontal bar filled to `percentage` (0-100)
#[component]
pub fn ProgressBar(#[prop(into)] percentage: Signal<u32>) -> impl IntoView {
    view! {
        <div class="progress-bar" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=move || percentage.get().to_string()>
            <div class="progress-fill" style=move || format!("width: {}%;", percentage.get().min(100))></div>
        </div>
    }
}
