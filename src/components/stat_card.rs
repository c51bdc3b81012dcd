//! Stat Card Component

use leptos::prelude::*;

/// Single headline number with a caption
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] icon: String,
    #[prop(optional, into)] accent: Option<String>,
) -> impl IntoView {
    let style = accent.map(|color| format!("--card-accent: {};", color));
    view! {
        <div class="stat-card" style=style>
            <div class="stat-icon">{icon}</div>
            <div class="stat-body">
                <div class="stat-value">{move || value.get()}</div>
                <div class="stat-label">{label}</div>
            </div>
        </div>
    }
}
