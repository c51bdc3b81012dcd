//! Task Filter Bar Component
//!
//! Search input with clear button and status filter chips.

use leptos::prelude::*;

use crate::filter::StatusFilter;

#[component]
pub fn TaskFilterBar(
    #[prop(into)] search: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] is_active: Callback<StatusFilter, bool>,
    #[prop(into)] on_toggle: Callback<StatusFilter>,
) -> impl IntoView {
    view! {
        <div class="task-filter-bar">
            <div class="search-box">
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    placeholder="Search tasks..."
                    prop:value=move || search.get()
                    on:input=move |ev| on_search.run(event_target_value(&ev))
                />
                <Show when=move || !search.get().is_empty()>
                    <button class="icon-btn clear-search" title="Clear search" on:click=move |_| on_search.run(String::new())>
                        "×"
                    </button>
                </Show>
            </div>
            <div class="filter-chips">
                <span class="filter-icon">"⚲"</span>
                {StatusFilter::ALL.into_iter().map(|status| view! {
                    <button
                        class="chip"
                        class:active=move || is_active.run(status)
                        on:click=move |_| on_toggle.run(status)
                    >
                        {status.label()}
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}
