//! App Error Boundary Component
//!
//! Catches `Err` views rendered below it and shows a recovery screen.
//! Load failures are handled by each page and never reach it; panics go to
//! the console through the panic hook.

use leptos::prelude::*;

use crate::router::{use_navigator, Route};

#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    let navigator = use_navigator();
    view! {
        <ErrorBoundary fallback=move |errors| {
            let messages = move || {
                errors
                    .get()
                    .into_iter()
                    .map(|(_, e)| e.to_string())
                    .collect::<Vec<_>>()
            };
            for message in messages() {
                log::error!("[APP] Render error: {}", message);
            }
            view! {
                <div class="error-screen">
                    <div class="error-card">
                        <div class="error-icon">"⚠"</div>
                        <h2>"Oops! Something went wrong"</h2>
                        <p>"An unexpected error occurred in the application. This might be a temporary issue."</p>
                        <ul class="error-details">
                            {move || messages().into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
                        </ul>
                        <div class="error-actions">
                            <button class="btn btn-primary" on:click=move |_| navigator.navigate(Route::Dashboard)>
                                "Go to Dashboard"
                            </button>
                            <button
                                class="btn btn-outlined"
                                on:click=|_| {
                                    if let Some(window) = web_sys::window() {
                                        let _ = window.location().reload();
                                    }
                                }
                            >
                                "Refresh Page"
                            </button>
                        </div>
                    </div>
                </div>
            }
        }>
            {children()}
        </ErrorBoundary>
    }
}
