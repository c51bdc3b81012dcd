//! Toast Host Component

use leptos::prelude::*;

use crate::toast::use_toaster;

/// Renders the active toasts in the bottom corner
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        <div class="toast-host">
            <For
                each=move || toaster.queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <span class="toast-message">{toast.message}</span>
                            <button class="icon-btn" on:click=move |_| toaster.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
