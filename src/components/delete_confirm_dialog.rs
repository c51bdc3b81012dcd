//! Delete Confirm Dialog Component
//!
//! Modal confirmation for destructive actions.

use leptos::prelude::*;

/// Modal delete confirmation
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `title` - Heading, e.g. "Delete Project"
/// * `description` - Optional extra line above the warning
/// * `busy` - Disables both buttons while the delete is in flight
#[component]
pub fn DeleteConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| if !busy.get_untracked() { on_cancel.run(()) }>
                <div class="dialog delete-dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="dialog-title">
                        <span class="delete-icon">"🗑"</span>
                        <h3>{title.clone()}</h3>
                    </div>
                    {description.clone().map(|d| view! { <p class="dialog-description">{d}</p> })}
                    <p class="dialog-warning">"This action cannot be undone. Please confirm to proceed."</p>
                    <div class="dialog-actions">
                        <button
                            class="btn btn-outlined"
                            disabled=move || busy.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn btn-danger"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {move || if busy.get() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
