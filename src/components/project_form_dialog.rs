//! Project Form Dialog Component
//!
//! Create/edit dialog for a project's title and description.

use leptos::prelude::*;

use crate::controllers::ProjectForm;

#[component]
pub fn ProjectFormDialog(
    #[prop(into)] open: Signal<bool>,
    /// "Create New Project" / "Edit Project"
    #[prop(into)] heading: Signal<String>,
    #[prop(into)] form: Signal<ProjectForm>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_change: Callback<ProjectForm>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <form class="dialog form-dialog" on:submit=submit>
                    <h3 class="dialog-title">{move || heading.get()}</h3>
                    <label class="field">
                        <span>"Project Title"</span>
                        <input
                            type="text"
                            placeholder="Enter project title"
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| {
                                let mut next = form.get_untracked();
                                next.title = event_target_value(&ev);
                                on_change.run(next);
                            }
                        />
                    </label>
                    <label class="field">
                        <span>"Description"</span>
                        <textarea
                            rows="4"
                            placeholder="Describe your project (optional)"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                let mut next = form.get_untracked();
                                next.description = event_target_value(&ev);
                                on_change.run(next);
                            }
                        ></textarea>
                    </label>
                    <div class="dialog-actions">
                        <button type="button" class="btn btn-outlined" disabled=move || busy.get() on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
