//! Task Form Dialog Component

use leptos::prelude::*;

use crate::controllers::TaskForm;

/// Create/edit dialog for a task: title, description, optional due date
#[component]
pub fn TaskFormDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] form: Signal<TaskForm>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_change: Callback<TaskForm>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let update = move |apply: fn(&mut TaskForm, String), value: String| {
        let mut next = form.get_untracked();
        apply(&mut next, value);
        on_change.run(next);
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <form
                    class="dialog form-dialog"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_save.run(());
                    }
                >
                    <h3 class="dialog-title">
                        {move || if editing.get() { "Edit Task" } else { "Create New Task" }}
                    </h3>
                    <label class="field">
                        <span>"Task Title"</span>
                        <input
                            type="text"
                            placeholder="What needs to be done?"
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| update(|f, v| f.title = v, event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Description"</span>
                        <textarea
                            rows="3"
                            placeholder="Add details (optional)"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| update(|f, v| f.description = v, event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="field">
                        <span>"Due Date"</span>
                        <input
                            type="date"
                            prop:value=move || form.with(|f| f.due_date.clone())
                            on:input=move |ev| update(|f, v| f.due_date = v, event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog-actions">
                        <button type="button" class="btn btn-outlined" disabled=move || busy.get() on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                            {move || match (busy.get(), editing.get()) {
                                (true, _) => "Saving...",
                                (false, true) => "Update Task",
                                (false, false) => "Create Task",
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
