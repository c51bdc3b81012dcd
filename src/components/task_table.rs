//! Task Table Component
//!
//! One page of filtered tasks with row actions and pagination controls.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::filter::{has_next_page, is_overdue, page_range_label};
use crate::models::Task;

#[component]
pub fn TaskTable(
    /// Rows of the current page
    #[prop(into)] rows: Signal<Vec<Task>>,
    /// Rows across all pages after filtering
    #[prop(into)] total_rows: Signal<usize>,
    #[prop(into)] page: Signal<usize>,
    rows_per_page: usize,
    #[prop(into)] today: Signal<NaiveDate>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_complete: Callback<Task>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<u64>,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    let has_rows = move || total_rows.get() != 0;
    let has_next = move || has_next_page(page.get(), total_rows.get(), rows_per_page);
    let range_label = move || page_range_label(page.get(), total_rows.get(), rows_per_page);

    view! {
        <div class="task-table-wrap">
            <Show
                when=has_rows
                fallback=|| view! { <div class="empty-state">"No tasks match. Create one to get started."</div> }
            >
                <table class="task-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Description"</th>
                            <th>"Due Date"</th>
                            <th>"Status"</th>
                            <th class="actions-col">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|task| (task.id, task.is_completed, task.title.clone(), task.description.clone(), task.due_date)
                            children=move |task| {
                                let overdue = is_overdue(&task, today.get_untracked());
                                let description = match task.description_text() {
                                    "" => "-".to_string(),
                                    text => text.to_string(),
                                };
                                let due = task
                                    .due_date
                                    .map(|d| d.format("%b %-d, %Y").to_string())
                                    .unwrap_or_else(|| "-".to_string());
                                let completed = task.is_completed;
                                let for_complete = task.clone();
                                let for_edit = task.clone();
                                let id = task.id;
                                view! {
                                    <tr class:completed=completed class:overdue=overdue>
                                        <td class="task-title">{task.title.clone()}</td>
                                        <td class="task-description">{description}</td>
                                        <td class="task-due">
                                            {due}
                                            {overdue.then(|| view! { <span class="overdue-marker" title="Overdue">" ⚠"</span> })}
                                        </td>
                                        <td>
                                            {if completed {
                                                view! { <span class="status-chip done">"Completed"</span> }.into_any()
                                            } else {
                                                view! {
                                                    <button
                                                        class="status-chip pending"
                                                        title="Mark as completed"
                                                        disabled=move || busy.get()
                                                        on:click=move |_| on_complete.run(for_complete.clone())
                                                    >
                                                        "Pending"
                                                    </button>
                                                }.into_any()
                                            }}
                                        </td>
                                        <td class="actions-col">
                                            <button class="icon-btn" title="Edit" disabled=move || busy.get() on:click=move |_| on_edit.run(for_edit.clone())>
                                                "✎"
                                            </button>
                                            <button class="icon-btn danger" title="Delete" disabled=move || busy.get() on:click=move |_| on_delete.run(id)>
                                                "🗑"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <div class="pagination">
                    <span class="page-range">{range_label}</span>
                    <button
                        class="icon-btn"
                        disabled=move || page.get() == 0
                        on:click=move |_| on_page.run(page.get_untracked().saturating_sub(1))
                    >
                        "‹"
                    </button>
                    <button
                        class="icon-btn"
                        disabled=move || !has_next()
                        on:click=move |_| on_page.run(page.get_untracked() + 1)
                    >
                        "›"
                    </button>
                </div>
            </Show>
        </div>
    }
}
