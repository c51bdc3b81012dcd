use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use super::{run_mutation, today, Screen};
use crate::api;
use crate::components::{
    DeleteConfirmDialog, LoadingOverlay, Navbar, PageSpinner, ProgressBar, ProjectFormDialog, StatCard, TaskFilterBar,
    TaskFormDialog, TaskTable,
};
use crate::context::{use_app, AppContext};
use crate::controllers::project_detail::{
    complete_task, load_project_detail, save_task, task_saved_message, LOAD_FAILED, NOT_FOUND, TASK_COMPLETED,
    TASK_COMPLETE_FAILED, TASK_DELETED, TASK_DELETE_FAILED, TASK_SAVE_FAILED,
};
use crate::controllers::projects::{DELETED, DELETE_FAILED, UPDATED, UPDATE_FAILED};
use crate::controllers::{DialogMode, ProjectDetail, ProjectForm, TaskForm};
use crate::filter::{paginate, StatusFilter};
use crate::models::Task;
use crate::router::{use_navigator, Navigator, Route};
use crate::store::{close_task_dialog, open_task_dialog, ProjectDetailUi, ProjectDetailUiStore, ProjectDetailUiStoreFields};
use crate::toast::{use_toaster, ToastKind, Toaster};
use crate::view_state::{Phase, RequestGuard, ViewState};

#[derive(Clone, Copy)]
struct DetailPageCtx {
    project_id: u64,
    app: AppContext,
    view: RwSignal<ViewState<ProjectDetail>>,
    /// Set when the last load failed because the project does not exist
    missing: RwSignal<bool>,
    ui: ProjectDetailUiStore,
    guard: StoredValue<RequestGuard>,
    toaster: Toaster,
    navigator: Navigator,
}

impl DetailPageCtx {
    fn busy(&self) -> bool {
        self.view.with(|v| v.is_busy())
    }

    fn rows_per_page(&self) -> usize {
        self.app.config().task_rows_per_page
    }

    async fn reload(self) {
        let Some(guard) = self.guard.try_get_value() else {
            return;
        };
        let api = self.app.api();
        let fetch_size = self.app.config().task_fetch_size;
        self.view.try_update(|v| v.begin_load());
        let Some(result) = guard.run(load_project_detail(&api, self.project_id, fetch_size)).await else {
            return;
        };
        let not_found = matches!(&result, Err(e) if e.is_not_found());
        match self.view.try_update(|v| v.finish_load(result)) {
            Some(Ok(())) => {
                self.missing.try_set(false);
                self.clamp_page();
            }
            Some(Err(e)) => {
                log::error!("[DETAIL] Load of project {} failed: {}", self.project_id, e);
                self.missing.try_set(not_found);
                self.toaster.error(LOAD_FAILED);
            }
            None => {}
        }
    }

    /// Filtered rows across all pages
    fn filtered(&self) -> Vec<Task> {
        let today = today();
        self.view.with(|v| {
            let tasks = v.data().map(|d| d.tasks.as_slice()).unwrap_or(&[]);
            self.ui.filter().with(|f| f.apply(tasks, today))
        })
    }

    fn clamp_page(&self) {
        let total = self.filtered().len();
        let per_page = self.rows_per_page();
        self.ui.filter().update(|f| f.clamp_page(total, per_page));
    }

    // ========================
    // Task actions
    // ========================

    fn open_task_create(self) {
        open_task_dialog(&self.ui, DialogMode::Create, TaskForm::default());
    }

    fn open_task_edit(self, task: &Task) {
        open_task_dialog(&self.ui, DialogMode::Edit(task.id), TaskForm::from_task(task));
    }

    fn save_task(self) {
        let editing = self.ui.task_dialog().get_untracked().editing();
        let input = match self.ui.task_form().get_untracked().validate() {
            Ok(input) => input,
            Err(e) => {
                self.toaster.show(e.to_string(), ToastKind::Warning);
                return;
            }
        };
        let api = self.app.api();
        spawn_local(async move {
            match run_mutation(self.view, save_task(&api, self.project_id, editing, &input)).await {
                Some(Ok(_)) => {
                    close_task_dialog(&self.ui);
                    self.reload().await;
                    self.toaster.success(task_saved_message(editing));
                }
                Some(Err(_)) => self.toaster.error(TASK_SAVE_FAILED),
                None => {}
            }
        });
    }

    fn complete(self, task: Task) {
        let api = self.app.api();
        spawn_local(async move {
            match run_mutation(self.view, complete_task(&api, self.project_id, &task)).await {
                Some(Ok(true)) => {
                    self.toaster.success(TASK_COMPLETED);
                    self.reload().await;
                }
                Some(Ok(false)) => {
                    self.view.try_update(|v| v.abort_mutation());
                }
                Some(Err(_)) => self.toaster.error(TASK_COMPLETE_FAILED),
                None => {}
            }
        });
    }

    fn confirm_task_delete(self) {
        let Some(task_id) = self.ui.pending_task_delete().get_untracked() else {
            return;
        };
        let api = self.app.api();
        spawn_local(async move {
            let result = run_mutation(self.view, api::delete_task(&api, self.project_id, task_id)).await;
            if result.is_some() {
                self.ui.pending_task_delete().set(None);
            }
            match result {
                Some(Ok(())) => {
                    self.toaster.success(TASK_DELETED);
                    self.reload().await;
                }
                Some(Err(_)) => self.toaster.error(TASK_DELETE_FAILED),
                None => {}
            }
        });
    }

    // ========================
    // Project actions
    // ========================

    fn open_project_edit(self) {
        let Some(form) = self.view.with_untracked(|v| v.data().map(|d| ProjectForm::from_project(&d.project))) else {
            return;
        };
        self.ui.project_form().set(form);
        self.ui.project_dialog_open().set(true);
    }

    fn save_project(self) {
        let input = match self.ui.project_form().get_untracked().validate() {
            Ok(input) => input,
            Err(e) => {
                self.toaster.show(e.to_string(), ToastKind::Warning);
                return;
            }
        };
        let api = self.app.api();
        spawn_local(async move {
            match run_mutation(self.view, api::update_project(&api, self.project_id, &input)).await {
                Some(Ok(_)) => {
                    self.ui.project_dialog_open().set(false);
                    self.reload().await;
                    self.toaster.success(UPDATED);
                }
                Some(Err(_)) => self.toaster.error(UPDATE_FAILED),
                None => {}
            }
        });
    }

    fn confirm_project_delete(self) {
        let api = self.app.api();
        spawn_local(async move {
            match run_mutation(self.view, api::delete_project(&api, self.project_id)).await {
                Some(Ok(())) => {
                    self.toaster.success(DELETED);
                    self.navigator.navigate(Route::Projects);
                }
                Some(Err(_)) => {
                    self.ui.confirm_project_delete().set(false);
                    self.toaster.error(DELETE_FAILED);
                }
                None => {}
            }
        });
    }
}

#[component]
pub fn ProjectDetailPage(project_id: u64) -> impl IntoView {
    let guard = RequestGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.retire()
    });

    let page = DetailPageCtx {
        project_id,
        app: use_app(),
        view: RwSignal::new(ViewState::default()),
        missing: RwSignal::new(false),
        ui: Store::new(ProjectDetailUi::default()),
        guard: StoredValue::new(guard),
        toaster: use_toaster(),
        navigator: use_navigator(),
    };
    spawn_local(page.reload());
    let screen = Memo::new(move |_| page.view.with(Screen::of));

    view! {
        <div class="page project-detail-page">
            <Navbar show_user_menu=true />
            <main class="content">
                <button class="btn btn-text back-link" on:click=move |_| page.navigator.navigate(Route::Projects)>
                    "← Back to Projects"
                </button>
                {move || match screen.get() {
                    Screen::Spinner => view! { <PageSpinner /> }.into_any(),
                    Screen::Failed => view! {
                        <div class="empty-state">
                            <h2>{move || if page.missing.get() { NOT_FOUND } else { LOAD_FAILED }}</h2>
                            <button class="btn btn-primary" on:click=move |_| page.navigator.navigate(Route::Projects)>
                                "Back to Projects"
                            </button>
                        </div>
                    }.into_any(),
                    Screen::Ready => view! { <DetailBody page=page /> }.into_any(),
                }}
            </main>

            <TaskFormDialog
                open=Signal::derive(move || page.ui.task_dialog().get().is_open())
                editing=Signal::derive(move || page.ui.task_dialog().get().editing().is_some())
                form=Signal::derive(move || page.ui.task_form().get())
                busy=Signal::derive(move || page.busy())
                on_change=move |form: TaskForm| page.ui.task_form().set(form)
                on_save=move |()| page.save_task()
                on_cancel=move |()| close_task_dialog(&page.ui)
            />
            <ProjectFormDialog
                open=Signal::derive(move || page.ui.project_dialog_open().get())
                heading="Edit Project".to_string()
                form=Signal::derive(move || page.ui.project_form().get())
                busy=Signal::derive(move || page.busy())
                on_change=move |form: ProjectForm| page.ui.project_form().set(form)
                on_save=move |()| page.save_project()
                on_cancel=move |()| page.ui.project_dialog_open().set(false)
            />
            <DeleteConfirmDialog
                open=Signal::derive(move || page.ui.pending_task_delete().get().is_some())
                title="Delete Task"
                busy=Signal::derive(move || page.busy())
                on_confirm=move |()| page.confirm_task_delete()
                on_cancel=move |()| page.ui.pending_task_delete().set(None)
            />
            <DeleteConfirmDialog
                open=Signal::derive(move || page.ui.confirm_project_delete().get())
                title="Delete Project"
                description="All tasks in this project will be deleted as well."
                busy=Signal::derive(move || page.busy())
                on_confirm=move |()| page.confirm_project_delete()
                on_cancel=move |()| page.ui.confirm_project_delete().set(false)
            />
            <LoadingOverlay visible=Signal::derive(move || page.view.with(|v| v.phase() == Phase::Mutating)) />
        </div>
    }
}

#[component]
fn DetailBody(page: DetailPageCtx) -> impl IntoView {
    let detail = move || page.view.with(|v| v.data().cloned());
    let progress = move || detail().map(|d| d.progress).unwrap_or_default();
    let percentage = Signal::derive(move || progress().rounded_percentage());

    let filtered = Memo::new(move |_| page.filtered());
    let per_page = page.rows_per_page();
    let rows = Signal::derive(move || {
        let page_index = page.ui.filter().with(|f| f.page());
        filtered.with(|tasks| paginate(tasks, page_index, per_page))
    });

    view! {
        <div class="project-header">
            <div>
                <h1>{move || detail().map(|d| d.project.title).unwrap_or_default()}</h1>
                <p class="muted">{move || detail().map(|d| d.project.description_text().to_string()).unwrap_or_default()}</p>
            </div>
            <div class="header-actions">
                <button class="btn btn-outlined" disabled=move || page.busy() on:click=move |_| page.open_project_edit()>
                    "Edit Project"
                </button>
                <button
                    class="btn btn-danger"
                    disabled=move || page.busy()
                    on:click=move |_| page.ui.confirm_project_delete().set(true)
                >
                    "Delete Project"
                </button>
            </div>
        </div>

        <div class="stat-grid">
            <StatCard label="Total Tasks" icon="📋" value=Signal::derive(move || progress().total_tasks.to_string()) />
            <StatCard label="Completed" icon="✅" accent="#10b981" value=Signal::derive(move || progress().completed_tasks.to_string()) />
            <div class="stat-card progress-card">
                <div class="stat-label">"Completion Rate"</div>
                <div class="stat-value">{move || format!("{}%", percentage.get())}</div>
                <ProgressBar percentage=percentage />
            </div>
        </div>

        <section class="card tasks-card">
            <div class="section-header">
                <h2>"Tasks"</h2>
                <button class="btn btn-primary" disabled=move || page.busy() on:click=move |_| page.open_task_create()>
                    "+ Add Task"
                </button>
            </div>
            <TaskFilterBar
                search=Signal::derive(move || page.ui.filter().with(|f| f.search().to_string()))
                on_search=move |text: String| page.ui.filter().update(|f| f.set_search(text))
                is_active=move |status: StatusFilter| page.ui.filter().with(|f| f.is_active(status))
                on_toggle=move |status: StatusFilter| page.ui.filter().update(|f| f.toggle(status))
            />
            <TaskTable
                rows=rows
                total_rows=Signal::derive(move || filtered.with(Vec::len))
                page=Signal::derive(move || page.ui.filter().with(|f| f.page()))
                rows_per_page=per_page
                today=Signal::derive(today)
                busy=Signal::derive(move || page.busy())
                on_complete=move |task: Task| page.complete(task)
                on_edit=move |task: Task| page.open_task_edit(&task)
                on_delete=move |id: u64| page.ui.pending_task_delete().set(Some(id))
                on_page=move |index: usize| page.ui.filter().update(|f| f.set_page(index))
            />
        </section>
    }
}
