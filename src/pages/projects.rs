use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{run_mutation, Screen};
use crate::api;
use crate::components::{DeleteConfirmDialog, LoadingOverlay, Navbar, PageSpinner, ProjectFormDialog};
use crate::context::{use_app, AppContext};
use crate::controllers::projects::{
    load_projects, save_project, saved_message, DELETED, DELETE_FAILED, LOAD_FAILED, NO_DESCRIPTION, SAVE_FAILED,
};
use crate::controllers::{DialogMode, ProjectForm};
use crate::models::Project;
use crate::router::{use_navigator, Navigator, Route};
use crate::store::{close_project_dialog, open_project_dialog, ProjectsUi, ProjectsUiStore, ProjectsUiStoreFields};
use crate::toast::{use_toaster, ToastKind, Toaster};
use crate::view_state::{Phase, RequestGuard, ViewState};
use reactive_stores::Store;

/// Everything the page's handlers need; all fields are Copy handles
#[derive(Clone, Copy)]
struct ProjectsPageCtx {
    app: AppContext,
    view: RwSignal<ViewState<Vec<Project>>>,
    ui: ProjectsUiStore,
    guard: StoredValue<RequestGuard>,
    toaster: Toaster,
    navigator: Navigator,
}

impl ProjectsPageCtx {
    fn busy(&self) -> bool {
        self.view.with(|v| v.is_busy())
    }

    async fn reload(self) {
        let Some(guard) = self.guard.try_get_value() else {
            return;
        };
        let api = self.app.api();
        let size = self.app.config().projects_page_size;
        self.view.try_update(|v| v.begin_load());
        let Some(result) = guard.run(load_projects(&api, size)).await else {
            return;
        };
        if let Some(Err(e)) = self.view.try_update(|v| v.finish_load(result)) {
            log::error!("[PROJECTS] Load failed: {}", e);
            self.toaster.error(LOAD_FAILED);
        }
    }

    fn open_create(self) {
        open_project_dialog(&self.ui, DialogMode::Create, ProjectForm::default());
    }

    fn open_edit(self, project: &Project) {
        open_project_dialog(&self.ui, DialogMode::Edit(project.id), ProjectForm::from_project(project));
    }

    fn save(self) {
        let editing = self.ui.dialog().get_untracked().editing();
        let input = match self.ui.form().get_untracked().validate() {
            Ok(input) => input,
            Err(e) => {
                self.toaster.show(e.to_string(), ToastKind::Warning);
                return;
            }
        };
        let api = self.app.api();
        spawn_local(async move {
            match run_mutation(self.view, save_project(&api, editing, &input)).await {
                Some(Ok(_)) => {
                    close_project_dialog(&self.ui);
                    self.reload().await;
                    self.toaster.success(saved_message(editing));
                }
                // Dialog stays open with the user's input
                Some(Err(_)) => self.toaster.error(SAVE_FAILED),
                None => {}
            }
        });
    }

    fn confirm_delete(self) {
        let Some(id) = self.ui.pending_delete().get_untracked() else {
            return;
        };
        let api = self.app.api();
        spawn_local(async move {
            match run_mutation(self.view, api::delete_project(&api, id)).await {
                Some(Ok(())) => {
                    self.ui.pending_delete().set(None);
                    self.toaster.success(DELETED);
                    self.reload().await;
                }
                Some(Err(_)) => {
                    self.ui.pending_delete().set(None);
                    self.toaster.error(DELETE_FAILED);
                }
                None => {}
            }
        });
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let guard = RequestGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.retire()
    });

    let page = ProjectsPageCtx {
        app: use_app(),
        view: RwSignal::new(ViewState::default()),
        ui: Store::new(ProjectsUi::default()),
        guard: StoredValue::new(guard),
        toaster: use_toaster(),
        navigator: use_navigator(),
    };
    spawn_local(page.reload());

    let projects = move || page.view.with(|v| v.data().cloned().unwrap_or_default());
    let screen = Memo::new(move |_| {
        page.view.with(|v| (Screen::of(v), v.data().is_some_and(|projects| projects.is_empty())))
    });
    let dialog_heading = Signal::derive(move || match page.ui.dialog().get() {
        DialogMode::Edit(_) => "Edit Project".to_string(),
        _ => "Create New Project".to_string(),
    });

    view! {
        <div class="page projects-page">
            <Navbar show_user_menu=true />
            <main class="content">
                <div class="page-header">
                    <div>
                        <h1>"Projects"</h1>
                        <p class="muted">"Manage and organize all your projects"</p>
                    </div>
                    <button class="btn btn-primary" disabled=move || page.busy() on:click=move |_| page.open_create()>
                        "+ New Project"
                    </button>
                </div>
                {move || match screen.get() {
                    (Screen::Spinner, _) => view! { <PageSpinner /> }.into_any(),
                    (Screen::Failed, _) => view! {
                        <div class="empty-state">
                            <p>"Projects could not be loaded."</p>
                            <button class="btn btn-outlined" on:click=move |_| spawn_local(page.reload())>"Retry"</button>
                        </div>
                    }.into_any(),
                    (Screen::Ready, true) => view! {
                        <div class="empty-state">
                            <div class="empty-icon">"📁"</div>
                            <h2>"No projects yet"</h2>
                            <p class="muted">"Create your first project to start organizing tasks"</p>
                            <button class="btn btn-primary" on:click=move |_| page.open_create()>"Create Project"</button>
                        </div>
                    }.into_any(),
                    (Screen::Ready, false) => view! {
                        <div class="project-grid">
                            <For
                                each=projects
                                key=|p| (p.id, p.title.clone(), p.description.clone())
                                children=move |project| view! { <ProjectCard project=project page=page /> }
                            />
                        </div>
                    }.into_any(),
                }}
            </main>

            <ProjectFormDialog
                open=Signal::derive(move || page.ui.dialog().get().is_open())
                heading=dialog_heading
                form=Signal::derive(move || page.ui.form().get())
                busy=Signal::derive(move || page.busy())
                on_change=move |form: ProjectForm| page.ui.form().set(form)
                on_save=move |()| page.save()
                on_cancel=move |()| close_project_dialog(&page.ui)
            />
            <DeleteConfirmDialog
                open=Signal::derive(move || page.ui.pending_delete().get().is_some())
                title="Delete Project"
                description="All tasks in this project will be deleted as well."
                busy=Signal::derive(move || page.busy())
                on_confirm=move |()| page.confirm_delete()
                on_cancel=move |()| page.ui.pending_delete().set(None)
            />
            <LoadingOverlay visible=Signal::derive(move || page.view.with(|v| v.phase() == Phase::Mutating)) />
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, page: ProjectsPageCtx) -> impl IntoView {
    let id = project.id;
    let description = match project.description_text() {
        "" => NO_DESCRIPTION.to_string(),
        text => text.to_string(),
    };
    let created = project.created_label().map(|d| format!("Created {}", d));
    let for_edit = project.clone();

    view! {
        <div class="project-card">
            <div class="project-card-header">
                <h3 class="project-title link" on:click=move |_| page.navigator.navigate(Route::ProjectDetail(id))>
                    {project.title.clone()}
                </h3>
                <div class="card-actions">
                    <button class="icon-btn" title="Edit" disabled=move || page.busy() on:click=move |_| page.open_edit(&for_edit)>
                        "✎"
                    </button>
                    <button class="icon-btn danger" title="Delete" disabled=move || page.busy() on:click=move |_| page.ui.pending_delete().set(Some(id))>
                        "🗑"
                    </button>
                </div>
            </div>
            <p class="project-description">{description}</p>
            {created.map(|c| view! { <p class="project-date muted">{c}</p> })}
            <button class="btn btn-text" on:click=move |_| page.navigator.navigate(Route::ProjectDetail(id))>
                "View Tasks →"
            </button>
        </div>
    }
}
