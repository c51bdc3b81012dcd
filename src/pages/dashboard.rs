use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CircularProgress, Navbar, PageSpinner, PieChart, StatCard};
use crate::context::{use_app, use_auth};
use crate::controllers::dashboard::{load_dashboard, LOAD_FAILED};
use crate::controllers::{DashboardStats, ProjectSummary};
use crate::router::{use_navigator, Route};
use crate::toast::use_toaster;
use super::Screen;
use crate::view_state::{RequestGuard, ViewState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = use_app();
    let auth = use_auth();
    let navigator = use_navigator();
    let toaster = use_toaster();

    let view = RwSignal::new(ViewState::<Vec<ProjectSummary>>::default());
    let guard = RequestGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.retire()
    });

    let api = app.api();
    let count = app.config().dashboard_project_count;
    view.update(|v| v.begin_load());
    spawn_local(async move {
        let Some(result) = guard.run(load_dashboard(&api, count)).await else {
            return;
        };
        if let Some(Err(e)) = view.try_update(|v| v.finish_load(result)) {
            log::error!("[DASHBOARD] Load failed: {}", e);
            toaster.error(LOAD_FAILED);
        }
    });

    let screen = Memo::new(move |_| view.with(Screen::of));
    let stats = Memo::new(move |_| view.with(|v| v.data().map(|s| DashboardStats::from_summaries(s)).unwrap_or_default()));
    let greeting = move || {
        let name = auth.user().map(|u| u.display_name().to_string()).unwrap_or_default();
        format!("Welcome back, {}! 👋", name)
    };

    view! {
        <div class="page dashboard-page">
            <Navbar show_user_menu=true />
            <main class="content">
                <div class="page-header">
                    <div>
                        <h1>{greeting}</h1>
                        <p class="muted">"Here's an overview of your projects and task progress"</p>
                    </div>
                    <button class="btn btn-primary" on:click=move |_| navigator.navigate(Route::Projects)>
                        "View All Projects"
                    </button>
                </div>
                {move || match screen.get() {
                    Screen::Spinner => view! { <PageSpinner /> }.into_any(),
                    Screen::Failed => view! {
                        <div class="empty-state">"Dashboard data is unavailable right now."</div>
                    }.into_any(),
                    Screen::Ready => view! {
                        <div class="stat-grid">
                            <StatCard label="Total Projects" icon="📁" value=Signal::derive(move || stats.get().total_projects.to_string()) />
                            <StatCard label="Total Tasks" icon="📋" value=Signal::derive(move || stats.get().total_tasks.to_string()) />
                            <StatCard label="Completed" icon="✅" accent="#10b981" value=Signal::derive(move || stats.get().completed_tasks.to_string()) />
                            <StatCard label="Completion Rate" icon="📈" accent="#764ba2" value=Signal::derive(move || format!("{}%", stats.get().completion_rate())) />
                        </div>
                        <div class="dashboard-grid">
                            <section class="card">
                                <h2>"Task Progress"</h2>
                                <PieChart data=Signal::derive(move || stats.get().pie_slices()) />
                            </section>
                            <section class="card">
                                <h2>"Recent Projects"</h2>
                                <RecentProjects summaries=Signal::derive(move || view.with(|v| v.data().cloned().unwrap_or_default())) />
                            </section>
                        </div>
                    }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn RecentProjects(#[prop(into)] summaries: Signal<Vec<ProjectSummary>>) -> impl IntoView {
    let navigator = use_navigator();
    view! {
        <Show
            when=move || !summaries.get().is_empty()
            fallback=move || view! {
                <div class="empty-state">
                    <p>"No projects yet"</p>
                    <button class="btn btn-primary" on:click=move |_| navigator.navigate(Route::Projects)>
                        "Create Your First Project"
                    </button>
                </div>
            }
        >
            <div class="recent-projects">
                <For
                    each=move || summaries.get()
                    key=|s| (s.project.id, s.progress.completed_tasks, s.progress.total_tasks)
                    children=move |summary| {
                        let id = summary.project.id;
                        let percentage = summary.progress.rounded_percentage();
                        view! {
                            <div class="project-summary" on:click=move |_| navigator.navigate(Route::ProjectDetail(id))>
                                <CircularProgress percentage=percentage size=80.0 />
                                <div class="project-summary-body">
                                    <h3>{summary.project.title.clone()}</h3>
                                    <p class="muted">
                                        {format!("{} of {} tasks completed", summary.progress.completed_tasks, summary.progress.total_tasks)}
                                    </p>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
