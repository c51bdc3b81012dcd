//! TaskFlow Frontend App
//!
//! Builds the shared services, provides them as context and switches pages
//! on the current route.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{ApiClient, FetchTransport};
use crate::components::{AppErrorBoundary, ToastHost};
use crate::config::AppConfig;
use crate::context::{AppContext, AuthContext};
use crate::pages::{
    DashboardPage, LandingPage, LoginPage, NotFoundPage, ProjectDetailPage, ProjectsPage, SignupPage,
};
use crate::router::{Navigator, Route};
use crate::session::SessionStore;
use crate::storage;
use crate::theme::ThemeContext;
use crate::toast::Toaster;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let storage = storage::browser_or_memory();
    let api = ApiClient::new(Arc::new(FetchTransport::new(&config.api_base_url)));
    let toaster = Toaster::new(config.toast_duration_ms);

    let auth = AuthContext::new(SessionStore::new(storage.clone(), api.clone()));
    let theme = ThemeContext::new(storage);
    let navigator = Navigator::new();

    provide_context(AppContext::new(api, config));
    provide_context(auth);
    provide_context(theme);
    provide_context(toaster);
    provide_context(navigator);

    // Route guard: anonymous users never see protected pages and signed-in
    // users skip the auth pages
    let resolved = Memo::new(move |_| navigator.route.get().resolve(auth.is_authenticated()));
    Effect::new(move |_| {
        let target = resolved.get();
        if target != navigator.route.get() {
            log::info!("[ROUTER] Redirecting to {}", target.path());
            navigator.redirect(target);
        }
    });

    view! {
        <div
            class=move || format!("app-root {}", theme.mode.get().class())
            style=move || theme.mode.get().style_vars()
        >
            <AppErrorBoundary>
                {move || match resolved.get() {
                    Route::Landing => view! { <LandingPage /> }.into_any(),
                    Route::Login => view! { <LoginPage /> }.into_any(),
                    Route::Signup => view! { <SignupPage /> }.into_any(),
                    Route::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Route::Projects => view! { <ProjectsPage /> }.into_any(),
                    Route::ProjectDetail(id) => view! { <ProjectDetailPage project_id=id /> }.into_any(),
                    Route::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </AppErrorBoundary>
            <ToastHost />
        </div>
    }
}
