//! Routing
//!
//! Path <-> `Route` mapping, the authentication guard and a History API
//! backed navigator.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
    Projects,
    ProjectDetail(u64),
    NotFound,
}

impl Route {
    /// Query string and fragment are ignored; a trailing slash is tolerated
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Landing,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["dashboard"] => Route::Dashboard,
            ["projects"] => Route::Projects,
            ["projects", id] => id.parse().map(Route::ProjectDetail).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{}", id),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Projects | Route::ProjectDetail(_))
    }

    /// Route actually rendered for the requested one
    pub fn resolve(self, authenticated: bool) -> Route {
        match self {
            route if route.is_protected() && !authenticated => Route::Login,
            Route::Landing | Route::Login | Route::Signup if authenticated => Route::Dashboard,
            route => route,
        }
    }
}

fn location_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Landing)
}

/// Current route as a signal, kept in sync with the address bar
#[derive(Clone, Copy)]
pub struct Navigator {
    pub route: RwSignal<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        let route = RwSignal::new(location_route());
        let _ = window_event_listener(ev::popstate, move |_| {
            let next = location_route();
            log::debug!("[ROUTER] popstate -> {}", next.path());
            route.set(next);
        });
        Self { route }
    }

    pub fn navigate(&self, route: Route) {
        self.update_history(route, false);
    }

    /// Redirect without leaving the current entry in history
    pub fn redirect(&self, route: Route) {
        self.update_history(route, true);
    }

    fn update_history(&self, route: Route, replace: bool) {
        if self.route.get_untracked() == route {
            return;
        }
        let path = route.path();
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let result = if replace {
                history.replace_state_with_url(&JsValue::NULL, "", Some(&path))
            } else {
                history.push_state_with_url(&JsValue::NULL, "", Some(&path))
            };
            if result.is_err() {
                log::warn!("[ROUTER] Could not update history for {}", path);
            }
        }
        log::info!("[ROUTER] -> {}", path);
        self.route.set(route);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}
