//! Pages
//!
//! One component per route. Data-bearing pages own a `ViewState` signal
//! and a `RequestGuard`, both discarded on unmount.

mod dashboard;
mod landing;
mod login;
mod not_found;
mod project_detail;
mod projects;
mod signup;

use std::future::Future;

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::error::ApiError;
use crate::view_state::{Phase, ViewState};

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use signup::SignupPage;

/// Which top-level branch a data page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Spinner,
    Failed,
    Ready,
}

impl Screen {
    pub(crate) fn of<T>(state: &ViewState<T>) -> Screen {
        if state.is_initial_load() {
            Screen::Spinner
        } else if state.phase() == Phase::LoadFailed {
            Screen::Failed
        } else {
            Screen::Ready
        }
    }
}

/// Marks a loaded page busy and runs `mutation`. `None` means the page was
/// not ready for a write and nothing was sent. On failure the page returns
/// to Loaded without reloading; on success the caller reloads.
pub(crate) async fn run_mutation<T, R>(
    view: RwSignal<ViewState<T>>,
    mutation: impl Future<Output = Result<R, ApiError>>,
) -> Option<Result<R, ApiError>>
where
    T: Send + Sync + 'static,
{
    if !view.try_update(|v| v.begin_mutation()).unwrap_or(false) {
        log::debug!("[VIEW] Ignoring write while busy");
        return None;
    }
    let result = mutation.await;
    if let Err(e) = &result {
        log::warn!("[VIEW] Mutation failed: {}", e);
        view.try_update(|v| v.abort_mutation());
    }
    Some(result)
}

/// Local calendar date for overdue checks
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
