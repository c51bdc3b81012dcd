//! Page Controllers
//!
//! Data loading, form validation and mutation flows for each page, kept
//! free of view code so they run against any `Transport`.

pub mod auth_form;
pub mod dashboard;
pub mod project_detail;
pub mod projects;

pub use auth_form::{LoginForm, SignupForm};
pub use dashboard::{DashboardStats, ProjectSummary};
pub use project_detail::{ProjectDetail, TaskForm};
pub use projects::{DialogMode, ProjectForm};
