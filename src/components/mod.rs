//! UI Components
//!
//! Reusable Leptos components.

mod animated_counter;
mod circular_progress;
mod delete_confirm_dialog;
mod error_boundary;
mod loading_overlay;
mod navbar;
mod pie_chart;
mod progress_bar;
mod project_form_dialog;
mod stat_card;
mod task_filter_bar;
mod task_form_dialog;
mod task_table;
mod toast_host;

pub use animated_counter::AnimatedCounter;
pub use circular_progress::CircularProgress;
pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use error_boundary::AppErrorBoundary;
pub use loading_overlay::{LoadingOverlay, PageSpinner};
pub use navbar::Navbar;
pub use pie_chart::PieChart;
pub use progress_bar::ProgressBar;
pub use project_form_dialog::ProjectFormDialog;
pub use stat_card::StatCard;
pub use task_filter_bar::TaskFilterBar;
pub use task_form_dialog::TaskFormDialog;
pub use task_table::TaskTable;
pub use toast_host::ToastHost;
