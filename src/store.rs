//! Page UI State Stores
//!
//! Dialog, form and filter state for the editing pages, held in
//! reactive_stores for field-level reactivity. Each page creates its own
//! store on mount, so nothing survives navigation.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controllers::{DialogMode, ProjectForm, TaskForm};
use crate::filter::TaskFilter;

/// Projects page: one form dialog and one delete confirmation
#[derive(Clone, Debug, Default, Store)]
pub struct ProjectsUi {
    pub dialog: DialogMode,
    pub form: ProjectForm,
    /// Project awaiting delete confirmation
    pub pending_delete: Option<u64>,
}

/// Project detail page
#[derive(Clone, Debug, Default, Store)]
pub struct ProjectDetailUi {
    pub filter: TaskFilter,
    pub task_dialog: DialogMode,
    pub task_form: TaskForm,
    pub project_dialog_open: bool,
    pub project_form: ProjectForm,
    /// Task awaiting delete confirmation
    pub pending_task_delete: Option<u64>,
    pub confirm_project_delete: bool,
}

pub type ProjectsUiStore = Store<ProjectsUi>;
pub type ProjectDetailUiStore = Store<ProjectDetailUi>;

// ========================
// Store Helper Functions
// ========================

pub fn open_project_dialog(store: &ProjectsUiStore, mode: DialogMode, form: ProjectForm) {
    store.form().set(form);
    store.dialog().set(mode);
}

pub fn close_project_dialog(store: &ProjectsUiStore) {
    store.dialog().set(DialogMode::Closed);
    store.form().set(ProjectForm::default());
}

pub fn open_task_dialog(store: &ProjectDetailUiStore, mode: DialogMode, form: TaskForm) {
    store.task_form().set(form);
    store.task_dialog().set(mode);
}

pub fn close_task_dialog(store: &ProjectDetailUiStore) {
    store.task_dialog().set(DialogMode::Closed);
    store.task_form().set(TaskForm::default());
}
