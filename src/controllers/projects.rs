//! Projects list and the project form

use crate::api::{self, ApiClient};
use crate::error::{ApiError, FormError};
use crate::models::{Project, ProjectInput};

pub const LOAD_FAILED: &str = "Failed to load projects";
pub const CREATED: &str = "✓ Project created successfully";
pub const UPDATED: &str = "✓ Project updated successfully";
pub const DELETED: &str = "✓ Project deleted successfully";
pub const SAVE_FAILED: &str = "✗ Failed to save project";
pub const UPDATE_FAILED: &str = "✗ Failed to update project";
pub const DELETE_FAILED: &str = "✗ Failed to delete project";
pub const NO_DESCRIPTION: &str = "No description provided";

/// Which record a form dialog is working on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogMode {
    #[default]
    Closed,
    Create,
    Edit(u64),
}

impl DialogMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogMode::Closed)
    }

    pub fn editing(&self) -> Option<u64> {
        match self {
            DialogMode::Edit(id) => Some(*id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description_text().to_string(),
        }
    }

    pub fn validate(&self) -> Result<ProjectInput, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::ProjectTitleRequired);
        }
        let description = self.description.trim();
        Ok(ProjectInput {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

pub async fn load_projects(api: &ApiClient, size: u32) -> Result<Vec<Project>, ApiError> {
    let page = api::list_projects(api, 0, size).await?;
    log::info!("[PROJECTS] Loaded {} of {} projects", page.content.len(), page.total_elements);
    Ok(page.content)
}

/// Create when `editing` is `None`, otherwise update that project
pub async fn save_project(api: &ApiClient, editing: Option<u64>, input: &ProjectInput) -> Result<Project, ApiError> {
    match editing {
        Some(id) => api::update_project(api, id, input).await,
        None => api::create_project(api, input).await,
    }
}

pub fn saved_message(editing: Option<u64>) -> &'static str {
    if editing.is_some() {
        UPDATED
    } else {
        CREATED
    }
}
