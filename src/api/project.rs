//! Project Endpoints
//!
//! Frontend bindings for `/projects`.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Page, Project, ProjectInput};

pub async fn list_projects(api: &ApiClient, page: u32, size: u32) -> Result<Page<Project>, ApiError> {
    api.get("/projects", &[("page", page.to_string()), ("size", size.to_string())]).await
}

pub async fn get_project(api: &ApiClient, id: u64) -> Result<Project, ApiError> {
    api.get(&format!("/projects/{}", id), &[]).await
}

pub async fn create_project(api: &ApiClient, input: &ProjectInput) -> Result<Project, ApiError> {
    api.post("/projects", Some(input)).await
}

pub async fn update_project(api: &ApiClient, id: u64, input: &ProjectInput) -> Result<Project, ApiError> {
    api.put(&format!("/projects/{}", id), Some(input)).await
}

/// Deletes the project and, server-side, all of its tasks
pub async fn delete_project(api: &ApiClient, id: u64) -> Result<(), ApiError> {
    api.delete(&format!("/projects/{}", id)).await
}
