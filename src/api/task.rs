//! Task Endpoints
//!
//! Frontend bindings for `/projects/{id}/tasks`.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Page, Progress, Task, TaskInput};

fn tasks_path(project_id: u64) -> String {
    format!("/projects/{}/tasks", project_id)
}

fn task_path(project_id: u64, task_id: u64) -> String {
    format!("/projects/{}/tasks/{}", project_id, task_id)
}

pub async fn list_tasks(api: &ApiClient, project_id: u64, page: u32, size: u32) -> Result<Page<Task>, ApiError> {
    api.get(&tasks_path(project_id), &[("page", page.to_string()), ("size", size.to_string())]).await
}

/// Server-side search. The detail page filters locally instead.
pub async fn search_tasks(
    api: &ApiClient,
    project_id: u64,
    search_term: &str,
    page: u32,
    size: u32,
) -> Result<Page<Task>, ApiError> {
    let query = [
        ("searchTerm", search_term.to_string()),
        ("page", page.to_string()),
        ("size", size.to_string()),
    ];
    api.get(&format!("{}/search", tasks_path(project_id)), &query).await
}

pub async fn get_task(api: &ApiClient, project_id: u64, task_id: u64) -> Result<Task, ApiError> {
    api.get(&task_path(project_id, task_id), &[]).await
}

pub async fn create_task(api: &ApiClient, project_id: u64, input: &TaskInput) -> Result<Task, ApiError> {
    api.post(&tasks_path(project_id), Some(input)).await
}

pub async fn update_task(api: &ApiClient, project_id: u64, task_id: u64, input: &TaskInput) -> Result<Task, ApiError> {
    api.put(&task_path(project_id, task_id), Some(input)).await
}

pub async fn complete_task(api: &ApiClient, project_id: u64, task_id: u64) -> Result<Task, ApiError> {
    api.put::<(), _>(&format!("{}/complete", task_path(project_id, task_id)), None).await
}

pub async fn delete_task(api: &ApiClient, project_id: u64, task_id: u64) -> Result<(), ApiError> {
    api.delete(&task_path(project_id, task_id)).await
}

pub async fn get_progress(api: &ApiClient, project_id: u64) -> Result<Progress, ApiError> {
    api.get(&format!("{}/progress", tasks_path(project_id)), &[]).await
}
