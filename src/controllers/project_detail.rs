//! Project detail: project, its tasks and progress loaded as one unit

use chrono::NaiveDate;

use crate::api::{self, ApiClient};
use crate::error::{ApiError, FormError};
use crate::models::{Progress, Project, Task, TaskInput};

pub const LOAD_FAILED: &str = "Failed to load project details";
pub const NOT_FOUND: &str = "Project not found";
pub const TASK_CREATED: &str = "✓ Task created successfully";
pub const TASK_UPDATED: &str = "✓ Task updated successfully";
pub const TASK_SAVE_FAILED: &str = "✗ Failed to save task";
pub const TASK_COMPLETED: &str = "✓ Task completed! 🎉";
pub const TASK_COMPLETE_FAILED: &str = "✗ Failed to complete task";
pub const TASK_DELETED: &str = "✓ Task deleted successfully";
pub const TASK_DELETE_FAILED: &str = "✗ Failed to delete task";

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    pub tasks: Vec<Task>,
    pub progress: Progress,
}

/// All three requests run concurrently; one failure fails the load
pub async fn load_project_detail(api: &ApiClient, project_id: u64, task_fetch_size: u32) -> Result<ProjectDetail, ApiError> {
    let (project, tasks, progress) = futures::try_join!(
        api::get_project(api, project_id),
        api::list_tasks(api, project_id, 0, task_fetch_size),
        api::get_progress(api, project_id),
    )?;
    log::info!("[DETAIL] Project {} loaded with {} tasks", project_id, tasks.content.len());
    Ok(ProjectDetail {
        project,
        tasks: tasks.content,
        progress,
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD` as produced by a date input, or empty
    pub due_date: String,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description_text().to_string(),
            due_date: task.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<TaskInput, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::TaskTitleRequired);
        }
        let description = self.description.trim();
        Ok(TaskInput {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            due_date: NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d").ok(),
        })
    }
}

pub async fn save_task(api: &ApiClient, project_id: u64, editing: Option<u64>, input: &TaskInput) -> Result<Task, ApiError> {
    match editing {
        Some(task_id) => api::update_task(api, project_id, task_id, input).await,
        None => api::create_task(api, project_id, input).await,
    }
}

pub fn task_saved_message(editing: Option<u64>) -> &'static str {
    if editing.is_some() {
        TASK_UPDATED
    } else {
        TASK_CREATED
    }
}

/// Marks a pending task complete. Already-completed tasks are left alone
/// and no request is sent; returns whether a request was made.
pub async fn complete_task(api: &ApiClient, project_id: u64, task: &Task) -> Result<bool, ApiError> {
    if task.is_completed {
        return Ok(false);
    }
    api::complete_task(api, project_id, task.id).await?;
    Ok(true)
}
