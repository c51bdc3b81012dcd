//! Dashboard aggregation

use futures::future::try_join_all;

use crate::api::{self, ApiClient};
use crate::error::ApiError;
use crate::models::{Progress, Project};

pub const LOAD_FAILED: &str = "Failed to load dashboard data";

pub const COMPLETED_COLOR: &str = "#667eea";
pub const REMAINING_COLOR: &str = "#f093fb";

/// A recent project with its server-computed progress
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub project: Project,
    pub progress: Progress,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_tasks: u64,
    pub completed_tasks: u64,
}

impl DashboardStats {
    pub fn from_summaries(summaries: &[ProjectSummary]) -> Self {
        Self {
            total_projects: summaries.len(),
            total_tasks: summaries.iter().map(|s| s.progress.total_tasks).sum(),
            completed_tasks: summaries.iter().map(|s| s.progress.completed_tasks).sum(),
        }
    }

    pub fn remaining_tasks(&self) -> u64 {
        self.total_tasks.saturating_sub(self.completed_tasks)
    }

    /// Rounded percentage; 0 when there are no tasks
    pub fn completion_rate(&self) -> u32 {
        if self.total_tasks == 0 {
            return 0;
        }
        (self.completed_tasks as f64 / self.total_tasks as f64 * 100.0).round() as u32
    }

    /// (label, value, color) for the progress pie
    pub fn pie_slices(&self) -> Vec<(&'static str, u64, &'static str)> {
        vec![
            ("Completed", self.completed_tasks, COMPLETED_COLOR),
            ("Remaining", self.remaining_tasks(), REMAINING_COLOR),
        ]
    }
}

/// First `count` projects, then every project's progress concurrently.
/// Any single failure fails the whole load.
pub async fn load_dashboard(api: &ApiClient, count: u32) -> Result<Vec<ProjectSummary>, ApiError> {
    let projects = api::list_projects(api, 0, count).await?.content;
    let progress = try_join_all(projects.iter().map(|p| api::get_progress(api, p.id))).await?;
    log::info!("[DASHBOARD] Loaded {} projects", projects.len());

    Ok(projects
        .into_iter()
        .zip(progress)
        .map(|(project, progress)| ProjectSummary { project, progress })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockBackend;

    const OWNER: &str = "ana@example.com";

    #[tokio::test]
    async fn test_load_aggregates_progress() {
        let backend = MockBackend::new();
        let alpha = backend.seed_project(OWNER, "Alpha", "");
        let beta = backend.seed_project(OWNER, "Beta", "");
        backend.seed_task(alpha, "a1", None, true);
        backend.seed_task(alpha, "a2", None, false);
        backend.seed_task(beta, "b1", None, true);
        let api = backend.signed_in_client(OWNER);

        let summaries = load_dashboard(&api, 6).await.unwrap();
        assert_eq!(summaries.len(), 2);

        let stats = DashboardStats::from_summaries(&summaries);
        assert_eq!(stats, DashboardStats { total_projects: 2, total_tasks: 3, completed_tasks: 2 });
        assert_eq!(stats.completion_rate(), 67);
        assert_eq!(stats.pie_slices()[1], ("Remaining", 1, REMAINING_COLOR));
    }

    #[tokio::test]
    async fn test_respects_project_count() {
        let backend = MockBackend::new();
        for i in 0..8 {
            backend.seed_project(OWNER, &format!("P{}", i), "");
        }
        let api = backend.signed_in_client(OWNER);
        assert_eq!(load_dashboard(&api, 6).await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_one_failed_progress_fails_everything() {
        let backend = MockBackend::new();
        backend.seed_project(OWNER, "Alpha", "");
        let beta = backend.seed_project(OWNER, "Beta", "");
        backend.fail_path(&format!("/projects/{}/tasks/progress", beta), 500);
        let api = backend.signed_in_client(OWNER);

        let err = load_dashboard(&api, 6).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_completion_rate_without_tasks() {
        let stats = DashboardStats::default();
        assert_eq!(stats.completion_rate(), 0);
        assert_eq!(stats.remaining_tasks(), 0);
    }
}
