//! Frontend Models
//!
//! Data structures matching backend DTOs (camelCase on the wire).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Authenticated user profile (matches backend `UserDTO`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Name shown in greetings: full name, falling back to email
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    /// Single upper-case letter for the avatar button
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}

/// Response of `/auth/login` and `/auth/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: User,
}

/// Project data structure (matches backend `ProjectDTO`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Project {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Creation date as `Jan 5, 2025`
    pub fn created_label(&self) -> Option<String> {
        self.created_at.as_deref().and_then(format_short_date)
    }
}

/// Task data structure (matches backend `TaskDTO`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Task {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Server-computed progress aggregate for one project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub progress_percentage: f64,
}

impl Progress {
    pub fn rounded_percentage(&self) -> u32 {
        self.progress_percentage.round().clamp(0.0, 100.0) as u32
    }
}

/// Spring-style page envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
}

/// Body of project create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of task create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Format a backend timestamp (`2025-01-05T10:00:00`) or date as `Jan 5, 2025`
pub fn format_short_date(raw: &str) -> Option<String> {
    let date_part = raw.get(..10)?;
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    Some(date.format("%b %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_decodes_camel_case() {
        let json = r#"{"id":7,"title":"Write docs","description":null,"dueDate":"2025-03-01",
            "isCompleted":true,"projectId":2,"createdAt":"2025-02-01T09:00:00","updatedAt":null}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert!(task.is_completed);
        assert_eq!(task.description_text(), "");
    }

    #[test]
    fn test_task_input_omits_absent_fields() {
        let input = TaskInput { title: "A".into(), description: None, due_date: None };
        assert_eq!(serde_json::to_string(&input).unwrap(), r#"{"title":"A"}"#);

        let input = TaskInput {
            title: "B".into(),
            description: Some("d".into()),
            due_date: NaiveDate::from_ymd_opt(2025, 1, 9),
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"title":"B","description":"d","dueDate":"2025-01-09"}"#
        );
    }

    #[test]
    fn test_user_display_name_and_initial() {
        let mut user = User { id: 1, email: "zoe@example.com".into(), full_name: Some("ada lovelace".into()), created_at: None };
        assert_eq!(user.display_name(), "ada lovelace");
        assert_eq!(user.initial(), "A");
        user.full_name = None;
        assert_eq!(user.initial(), "Z");
        user.email.clear();
        assert_eq!(user.initial(), "U");
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2025-01-05T10:30:00.123"), Some("Jan 5, 2025".to_string()));
        assert_eq!(format_short_date("2024-12-25"), Some("Dec 25, 2024".to_string()));
        assert_eq!(format_short_date("bogus"), None);
    }

    #[test]
    fn test_progress_rounding() {
        let progress = Progress { total_tasks: 3, completed_tasks: 2, progress_percentage: 66.666 };
        assert_eq!(progress.rounded_percentage(), 67);
        assert_eq!(Progress::default().rounded_percentage(), 0);
    }
}
