//! Application Configuration
//!
//! Resolved once at startup from build-time environment variables.

use log::LevelFilter;

/// Fixed local-storage keys
pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const AUTH_USER_KEY: &str = "authUser";
pub const THEME_MODE_KEY: &str = "themeMode";

const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every API path is appended to
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    /// Projects fetched by the projects page
    pub projects_page_size: u32,
    /// Projects summarised on the dashboard
    pub dashboard_project_count: u32,
    /// Tasks fetched by the project detail page
    pub task_fetch_size: u32,
    /// Rows per page in the task table
    pub task_rows_per_page: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            log_level: LevelFilter::Info,
            toast_duration_ms: 3000,
            projects_page_size: 100,
            dashboard_project_count: 6,
            task_fetch_size: 100,
            task_rows_per_page: 10,
        }
    }
}

impl AppConfig {
    /// Config baked in at compile time (`TASKFLOW_API_BASE`, `TASKFLOW_LOG_LEVEL`)
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TASKFLOW_API_BASE"), option_env!("TASKFLOW_LOG_LEVEL"))
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base
            .map(|s| s.trim().trim_end_matches('/'))
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();

        let log_level = log_level
            .and_then(|s| s.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base_url,
            log_level,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.task_rows_per_page, 10);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("http://localhost:8080/api/"), Some("debug"));
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let config = AppConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
