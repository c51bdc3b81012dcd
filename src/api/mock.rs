//! In-memory backend for tests.
//!
//! Implements `Transport` by routing requests against maps of users,
//! projects and tasks, mirroring the REST API's status codes and messages.
//! Every request is recorded so tests can assert on network traffic.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use super::{ApiClient, ApiRequest, ApiResponse, Method, Transport};
use crate::error::ApiError;
use crate::models::{AuthResponse, Page, Progress, Project, ProjectInput, Task, TaskInput, User};

const TIMESTAMP: &str = "2025-01-05T10:00:00";
pub const DEFAULT_PASSWORD: &str = "password123";

struct MockUser {
    user: User,
    password: String,
}

#[derive(Default)]
struct MockState {
    users: Vec<MockUser>,
    tokens: HashMap<String, u64>,
    projects: BTreeMap<u64, Project>,
    tasks: BTreeMap<u64, Task>,
    next_id: u64,
    requests: Vec<ApiRequest>,
    fail_next: Option<ApiError>,
    failing_paths: HashMap<String, u16>,
}

#[derive(Default)]
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state poisoned")
    }

    /// Client with no token
    pub fn client(self: &Arc<Self>) -> ApiClient {
        ApiClient::new(self.clone())
    }

    /// Client already holding a valid token for `email` (user created if needed)
    pub fn signed_in_client(self: &Arc<Self>, email: &str) -> ApiClient {
        let user_id = self.user_id(email).unwrap_or_else(|| self.add_user(email, DEFAULT_PASSWORD, "Test User"));
        let token = format!("token-{}", user_id);
        self.lock().tokens.insert(token.clone(), user_id);
        let api = self.client();
        api.set_token(Some(token));
        api
    }

    pub fn add_user(&self, email: &str, password: &str, full_name: &str) -> u64 {
        let mut state = self.lock();
        let id = state.next_id();
        state.users.push(MockUser {
            user: User {
                id,
                email: email.to_string(),
                full_name: Some(full_name.to_string()),
                created_at: Some(TIMESTAMP.to_string()),
            },
            password: password.to_string(),
        });
        id
    }

    fn user_id(&self, email: &str) -> Option<u64> {
        self.lock().users.iter().find(|u| u.user.email == email).map(|u| u.user.id)
    }

    pub fn seed_project(&self, owner_email: &str, title: &str, description: &str) -> u64 {
        let owner = self.user_id(owner_email).unwrap_or_else(|| self.add_user(owner_email, DEFAULT_PASSWORD, "Owner"));
        let mut state = self.lock();
        let input = ProjectInput { title: title.to_string(), description: Some(description.to_string()) };
        state.insert_project(owner, input).id
    }

    pub fn seed_task(&self, project_id: u64, title: &str, due_date: Option<NaiveDate>, completed: bool) -> u64 {
        let mut state = self.lock();
        let input = TaskInput { title: title.to_string(), description: None, due_date };
        let id = state.insert_task(project_id, input).id;
        if let Some(task) = state.tasks.get_mut(&id) {
            task.is_completed = completed;
        }
        id
    }

    /// The next request fails at the transport level with `error`
    pub fn fail_next(&self, error: ApiError) {
        self.lock().fail_next = Some(error);
    }

    /// Every request to exactly `path` answers with `status`
    pub fn fail_path(&self, path: &str, status: u16) {
        self.lock().failing_paths.insert(path.to_string(), status);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    pub fn task(&self, id: u64) -> Option<Task> {
        self.lock().tasks.get(&id).cloned()
    }
}

#[async_trait(?Send)]
impl Transport for MockBackend {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        if let Some(error) = state.fail_next.take() {
            return Err(error);
        }
        if let Some(status) = state.failing_paths.get(&request.path) {
            return Ok(error_response(*status, "Injected failure"));
        }
        Ok(state.route(&request))
    }
}

// ========================
// Routing
// ========================

impl MockState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn route(&mut self, req: &ApiRequest) -> ApiResponse {
        let segments: Vec<&str> = req.path.trim_matches('/').split('/').collect();
        match (req.method, segments.as_slice()) {
            (Method::Post, ["auth", "login"]) => return self.login(req),
            (Method::Post, ["auth", "register"]) => return self.register(req),
            _ => {}
        }

        let Some(user_id) = req.bearer.as_ref().and_then(|t| self.tokens.get(t)).copied() else {
            return error_response(401, "Unauthorized");
        };

        match (req.method, segments.as_slice()) {
            (Method::Get, ["projects"]) => {
                let owned: Vec<Project> = self.projects.values().filter(|p| p.user_id == Some(user_id)).cloned().collect();
                json_response(200, &page_of(owned, req))
            }
            (Method::Post, ["projects"]) => match parse_project_input(req) {
                Ok(input) => json_response(201, &self.insert_project(user_id, input)),
                Err(resp) => resp,
            },
            (method, ["projects", id]) => {
                let Some(project_id) = self.owned_project(id, user_id) else {
                    return error_response(404, "Project not found");
                };
                match method {
                    Method::Get => json_response(200, &self.projects[&project_id]),
                    Method::Put => match parse_project_input(req) {
                        Ok(input) => {
                            let project = self.projects.get_mut(&project_id).expect("checked above");
                            project.title = input.title;
                            project.description = input.description;
                            json_response(200, &project.clone())
                        }
                        Err(resp) => resp,
                    },
                    Method::Delete => {
                        self.projects.remove(&project_id);
                        self.tasks.retain(|_, t| t.project_id != Some(project_id));
                        ApiResponse { status: 204, body: String::new() }
                    }
                    Method::Post => error_response(405, "Method not allowed"),
                }
            }
            (method, ["projects", id, "tasks", rest @ ..]) => {
                let Some(project_id) = self.owned_project(id, user_id) else {
                    return error_response(404, "Project not found");
                };
                self.route_tasks(req, method, project_id, rest)
            }
            _ => error_response(404, "Not found"),
        }
    }

    fn route_tasks(&mut self, req: &ApiRequest, method: Method, project_id: u64, rest: &[&str]) -> ApiResponse {
        match (method, rest) {
            (Method::Get, []) => json_response(200, &page_of(self.project_tasks(project_id), req)),
            (Method::Post, []) => match parse_task_input(req) {
                Ok(input) => json_response(201, &self.insert_task(project_id, input)),
                Err(resp) => resp,
            },
            (Method::Get, ["search"]) => {
                let term = query_value(req, "searchTerm").unwrap_or_default().to_lowercase();
                let hits = self
                    .project_tasks(project_id)
                    .into_iter()
                    .filter(|t| t.title.to_lowercase().contains(&term) || t.description_text().to_lowercase().contains(&term))
                    .collect();
                json_response(200, &page_of(hits, req))
            }
            (Method::Get, ["progress"]) => {
                let tasks = self.project_tasks(project_id);
                let total = tasks.len() as u64;
                let completed = tasks.iter().filter(|t| t.is_completed).count() as u64;
                let percentage = if total > 0 { completed as f64 / total as f64 * 100.0 } else { 0.0 };
                json_response(200, &Progress { total_tasks: total, completed_tasks: completed, progress_percentage: percentage })
            }
            (method, [task_id]) => {
                let Some(task_id) = self.project_task(project_id, task_id) else {
                    return error_response(404, "Task not found");
                };
                match method {
                    Method::Get => json_response(200, &self.tasks[&task_id]),
                    Method::Put => match parse_task_input(req) {
                        Ok(input) => {
                            let task = self.tasks.get_mut(&task_id).expect("checked above");
                            task.title = input.title;
                            task.description = input.description;
                            task.due_date = input.due_date;
                            json_response(200, &task.clone())
                        }
                        Err(resp) => resp,
                    },
                    Method::Delete => {
                        self.tasks.remove(&task_id);
                        ApiResponse { status: 204, body: String::new() }
                    }
                    Method::Post => error_response(405, "Method not allowed"),
                }
            }
            (Method::Put, [task_id, "complete"]) => {
                let Some(task_id) = self.project_task(project_id, task_id) else {
                    return error_response(404, "Task not found");
                };
                let task = self.tasks.get_mut(&task_id).expect("checked above");
                task.is_completed = true;
                json_response(200, &task.clone())
            }
            _ => error_response(404, "Not found"),
        }
    }

    fn login(&mut self, req: &ApiRequest) -> ApiResponse {
        let body = req.body.clone().unwrap_or_default();
        let email = body["email"].as_str().unwrap_or_default();
        let password = body["password"].as_str().unwrap_or_default();
        let user = self
            .users
            .iter()
            .find(|u| u.user.email == email && u.password == password)
            .map(|u| u.user.clone());
        match user {
            Some(user) => self.issue_token(user),
            None => error_response(401, "Invalid email or password"),
        }
    }

    fn register(&mut self, req: &ApiRequest) -> ApiResponse {
        let body = req.body.clone().unwrap_or_default();
        let field = |name: &str| body[name].as_str().unwrap_or_default().to_string();
        let (full_name, email, password) = (field("fullName"), field("email"), field("password"));
        if password != field("confirmPassword") {
            return error_response(400, "Passwords do not match");
        }
        if self.users.iter().any(|u| u.user.email == email) {
            return error_response(409, "Email already registered");
        }
        let id = self.next_id();
        let user = User { id, email, full_name: Some(full_name), created_at: Some(TIMESTAMP.to_string()) };
        self.users.push(MockUser { user: user.clone(), password });
        self.issue_token(user)
    }

    fn issue_token(&mut self, user: User) -> ApiResponse {
        let token = format!("token-{}", user.id);
        self.tokens.insert(token.clone(), user.id);
        let response = AuthResponse { token, token_type: Some("Bearer".into()), expires_in: Some(86_400_000), user };
        json_response(200, &response)
    }

    fn insert_project(&mut self, owner: u64, input: ProjectInput) -> Project {
        let id = self.next_id();
        let project = Project {
            id,
            title: input.title,
            description: input.description,
            user_id: Some(owner),
            created_at: Some(TIMESTAMP.to_string()),
            updated_at: Some(TIMESTAMP.to_string()),
        };
        self.projects.insert(id, project.clone());
        project
    }

    fn insert_task(&mut self, project_id: u64, input: TaskInput) -> Task {
        let id = self.next_id();
        let task = Task {
            id,
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            is_completed: false,
            project_id: Some(project_id),
            created_at: Some(TIMESTAMP.to_string()),
            updated_at: Some(TIMESTAMP.to_string()),
        };
        self.tasks.insert(id, task.clone());
        task
    }

    fn owned_project(&self, raw_id: &str, user_id: u64) -> Option<u64> {
        let id = raw_id.parse::<u64>().ok()?;
        self.projects.get(&id).filter(|p| p.user_id == Some(user_id)).map(|p| p.id)
    }

    fn project_task(&self, project_id: u64, raw_id: &str) -> Option<u64> {
        let id = raw_id.parse::<u64>().ok()?;
        self.tasks.get(&id).filter(|t| t.project_id == Some(project_id)).map(|t| t.id)
    }

    fn project_tasks(&self, project_id: u64) -> Vec<Task> {
        self.tasks.values().filter(|t| t.project_id == Some(project_id)).cloned().collect()
    }
}

// ========================
// Helpers
// ========================

fn json_response<T: Serialize>(status: u16, body: &T) -> ApiResponse {
    ApiResponse { status, body: serde_json::to_string(body).expect("mock body serializes") }
}

fn error_response(status: u16, message: &str) -> ApiResponse {
    ApiResponse { status, body: json!({ "status": status, "message": message }).to_string() }
}

fn query_value(req: &ApiRequest, key: &str) -> Option<String> {
    req.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

fn page_of<T>(items: Vec<T>, req: &ApiRequest) -> Page<T> {
    let page: usize = query_value(req, "page").and_then(|v| v.parse().ok()).unwrap_or(0);
    let size: usize = query_value(req, "size").and_then(|v| v.parse().ok()).unwrap_or(20).max(1);
    let total = items.len();
    Page {
        content: items.into_iter().skip(page * size).take(size).collect(),
        total_elements: total as u64,
        total_pages: total.div_ceil(size) as u32,
        number: page as u32,
    }
}

fn parse_project_input(req: &ApiRequest) -> Result<ProjectInput, ApiResponse> {
    let input: ProjectInput = req
        .body
        .clone()
        .and_then(|b| serde_json::from_value(b).ok())
        .ok_or_else(|| error_response(400, "Validation failed"))?;
    if input.title.trim().is_empty() {
        return Err(error_response(400, "Validation failed"));
    }
    Ok(input)
}

fn parse_task_input(req: &ApiRequest) -> Result<TaskInput, ApiResponse> {
    let input: TaskInput = req
        .body
        .clone()
        .and_then(|b| serde_json::from_value(b).ok())
        .ok_or_else(|| error_response(400, "Validation failed"))?;
    if input.title.trim().is_empty() {
        return Err(error_response(400, "Validation failed"));
    }
    Ok(input)
}
