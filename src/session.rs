//! Session Store
//!
//! Owns the credential and user profile: restores them from persisted
//! storage at startup, replaces them on login/registration, clears them
//! on logout.

use std::sync::Arc;

use crate::api::{self, ApiClient, RegisterArgs};
use crate::config::{AUTH_TOKEN_KEY, AUTH_USER_KEY};
use crate::error::ApiError;
use crate::models::{AuthResponse, User};
use crate::storage::KeyValueStore;

/// Authenticated identity held by the running client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl Session {
    fn from_auth(response: AuthResponse) -> Self {
        Self {
            token: Some(response.token),
            user: Some(response.user),
            is_authenticated: true,
        }
    }
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    api: ApiClient,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, api: ApiClient) -> Self {
        Self { storage, api }
    }

    /// Rebuild the session from storage; installs the token on the client.
    /// No network call is made.
    pub fn restore(&self) -> Session {
        let token = self.storage.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty());
        let user = self.storage.get(AUTH_USER_KEY).and_then(|raw| match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("[SESSION] Ignoring unreadable stored user: {}", e);
                None
            }
        });

        self.api.set_token(token.clone());
        let session = Session {
            is_authenticated: token.is_some(),
            token,
            user,
        };
        log::info!("[SESSION] Restored, authenticated={}", session.is_authenticated);
        session
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let response = api::login(&self.api, email, password).await?;
        log::info!("[SESSION] Logged in as {}", response.user.email);
        Ok(self.persist(response))
    }

    pub async fn register(&self, args: &RegisterArgs<'_>) -> Result<Session, ApiError> {
        let response = api::register(&self.api, args).await?;
        log::info!("[SESSION] Registered {}", response.user.email);
        Ok(self.persist(response))
    }

    /// Clears persisted and in-memory credentials; never touches the network
    pub fn logout(&self) -> Session {
        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(AUTH_USER_KEY);
        self.api.set_token(None);
        log::info!("[SESSION] Logged out");
        Session::default()
    }

    fn persist(&self, response: AuthResponse) -> Session {
        self.storage.set(AUTH_TOKEN_KEY, &response.token);
        match serde_json::to_string(&response.user) {
            Ok(json) => self.storage.set(AUTH_USER_KEY, &json),
            Err(e) => log::warn!("[SESSION] Could not serialize user: {}", e),
        }
        self.api.set_token(Some(response.token.clone()));
        Session::from_auth(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockBackend;
    use crate::storage::MemoryStorage;

    fn store(backend: &Arc<MockBackend>, storage: &MemoryStorage) -> SessionStore {
        SessionStore::new(Arc::new(storage.clone()), backend.client())
    }

    #[test]
    fn test_restore_empty_storage_is_unauthenticated() {
        let backend = MockBackend::new();
        let session = store(&backend, &MemoryStorage::new()).restore();
        assert_eq!(session, Session::default());
        assert_eq!(backend.request_count(), 0);
    }

    #[tokio::test]
    async fn test_login_survives_restart_without_network() {
        let backend = MockBackend::new();
        backend.add_user("ana@example.com", "secret1", "Ana Lima");
        let storage = MemoryStorage::new();

        let session = store(&backend, &storage).login("ana@example.com", "secret1").await.unwrap();
        assert!(session.is_authenticated);
        let requests_after_login = backend.request_count();

        // Simulated reload: fresh store and client over the same storage
        let restarted = store(&backend, &storage);
        let restored = restarted.restore();
        assert!(restored.is_authenticated);
        assert_eq!(restored.user, session.user);
        assert_eq!(restored.token, session.token);
        assert_eq!(backend.request_count(), requests_after_login);
    }

    #[tokio::test]
    async fn test_restored_token_is_attached() {
        let backend = MockBackend::new();
        backend.add_user("ana@example.com", "secret1", "Ana Lima");
        let storage = MemoryStorage::new();
        store(&backend, &storage).login("ana@example.com", "secret1").await.unwrap();

        let fresh_client = backend.client();
        SessionStore::new(Arc::new(storage.clone()), fresh_client.clone()).restore();
        assert!(api::list_projects(&fresh_client, 0, 10).await.is_ok());
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_unchanged() {
        let backend = MockBackend::new();
        backend.add_user("ana@example.com", "secret1", "Ana Lima");
        let storage = MemoryStorage::new();
        let sessions = store(&backend, &storage);

        let err = sessions.login("ana@example.com", "wrong").await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized("Invalid email or password".into()));
        assert!(storage.get(AUTH_TOKEN_KEY).is_none());
        assert!(!sessions.restore().is_authenticated);
    }

    #[tokio::test]
    async fn test_logout_clears_storage_for_next_start() {
        let backend = MockBackend::new();
        let storage = MemoryStorage::new();
        let sessions = store(&backend, &storage);
        let args = RegisterArgs { full_name: "Bo", email: "bo@example.com", password: "hunter22", confirm_password: "hunter22" };
        sessions.register(&args).await.unwrap();
        let requests = backend.request_count();

        let cleared = sessions.logout();
        assert_eq!(cleared, Session::default());
        assert_eq!(backend.request_count(), requests);

        let restarted = store(&backend, &storage).restore();
        assert!(!restarted.is_authenticated);
        assert!(restarted.user.is_none());
    }

    #[tokio::test]
    async fn test_register_conflict_message() {
        let backend = MockBackend::new();
        backend.add_user("bo@example.com", "hunter22", "Bo");
        let args = RegisterArgs { full_name: "Bo", email: "bo@example.com", password: "hunter22", confirm_password: "hunter22" };
        let err = store(&backend, &MemoryStorage::new()).register(&args).await.unwrap_err();
        assert_eq!(err.server_message(), Some("Email already registered"));
    }

    #[test]
    fn test_corrupt_user_keeps_token() {
        let backend = MockBackend::new();
        let storage = MemoryStorage::new();
        storage.set(AUTH_TOKEN_KEY, "t");
        storage.set(AUTH_USER_KEY, "{not json");
        let session = store(&backend, &storage).restore();
        assert!(session.is_authenticated);
        assert!(session.user.is_none());
    }
}
