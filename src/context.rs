//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::controllers::auth_form::{LOGIN_FAILED, REGISTRATION_FAILED};
use crate::controllers::SignupForm;
use crate::models::User;
use crate::session::{Session, SessionStore};

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(api: ApiClient, config: AppConfig) -> Self {
        Self {
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    /// Cheap handle; clones share transport and token
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Reactive session plus the login/register/logout operations
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Session>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    store: StoredValue<SessionStore>,
}

impl AuthContext {
    /// Restores any persisted session synchronously
    pub fn new(store: SessionStore) -> Self {
        let session = store.restore();
        Self {
            session: RwSignal::new(session),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            store: StoredValue::new(store),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated)
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user.clone())
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// The session signal changes once, after the call settles
    pub async fn login(self, email: String, password: String) -> Result<(), String> {
        self.is_loading.set(true);
        self.error.set(None);
        let store = self.store.get_value();
        let result = store.login(email.trim(), &password).await;
        self.is_loading.try_set(false);

        match result {
            Ok(session) => {
                self.session.try_set(session);
                Ok(())
            }
            Err(e) => {
                log::warn!("[AUTH] Login failed: {}", e);
                let message = e.user_message(LOGIN_FAILED);
                self.error.try_set(Some(message.clone()));
                Err(message)
            }
        }
    }

    /// Validation failures are reported without contacting the backend
    pub async fn register(self, form: SignupForm) -> Result<(), String> {
        if let Err(e) = form.validate() {
            let message = e.to_string();
            self.error.set(Some(message.clone()));
            return Err(message);
        }

        self.is_loading.set(true);
        self.error.set(None);
        let store = self.store.get_value();
        let result = store.register(&form.as_args()).await;
        self.is_loading.try_set(false);

        match result {
            Ok(session) => {
                self.session.try_set(session);
                Ok(())
            }
            Err(e) => {
                log::warn!("[AUTH] Registration failed: {}", e);
                let message = e.user_message(REGISTRATION_FAILED);
                self.error.try_set(Some(message.clone()));
                Err(message)
            }
        }
    }

    pub fn logout(&self) {
        let session = self.store.with_value(|store| store.logout());
        self.error.set(None);
        self.session.set(session);
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
