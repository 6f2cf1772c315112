use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use serde::de::DeserializeOwned;
use shared::{ApiError, ApiSuccess, NavbarError, User};
use std::rc::Rc;
use uuid::Uuid;

use crate::utils::{Subscription, UserAttributes, UserStream};

const TOKEN_KEY: &str = "auth_token";

#[derive(Clone)]
pub struct AuthState {
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<User>>,
}

impl AuthState {
    pub fn new() -> Self {
        let stored_token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();

        Self {
            token: create_rw_signal(stored_token),
            user: create_rw_signal(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get_untracked().is_some()
    }

    pub fn set_user(&self, user: User) {
        self.user.set(Some(user));
    }

    pub fn logout(&self) {
        LocalStorage::delete(TOKEN_KEY);
        self.token.set(None);
        self.user.set(None);
    }
}

impl UserStream for AuthState {
    /// Delivers the current user right away, then every change.
    fn subscribe(&self, listener: Box<dyn Fn(Option<User>)>) -> Subscription {
        let listener: Rc<dyn Fn(Option<User>)> = Rc::from(listener);
        let user = self.user;

        let stop = watch(
            move || user.get(),
            move |user: &Option<User>, _, _| listener(user.clone()),
            true,
        );

        Subscription::new(stop)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn get_token() -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = format!("{}{}", self.base, path);

        let mut request = Request::get(&url);
        if let Some(token) = Self::get_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request.send().await.map_err(|e| e.to_string())?;

        if response.ok() {
            let result: ApiSuccess<T> = response.json().await.map_err(|e| e.to_string())?;
            Ok(result.data)
        } else {
            let error: ApiError = response.json().await.unwrap_or(ApiError {
                error: "unknown".to_string(),
                message: "An unknown error occurred".to_string(),
            });
            Err(error.message)
        }
    }

    // Auth endpoints
    pub async fn get_current_user(&self) -> Result<User, String> {
        self.get::<User>("/auth/me").await
    }

    // User attribute endpoints
    pub async fn is_admin(&self, user_id: &Uuid) -> Result<bool, String> {
        self.get::<bool>(&format!("/users/{}/admin", user_id)).await
    }

    pub async fn is_disabled(&self, user_id: &Uuid) -> Result<bool, String> {
        self.get::<bool>(&format!("/users/{}/disabled", user_id)).await
    }

    pub async fn is_staff(&self, user_id: &Uuid) -> Result<bool, String> {
        self.get::<bool>(&format!("/users/{}/staff", user_id)).await
    }
}

/// [`UserAttributes`] answered by the REST API.
pub struct HttpUserAttributes {
    client: ApiClient,
}

impl HttpUserAttributes {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl UserAttributes for HttpUserAttributes {
    async fn is_admin(&self, id: Uuid) -> Result<bool, NavbarError> {
        self.client.is_admin(&id).await.map_err(NavbarError::Lookup)
    }

    async fn is_disabled(&self, id: Uuid) -> Result<bool, NavbarError> {
        self.client.is_disabled(&id).await.map_err(NavbarError::Lookup)
    }

    async fn is_staff(&self, id: Uuid) -> Result<bool, NavbarError> {
        self.client.is_staff(&id).await.map_err(NavbarError::Lookup)
    }
}
