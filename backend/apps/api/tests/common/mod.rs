//! Shared fixtures for HTTP tests
//!
//! One in-memory store backs both repositories so deleting a user also drops
//! that user's bookmarks, the way the `ON DELETE CASCADE` foreign key does.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use api::build_router;
use auth::domain::value_object::{email::Email, user_name::UserName};
use auth::domain::{NewUser, User, UserRepository};
use auth::{AuthConfig, AuthError, AuthResult};
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use bookmark::BookmarkResult;
use bookmark::domain::{Bookmark, BookmarkRepository, NewBookmark};
use chrono::Utc;
use http_body_util::BodyExt;
use kernel::id::{BookmarkId, UserId};
use serde_json::Value;
use tower::ServiceExt;

pub const PREFIX: &str = "/api/v1";

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    bookmarks: Vec<Bookmark>,
    next_user_id: i64,
    next_bookmark_id: i64,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn bookmark_count(&self) -> usize {
        self.tables.lock().unwrap().bookmarks.len()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }
}

impl UserRepository for MemoryStore {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateEmail);
        }
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(AuthError::DuplicateUsername);
        }
        tables.next_user_id += 1;
        let created = User {
            id: UserId::new(tables.next_user_id),
            email: user.email.clone(),
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        tables.users.push(created.clone());
        Ok(created)
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| &u.username == username).cloned())
    }

    async fn exists_by_email(&self, email: &Email, except: Option<UserId>) -> AuthResult<bool> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .any(|u| &u.email == email && Some(u.id) != except))
    }

    async fn exists_by_username(
        &self,
        username: &UserName,
        except: Option<UserId>,
    ) -> AuthResult<bool> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .any(|u| &u.username == username && Some(u.id) != except))
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(slot) = tables.users.iter_mut().find(|u| u.id == user.id) {
            *slot = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, user_id: UserId) -> AuthResult<()> {
        let mut tables = self.tables.lock().unwrap();
        tables.users.retain(|u| u.id != user_id);
        tables.bookmarks.retain(|b| b.user_id != user_id);
        Ok(())
    }
}

impl BookmarkRepository for MemoryStore {
    async fn create(&self, bookmark: &NewBookmark) -> BookmarkResult<Bookmark> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_bookmark_id += 1;
        let created = Bookmark {
            id: BookmarkId::new(tables.next_bookmark_id),
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            description: bookmark.description.clone(),
            user_id: bookmark.user_id,
            created_at: Utc::now(),
            updated_at: None,
        };
        tables.bookmarks.push(created.clone());
        Ok(created)
    }

    async fn list_by_owner(&self, owner: UserId) -> BookmarkResult<Vec<Bookmark>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .bookmarks
            .iter()
            .filter(|b| b.user_id == owner)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, owner: UserId, id: BookmarkId) -> BookmarkResult<Option<Bookmark>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .bookmarks
            .iter()
            .find(|b| b.id == id && b.user_id == owner)
            .cloned())
    }

    async fn update(&self, bookmark: &Bookmark) -> BookmarkResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        match tables
            .bookmarks
            .iter_mut()
            .find(|b| b.id == bookmark.id && b.user_id == bookmark.user_id)
        {
            Some(slot) => {
                *slot = bookmark.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, owner: UserId, id: BookmarkId) -> BookmarkResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.bookmarks.len();
        tables
            .bookmarks
            .retain(|b| !(b.id == id && b.user_id == owner));
        Ok(tables.bookmarks.len() < before)
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_prefix(PREFIX)
    }

    pub fn with_prefix(prefix: &str) -> Self {
        let store = MemoryStore::default();
        let router = build_router(
            store.clone(),
            store.clone(),
            AuthConfig::development(),
            prefix,
        );
        Self { router, store }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn json(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(format!("{PREFIX}{path}"));
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn register(&self, email: &str, username: &str, password: &str) -> TestResponse {
        self.json(
            "POST",
            "/users/register",
            None,
            Some(serde_json::json!({
                "email": email,
                "username": username,
                "password": password,
            })),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(format!("{PREFIX}/users/login"))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!(
                "username={username}&password={password}"
            )))
            .unwrap();
        self.send(request).await
    }

    /// Register and log in, returning the access token
    pub async fn sign_up(&self, email: &str, username: &str, password: &str) -> String {
        let registered = self.register(email, username, password).await;
        assert_eq!(registered.status, StatusCode::OK, "{:?}", registered.body);
        let login = self.login(username, password).await;
        assert_eq!(login.status, StatusCode::OK, "{:?}", login.body);
        login.body["access_token"].as_str().unwrap().to_string()
    }
}
