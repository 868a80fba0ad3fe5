//! HTTP Handlers

use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::{Form, Json};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    DeleteMeUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, UpdateMeInput,
    UpdateMeUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginForm, RegisterRequest, TokenResponse, UpdateMeRequest, UserResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers and the `require_auth` middleware
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /users/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        email: req.email,
        username: req.username,
        password: req.password,
    };

    let user = use_case.execute(input).await?;

    Ok(Json(UserResponse::from(&user)))
}

// ============================================================================
// Login
// ============================================================================

/// POST /users/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        username: form.username,
        password: form.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(TokenResponse::bearer(output.access_token)))
}

// ============================================================================
// Current user (behind `require_auth`)
// ============================================================================

/// GET /users/me
pub async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}

/// PUT /users/me
pub async fn update_me<R>(
    State(state): State<AuthAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<UpdateMeRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateMeUseCase::new(state.repo.clone(), state.config.clone());

    let input = UpdateMeInput {
        email: req.email,
        username: req.username,
        password: req.password,
    };

    let user = use_case.execute(user, input).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/me
pub async fn delete_me<R>(
    State(state): State<AuthAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteMeUseCase::new(state.repo.clone());

    use_case.execute(&user).await?;

    Ok(StatusCode::NO_CONTENT)
}
