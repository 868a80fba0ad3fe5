//! Auth Middleware
//!
//! Middleware for requiring a bearer token on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;

use crate::application::ResolveCurrentUserUseCase;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Authenticated account, stored in request extensions by [`require_auth`]
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that requires `Authorization: Bearer <token>` naming an
/// existing user
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_auth<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer_token(req.headers())
        .ok_or(AuthError::Unauthorized)?
        .to_owned();

    let use_case = ResolveCurrentUserUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(&token).await?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
