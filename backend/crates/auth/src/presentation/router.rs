//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_auth;

/// Create the `/users` router for any repository implementation
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let protected = Router::new()
        .route(
            "/me",
            get(handlers::me)
                .put(handlers::update_me::<R>)
                .delete(handlers::delete_me::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth::<R>,
        ));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}

/// Put every route of `router` behind `require_auth`
///
/// Handlers can then extract `Extension<CurrentUser>`.
pub fn protect<R, S>(router: Router<S>, state: AuthAppState<R>) -> Router<S>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(state, require_auth::<R>))
}
