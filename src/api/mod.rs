mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::{Authenticator, MockAuthenticator, SessionStore};
use crate::config::Config;
use crate::routes::{RouteGuard, LOGIN_PATH};

/// State shared by every handler.
pub struct AppState<A = MockAuthenticator> {
    pub sessions: SessionStore<A>,
    pub guard: Arc<RouteGuard>,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            guard: Arc::clone(&self.guard),
        }
    }
}

impl<A> std::fmt::Debug for AppState<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("sessions", &self.sessions)
            .field("guard", &self.guard)
            .finish()
    }
}

impl Default for AppState<MockAuthenticator> {
    fn default() -> Self {
        Self::new(SessionStore::default())
    }
}

impl AppState<MockAuthenticator> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(SessionStore::new(config.login_delay))
    }
}

impl<A: Authenticator> AppState<A> {
    pub fn new(sessions: SessionStore<A>) -> Self {
        Self {
            sessions,
            guard: Arc::new(RouteGuard::default()),
        }
    }
}

/// Router with a permissive CORS policy.
pub fn create_router<A: Authenticator>(state: AppState<A>) -> Router {
    build_router(state, CorsLayer::permissive())
}

/// Router with the CORS policy from `config`.
pub fn create_router_with_config<A: Authenticator>(state: AppState<A>, config: &Config) -> Router {
    build_router(state, middleware::cors_layer(config.cors_origins.as_deref()))
}

fn build_router<A: Authenticator>(state: AppState<A>, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/session", get(handlers::get_session::<A>))
        .route("/session/login", post(handlers::api_login::<A>))
        .route("/session/logout", post(handlers::api_logout::<A>));

    // Every route in the table is served by the same view dispatcher.
    let mut pages = Router::new();
    for route in state.guard.table().routes() {
        pages = pages.route(route.pattern, get(handlers::page::<A>));
    }
    let pages = pages
        .route(LOGIN_PATH, post(handlers::submit_login::<A>))
        .route("/logout", post(handlers::logout::<A>))
        .fallback(handlers::page::<A>);

    pages
        .nest("/api/v1", api)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::guard_middleware::<A>,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
