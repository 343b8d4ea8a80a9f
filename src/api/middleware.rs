//! Navigation guard and CORS middleware.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::AppState;
use crate::auth::Authenticator;
use crate::routes::Decision;

/// Run the route guard against the live session on every request.
///
/// The session is read fresh each time, so a logout takes effect on the very
/// next navigation.
pub async fn guard_middleware<A: Authenticator>(
    State(state): State<AppState<A>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let session = state.sessions.current_session();
    let path = request.uri().path().to_owned();

    match state.guard.authorize(&path, &session) {
        Decision::Allow => next.run(request).await,
        Decision::RedirectTo(target) => {
            tracing::debug!(
                "Redirecting {} session from {} to {}",
                session.state().as_str(),
                path,
                target
            );
            Redirect::to(&target).into_response()
        }
    }
}

/// CORS policy: any origin when none are configured, otherwise only the listed ones.
pub fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
