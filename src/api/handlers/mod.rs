use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};

use super::AppState;
use crate::auth::{AuthError, Authenticator};
use crate::models::{LoginInput, SessionResponse};
use crate::pages::{self, LoginForm};
use crate::routes::{Access, Resolved, DEFAULT_PROTECTED_PATH, LOGIN_PATH};

// ============================================================
// Error Handling
// ============================================================

fn auth_error(e: AuthError) -> (StatusCode, String) {
    match e {
        AuthError::AuthenticationFailed(_) => (StatusCode::UNAUTHORIZED, e.to_string()),
    }
}

/// Both credentials are required; the password is never trimmed or inspected.
fn missing_credential(input: &LoginInput) -> Option<&'static str> {
    if input.username.is_empty() {
        Some("Username is required")
    } else if input.password.is_empty() {
        Some("Password is required")
    } else {
        None
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Pages
// ============================================================

/// Render whatever view the route table maps the request path to.
pub async fn page<A: Authenticator>(State(state): State<AppState<A>>, uri: Uri) -> Response {
    let path = uri.path();

    match state.guard.table().resolve(path) {
        Some(Resolved {
            access: Access::Alias(target),
            ..
        }) => Redirect::to(target).into_response(),
        Some(Resolved {
            view: Some(view), ..
        }) => {
            let session = state.sessions.current_session();
            Html(pages::render_view(&view, session.user(), path)).into_response()
        }
        _ => {
            tracing::debug!("No view for {}", path);
            (StatusCode::NOT_FOUND, Html(pages::render_not_found(path))).into_response()
        }
    }
}

pub async fn submit_login<A: Authenticator>(
    State(state): State<AppState<A>>,
    Form(input): Form<LoginInput>,
) -> Response {
    if let Some(message) = missing_credential(&input) {
        let form = LoginForm::with_error(input.username, message);
        let html = Html(pages::render_login(&form));
        return (StatusCode::UNPROCESSABLE_ENTITY, html).into_response();
    }

    match state.sessions.login(&input.username, &input.password).await {
        Ok(_) => Redirect::to(DEFAULT_PROTECTED_PATH).into_response(),
        Err(e) => {
            let (status, message) = auth_error(e);
            let form = LoginForm::with_error(input.username, message);
            (status, Html(pages::render_login(&form))).into_response()
        }
    }
}

pub async fn logout<A: Authenticator>(State(state): State<AppState<A>>) -> Redirect {
    state.sessions.logout();
    Redirect::to(LOGIN_PATH)
}

// ============================================================
// Session API
// ============================================================

pub async fn get_session<A: Authenticator>(
    State(state): State<AppState<A>>,
) -> Json<SessionResponse> {
    Json(SessionResponse::from(&state.sessions.current_session()))
}

pub async fn api_login<A: Authenticator>(
    State(state): State<AppState<A>>,
    Json(input): Json<LoginInput>,
) -> Result<Json<SessionResponse>, (StatusCode, String)> {
    if let Some(message) = missing_credential(&input) {
        return Err((StatusCode::BAD_REQUEST, message.to_string()));
    }

    state
        .sessions
        .login(&input.username, &input.password)
        .await
        .map(|session| Json(SessionResponse::from(&session)))
        .map_err(auth_error)
}

pub async fn api_logout<A: Authenticator>(
    State(state): State<AppState<A>>,
) -> Json<SessionResponse> {
    state.sessions.logout();
    Json(SessionResponse::from(&state.sessions.current_session()))
}
