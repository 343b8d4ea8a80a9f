use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use hexboard::api::{create_router, AppState};
use hexboard::auth::{AuthError, Authenticator, SessionStore};
use hexboard::models::*;

fn setup() -> (TestServer, AppState) {
    let state = AppState::new(SessionStore::new(Duration::ZERO));
    let app = create_router(state.clone());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, state)
}

/// Turns every sign-in attempt away.
struct RejectingAuthenticator;

impl Authenticator for RejectingAuthenticator {
    async fn verify(&self, username: &str, _password: &str) -> Result<User, AuthError> {
        Err(AuthError::AuthenticationFailed(username.to_string()))
    }
}

fn setup_rejecting() -> (TestServer, AppState<RejectingAuthenticator>) {
    let state = AppState::new(SessionStore::with_authenticator(RejectingAuthenticator));
    let app = create_router(state.clone());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, state)
}

async fn sign_in(server: &TestServer) {
    server
        .post("/login")
        .form(&[("username", "testuser"), ("password", "password123")])
        .await
        .assert_status(StatusCode::SEE_OTHER);
}

fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .expect("Location header is not ASCII")
        .to_string()
}

mod guarded_navigation {
    use super::*;

    #[tokio::test]
    async fn fresh_session_is_sent_to_login() {
        let (server, _) = setup();

        let response = server.get("/dashboard").await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    async fn every_protected_page_redirects_when_anonymous() {
        let (server, _) = setup();

        for path in ["/projects", "/history", "/apps", "/apps/app1", "/settings", "/profile"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::SEE_OTHER);
            assert_eq!(location(&response), "/login", "{}", path);
        }
    }

    #[tokio::test]
    async fn entry_path_redirects_to_login_when_anonymous() {
        let (server, _) = setup();

        let response = server.get("/").await;

        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    async fn entry_path_redirects_to_dashboard_when_signed_in() {
        let (server, _) = setup();
        sign_in(&server).await;

        let response = server.get("/").await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/dashboard");
    }

    #[tokio::test]
    async fn login_page_is_shown_when_anonymous() {
        let (server, _) = setup();

        let response = server.get("/login").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Welcome Back"));
        assert!(html.contains("Enter your username"));
    }

    #[tokio::test]
    async fn login_page_redirects_when_signed_in() {
        let (server, _) = setup();
        sign_in(&server).await;

        let response = server.get("/login").await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/dashboard");
    }

    #[tokio::test]
    async fn signed_in_user_reaches_the_shell() {
        let (server, _) = setup();
        sign_in(&server).await;

        let response = server.get("/dashboard").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Welcome to your monitoring dashboard"));
        assert!(html.contains(r#"<a class="avatar" href="/profile" title="Profile">T</a>"#));
    }

    #[tokio::test]
    async fn app_detail_renders_placeholder() {
        let (server, _) = setup();
        sign_in(&server).await;

        for n in 1..=3 {
            let response = server.get(&format!("/apps/app{}", n)).await;
            response.assert_status_ok();
            let html = response.text();
            assert!(html.contains(&format!("This is a placeholder for Application {}", n)));
        }
    }

    #[tokio::test]
    async fn unknown_paths_are_not_guarded() {
        let (server, _) = setup();

        let response = server.get("/nowhere").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("Page not found"));
    }

    #[tokio::test]
    async fn logout_takes_effect_on_next_navigation() {
        let (server, state) = setup();
        sign_in(&server).await;
        server.get("/projects").await.assert_status_ok();

        state.sessions.logout();

        let response = server.get("/projects").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");
    }
}

mod login_form {
    use super::*;

    #[tokio::test]
    async fn valid_credentials_sign_in_and_redirect() {
        let (server, state) = setup();

        let response = server
            .post("/login")
            .form(&[("username", "testuser"), ("password", "password123")])
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/dashboard");

        let session = state.sessions.current_session();
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().username, "testuser");
    }

    #[tokio::test]
    async fn blank_password_is_rejected() {
        let (server, state) = setup();

        let response = server
            .post("/login")
            .form(&[("username", "testuser"), ("password", "")])
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let html = response.text();
        assert!(html.contains("Password is required"));
        assert!(html.contains(r#"value="testuser""#));
        assert!(!state.sessions.current_session().is_authenticated());
    }

    #[tokio::test]
    async fn blank_username_is_rejected() {
        let (server, _) = setup();

        let response = server
            .post("/login")
            .form(&[("username", ""), ("password", "password123")])
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.text().contains("Username is required"));
    }

    #[tokio::test]
    async fn sign_out_returns_to_login() {
        let (server, state) = setup();
        sign_in(&server).await;

        let response = server.post("/logout").await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");
        assert!(!state.sessions.current_session().is_authenticated());
    }

    #[tokio::test]
    async fn sign_out_when_anonymous_is_harmless() {
        let (server, state) = setup();

        server.post("/logout").await.assert_status(StatusCode::SEE_OTHER);

        assert_eq!(state.sessions.current_session(), Session::anonymous());
    }

    #[tokio::test]
    async fn missing_password_field_is_rejected() {
        let (server, state) = setup();

        let response = server.post("/login").form(&[("username", "testuser")]).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let html = response.text();
        assert!(html.contains("Password is required"));
        assert!(html.contains(r#"value="testuser""#));
        assert!(!state.sessions.current_session().is_authenticated());
    }

    #[tokio::test]
    async fn rejected_credentials_show_the_error() {
        let (server, state) = setup_rejecting();

        let response = server
            .post("/login")
            .form(&[("username", "testuser"), ("password", "wrong")])
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let html = response.text();
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains(r#"value="testuser""#));
        assert_eq!(state.sessions.current_session(), Session::anonymous());

        let response = server.get("/dashboard").await;
        assert_eq!(location(&response), "/login");
    }
}

mod session_api {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let (server, _) = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn session_starts_anonymous() {
        let (server, _) = setup();

        let session: SessionResponse = server.get("/api/v1/session").await.json();

        assert!(!session.is_authenticated);
        assert_eq!(session.state, SessionState::Anonymous);
        assert!(session.user.is_none());
    }

    #[tokio::test]
    async fn login_then_logout() {
        let (server, _) = setup();

        let response = server
            .post("/api/v1/session/login")
            .json(&LoginInput {
                username: "testuser".to_string(),
                password: "password123".to_string(),
            })
            .await;
        response.assert_status_ok();
        let session: SessionResponse = response.json();
        assert!(session.is_authenticated);
        assert_eq!(session.user.as_ref().unwrap().username, "testuser");
        assert_eq!(session.user.as_ref().unwrap().id, MOCK_USER_ID);

        let session: SessionResponse = server.get("/api/v1/session").await.json();
        assert!(session.is_authenticated);

        let session: SessionResponse = server.post("/api/v1/session/logout").await.json();
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
    }

    #[tokio::test]
    async fn login_requires_both_fields() {
        let (server, _) = setup();

        let response = server
            .post("/api/v1/session/login")
            .json(&LoginInput {
                username: "testuser".to_string(),
                password: String::new(),
            })
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Password is required");
    }

    #[tokio::test]
    async fn rejected_login_is_unauthorized() {
        let (server, state) = setup_rejecting();

        let response = server
            .post("/api/v1/session/login")
            .json(&LoginInput {
                username: "testuser".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert!(response.text().contains("testuser"));
        let session: SessionResponse = server.get("/api/v1/session").await.json();
        assert!(!session.is_authenticated);
        assert!(!state.sessions.current_session().is_authenticated());
    }
}
