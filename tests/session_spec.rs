use std::time::Duration;

use hexboard::auth::{LoginTaskError, SessionStore};
use hexboard::models::{Session, SessionState};
use hexboard::routes::{authorize, Decision};

fn store() -> SessionStore {
    SessionStore::new(Duration::ZERO)
}

/// The authenticated flag and the user always agree.
fn assert_consistent(session: &Session) {
    assert_eq!(session.is_authenticated(), session.user().is_some());
}

mod login {
    use super::*;

    #[tokio::test]
    async fn any_non_empty_credentials_succeed() {
        let credentials = [("testuser", "password123"), ("a", "b"), ("ünïcode", "🔑")];
        for (username, password) in credentials {
            let store = store();
            let session = store
                .login(username, password)
                .await
                .expect("mock login never fails");

            assert!(session.is_authenticated());
            assert_eq!(session.user().unwrap().username, username);
            assert_consistent(&store.current_session());
        }
    }

    #[tokio::test]
    async fn repeat_login_replaces_user() {
        let store = store();
        store.login("first", "pw").await.unwrap();
        store.login("second", "pw").await.unwrap();

        assert_eq!(store.current_session().user().unwrap().username, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn spawned_login_can_be_awaited() {
        let store = SessionStore::new(Duration::from_millis(250));
        let task = store.begin_login("testuser", "password123");

        assert!(!store.current_session().is_authenticated());
        let session = task.wait().await.unwrap();

        assert_eq!(session.user().unwrap().username, "testuser");
        assert_eq!(store.current_session(), session);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_login_reports_cancellation() {
        let store = SessionStore::new(Duration::from_millis(250));
        let task = store.begin_login("testuser", "password123");
        task.cancel();

        assert_eq!(task.wait().await, Err(LoginTaskError::Cancelled));
        assert_eq!(store.current_session().state(), SessionState::Anonymous);
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    async fn clears_any_prior_state() {
        let store = store();
        store.logout();
        assert_eq!(store.current_session(), Session::anonymous());

        store.login("testuser", "password123").await.unwrap();
        store.logout();
        assert_eq!(store.current_session(), Session::anonymous());

        store.logout();
        assert_eq!(store.current_session(), Session::anonymous());
    }
}

mod invariants {
    use super::*;

    #[tokio::test]
    async fn every_observed_session_is_consistent() {
        let store = store();
        let mut rx = store.subscribe();
        assert_consistent(&rx.borrow());

        store.login("testuser", "password123").await.unwrap();
        rx.changed().await.unwrap();
        assert_consistent(&rx.borrow_and_update());

        store.logout();
        rx.changed().await.unwrap();
        assert_consistent(&rx.borrow_and_update());
    }
}

mod scenarios {
    use super::*;

    #[tokio::test]
    async fn sign_in_browse_and_sign_out() {
        let store = store();

        // A: fresh session is sent to login
        assert_eq!(
            authorize("/dashboard", &store.current_session()),
            Decision::RedirectTo("/login".to_string())
        );

        // B: login
        store.login("testuser", "password123").await.unwrap();
        let session = store.current_session();
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().username, "testuser");

        // D: login view now bounces to the dashboard
        assert_eq!(
            authorize("/login", &session),
            Decision::RedirectTo("/dashboard".to_string())
        );

        // C: logout
        store.logout();
        let session = store.current_session();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert_eq!(
            authorize("/dashboard", &session),
            Decision::RedirectTo("/login".to_string())
        );
    }
}
