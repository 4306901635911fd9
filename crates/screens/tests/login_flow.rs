use std::sync::Arc;

use client::auth::mock::MockAuthApi;
use client::errors::{ApiError, ServerErrorKind};
use configs::AppConfig;
use screens::login::{self, LoginScreen};
use screens::view::mock::MockViewPort;
use screens::view::AlertKind;
use service::session::mock::MockSessionStore;
use service::session::SessionStore;

const FORM_ELEMENTS: [&str; 3] = [login::FORM_ID, login::FIELD_CORREO, login::FIELD_CLAVE];

fn test_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.timeouts.redirect_delay_ms = 10;
    cfg
}

fn filled_view() -> MockViewPort {
    let view = MockViewPort::with_elements(&FORM_ELEMENTS);
    view.set_field(login::FIELD_CORREO, "ana@eventos.example.com");
    view.set_field(login::FIELD_CLAVE, "secreta1");
    view
}

#[tokio::test]
async fn successful_login_persists_the_session_and_redirects() {
    let view = filled_view();
    let auth = Arc::new(MockAuthApi::succeeding());
    let sessions = Arc::new(MockSessionStore::default());
    let mut screen =
        LoginScreen::bind(view.clone(), auth, sessions.clone(), &test_config()).unwrap();
    screen.submit().await;

    let session = sessions.load().await.expect("session saved only after server success");
    assert_eq!(session.access_token, "tok-1");
    assert_eq!(session.token_type, "bearer");

    let state = view.state();
    assert_eq!(state.alerts, vec![(login::MSG_SUCCESS.to_string(), AlertKind::Success)]);
    assert_eq!(state.fields.get(login::FIELD_CLAVE).unwrap(), "");
    assert_eq!(state.navigations, vec![screens::CATEGORIES_TARGET.to_string()]);
}

#[tokio::test]
async fn rejected_credentials_leave_no_session_behind() {
    let view = filled_view();
    let auth = Arc::new(MockAuthApi::login_failing(ApiError::Server {
        status: 401,
        kind: ServerErrorKind::InvalidCredentials,
        message: "Credenciales inválidas".into(),
    }));
    let sessions = Arc::new(MockSessionStore::default());
    let mut screen =
        LoginScreen::bind(view.clone(), auth, sessions.clone(), &test_config()).unwrap();
    screen.submit().await;

    assert!(sessions.load().await.is_none());
    let state = view.state();
    assert_eq!(state.alerts, vec![(login::MSG_BAD_CREDENTIALS.to_string(), AlertKind::Error)]);
    assert!(state.navigations.is_empty());
    assert_eq!(state.loading_transitions, vec![true, false]);
}

#[tokio::test]
async fn empty_fields_fail_validation_without_a_call() {
    let view = MockViewPort::with_elements(&FORM_ELEMENTS);
    let auth = Arc::new(MockAuthApi::succeeding());
    let sessions = Arc::new(MockSessionStore::default());
    let mut screen =
        LoginScreen::bind(view.clone(), auth.clone(), sessions, &test_config()).unwrap();
    screen.submit().await;

    assert!(auth.login_calls.lock().unwrap().is_empty());
    let (message, _) = view.state().alerts[0].clone();
    assert!(message.contains("Correo electrónico es requerido"));
    assert!(message.contains("Contraseña es requerido"));
}
