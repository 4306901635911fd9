use std::sync::Arc;

use client::categories::mock::MockCategoryApi;
use client::errors::ApiError;
use configs::AppConfig;
use models::category::Category;
use models::session::Session;
use screens::categories::{self, CategoriesScreen};
use screens::errors::ScreenError;
use screens::view::mock::MockViewPort;
use service::session::mock::MockSessionStore;
use service::session::SessionStore;

const ELEMENTS: [&str; 2] = [categories::LIST_ID, categories::FIELD_NOMBRE];

fn seeded_sessions() -> Arc<MockSessionStore> {
    Arc::new(MockSessionStore::with_session(Session::new(
        "tok-1".into(),
        "bearer".into(),
        serde_json::Value::Null,
    )))
}

fn seeded_api() -> Arc<MockCategoryApi> {
    Arc::new(MockCategoryApi::with_items(vec![
        Category { id: 1, nombre: "Conciertos".into() },
        Category { id: 2, nombre: "Ferias".into() },
    ]))
}

#[tokio::test]
async fn binding_without_session_redirects_to_login() {
    let view = MockViewPort::with_elements(&ELEMENTS);
    let result = CategoriesScreen::bind(
        view.clone(),
        seeded_api(),
        Arc::new(MockSessionStore::default()),
    )
    .await;
    assert!(matches!(result, Err(ScreenError::NoSession)));
    assert_eq!(view.state().navigations, vec![screens::LOGIN_TARGET.to_string()]);
}

#[tokio::test]
async fn missing_list_element_is_fatal_before_the_guard() {
    let view = MockViewPort::with_elements(&["otraCosa"]);
    let result = CategoriesScreen::bind(view, seeded_api(), seeded_sessions()).await;
    assert!(matches!(result, Err(ScreenError::MissingElement(_))));
}

#[tokio::test]
async fn refresh_renders_with_the_stored_token() {
    let view = MockViewPort::with_elements(&ELEMENTS);
    let api = seeded_api();
    let mut screen = CategoriesScreen::bind(view.clone(), api.clone(), seeded_sessions())
        .await
        .unwrap();
    screen.refresh().await;

    let state = view.state();
    assert_eq!(state.rendered.len(), 1);
    assert_eq!(state.rendered[0].len(), 2);
    assert_eq!(api.seen_tokens.lock().unwrap()[0], "tok-1");
}

#[tokio::test]
async fn create_clears_the_input_and_reloads() {
    let view = MockViewPort::with_elements(&ELEMENTS);
    view.set_field(categories::FIELD_NOMBRE, "  Teatro ");
    let api = seeded_api();
    let mut screen = CategoriesScreen::bind(view.clone(), api.clone(), seeded_sessions())
        .await
        .unwrap();
    screen.create().await;

    assert_eq!(view.state().fields.get(categories::FIELD_NOMBRE).unwrap(), "");
    let items = api.items();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2].nombre, "Teatro");
    // refreshed right after creating
    assert_eq!(view.state().rendered.len(), 1);
}

#[tokio::test]
async fn create_with_empty_name_never_calls_the_api() {
    let view = MockViewPort::with_elements(&ELEMENTS);
    view.set_field(categories::FIELD_NOMBRE, "   ");
    let api = seeded_api();
    let mut screen = CategoriesScreen::bind(view.clone(), api.clone(), seeded_sessions())
        .await
        .unwrap();
    screen.create().await;

    assert!(api.seen_tokens.lock().unwrap().is_empty());
    assert_eq!(view.state().alerts[0].0, categories::MSG_NAME_REQUIRED);
}

#[tokio::test]
async fn rename_skips_empty_and_unchanged_names() {
    let view = MockViewPort::with_elements(&ELEMENTS);
    let api = seeded_api();
    let mut screen = CategoriesScreen::bind(view.clone(), api.clone(), seeded_sessions())
        .await
        .unwrap();

    screen.rename(1, "Conciertos", "").await;
    screen.rename(1, "Conciertos", "Conciertos").await;
    assert!(api.seen_tokens.lock().unwrap().is_empty());

    screen.rename(1, "Conciertos", "Conciertos 2026").await;
    assert_eq!(api.items()[0].nombre, "Conciertos 2026");
    assert_eq!(view.state().rendered.len(), 1);
}

#[tokio::test]
async fn remove_reloads_on_success_and_alerts_on_failure() {
    let view = MockViewPort::with_elements(&ELEMENTS);
    let api = seeded_api();
    let mut screen = CategoriesScreen::bind(view.clone(), api.clone(), seeded_sessions())
        .await
        .unwrap();

    screen.remove(2).await;
    assert_eq!(api.items().len(), 1);
    assert_eq!(view.state().rendered.len(), 1);

    api.fail_next(ApiError::Network("connection reset".into()));
    screen.remove(1).await;
    // failed delete leaves the list alone and surfaces an alert
    assert_eq!(api.items().len(), 1);
    assert_eq!(view.state().alerts[0].0, categories::MSG_DELETE_FAILED);
    assert_eq!(view.state().rendered.len(), 1);
}

#[tokio::test]
async fn list_failure_keeps_the_previous_rendering() {
    let view = MockViewPort::with_elements(&ELEMENTS);
    let api = seeded_api();
    let mut screen = CategoriesScreen::bind(view.clone(), api.clone(), seeded_sessions())
        .await
        .unwrap();
    screen.refresh().await;

    api.fail_next(ApiError::Network("timeout".into()));
    screen.refresh().await;

    let state = view.state();
    assert_eq!(state.rendered.len(), 1);
    assert_eq!(state.alerts[0].0, categories::MSG_LIST_FAILED);
}

#[tokio::test]
async fn logout_clears_the_session_and_returns_to_login() {
    let view = MockViewPort::with_elements(&ELEMENTS);
    let sessions = seeded_sessions();
    let mut screen = CategoriesScreen::bind(view.clone(), seeded_api(), sessions.clone())
        .await
        .unwrap();
    screen.logout().await;

    assert!(sessions.load().await.is_none());
    assert_eq!(view.state().navigations, vec![screens::LOGIN_TARGET.to_string()]);
}
