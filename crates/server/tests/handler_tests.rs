//! # Handler Integration Tests
//!
//! Drives the full router with `tower::ServiceExt::oneshot`: login
//! cookie issuance, session-gated access, redirect-with-notice on
//! workflow failures, and the health endpoint.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use server::{create_app_router, AppState};
use tower::ServiceExt;

async fn setup_app() -> (AppState, Router) {
    let state = common::setup_state().await;
    let app = create_app_router(state.clone());
    (state, app)
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Logs the user in and returns the session cookie pair.
async fn login(app: &Router, user_id: i32) -> String {
    let response = app
        .clone()
        .oneshot(form_request("/login", &format!("user_id={}", user_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set a session cookie")
        .to_str()
        .unwrap();
    cookie.split(';').next().unwrap().to_string()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should carry a Location header")
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint_is_public() {
    let (_state, app) = setup_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_page_lists_users() {
    let (state, app) = setup_app().await;
    common::insert_user(&state.db, "Mina", "Sato").await;
    common::insert_user(&state.db, "Felix", "Braun").await;

    let response = app
        .oneshot(Request::builder().uri("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let users: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(users.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unauthenticated_board_view_redirects_to_login() {
    let (_state, app) = setup_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_garbage_cookie_redirects_to_login() {
    let (_state, app) = setup_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, "kanri_session=not-a-valid-value")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_login_grants_board_access() {
    let (state, app) = setup_app().await;
    let fixture = common::setup_board(&state.db).await;

    let cookie = login(&app, fixture.owner.id).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/?board_id={}", fixture.board.id))
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let view: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(view["board_name"], "Engineering Sprint");
    assert_eq!(view["viewer_name"], "Mina");
}

#[tokio::test]
async fn test_login_with_unknown_user_fails() {
    let (_state, app) = setup_app().await;

    let response = app.oneshot(form_request("/login", "user_id=42")).await.unwrap();
    // No cookie; back to the login screen.
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/login");
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_logout_clears_session() {
    let (state, app) = setup_app().await;
    let fixture = common::setup_board(&state.db).await;
    let cookie = login(&app, fixture.owner.id).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/logout")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/login");

    // The old cookie no longer opens the board.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_add_card_redirects_back_to_board() {
    let (state, app) = setup_app().await;
    let fixture = common::setup_board(&state.db).await;
    let cookie = login(&app, fixture.editor.id).await;

    let mut request = form_request(
        &format!("/add?board_id={}", fixture.board.id),
        &format!("list_id={}&title=Ship+it&priority=High", fixture.todo.id),
    );
    request.headers_mut().insert(header::COOKIE, cookie.parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/?board_id={}", fixture.board.id));

    let count = entity::Cards::find()
        .filter(entity::cards::Column::ListId.eq(fixture.todo.id))
        .count(&state.db)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_capacity_failure_redirects_with_notice() {
    let (state, app) = setup_app().await;
    let fixture = common::setup_board(&state.db).await;
    let cookie = login(&app, fixture.editor.id).await;

    for i in 0..2 {
        common::insert_card(&state.db, fixture.doing.id, &format!("Busy {}", i), fixture.owner.id).await;
    }

    let mut request = form_request(
        &format!("/add?board_id={}", fixture.board.id),
        &format!("list_id={}&title=Overflow", fixture.doing.id),
    );
    request.headers_mut().insert(header::COOKIE, cookie.parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        format!("/?board_id={}&notice=capacity_exceeded", fixture.board.id)
    );
}

#[tokio::test]
async fn test_viewer_mutation_redirects_with_notice() {
    let (state, app) = setup_app().await;
    let fixture = common::setup_board(&state.db).await;
    let cookie = login(&app, fixture.viewer.id).await;

    let mut request = form_request(
        &format!("/add?board_id={}", fixture.board.id),
        &format!("list_id={}&title=Not+allowed", fixture.todo.id),
    );
    request.headers_mut().insert(header::COOKIE, cookie.parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        format!("/?board_id={}&notice=access_denied", fixture.board.id)
    );
}

#[tokio::test]
async fn test_unknown_board_redirects_to_default() {
    let (state, app) = setup_app().await;
    let fixture = common::setup_board(&state.db).await;
    let cookie = login(&app, fixture.owner.id).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?board_id=999")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(
        location(&response),
        format!("/?board_id={}&notice=not_found", state.config.default_board_id)
    );
}

#[tokio::test]
async fn test_security_headers_are_applied() {
    let (_state, app) = setup_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.headers().get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
}
