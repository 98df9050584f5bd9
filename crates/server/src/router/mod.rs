//! # Router Configuration
//!
//! Wires every route to its inner handler. All routes except `/login`
//! and `/health` sit behind the session middleware; the wrappers here
//! only run extractors and translate workflow failures into
//! notice-carrying redirects.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Extension, Form, Path, Query, State as AxumState,
    },
    middleware,
    response::{IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use error::{rejection, Result};

use crate::{
    dto::{
        auth::{LoginForm, UserRow},
        boards::{BoardFormData, BoardQuery, CreateBoardForm, RenameBoardForm},
        cards::{AddCardForm, CardRedirectQuery, EditCardForm},
        lists::{CreateListForm, EditListForm, ListRedirectQuery},
    },
    handlers::{self, boards::BoardViewOutcome},
    session::AuthContext,
    AppState,
};

/// Creates the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/", get(board_view_handler))
        .route("/logout", get(logout_handler))
        .route("/create_board", get(create_board_form_handler).post(create_board_handler))
        .route("/edit_board/{id}", post(edit_board_handler))
        .route("/delete_board/{id}", post(delete_board_handler))
        .route("/create_list", post(create_list_handler))
        .route("/edit_list/{id}", post(edit_list_handler))
        .route("/delete_list/{id}", post(delete_list_handler))
        .route("/add", get(add_card_form_handler).post(add_card_handler))
        .route("/edit_card/{id}", get(edit_card_form_handler).post(edit_card_handler))
        .route("/delete_card/{id}", post(delete_card_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::session_auth,
        ));

    let public_routes = Router::new().route("/login", get(login_page_handler).post(login_submit_handler));

    public_routes.merge(protected_routes).with_state(state)
}

/// Creates the health check router.
pub fn create_health_router() -> Router { Router::new().route("/health", get(|| async { "OK" })) }

/// Creates the main application router with middleware applied.
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .merge(create_health_router())
        .merge(create_router(state))
        .layer(middleware::from_fn(crate::middleware::security_headers::security_headers))
        .layer(middleware::from_fn(crate::middleware::request_log::request_log))
}

async fn login_page_handler(AxumState(state): AxumState<AppState>) -> Result<Json<Vec<UserRow>>> {
    handlers::auth::login_page_inner(&state).await
}

async fn login_submit_handler(
    AxumState(state): AxumState<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(e) => return rejection::handle_form_rejection(e),
    };
    match handlers::auth::login_submit_inner(&state, form).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "login failed");
            Redirect::to("/login").into_response()
        },
    }
}

async fn logout_handler(AxumState(state): AxumState<AppState>, Extension(auth): Extension<AuthContext>) -> Response {
    match handlers::auth::logout_inner(&state, &auth).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "logout failed");
            Redirect::to("/login").into_response()
        },
    }
}

async fn board_view_handler(
    AxumState(state): AxumState<AppState>,
    Extension(auth): Extension<AuthContext>,
    query: Result<Query<BoardQuery>, QueryRejection>,
) -> Result<Response> {
    let Query(query) = match query {
        Ok(query) => query,
        Err(e) => return Ok(rejection::handle_query_rejection(e)),
    };
    match handlers::boards::board_view_inner(&state, &auth, query).await? {
        BoardViewOutcome::View(view) => Ok(Json(*view).into_response()),
        BoardViewOutcome::RedirectToDefault(redirect) => Ok(redirect.into_response()),
    }
}

async fn create_board_form_handler() -> Json<BoardFormData> { handlers::boards::create_board_form_inner().await }

async fn create_board_handler(
    AxumState(state): AxumState<AppState>,
    Extension(auth): Extension<AuthContext>,
    Form(form): Form<CreateBoardForm>,
) -> Redirect {
    let fallback = state.config.default_board_id;
    handlers::redirect_or_notice(
        handlers::boards::create_board_inner(&state, &auth, form).await,
        fallback,
    )
}

async fn edit_board_handler(
    AxumState(state): AxumState<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(board_id): Path<i32>,
    Form(form): Form<RenameBoardForm>,
) -> Redirect {
    handlers::redirect_or_notice(
        handlers::boards::edit_board_inner(&state, &auth, board_id, form).await,
        board_id,
    )
}

async fn delete_board_handler(
    AxumState(state): AxumState<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(board_id): Path<i32>,
) -> Redirect {
    handlers::redirect_or_notice(
        handlers::boards::delete_board_inner(&state, &auth, board_id).await,
        board_id,
    )
}

async fn create_list_handler(
    AxumState(state): AxumState<AppState>,
    Extension(auth): Extension<AuthContext>,
    Form(form): Form<CreateListForm>,
) -> Redirect {
    let board_id = form.board_id;
    handlers::redirect_or_notice(
        handlers::lists::create_list_inner(&state, &auth, form).await,
        board_id,
    )
}

async fn edit_list_handler(
    AxumState(state): AxumState<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(list_id): Path<i32>,
    Form(form): Form<EditListForm>,
) -> Redirect {
    let board_id = form.board_id;
    handlers::redirect_or_notice(
        handlers::lists::edit_list_inner(&state, &auth, list_id, form).await,
        board_id,
    )
}

async fn delete_list_handler(
    AxumState(state): AxumState<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(list_id): Path<i32>,
    Query(query): Query<ListRedirectQuery>,
) -> Redirect {
    let board_id = query.board_id.unwrap_or(state.config.default_board_id);
    handlers::redirect_or_notice(
        handlers::lists::delete_list_inner(&state, &auth, list_id, board_id).await,
        board_id,
    )
}

async fn add_card_form_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<CardRedirectQuery>,
) -> Result<Json<crate::dto::cards::CardFormData>> {
    let board_id = query.board_id.unwrap_or(state.config.default_board_id);
    handlers::cards::add_card_form_inner(&state, board_id).await
}

async fn add_card_handler(
    AxumState(state): AxumState<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<CardRedirectQuery>,
    Form(form): Form<AddCardForm>,
) -> Redirect {
    let board_id = query.board_id.unwrap_or(state.config.default_board_id);
    handlers::redirect_or_notice(
        handlers::cards::add_card_inner(&state, &auth, board_id, form).await,
        board_id,
    )
}

async fn edit_card_form_handler(
    AxumState(state): AxumState<AppState>,
    Path(card_id): Path<i32>,
) -> Result<Json<crate::dto::cards::CardEditData>> {
    handlers::cards::edit_card_form_inner(&state, card_id).await
}

async fn edit_card_handler(
    AxumState(state): AxumState<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(card_id): Path<i32>,
    Form(form): Form<EditCardForm>,
) -> Redirect {
    let fallback = form.board_id.unwrap_or(state.config.default_board_id);
    handlers::redirect_or_notice(
        handlers::cards::edit_card_inner(&state, &auth, card_id, form).await,
        fallback,
    )
}

async fn delete_card_handler(
    AxumState(state): AxumState<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(card_id): Path<i32>,
    Query(query): Query<CardRedirectQuery>,
) -> Redirect {
    let board_id = query.board_id.unwrap_or(state.config.default_board_id);
    handlers::redirect_or_notice(
        handlers::cards::delete_card_inner(&state, &auth, card_id, board_id).await,
        board_id,
    )
}
