//! # Authentication Handlers
//!
//! Login and logout. Login is select-a-user with no password, but
//! what it produces is a real server-side session referenced by a
//! signed cookie.

use axum::{
    http::header::SET_COOKIE,
    response::{AppendHeaders, Json, Redirect},
};
use entity::{users, Users};
use error::{AppError, Result, ResultExt as _};
use sea_orm::EntityTrait;
use validator::Validate;

use crate::{
    dto::auth::{LoginForm, UserRow},
    session::{self, AuthContext},
    AppState,
};

/// `GET /login`: the selectable users.
///
/// This is the one place where a database failure surfaces raw: with
/// no connection there is nothing sensible to redirect to.
pub async fn login_page_inner(state: &AppState) -> Result<Json<Vec<UserRow>>> {
    let users = Users::find()
        .all(&state.db)
        .await
        .with_context("Loading users for the login screen")?;
    Ok(Json(users.into_iter().map(UserRow::from).collect()))
}

/// `POST /login`: create a session for the chosen user.
pub async fn login_submit_inner(
    state: &AppState,
    form: LoginForm,
) -> Result<(AppendHeaders<[(axum::http::HeaderName, String); 1]>, Redirect)> {
    form.validate()?;

    let user: users::Model = match Users::find_by_id(form.user_id).one(&state.db).await? {
        Some(user) => user,
        None => {
            logging::log_auth_event!("login", form.user_id, false);
            return Err(AppError::not_found(format!("User {}", form.user_id)));
        },
    };

    let session = session::create_session(&state.db, &user).await?;
    let cookie = session::build_cookie(&state.config.session_secret, session.id);

    logging::log_auth_event!("login", user.id, true);

    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to("/")))
}

/// `GET /logout`: revoke the session and expire the cookie.
pub async fn logout_inner(
    state: &AppState,
    auth: &AuthContext,
) -> Result<(AppendHeaders<[(axum::http::HeaderName, String); 1]>, Redirect)> {
    // A session that disappeared under us still logs the user out.
    if let Err(e) = session::revoke_session(&state.db, auth.session_id).await {
        tracing::warn!(error = %e, session_id = %auth.session_id, "failed to revoke session on logout");
    }

    logging::log_auth_event!("logout", auth.user_id, true);

    Ok((
        AppendHeaders([(SET_COOKIE, session::clear_cookie())]),
        Redirect::to("/login"),
    ))
}
