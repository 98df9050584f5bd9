//! # Session Authentication Middleware
//!
//! Protects routes behind a valid login session.
//!
//! This middleware:
//! 1. Extracts the signed session cookie from the request
//! 2. Verifies the cookie MAC and loads the session row
//! 3. Bumps the session's `last_used_at` timestamp
//! 4. Adds [`AuthContext`] to request extensions
//! 5. Redirects cookie-less or stale requests to `/login`

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    session::{self, AuthContext},
    AppState,
};

/// Authentication middleware for browser-facing routes.
///
/// An invalid session yields a redirect to the login page rather than
/// a 401; the whole surface is a form-driven browser flow.
pub async fn session_auth(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let cookie = match session::session_cookie_from_headers(request.headers()) {
        Some(cookie) => cookie,
        None => return Redirect::to("/login").into_response(),
    };

    let session_id = match session::verify_cookie_value(&state.config.session_secret, &cookie) {
        Some(id) => id,
        None => {
            logging::log_security_event!("invalid_session_cookie", "session cookie failed verification");
            return Redirect::to("/login").into_response();
        },
    };

    let session = match session::load_session(&state.db, session_id).await {
        Ok(Some(session)) => session,
        Ok(None) => return Redirect::to("/login").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to load session");
            return e.into_response();
        },
    };

    // Best effort; a failed timestamp bump must not block the request.
    if let Err(e) = session::touch_session(&state.db, session.id).await {
        tracing::warn!(error = %e, session_id = %session.id, "failed to touch session");
    }

    request.extensions_mut().insert(AuthContext::from_session(&session));

    next.run(request).await
}
