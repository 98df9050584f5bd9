//! # Session Service
//!
//! Server-side login sessions. Each login creates a row in the
//! `sessions` table; the browser holds only a signed reference to it:
//! the `kanri_session` cookie carries `"{session_id}.{mac}"` where the
//! MAC is a blake3 keyed hash of the session id. The key is derived
//! from the configured secret, so cookies from one deployment are
//! worthless against another.

use axum::http::{header, HeaderMap};
use chrono::Utc;
use entity::{sessions, users, Sessions};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "kanri_session";

/// Domain separation string for the cookie MAC key.
const MAC_KEY_CONTEXT: &str = "kanri 2025-03-01 session cookie mac";

/// The authenticated caller, extracted from the session cookie by the
/// auth middleware and passed explicitly into every handler.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Id of the logged-in user
    pub user_id:      i32,
    /// First name cached at login time, echoed in the view model
    pub display_name: String,
    /// The session row backing this login
    pub session_id:   Uuid,
}

impl AuthContext {
    /// Builds the context from a loaded session row.
    #[must_use]
    pub fn from_session(session: &sessions::Model) -> Self {
        Self {
            user_id:      session.user_id,
            display_name: session.display_name.clone(),
            session_id:   session.id,
        }
    }
}

fn mac_key(secret: &str) -> [u8; 32] { blake3::derive_key(MAC_KEY_CONTEXT, secret.as_bytes()) }

/// Signs a session id into the cookie value `"{id}.{mac}"`.
#[must_use]
pub fn sign_session_id(secret: &str, session_id: Uuid) -> String {
    let key = mac_key(secret);
    let mac = blake3::keyed_hash(&key, session_id.to_string().as_bytes());
    format!("{}.{}", session_id, mac.to_hex())
}

/// Verifies a cookie value and returns the session id it references.
///
/// Returns `None` for malformed values and MAC mismatches alike; the
/// caller treats both as "not logged in". The MAC comparison goes
/// through `blake3::Hash` equality, which is constant-time.
#[must_use]
pub fn verify_cookie_value(secret: &str, value: &str) -> Option<Uuid> {
    let (id_part, mac_part) = value.split_once('.')?;
    let session_id = Uuid::parse_str(id_part).ok()?;
    let presented = blake3::Hash::from_hex(mac_part).ok()?;
    let key = mac_key(secret);
    let expected = blake3::keyed_hash(&key, id_part.as_bytes());
    if expected == presented { Some(session_id) } else { None }
}

/// Builds the `Set-Cookie` value establishing a session.
#[must_use]
pub fn build_cookie(secret: &str, session_id: Uuid) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE,
        sign_session_id(secret, session_id)
    )
}

/// Builds the `Set-Cookie` value that removes the session cookie.
#[must_use]
pub fn clear_cookie() -> String { format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE) }

/// Extracts the raw session cookie value from request headers.
///
/// Parses the `Cookie` header manually; a request may carry several
/// cookies separated by `"; "`.
#[must_use]
pub fn session_cookie_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Creates a session row for a user, caching the first name for display.
pub async fn create_session<C: ConnectionTrait>(conn: &C, user: &users::Model) -> Result<sessions::Model> {
    let now = Utc::now().naive_utc();
    let session = sessions::ActiveModel {
        id:           Set(Uuid::new_v4()),
        user_id:      Set(user.id),
        display_name: Set(user.first_name.clone()),
        created_at:   Set(now),
        last_used_at: Set(now),
        revoked_at:   Set(None),
    };
    let model = session.insert(conn).await?;
    tracing::info!(user_id = user.id, session_id = %model.id, "session created");
    Ok(model)
}

/// Loads an active (non-revoked) session by id.
pub async fn load_session<C: ConnectionTrait>(conn: &C, session_id: Uuid) -> Result<Option<sessions::Model>> {
    let session = Sessions::find_by_id(session_id)
        .filter(sessions::Column::RevokedAt.is_null())
        .one(conn)
        .await?;
    Ok(session)
}

/// Bumps a session's `last_used_at` timestamp.
pub async fn touch_session<C: ConnectionTrait>(conn: &C, session_id: Uuid) -> Result<()> {
    Sessions::update_many()
        .col_expr(
            sessions::Column::LastUsedAt,
            sea_orm::sea_query::Expr::value(Utc::now().naive_utc()),
        )
        .filter(sessions::Column::Id.eq(session_id))
        .exec(conn)
        .await?;
    Ok(())
}

/// Revokes a session so its cookie stops authenticating.
pub async fn revoke_session<C: ConnectionTrait>(conn: &C, session_id: Uuid) -> Result<()> {
    let result = Sessions::update_many()
        .col_expr(
            sessions::Column::RevokedAt,
            sea_orm::sea_query::Expr::value(Some(Utc::now().naive_utc())),
        )
        .filter(sessions::Column::Id.eq(session_id))
        .filter(sessions::Column::RevokedAt.is_null())
        .exec(conn)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found(format!("Session {}", session_id)));
    }
    tracing::info!(session_id = %session_id, "session revoked");
    Ok(())
}
