//! # Request Handlers
//!
//! Inner handlers for every endpoint. The router wraps these with the
//! axum extractors; mutating handlers follow POST-redirect-GET, and a
//! workflow failure becomes a `notice` parameter on the redirect
//! instead of an error page.

use axum::response::Redirect;
use error::AppError;

pub mod auth;
pub mod boards;
pub mod cards;
pub mod lists;

/// Redirect to a board's view.
#[must_use]
pub fn redirect_to_board(board_id: i32, notice: Option<&str>) -> Redirect {
    match notice {
        Some(notice) => Redirect::to(&format!("/?board_id={}&notice={}", board_id, notice)),
        None => Redirect::to(&format!("/?board_id={}", board_id)),
    }
}

/// Converts a mutating handler's outcome into its redirect: the happy
/// path redirect when it succeeded, a notice-carrying redirect to the
/// fallback board when it failed.
#[must_use]
pub fn redirect_or_notice(result: error::Result<Redirect>, fallback_board_id: i32) -> Redirect {
    result.unwrap_or_else(|e| {
        log_workflow_failure(&e);
        redirect_to_board(fallback_board_id, Some(e.notice()))
    })
}

fn log_workflow_failure(e: &AppError) {
    match e {
        AppError::AccessDenied {
            ..
        }
        | AppError::CapacityExceeded {
            ..
        }
        | AppError::InvalidState {
            ..
        }
        | AppError::NotFound {
            ..
        }
        | AppError::Validation {
            ..
        } => tracing::info!(error = %e, "workflow refused"),
        _ => tracing::error!(error = %e, "workflow failed"),
    }
}
