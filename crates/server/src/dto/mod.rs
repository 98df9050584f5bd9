//! # Data Transfer Objects Module
//!
//! Request and response types for the HTTP surface. Multi-value form
//! fields (assignees) arrive as a comma-separated id list, and
//! checkbox booleans are presence-based.

pub mod auth;
pub mod boards;
pub mod cards;
pub mod lists;

use chrono::NaiveDate;
use error::{AppError, Result};

/// Parses a comma-separated id list, as submitted for assignees.
///
/// Empty input (or a missing field) means an empty set. Whitespace
/// around ids is tolerated; anything non-numeric is a validation
/// error.
pub fn parse_id_list(raw: Option<&str>) -> Result<Vec<i32>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| AppError::validation(format!("Invalid id in list: '{}'", s)))
        })
        .collect()
}

/// Parses an optional `YYYY-MM-DD` form field. Empty strings count as
/// absent, matching how browsers submit untouched date inputs.
pub fn parse_date_field(raw: Option<&str>, field: &str) -> Result<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| AppError::validation(format!("Invalid {}: '{}'", field, value)))
        },
    }
}
