//! Input checks shared by the service layer. Every failure is a 400.

use url::Url;

use crate::server::error::AppError;

/// Checks that `value` has between `min` and `max` characters (inclusive).
pub fn require_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(if min > 0 && len == 0 {
            AppError::BadRequest(format!("{} is required", field))
        } else {
            AppError::BadRequest(format!(
                "{} must be between {} and {} characters",
                field, min, max
            ))
        });
    }

    Ok(())
}

pub fn require_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), AppError> {
    if value < min || value > max {
        return Err(AppError::BadRequest(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }

    Ok(())
}

/// Slugs are 2 to 40 characters of lowercase ASCII letters, digits and hyphens.
pub fn require_slug(value: &str) -> Result<(), AppError> {
    let valid = (2..=40).contains(&value.len())
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');

    if !valid {
        return Err(AppError::BadRequest(format!(
            "'{}' is not a valid slug (2-40 characters of a-z, 0-9 and '-')",
            value
        )));
    }

    Ok(())
}

pub fn require_http_url(field: &str, value: &str) -> Result<(), AppError> {
    let url = Url::parse(value)
        .map_err(|_| AppError::BadRequest(format!("{} must be a valid URL", field)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::BadRequest(format!(
            "{} must be an http or https URL",
            field
        )));
    }

    Ok(())
}
