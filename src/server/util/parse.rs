use crate::server::error::AppError;

/// Parses an `HH:MM` wall-clock time into minutes since midnight.
///
/// # Returns
/// - `Ok(i32)` - Minutes in `0..1440`
/// - `Err(AppError::BadRequest)` - Value is not a valid 24-hour `HH:MM` time
pub fn parse_minute_of_day(value: &str) -> Result<i32, AppError> {
    let invalid = || AppError::BadRequest(format!("'{}' is not a valid HH:MM time", value));

    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return Err(invalid());
    }

    let hours = hours.parse::<i32>().map_err(|_| invalid())?;
    let minutes = minutes.parse::<i32>().map_err(|_| invalid())?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as `HH:MM`.
pub fn format_minute_of_day(minute: i32) -> String {
    let minute = minute.rem_euclid(24 * 60);
    format!("{:02}:{:02}", minute / 60, minute % 60)
}
