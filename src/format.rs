//! Time formatting and font scaling.
//!
//! The clock shows `MM:SS` below one hour and switches to `HH:MM:SS` once the
//! remaining time reaches an hour. Whether hours are shown is derived from the
//! duration alone, so callers never store a display mode.

/// Seconds in one hour.
pub const SECS_PER_HOUR: u64 = 3600;
/// Seconds in one minute.
pub const SECS_PER_MINUTE: u64 = 60;

/// Smallest font size the clock is ever drawn at.
pub const MIN_FONT_SIZE: u32 = 10;
/// Largest font size the clock is ever drawn at.
pub const MAX_FONT_SIZE: u32 = 500;
/// Nominal pixel height of one terminal row.
pub const CELL_HEIGHT_PX: u32 = 16;

/// Reports whether a duration is displayed with an hours field.
pub fn shows_hours(secs: u64) -> bool {
    secs >= SECS_PER_HOUR
}

/// Formats a number of seconds as a zero-padded clock.
///
/// # Examples
///
/// ```rust
/// use countdown_tui::format::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(65), "01:05");
/// assert_eq!(format_clock(3661), "01:01:01");
/// ```
pub fn format_clock(secs: u64) -> String {
    if shows_hours(secs) {
        let hours = secs / SECS_PER_HOUR;
        let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let seconds = secs % SECS_PER_MINUTE;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        let minutes = secs / SECS_PER_MINUTE;
        let seconds = secs % SECS_PER_MINUTE;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Font size for a window of the given pixel height: a fifth of the height,
/// clamped to `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
pub fn font_size_for_height(height_px: u32) -> u32 {
    (height_px / 5).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Font size for a window that is `rows` terminal rows tall.
pub fn font_size_for_rows(rows: u16) -> u32 {
    font_size_for_height(u32::from(rows) * CELL_HEIGHT_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn test_format_with_hours() {
        assert_eq!(format_clock(3600), "01:00:00");
        assert_eq!(format_clock(3661), "01:01:01");
        assert_eq!(format_clock(100 * 3600 + 59), "100:00:59");
    }

    #[test]
    fn test_shows_hours_boundary() {
        assert!(!shows_hours(3599));
        assert!(shows_hours(3600));
    }

    #[test]
    fn test_font_size_is_clamped() {
        assert_eq!(font_size_for_height(0), MIN_FONT_SIZE);
        assert_eq!(font_size_for_height(49), MIN_FONT_SIZE);
        assert_eq!(font_size_for_height(400), 80);
        assert_eq!(font_size_for_height(1080), 216);
        assert_eq!(font_size_for_height(10_000), MAX_FONT_SIZE);
    }

    #[test]
    fn test_font_size_for_rows() {
        // 25 rows * 16px = 400px
        assert_eq!(font_size_for_rows(25), 80);
        assert_eq!(font_size_for_rows(2), MIN_FONT_SIZE);
    }
}
