//! Time and clock-label helpers.

use chrono::{DateTime, FixedOffset, Local};

/// Wall-clock timestamp, kept with the offset it was observed in so labels
/// render the local time the reading was taken.
pub type Timestamp = DateTime<FixedOffset>;

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now().fixed_offset()
}

/// Short 12-hour clock label used on chart axes (`03:04:05 PM`).
#[must_use]
pub fn chart_label(ts: &Timestamp) -> String {
    ts.format("%I:%M:%S %p").to_string()
}

/// Clock-and-date label used in the readings table (`3:04:05 PM 16 Oct`).
#[must_use]
pub fn table_label(ts: &Timestamp) -> String {
    ts.format("%-I:%M:%S %p %d %b").to_string()
}

#[cfg(test)]
pub(crate) fn at(hour: u32, min: u32, sec: u32) -> Timestamp {
    use chrono::TimeZone;

    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2026, 10, 16, hour, min, sec)
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_time() {
        let before = Local::now().fixed_offset();
        let ts = now();
        let after = Local::now().fixed_offset();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_pad_chart_label_to_two_digits() {
        assert_eq!(chart_label(&at(15, 4, 5)), "03:04:05 PM");
        assert_eq!(chart_label(&at(9, 30, 0)), "09:30:00 AM");
    }

    #[test]
    fn should_render_midnight_as_twelve() {
        assert_eq!(chart_label(&at(0, 0, 1)), "12:00:01 AM");
    }

    #[test]
    fn should_append_day_and_month_to_table_label() {
        assert_eq!(table_label(&at(15, 4, 5)), "3:04:05 PM 16 Oct");
    }
}
