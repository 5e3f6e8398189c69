use crate::models::FlightRule;
use chrono::NaiveDateTime;
use tracing::warn;

/// Whether a flight still departs later today, relative to `now`.
///
/// The departure time is placed on `now`'s calendar date. A flight leaving at
/// exactly `now` has already gone. An unparsable departure time makes the
/// flight unavailable rather than failing the evaluation.
pub fn is_available(rule: &FlightRule, now: NaiveDateTime) -> bool {
    let Some(time) = rule.departure() else {
        warn!(
            flight = %rule.flight,
            departure_time = %rule.departure_time,
            "Unparsable departure time, treating flight as unavailable"
        );
        return false;
    };

    now.date().and_time(time) > now
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn departing(time: &str) -> FlightRule {
        FlightRule::new("F1", "Paris", 500.0, time, 1.0)
    }

    #[test]
    fn later_departure_is_available() {
        assert!(is_available(&departing("23:59"), at(6, 0)));
    }

    #[test]
    fn earlier_departure_is_unavailable() {
        assert!(!is_available(&departing("05:00"), at(6, 0)));
    }

    #[test]
    fn departure_at_now_is_unavailable() {
        assert!(!is_available(&departing("12:00"), at(12, 0)));
    }

    #[test]
    fn one_microsecond_before_departure_is_available() {
        let now = at(12, 0) - Duration::microseconds(1);
        assert!(is_available(&departing("12:00"), now));
    }

    #[test]
    fn unparsable_departure_fails_closed() {
        assert!(!is_available(&departing("soon"), at(0, 0)));
        assert!(!is_available(&departing(""), at(0, 0)));
    }

    #[test]
    fn departure_never_rolls_to_next_day() {
        // 00:30 is treated as today, so at 23:00 it is gone.
        assert!(!is_available(&departing("00:30"), at(23, 0)));
    }
}
