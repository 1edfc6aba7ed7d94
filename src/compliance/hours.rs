//! Australian retail trading hours.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Fixed-date national public holidays observed by retail, as
/// (month, day) pairs: New Year's Day, Australia Day, ANZAC Day,
/// Christmas Day, Boxing Day.
pub const PUBLIC_HOLIDAYS: [(u32, u32); 5] = [(1, 1), (1, 26), (4, 25), (12, 25), (12, 26)];

/// Whether the timestamp falls inside typical retail trading hours:
/// weekdays 09:00-17:00, weekends 10:00-16:00.
pub fn is_business_hours(dt: NaiveDateTime) -> bool {
    let hour = dt.hour();
    if is_weekend(dt.date()) {
        (10..=16).contains(&hour)
    } else {
        (9..=17).contains(&hour)
    }
}

/// Whether the timestamp falls in a peak trading window: lunch
/// (12:00-14:00) or after work (17:00-19:00).
pub fn is_peak_hour(dt: NaiveDateTime) -> bool {
    let hour = dt.hour();
    (12..=14).contains(&hour) || (17..=19).contains(&hour)
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether the date is a fixed national public holiday.
pub fn is_public_holiday(date: NaiveDate) -> bool {
    PUBLIC_HOLIDAYS.contains(&(date.month(), date.day()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 30, 0)
            .unwrap()
    }

    #[test]
    fn weekday_trading_window() {
        // 2024-06-14 is a Friday
        assert!(is_business_hours(at(2024, 6, 14, 9)));
        assert!(is_business_hours(at(2024, 6, 14, 17)));
        assert!(!is_business_hours(at(2024, 6, 14, 8)));
        assert!(!is_business_hours(at(2024, 6, 14, 18)));
    }

    #[test]
    fn weekend_trading_window() {
        // 2024-06-15 is a Saturday
        assert!(is_business_hours(at(2024, 6, 15, 10)));
        assert!(is_business_hours(at(2024, 6, 15, 16)));
        assert!(!is_business_hours(at(2024, 6, 15, 9)));
        assert!(!is_business_hours(at(2024, 6, 15, 17)));
    }

    #[test]
    fn peak_windows() {
        assert!(is_peak_hour(at(2024, 6, 14, 12)));
        assert!(is_peak_hour(at(2024, 6, 14, 14)));
        assert!(is_peak_hour(at(2024, 6, 14, 18)));
        assert!(!is_peak_hour(at(2024, 6, 14, 10)));
        assert!(!is_peak_hour(at(2024, 6, 14, 15)));
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 6, 17).unwrap()));
    }

    #[test]
    fn public_holidays() {
        assert!(is_public_holiday(NaiveDate::from_ymd_opt(2024, 1, 26).unwrap()));
        assert!(is_public_holiday(NaiveDate::from_ymd_opt(2024, 4, 25).unwrap()));
        assert!(is_public_holiday(NaiveDate::from_ymd_opt(2024, 12, 26).unwrap()));
        assert!(!is_public_holiday(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
    }
}
