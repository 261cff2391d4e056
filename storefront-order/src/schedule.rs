use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Project the delivery date for an order placed at `placed_at`.
///
/// Counting starts at midnight of the local calendar day and walks forward
/// one day at a time; Saturdays and Sundays are passed over without
/// consuming a delivery day. Zero days means same-day delivery.
///
/// Returns `None` only if the walk runs past the end of the calendar.
pub fn project_delivery<Tz: TimeZone>(placed_at: &DateTime<Tz>, delivery_days: u32) -> Option<NaiveDateTime> {
    let mut date = placed_at.date_naive();
    let mut remaining = delivery_days;

    while remaining > 0 {
        date = date.checked_add_days(Days::new(1))?;
        if !is_weekend(date) {
            remaining -= 1;
        }
    }

    Some(date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_wednesday_plus_three_lands_on_monday() {
        // 2024-01-03 is a Wednesday
        let delivered = project_delivery(&at("2024-01-03T14:25:00+00:00"), 3).unwrap();
        assert_eq!(delivered, midnight(2024, 1, 8));
        assert_eq!(delivered.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_seven_business_days() {
        let delivered = project_delivery(&at("2024-01-03T09:00:00+00:00"), 7).unwrap();
        assert_eq!(delivered, midnight(2024, 1, 12));
    }

    #[test]
    fn test_friday_next_day_skips_weekend() {
        let delivered = project_delivery(&at("2024-01-05T18:00:00+00:00"), 1).unwrap();
        assert_eq!(delivered, midnight(2024, 1, 8));
    }

    #[test]
    fn test_order_placed_on_saturday() {
        let delivered = project_delivery(&at("2024-01-06T11:00:00+00:00"), 1).unwrap();
        assert_eq!(delivered, midnight(2024, 1, 8));
    }

    #[test]
    fn test_zero_days_is_start_of_today() {
        let delivered = project_delivery(&at("2024-01-03T23:59:59+00:00"), 0).unwrap();
        assert_eq!(delivered, midnight(2024, 1, 3));
    }

    #[test]
    fn test_zero_days_on_weekend_stays_put() {
        let delivered = project_delivery(&at("2024-01-07T08:00:00+00:00"), 0).unwrap();
        assert_eq!(delivered, midnight(2024, 1, 7));
    }

    #[test]
    fn test_calendar_day_follows_local_offset() {
        // Friday evening in New York is already Saturday in UTC
        let delivered = project_delivery(&at("2024-01-05T23:30:00-05:00"), 1).unwrap();
        assert_eq!(delivered, midnight(2024, 1, 8));

        // Friday night in UTC is already Saturday in Tokyo
        let delivered = project_delivery(&at("2024-01-06T00:30:00+09:00"), 3).unwrap();
        assert_eq!(delivered, midnight(2024, 1, 10));
    }

    #[test]
    fn test_weekend_detection() {
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()));
    }

    #[test]
    fn test_end_of_calendar() {
        let last_day = NaiveDate::MAX.and_time(NaiveTime::MIN).and_utc();
        assert!(project_delivery(&last_day, 1).is_none());
    }
}
