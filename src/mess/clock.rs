use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::mess::types::TimeOfDay;

/// Eligibility is always decided in Indian Standard Time, whatever the
/// device's local zone is set to.
pub const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

fn ist_offset() -> FixedOffset {
    // 5:30 east is always in range for FixedOffset
    FixedOffset::east_opt(IST_OFFSET_SECONDS).unwrap()
}

/// Current instant converted to IST
pub fn ist_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&ist_offset())
}

/// Convert any instant to IST
pub fn to_ist(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    instant.with_timezone(&ist_offset())
}

/// IST wall-clock time of an instant, minute precision
pub fn ist_time_of_day(instant: DateTime<FixedOffset>) -> TimeOfDay {
    use chrono::Timelike;
    TimeOfDay::new(instant.hour() as u8, instant.minute() as u8)
}

/// IST calendar date of an instant; "once per day" is counted against this
pub fn ist_date(instant: DateTime<FixedOffset>) -> NaiveDate {
    instant.date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_utc_midnight_is_ist_morning() {
        let utc = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
        let ist = to_ist(utc);
        assert_eq!(ist_time_of_day(ist), TimeOfDay::new(5, 30));
        assert_eq!(ist_date(ist), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn test_ist_date_rolls_before_utc() {
        // 19:00 UTC is already 00:30 next day in IST
        let utc = Utc.with_ymd_and_hms(2025, 3, 10, 19, 0, 0).unwrap();
        let ist = to_ist(utc);
        assert_eq!(ist_time_of_day(ist), TimeOfDay::new(0, 30));
        assert_eq!(ist_date(ist), NaiveDate::from_ymd_opt(2025, 3, 11).unwrap());
    }
}
