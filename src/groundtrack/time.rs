use chrono::{DateTime, NaiveDateTime};

use crate::groundtrack::types::JulianDate;

/// Julian date of 1970-01-01T00:00:00Z.
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const MINUTES_PER_DAY: f64 = 1_440.0;

pub fn julian_date(datetime: &NaiveDateTime) -> JulianDate {
    let utc = datetime.and_utc();
    let seconds =
        utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) / 1_000_000_000.0;
    JD_UNIX_EPOCH + seconds / SECONDS_PER_DAY
}

/// Inverse of [`julian_date`], rounded to the nearest microsecond.
pub fn datetime_from_julian(jd: JulianDate) -> Option<NaiveDateTime> {
    if !jd.is_finite() {
        return None;
    }
    let micros = ((jd - JD_UNIX_EPOCH) * SECONDS_PER_DAY * 1_000_000.0).round();
    if micros.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_micros(micros as i64).map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn j2000_epoch() {
        let j2000 = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(julian_date(&j2000), 2_451_545.0);
    }

    #[test]
    fn converts_back_to_datetime() {
        let t = NaiveDate::from_ymd_opt(2020, 7, 12)
            .unwrap()
            .and_hms_opt(21, 15, 30)
            .unwrap();
        let back = datetime_from_julian(julian_date(&t)).unwrap();
        assert!((back - t).num_milliseconds().abs() <= 1);
    }

    #[test]
    fn rejects_non_finite_dates() {
        assert!(datetime_from_julian(f64::NAN).is_none());
        assert!(datetime_from_julian(f64::INFINITY).is_none());
    }
}
