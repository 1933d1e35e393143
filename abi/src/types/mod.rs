mod booking;
mod customer;
mod room;

use chrono::NaiveDate;

pub use booking::*;
pub use customer::*;
pub use room::*;

use crate::ReservationError;

/// Reject ranges whose start lies after their end.
pub fn validate_range(start: NaiveDate, end: NaiveDate) -> Result<(), ReservationError> {
    if start > end {
        return Err(ReservationError::InvalidRange { start, end });
    }

    Ok(())
}

/// Like [`validate_range`], but the start must also be strictly after `today`.
pub fn validate_future_range(
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<(), ReservationError> {
    if start <= today {
        return Err(ReservationError::InvalidRange { start, end });
    }

    validate_range(start, end)
}

/// Inclusive overlap of `[a_start, a_end]` and `[b_start, b_end]`.
pub fn overlaps(a_start: NaiveDate, a_end: NaiveDate, b_start: NaiveDate, b_end: NaiveDate) -> bool {
    a_start <= b_end && b_start <= a_end
}

/// Every day in `[start, end]`, ascending. Empty when `start > end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn validate_range_should_reject_reversed_range() {
        let err = validate_range(date("2026-11-03"), date("2026-11-02")).unwrap_err();
        assert_eq!(
            err,
            ReservationError::InvalidRange {
                start: date("2026-11-03"),
                end: date("2026-11-02"),
            }
        );
        assert!(validate_range(date("2026-11-02"), date("2026-11-02")).is_ok());
    }

    #[test]
    fn validate_future_range_should_reject_today_and_past() {
        let today = date("2026-10-18");
        assert!(validate_future_range(today, today, today).is_err());
        assert!(validate_future_range(date("2026-10-01"), date("2026-10-30"), today).is_err());
        assert!(validate_future_range(date("2026-10-19"), date("2026-10-19"), today).is_ok());
        assert!(validate_future_range(date("2026-10-20"), date("2026-10-19"), today).is_err());
    }

    #[test]
    fn overlaps_should_be_inclusive_on_both_ends() {
        let (s, e) = (date("2026-11-10"), date("2026-11-20"));
        assert!(overlaps(s, e, date("2026-11-20"), date("2026-11-25")));
        assert!(overlaps(s, e, date("2026-11-01"), date("2026-11-10")));
        assert!(overlaps(s, e, date("2026-11-12"), date("2026-11-12")));
        assert!(!overlaps(s, e, date("2026-11-21"), date("2026-11-25")));
        assert!(!overlaps(s, e, date("2026-11-01"), date("2026-11-09")));
    }

    #[test]
    fn days_between_should_include_both_ends() {
        let days: Vec<_> = days_between(date("2026-12-30"), date("2027-01-02")).collect();
        assert_eq!(
            days,
            vec![
                date("2026-12-30"),
                date("2026-12-31"),
                date("2027-01-01"),
                date("2027-01-02"),
            ]
        );
        assert_eq!(days_between(date("2027-01-02"), date("2027-01-01")).count(), 0);
    }
}
