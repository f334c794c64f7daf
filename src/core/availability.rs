//! Pure date arithmetic over a venue's reservation intervals.

use crate::domain::model::{DateInterval, ExclusionSet, NightsAndCost};
use crate::utils::error::{HolidazeError, Result};
use chrono::{DateTime, Days, TimeDelta, Utc};

/// True when `candidate` overlaps none of `booked`.
///
/// Every booked interval is checked on its own, so the list needs no sorting
/// or merging and may contain duplicates. Touching endpoints do not overlap.
pub fn is_range_available(candidate: &DateInterval, booked: &[DateInterval]) -> bool {
    booked
        .iter()
        .all(|b| candidate.start() >= b.end() || candidate.end() <= b.start())
}

/// Nights billed for a stay and its total at `price_per_night`.
///
/// Partial days round up, down to the last nanosecond: a 36 hour stay is two
/// nights and any non-empty stay is at least one.
pub fn compute_nights_and_cost(
    date_from: DateTime<Utc>,
    date_to: DateTime<Utc>,
    price_per_night: f64,
) -> Result<NightsAndCost> {
    if date_to <= date_from {
        return Err(HolidazeError::InvalidRange {
            start: date_from,
            end: date_to,
        });
    }

    let span = date_to - date_from;
    let whole_days = span.num_days();
    let nights = if span > TimeDelta::days(whole_days) {
        whole_days + 1
    } else {
        whole_days
    };

    Ok(NightsAndCost {
        nights,
        total_cost: nights as f64 * price_per_night,
    })
}

pub fn build_exclusion_set(booked: &[DateInterval]) -> ExclusionSet {
    let mut blocked_days = Vec::new();

    for interval in booked {
        let mut current = interval.start();
        while current <= interval.end() {
            blocked_days.push(current);
            match current.checked_add_days(Days::new(1)) {
                Some(next) => current = next,
                None => break,
            }
        }
    }

    ExclusionSet {
        blocked_ranges: booked.to_vec(),
        blocked_days,
    }
}

/// Calendar styling rule: a day is blocked when any booking covers it, ends included.
pub fn is_day_blocked(day: DateTime<Utc>, booked: &[DateInterval]) -> bool {
    booked.iter().any(|b| day >= b.start() && day <= b.end())
}

/// Check-out can be no earlier than one day after check-in.
pub fn earliest_check_out(date_from: DateTime<Utc>) -> DateTime<Utc> {
    date_from + TimeDelta::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn interval(from: DateTime<Utc>, to: DateTime<Utc>) -> DateInterval {
        DateInterval::new(from, to).unwrap()
    }

    #[test]
    fn test_empty_booked_set_is_always_available() {
        let candidate = interval(day(2024, 1, 1), day(2024, 1, 5));
        assert!(is_range_available(&candidate, &[]));
    }

    #[test]
    fn test_candidate_outside_all_bookings_is_available() {
        let booked = vec![
            interval(day(2024, 1, 1), day(2024, 1, 3)),
            interval(day(2024, 1, 10), day(2024, 1, 12)),
        ];
        let candidate = interval(day(2024, 1, 5), day(2024, 1, 8));
        assert!(is_range_available(&candidate, &booked));
    }

    #[test]
    fn test_candidate_inside_booking_is_unavailable() {
        let booked = vec![interval(day(2024, 1, 1), day(2024, 1, 10))];
        let candidate = interval(day(2024, 1, 3), day(2024, 1, 4));
        assert!(!is_range_available(&candidate, &booked));
    }

    #[test]
    fn test_candidate_covering_booking_is_unavailable() {
        let booked = vec![interval(day(2024, 1, 3), day(2024, 1, 4))];
        let candidate = interval(day(2024, 1, 1), day(2024, 1, 10));
        assert!(!is_range_available(&candidate, &booked));
    }

    #[test]
    fn test_touching_boundaries_are_available() {
        let b = interval(day(2024, 1, 5), day(2024, 1, 8));
        let after = interval(b.end(), day(2024, 1, 9));
        let before = interval(day(2024, 1, 4), b.start());

        assert!(is_range_available(&after, &[b]));
        assert!(is_range_available(&before, &[b]));
    }

    #[test]
    fn test_duplicate_and_overlapping_bookings_still_checked() {
        let b = interval(day(2024, 2, 1), day(2024, 2, 4));
        let booked = vec![b, b, interval(day(2024, 2, 2), day(2024, 2, 6))];

        assert!(!is_range_available(
            &interval(day(2024, 2, 5), day(2024, 2, 7)),
            &booked
        ));
        assert!(is_range_available(
            &interval(day(2024, 2, 6), day(2024, 2, 7)),
            &booked
        ));
    }

    #[test]
    fn test_nights_and_cost_whole_days() {
        let result = compute_nights_and_cost(day(2024, 1, 1), day(2024, 1, 3), 100.0).unwrap();
        assert_eq!(result.nights, 2);
        assert_eq!(result.total_cost, 200.0);
    }

    #[test]
    fn test_nights_and_cost_rounds_partial_day_up() {
        let noon = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let result = compute_nights_and_cost(day(2024, 1, 1), noon, 100.0).unwrap();
        assert_eq!(result.nights, 1);
        assert_eq!(result.total_cost, 100.0);

        let next_noon = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
        let result = compute_nights_and_cost(day(2024, 1, 1), next_noon, 80.5).unwrap();
        assert_eq!(result.nights, 2);
        assert_eq!(result.total_cost, 161.0);
    }

    #[test]
    fn test_nights_and_cost_counts_sub_millisecond_remainders() {
        let start = day(2024, 1, 1);

        let tiny = compute_nights_and_cost(start, start + TimeDelta::microseconds(500), 100.0).unwrap();
        assert_eq!(tiny.nights, 1);
        assert_eq!(tiny.total_cost, 100.0);

        let one_nano = compute_nights_and_cost(start, start + TimeDelta::nanoseconds(1), 100.0).unwrap();
        assert_eq!(one_nano.nights, 1);

        let just_over = start + TimeDelta::days(1) + TimeDelta::microseconds(500);
        let result = compute_nights_and_cost(start, just_over, 100.0).unwrap();
        assert_eq!(result.nights, 2);
        assert_eq!(result.total_cost, 200.0);

        let exact = compute_nights_and_cost(start, start + TimeDelta::days(3), 100.0).unwrap();
        assert_eq!(exact.nights, 3);
    }

    #[test]
    fn test_nights_and_cost_rejects_reversed_and_empty_ranges() {
        assert!(matches!(
            compute_nights_and_cost(day(2024, 1, 3), day(2024, 1, 1), 100.0),
            Err(HolidazeError::InvalidRange { .. })
        ));
        assert!(matches!(
            compute_nights_and_cost(day(2024, 1, 1), day(2024, 1, 1), 100.0),
            Err(HolidazeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_exclusion_set_enumerates_days_inclusively() {
        let booked = vec![interval(day(2024, 1, 1), day(2024, 1, 3))];
        let set = build_exclusion_set(&booked);

        assert_eq!(set.blocked_ranges, booked);
        assert_eq!(
            set.blocked_days,
            vec![day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 3)]
        );
    }

    #[test]
    fn test_exclusion_set_keeps_duplicate_days() {
        let booked = vec![
            interval(day(2024, 1, 1), day(2024, 1, 3)),
            interval(day(2024, 1, 3), day(2024, 1, 4)),
        ];
        let set = build_exclusion_set(&booked);

        assert_eq!(set.blocked_days.len(), 5);
        assert_eq!(
            set.blocked_days.iter().filter(|d| **d == day(2024, 1, 3)).count(),
            2
        );
    }

    #[test]
    fn test_exclusion_set_steps_from_start_time_of_day() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 3, 10, 0, 0).unwrap();
        let set = build_exclusion_set(&[interval(start, end)]);

        // 3/3 14:00 超過結束時間，所以只有兩天
        assert_eq!(set.blocked_days.len(), 2);
        assert_eq!(
            set.blocked_days[1],
            Utc.with_ymd_and_hms(2024, 3, 2, 14, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_day_blocked_includes_both_ends() {
        let booked = vec![interval(day(2024, 1, 1), day(2024, 1, 3))];
        assert!(is_day_blocked(day(2024, 1, 1), &booked));
        assert!(is_day_blocked(day(2024, 1, 3), &booked));
        assert!(!is_day_blocked(day(2024, 1, 4), &booked));
    }

    #[test]
    fn test_earliest_check_out_is_next_day() {
        assert_eq!(earliest_check_out(day(2024, 1, 31)), day(2024, 2, 1));
    }
}
