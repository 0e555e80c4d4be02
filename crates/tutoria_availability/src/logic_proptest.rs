#[cfg(test)]
mod tests {
    use crate::logic::{
        available_dates, generate_slots, parse_hm, BookedDateSet, DayWindow, WeeklyAvailability,
    };
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    fn window_from_hours(start_hour: u32, end_hour: u32) -> DayWindow {
        DayWindow::open(
            &format!("{start_hour:02}:00"),
            &format!("{end_hour:02}:00"),
        )
    }

    fn fallback() -> DayWindow {
        DayWindow::open("09:00", "17:00")
    }

    proptest! {
        // Every offered slot lies inside the window and spans the duration.
        #[test]
        fn test_slots_stay_inside_window(
            start_hour in 0..12u32,
            end_hour in 13..24u32,
            duration_minutes in 15..180i64,
            step_minutes in 5..60i64,
        ) {
            let end_hour = end_hour.min(23);
            let window = window_from_hours(start_hour, end_hour);
            let set = generate_slots(Some(&window), duration_minutes, step_minutes, &fallback()).unwrap();

            let window_start = parse_hm(&window.start_time).unwrap();
            let window_end = parse_hm(&window.end_time).unwrap();

            for slot in &set.slots {
                let start = parse_hm(&slot.start).unwrap();
                let end = parse_hm(&slot.end).unwrap();
                prop_assert!(start >= window_start);
                prop_assert!(end <= window_end);
                prop_assert_eq!(end - start, Duration::minutes(duration_minutes));
            }
        }

        // Starts are spaced exactly step_minutes apart, anchored at the
        // window start.
        #[test]
        fn test_slot_starts_step_from_window_start(
            start_hour in 0..12u32,
            end_hour in 13..24u32,
            duration_minutes in 15..180i64,
            step_minutes in 5..60i64,
        ) {
            let end_hour = end_hour.min(23);
            let window = window_from_hours(start_hour, end_hour);
            let set = generate_slots(Some(&window), duration_minutes, step_minutes, &fallback()).unwrap();

            let window_start = parse_hm(&window.start_time).unwrap();
            for (i, slot) in set.slots.iter().enumerate() {
                let start = parse_hm(&slot.start).unwrap();
                let expected = window_start + Duration::minutes(step_minutes * i as i64);
                prop_assert_eq!(start, expected);
            }
        }

        // Slot count matches the closed-form expectation.
        #[test]
        fn test_slot_count_formula(
            start_hour in 0..12u32,
            end_hour in 13..24u32,
            duration_minutes in 15..180i64,
            step_minutes in 5..60i64,
        ) {
            let end_hour = end_hour.min(23);
            let window = window_from_hours(start_hour, end_hour);
            let set = generate_slots(Some(&window), duration_minutes, step_minutes, &fallback()).unwrap();

            let window_minutes = i64::from(end_hour - start_hour) * 60;
            let expected = if duration_minutes > window_minutes {
                0
            } else {
                (window_minutes - duration_minutes) / step_minutes + 1
            };
            prop_assert_eq!(set.slots.len() as i64, expected);
        }

        // Dates never fall outside the horizon, never land on a booked date,
        // and come back sorted and unique.
        #[test]
        fn test_available_dates_invariants(
            day_offset in 0..3650i64,
            horizon_days in 0..120i64,
            booked_offsets in proptest::collection::btree_set(0..120i64, 0..10),
        ) {
            let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
                + Duration::days(day_offset);
            let booked: BookedDateSet = booked_offsets
                .iter()
                .map(|offset| today + Duration::days(*offset))
                .collect();
            let weekly = WeeklyAvailability::default();

            let result = available_dates(&weekly, &booked, today, horizon_days, &fallback());
            prop_assert!(result.default_derived);

            let horizon_end = today + Duration::days(horizon_days);
            for pair in result.dates.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            for date in &result.dates {
                prop_assert!(*date >= today && *date <= horizon_end);
                prop_assert!(!booked.contains(date));
            }
        }
    }
}
