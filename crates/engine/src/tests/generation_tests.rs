// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{d, default_request, seed_business, seed_client, seed_day, t, test_today};
use crate::{
    EngineError, GridRequest, book_slot, generate_month, generate_slots, generate_week,
    regenerate_slots,
};
use slotbook_persistence::Persistence;

#[test]
fn generate_slots_is_idempotent() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, owner) = seed_business(&mut persistence);
    let day_id = seed_day(&mut persistence, business_id);
    let request = default_request();

    let first = generate_slots(&mut persistence, &owner, day_id, &request, test_today()).unwrap();
    let second = generate_slots(&mut persistence, &owner, day_id, &request, test_today()).unwrap();
    assert_eq!(first, 14);
    assert_eq!(second, 0);
    assert_eq!(persistence.list_slots(day_id).unwrap().len(), 14);
}

#[test]
fn generate_slots_unknown_day_is_not_found() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (_business_id, owner) = seed_business(&mut persistence);

    let result = generate_slots(&mut persistence, &owner, 404, &default_request(), test_today());
    assert!(matches!(result, Err(EngineError::NotFound { .. })));
}

#[test]
fn inverted_working_window_is_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, owner) = seed_business(&mut persistence);
    let day_id = seed_day(&mut persistence, business_id);
    let request = GridRequest {
        start_time: t(17, 0),
        end_time: t(9, 0),
        interval_minutes: 30,
        breaks: vec![],
    };

    let result = generate_slots(&mut persistence, &owner, day_id, &request, test_today());
    assert!(matches!(result, Err(EngineError::Validation { .. })));
}

#[test]
fn non_positive_interval_is_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, owner) = seed_business(&mut persistence);
    let day_id = seed_day(&mut persistence, business_id);

    for minutes in [0, -30] {
        let request = GridRequest {
            start_time: t(9, 0),
            end_time: t(17, 0),
            interval_minutes: minutes,
            breaks: vec![],
        };
        let result = generate_slots(&mut persistence, &owner, day_id, &request, test_today());
        assert!(matches!(result, Err(EngineError::Validation { .. })));
    }
}

#[test]
fn break_list_parses_into_request() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, owner) = seed_business(&mut persistence);
    let day_id = seed_day(&mut persistence, business_id);

    let request =
        GridRequest::with_break_list(t(9, 0), t(17, 0), 30, "12:00-13:00").unwrap();
    assert_eq!(request, default_request());

    let created =
        generate_slots(&mut persistence, &owner, day_id, &request, test_today()).unwrap();
    assert_eq!(created, 14);
}

#[test]
fn malformed_break_list_is_rejected() {
    for malformed in ["12:00", "noon-13:00", "13:00-12:00", "12:00-13:00,bad"] {
        let result = GridRequest::with_break_list(t(9, 0), t(17, 0), 30, malformed);
        assert!(matches!(result, Err(EngineError::Validation { .. })), "{malformed}");
    }
}

#[test]
fn empty_break_list_means_no_breaks() {
    let request = GridRequest::with_break_list(t(9, 0), t(17, 0), 30, "").unwrap();
    assert!(request.breaks.is_empty());
}

#[test]
fn generate_week_skips_weekends() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, owner) = seed_business(&mut persistence);

    // Monday through Sunday; only the five weekdays materialize.
    let (days, slots) = generate_week(
        &mut persistence,
        &owner,
        business_id,
        d(2026, 3, 2),
        d(2026, 3, 8),
        &default_request(),
        test_today(),
    )
    .unwrap();
    assert_eq!(days, 5);
    assert_eq!(slots, 70);
    assert!(persistence.find_day(business_id, d(2026, 3, 7)).unwrap().is_none());
}

#[test]
fn generate_week_clamps_past_dates() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, owner) = seed_business(&mut persistence);

    // Window opens the previous Wednesday; everything before "today"
    // (Monday March 2) is silently skipped.
    let (days, slots) = generate_week(
        &mut persistence,
        &owner,
        business_id,
        d(2026, 2, 25),
        d(2026, 3, 3),
        &default_request(),
        test_today(),
    )
    .unwrap();
    assert_eq!(days, 2);
    assert_eq!(slots, 28);
    assert!(persistence.find_day(business_id, d(2026, 2, 27)).unwrap().is_none());
}

#[test]
fn generate_month_covers_every_weekday() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, owner) = seed_business(&mut persistence);

    // April 2026 has 22 weekdays.
    let (days, slots) = generate_month(
        &mut persistence,
        &owner,
        business_id,
        2026,
        4,
        &default_request(),
        test_today(),
    )
    .unwrap();
    assert_eq!(days, 22);
    assert_eq!(slots, 308);
}

#[test]
fn generate_month_clamps_the_current_month() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, owner) = seed_business(&mut persistence);

    // Run on Wednesday March 4: March 2 and 3 are already past.
    let today = d(2026, 3, 4);
    let (days, _slots) = generate_month(
        &mut persistence,
        &owner,
        business_id,
        2026,
        3,
        &default_request(),
        today,
    )
    .unwrap();
    assert_eq!(days, 20);
    assert!(persistence.find_day(business_id, d(2026, 3, 2)).unwrap().is_none());
}

#[test]
fn generate_month_rejects_invalid_month() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, owner) = seed_business(&mut persistence);

    let result = generate_month(
        &mut persistence,
        &owner,
        business_id,
        2026,
        13,
        &default_request(),
        test_today(),
    );
    assert!(matches!(result, Err(EngineError::Validation { .. })));
}

#[test]
fn regenerate_replaces_unbooked_slots() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, owner) = seed_business(&mut persistence);
    let day_id = seed_day(&mut persistence, business_id);
    generate_slots(&mut persistence, &owner, day_id, &default_request(), test_today()).unwrap();

    // Shorter afternoon-only window, hour-long slots.
    let request = GridRequest {
        start_time: t(13, 0),
        end_time: t(17, 0),
        interval_minutes: 60,
        breaks: vec![],
    };
    let created =
        regenerate_slots(&mut persistence, &owner, day_id, &request, test_today()).unwrap();
    assert_eq!(created, 4);
    assert_eq!(persistence.list_slots(day_id).unwrap().len(), 4);
}

#[test]
fn regenerate_preserves_booked_slots() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, owner) = seed_business(&mut persistence);
    let day_id = seed_day(&mut persistence, business_id);
    generate_slots(&mut persistence, &owner, day_id, &default_request(), test_today()).unwrap();

    let client = seed_client(&mut persistence, "carol");
    let slot_id = persistence.list_slots(day_id).unwrap()[0].slot_id;
    let appointment = book_slot(&mut persistence, &client, slot_id, test_today()).unwrap();

    let request = GridRequest {
        start_time: t(13, 0),
        end_time: t(17, 0),
        interval_minutes: 60,
        breaks: vec![],
    };
    regenerate_slots(&mut persistence, &owner, day_id, &request, test_today()).unwrap();

    let survivor = persistence.get_slot(slot_id).unwrap();
    assert!(survivor.is_booked);
    assert_eq!(survivor.start, t(9, 0));
    assert_eq!(
        persistence.appointment_for_slot(slot_id).unwrap(),
        Some(appointment)
    );
}
