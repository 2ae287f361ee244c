// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{d, default_grid, seed_business, seed_client, seed_materialized_day, test_today};
use crate::{Persistence, PersistenceError};

#[test]
fn test_booking_claims_an_open_slot() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, _) = seed_business(&mut persistence);
    let client_id = seed_client(&mut persistence, "carla");
    let day_id = seed_materialized_day(&mut persistence, business_id);
    let slot = persistence.list_slots(day_id).unwrap()[0];

    let appointment = persistence
        .book_slot(client_id, slot.slot_id, test_today())
        .unwrap();

    assert_eq!(appointment.slot_id, slot.slot_id);
    assert_eq!(appointment.client_user_id, client_id);
    assert!(persistence.get_slot(slot.slot_id).unwrap().is_booked);
    assert_eq!(
        persistence.appointment_for_slot(slot.slot_id).unwrap(),
        Some(appointment)
    );
}

#[test]
fn test_booking_a_booked_slot_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, _) = seed_business(&mut persistence);
    let carla = seed_client(&mut persistence, "carla");
    let dimitri = seed_client(&mut persistence, "dimitri");
    let day_id = seed_materialized_day(&mut persistence, business_id);
    let slot = persistence.list_slots(day_id).unwrap()[0];

    persistence.book_slot(carla, slot.slot_id, test_today()).unwrap();
    let err = persistence
        .book_slot(dimitri, slot.slot_id, test_today())
        .unwrap_err();

    assert_eq!(err, PersistenceError::AlreadyBooked { slot_id: slot.slot_id });
}

#[test]
fn test_second_booking_same_day_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, _) = seed_business(&mut persistence);
    let client_id = seed_client(&mut persistence, "carla");
    let day_id = seed_materialized_day(&mut persistence, business_id);
    let slots = persistence.list_slots(day_id).unwrap();

    persistence
        .book_slot(client_id, slots[0].slot_id, test_today())
        .unwrap();
    let err = persistence
        .book_slot(client_id, slots[5].slot_id, test_today())
        .unwrap_err();

    assert!(matches!(err, PersistenceError::DuplicateDailyBooking { .. }));
    // The second slot was left untouched by the rollback.
    assert!(!persistence.get_slot(slots[5].slot_id).unwrap().is_booked);
}

#[test]
fn test_same_client_may_book_on_two_different_days() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, _) = seed_business(&mut persistence);
    let client_id = seed_client(&mut persistence, "carla");
    let monday = seed_materialized_day(&mut persistence, business_id);
    let tuesday = persistence
        .create_day(business_id, d(2026, 3, 3), test_today())
        .unwrap();
    persistence
        .materialize_day(tuesday, &default_grid(), test_today())
        .unwrap();

    let monday_slot = persistence.list_slots(monday).unwrap()[0];
    let tuesday_slot = persistence.list_slots(tuesday).unwrap()[0];

    assert!(
        persistence
            .book_slot(client_id, monday_slot.slot_id, test_today())
            .is_ok()
    );
    assert!(
        persistence
            .book_slot(client_id, tuesday_slot.slot_id, test_today())
            .is_ok()
    );
}

#[test]
fn test_daily_rule_is_scoped_per_business_day() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, owner_id) = seed_business(&mut persistence);
    let client_id = seed_client(&mut persistence, "carla");
    let first_day = seed_materialized_day(&mut persistence, business_id);

    // A second business with a day on the same date.
    let other_business = persistence
        .create_business("Rival Salon", owner_id, None)
        .unwrap();
    let other_day = persistence
        .create_day(other_business, test_today(), test_today())
        .unwrap();
    persistence
        .materialize_day(other_day, &default_grid(), test_today())
        .unwrap();

    let first_slot = persistence.list_slots(first_day).unwrap()[0];
    let other_slot = persistence.list_slots(other_day).unwrap()[0];

    persistence
        .book_slot(client_id, first_slot.slot_id, test_today())
        .unwrap();
    // Different BusinessDay, same date: allowed under per-day scope.
    assert!(
        persistence
            .book_slot(client_id, other_slot.slot_id, test_today())
            .is_ok()
    );
}

#[test]
fn test_booking_past_slot_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, _) = seed_business(&mut persistence);
    let client_id = seed_client(&mut persistence, "carla");
    let day_id = seed_materialized_day(&mut persistence, business_id);
    let slot = persistence.list_slots(day_id).unwrap()[0];

    // The day has passed by the time the booking arrives.
    let err = persistence
        .book_slot(client_id, slot.slot_id, d(2026, 3, 9))
        .unwrap_err();
    assert_eq!(err, PersistenceError::SlotInPast { slot_id: slot.slot_id });
}

#[test]
fn test_booking_unknown_slot_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let client_id = seed_client(&mut persistence, "carla");
    let err = persistence.book_slot(client_id, 404, test_today()).unwrap_err();
    assert_eq!(err, PersistenceError::SlotNotFound(404));
}

#[test]
fn test_cancel_returns_slot_to_open() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, _) = seed_business(&mut persistence);
    let client_id = seed_client(&mut persistence, "carla");
    let day_id = seed_materialized_day(&mut persistence, business_id);
    let slot = persistence.list_slots(day_id).unwrap()[0];

    persistence.book_slot(client_id, slot.slot_id, test_today()).unwrap();
    persistence.cancel_booking(slot.slot_id).unwrap();

    assert!(!persistence.get_slot(slot.slot_id).unwrap().is_booked);
    assert_eq!(persistence.appointment_for_slot(slot.slot_id).unwrap(), None);
}

#[test]
fn test_cancel_unbooked_slot_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, _) = seed_business(&mut persistence);
    let day_id = seed_materialized_day(&mut persistence, business_id);
    let slot = persistence.list_slots(day_id).unwrap()[0];

    let err = persistence.cancel_booking(slot.slot_id).unwrap_err();
    assert_eq!(err, PersistenceError::NotBooked { slot_id: slot.slot_id });
}

#[test]
fn test_cancelled_slot_is_rebookable_by_another_client() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, _) = seed_business(&mut persistence);
    let carla = seed_client(&mut persistence, "carla");
    let dimitri = seed_client(&mut persistence, "dimitri");
    let day_id = seed_materialized_day(&mut persistence, business_id);
    let slot = persistence.list_slots(day_id).unwrap()[0];

    persistence.book_slot(carla, slot.slot_id, test_today()).unwrap();
    persistence.cancel_booking(slot.slot_id).unwrap();

    let rebooked = persistence
        .book_slot(dimitri, slot.slot_id, test_today())
        .unwrap();
    assert_eq!(rebooked.client_user_id, dimitri);
}

#[test]
fn test_cancel_then_rebook_same_client_same_day() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (business_id, _) = seed_business(&mut persistence);
    let client_id = seed_client(&mut persistence, "carla");
    let day_id = seed_materialized_day(&mut persistence, business_id);
    let slots = persistence.list_slots(day_id).unwrap();

    persistence
        .book_slot(client_id, slots[0].slot_id, test_today())
        .unwrap();
    persistence.cancel_booking(slots[0].slot_id).unwrap();

    // With the first appointment gone, the daily rule permits a new one.
    assert!(
        persistence
            .book_slot(client_id, slots[1].slot_id, test_today())
            .is_ok()
    );
}
