use chrono::{NaiveDate, NaiveTime, Utc};
use pretty_assertions::assert_eq;
use serde_json::{from_str, to_string};
use specialistly_core::errors::MarketError;
use specialistly_core::models::slot::{AppointmentSlot, Booking, SlotStatus};
use specialistly_core::models::specialist::SpecialistProfile;
use uuid::Uuid;

fn available_slot() -> AppointmentSlot {
    AppointmentSlot {
        id: Uuid::new_v4(),
        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        status: SlotStatus::Available,
        specialist_email: "dr.jones@example.com".to_string(),
        specialist_name: "Dr. Jones".to_string(),
        booked_by: None,
        customer_email: None,
        customer_name: None,
        google_meet_link: None,
        google_event_id: None,
        service_title: None,
        created_at: Utc::now(),
    }
}

fn sample_booking() -> Booking {
    Booking {
        booked_by: "cust-42".to_string(),
        customer_email: "alice@example.com".to_string(),
        customer_name: "Alice".to_string(),
        google_meet_link: "https://meet.google.com/abc-defg-hij".to_string(),
        google_event_id: "evt_123".to_string(),
        service_title: "Intro consultation".to_string(),
    }
}

#[test]
fn test_book_sets_all_occupant_fields() {
    let mut slot = available_slot();
    slot.book(sample_booking()).unwrap();

    assert_eq!(slot.status, SlotStatus::Booked);
    assert_eq!(slot.booked_by.as_deref(), Some("cust-42"));
    assert_eq!(slot.customer_email.as_deref(), Some("alice@example.com"));
    assert_eq!(slot.customer_name.as_deref(), Some("Alice"));
    assert_eq!(slot.service_title.as_deref(), Some("Intro consultation"));
    assert!(slot.occupancy_consistent());
}

#[test]
fn test_book_rejects_already_booked_slot() {
    let mut slot = available_slot();
    slot.book(sample_booking()).unwrap();

    let err = slot.book(sample_booking()).unwrap_err();
    assert!(matches!(err, MarketError::Validation(_)));

    // The failed transition must not disturb the slot
    assert_eq!(slot.status, SlotStatus::Booked);
    assert!(slot.occupancy_consistent());
}

#[test]
fn test_reset_clears_every_occupant_field() {
    let mut slot = available_slot();
    slot.book(sample_booking()).unwrap();
    slot.reset().unwrap();

    assert_eq!(slot.status, SlotStatus::Available);
    assert_eq!(slot.booked_by, None);
    assert_eq!(slot.customer_email, None);
    assert_eq!(slot.customer_name, None);
    assert_eq!(slot.google_meet_link, None);
    assert_eq!(slot.google_event_id, None);
    assert_eq!(slot.service_title, None);
    assert!(slot.occupancy_consistent());
}

#[test]
fn test_reset_rejects_available_slot() {
    let mut slot = available_slot();
    let err = slot.reset().unwrap_err();
    assert!(matches!(err, MarketError::Validation(_)));
    assert!(slot.occupancy_consistent());
}

#[test]
fn test_slot_is_reusable_after_reset() {
    let mut slot = available_slot();
    slot.book(sample_booking()).unwrap();
    slot.reset().unwrap();
    slot.book(sample_booking()).unwrap();

    assert_eq!(slot.status, SlotStatus::Booked);
    assert!(slot.occupancy_consistent());
}

#[test]
fn test_occupancy_consistent_detects_partial_update() {
    let mut slot = available_slot();
    slot.book(sample_booking()).unwrap();

    // Simulate the partial update the invariant forbids
    slot.booked_by = None;
    assert!(!slot.occupancy_consistent());
}

#[test]
fn test_slot_status_serializes_lowercase() {
    assert_eq!(to_string(&SlotStatus::Available).unwrap(), "\"available\"");
    assert_eq!(to_string(&SlotStatus::Booked).unwrap(), "\"booked\"");
}

#[test]
fn test_slot_status_from_str() {
    assert_eq!("available".parse::<SlotStatus>().unwrap(), SlotStatus::Available);
    assert_eq!("booked".parse::<SlotStatus>().unwrap(), SlotStatus::Booked);
    assert!("cancelled".parse::<SlotStatus>().is_err());
}

#[test]
fn test_slot_serialization_round_trip() {
    let mut slot = available_slot();
    slot.book(sample_booking()).unwrap();

    let json = to_string(&slot).expect("Failed to serialize slot");
    let deserialized: AppointmentSlot = from_str(&json).expect("Failed to deserialize slot");

    assert_eq!(deserialized.id, slot.id);
    assert_eq!(deserialized.status, slot.status);
    assert_eq!(deserialized.booked_by, slot.booked_by);
    assert_eq!(deserialized.google_meet_link, slot.google_meet_link);
}

#[test]
fn test_specialist_profile_serialization() {
    let profile = SpecialistProfile {
        id: Uuid::new_v4(),
        creator_name: "Dr. Jones".to_string(),
        email: "dr.jones@example.com".to_string(),
        subdomain: "dr-jones".to_string(),
        stripe_account_id: Some("acct_123".to_string()),
        stripe_connect_status: Some("active".to_string()),
        commission_percentage: 12.5,
        created_at: Utc::now(),
    };

    let json = to_string(&profile).expect("Failed to serialize profile");
    let deserialized: SpecialistProfile = from_str(&json).expect("Failed to deserialize profile");

    assert_eq!(deserialized.id, profile.id);
    assert_eq!(deserialized.subdomain, profile.subdomain);
    assert_eq!(deserialized.stripe_account_id, profile.stripe_account_id);
    assert_eq!(deserialized.commission_percentage, profile.commission_percentage);
}
