use chrono::{NaiveDate, NaiveTime, Utc};
use pretty_assertions::assert_eq;
use specialistly_api::middleware::error_handling::AppError;
use specialistly_core::errors::MarketError;
use specialistly_core::models::slot::{AppointmentSlot, Booking, SlotStatus};
use specialistly_db::mock::repositories::MockSlotRepo;
use specialistly_db::models::DbAppointmentSlot;
use uuid::Uuid;

fn available_row(id: Uuid) -> DbAppointmentSlot {
    DbAppointmentSlot {
        id,
        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        status: "available".to_string(),
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

fn booked_row(id: Uuid) -> DbAppointmentSlot {
    let mut row = available_row(id);
    row.status = "booked".to_string();
    row.booked_by = Some("cust-42".to_string());
    row.customer_email = Some("alice@example.com".to_string());
    row.customer_name = Some("Alice".to_string());
    row.google_meet_link = Some("https://meet.google.com/abc-defg-hij".to_string());
    row.google_event_id = Some("evt_123".to_string());
    row.service_title = Some("Intro consultation".to_string());
    row
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

// Test wrapper replicating the book handler's flow against the mock repo:
// the guarded update either returns the booked row or we distinguish a
// missing slot from one that lost the race.
async fn test_book_slot_wrapper(
    repo: &mut MockSlotRepo,
    id: Uuid,
    booking: Booking,
) -> Result<AppointmentSlot, AppError> {
    match repo.book_slot(id, booking).await? {
        Some(row) => Ok(AppointmentSlot::try_from(row)?),
        None => match repo.get_slot_by_id(id).await? {
            Some(_) => Err(AppError(MarketError::Validation(format!(
                "Slot {} is already booked",
                id
            )))),
            None => Err(AppError(MarketError::NotFound(format!(
                "Slot with ID {} not found",
                id
            )))),
        },
    }
}

async fn test_reset_slot_wrapper(
    repo: &mut MockSlotRepo,
    id: Uuid,
) -> Result<AppointmentSlot, AppError> {
    match repo.reset_slot(id).await? {
        Some(row) => Ok(AppointmentSlot::try_from(row)?),
        None => match repo.get_slot_by_id(id).await? {
            Some(_) => Err(AppError(MarketError::Validation(format!(
                "Slot {} is not booked",
                id
            )))),
            None => Err(AppError(MarketError::NotFound(format!(
                "Slot with ID {} not found",
                id
            )))),
        },
    }
}

#[tokio::test]
async fn test_book_slot_success() {
    let id = Uuid::new_v4();
    let mut repo = MockSlotRepo::new();

    let row = booked_row(id);
    repo.expect_book_slot()
        .returning(move |_, _| Ok(Some(row.clone())));

    let slot = test_book_slot_wrapper(&mut repo, id, sample_booking())
        .await
        .unwrap();

    assert_eq!(slot.status, SlotStatus::Booked);
    assert_eq!(slot.booked_by.as_deref(), Some("cust-42"));
    assert!(slot.occupancy_consistent());
}

#[tokio::test]
async fn test_book_slot_already_booked() {
    let id = Uuid::new_v4();
    let mut repo = MockSlotRepo::new();

    // The guarded update matches nothing, but the slot exists
    repo.expect_book_slot().returning(|_, _| Ok(None));
    let row = booked_row(id);
    repo.expect_get_slot_by_id()
        .returning(move |_| Ok(Some(row.clone())));

    let err = test_book_slot_wrapper(&mut repo, id, sample_booking())
        .await
        .unwrap_err();

    assert!(matches!(err.0, MarketError::Validation(_)));
}

#[tokio::test]
async fn test_book_slot_not_found() {
    let id = Uuid::new_v4();
    let mut repo = MockSlotRepo::new();

    repo.expect_book_slot().returning(|_, _| Ok(None));
    repo.expect_get_slot_by_id().returning(|_| Ok(None));

    let err = test_book_slot_wrapper(&mut repo, id, sample_booking())
        .await
        .unwrap_err();

    assert!(matches!(err.0, MarketError::NotFound(_)));
}

#[tokio::test]
async fn test_reset_slot_success() {
    let id = Uuid::new_v4();
    let mut repo = MockSlotRepo::new();

    let row = available_row(id);
    repo.expect_reset_slot()
        .returning(move |_| Ok(Some(row.clone())));

    let slot = test_reset_slot_wrapper(&mut repo, id).await.unwrap();

    assert_eq!(slot.status, SlotStatus::Available);
    assert_eq!(slot.booked_by, None);
    assert_eq!(slot.customer_email, None);
    assert_eq!(slot.google_meet_link, None);
    assert!(slot.occupancy_consistent());
}

#[tokio::test]
async fn test_reset_slot_not_booked() {
    let id = Uuid::new_v4();
    let mut repo = MockSlotRepo::new();

    repo.expect_reset_slot().returning(|_| Ok(None));
    let row = available_row(id);
    repo.expect_get_slot_by_id()
        .returning(move |_| Ok(Some(row.clone())));

    let err = test_reset_slot_wrapper(&mut repo, id).await.unwrap_err();

    assert!(matches!(err.0, MarketError::Validation(_)));
}

#[tokio::test]
async fn test_reassign_reports_exact_modified_count() {
    let mut repo = MockSlotRepo::new();

    // Re-homing 12 slots must report modifiedCount == 12
    repo.expect_reassign_specialist_slots()
        .returning(|_, _, _| Ok(12));

    let modified = repo
        .reassign_specialist_slots("old@example.com", "new@example.com", "New Name")
        .await
        .unwrap();

    assert_eq!(modified, 12);
}

#[tokio::test]
async fn test_customer_removal_with_no_matches_is_not_an_error() {
    let mut repo = MockSlotRepo::new();

    repo.expect_reset_slots_by_customer().returning(|_| Ok(0));

    let cleared = repo
        .reset_slots_by_customer("nobody@example.com")
        .await
        .unwrap();

    assert_eq!(cleared, 0);
}

#[tokio::test]
async fn test_row_with_invalid_status_is_rejected() {
    let id = Uuid::new_v4();
    let mut row = available_row(id);
    row.status = "cancelled".to_string();

    let err = AppointmentSlot::try_from(row).unwrap_err();
    assert!(matches!(err, MarketError::Validation(_)));
}
