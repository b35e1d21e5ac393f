use crate::models::DbAppointmentSlot;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use specialistly_core::models::slot::Booking;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const SLOT_COLUMNS: &str = "id, date, start_time, end_time, status, specialist_email, \
    specialist_name, booked_by, customer_email, customer_name, google_meet_link, \
    google_event_id, service_title, created_at";

pub async fn create_slot(
    pool: &Pool<Postgres>,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    specialist_email: &str,
    specialist_name: &str,
) -> Result<DbAppointmentSlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating slot: id={}, specialist={}, date={}",
        id,
        specialist_email,
        date
    );

    let slot = sqlx::query_as::<_, DbAppointmentSlot>(&format!(
        r#"
        INSERT INTO appointment_slots (id, date, start_time, end_time, status, specialist_email, specialist_name, created_at)
        VALUES ($1, $2, $3, $4, 'available', $5, $6, $7)
        RETURNING {SLOT_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(specialist_email)
    .bind(specialist_name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(slot)
}

pub async fn get_slot_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbAppointmentSlot>> {
    let slot = sqlx::query_as::<_, DbAppointmentSlot>(&format!(
        r#"
        SELECT {SLOT_COLUMNS}
        FROM appointment_slots
        WHERE id = $1
        "#,
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(slot)
}

pub async fn get_slots_by_specialist(
    pool: &Pool<Postgres>,
    specialist_email: &str,
    status: Option<&str>,
) -> Result<Vec<DbAppointmentSlot>> {
    let slots = match status {
        Some(status) => {
            sqlx::query_as::<_, DbAppointmentSlot>(&format!(
                r#"
                SELECT {SLOT_COLUMNS}
                FROM appointment_slots
                WHERE specialist_email = $1 AND status = $2
                ORDER BY date ASC, start_time ASC
                "#,
            ))
            .bind(specialist_email)
            .bind(status)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, DbAppointmentSlot>(&format!(
                r#"
                SELECT {SLOT_COLUMNS}
                FROM appointment_slots
                WHERE specialist_email = $1
                ORDER BY date ASC, start_time ASC
                "#,
            ))
            .bind(specialist_email)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(slots)
}

/// Books an available slot, setting the occupant fields and the status in a
/// single statement. The status guard makes the transition atomic: a slot
/// that is concurrently booked loses the race and yields `None`.
pub async fn book_slot(
    pool: &Pool<Postgres>,
    id: Uuid,
    booking: &Booking,
) -> Result<Option<DbAppointmentSlot>> {
    tracing::debug!("Booking slot: id={}, customer={}", id, booking.customer_email);

    let slot = sqlx::query_as::<_, DbAppointmentSlot>(&format!(
        r#"
        UPDATE appointment_slots
        SET status = 'booked',
            booked_by = $2,
            customer_email = $3,
            customer_name = $4,
            google_meet_link = $5,
            google_event_id = $6,
            service_title = $7
        WHERE id = $1 AND status = 'available'
        RETURNING {SLOT_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(&booking.booked_by)
    .bind(&booking.customer_email)
    .bind(&booking.customer_name)
    .bind(&booking.google_meet_link)
    .bind(&booking.google_event_id)
    .bind(&booking.service_title)
    .fetch_optional(pool)
    .await?;

    Ok(slot)
}

/// Resets a booked slot to available, clearing every occupant field in one
/// statement. Yields `None` when the slot is missing or not booked.
pub async fn reset_slot(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbAppointmentSlot>> {
    tracing::debug!("Resetting slot: id={}", id);

    let slot = sqlx::query_as::<_, DbAppointmentSlot>(&format!(
        r#"
        UPDATE appointment_slots
        SET status = 'available',
            booked_by = NULL,
            customer_email = NULL,
            customer_name = NULL,
            google_meet_link = NULL,
            google_event_id = NULL,
            service_title = NULL
        WHERE id = $1 AND status = 'booked'
        RETURNING {SLOT_COLUMNS}
        "#,
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(slot)
}

/// Resets every slot booked by the given customer (customer removal).
/// Returns the number of slots that were cleared; zero matches is not an
/// error.
pub async fn reset_slots_by_customer(pool: &Pool<Postgres>, customer_email: &str) -> Result<u64> {
    tracing::debug!("Resetting slots for customer: {}", customer_email);

    let result = sqlx::query(
        r#"
        UPDATE appointment_slots
        SET status = 'available',
            booked_by = NULL,
            customer_email = NULL,
            customer_name = NULL,
            google_meet_link = NULL,
            google_event_id = NULL,
            service_title = NULL
        WHERE customer_email = $1 AND status = 'booked'
        "#,
    )
    .bind(customer_email)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Re-homes every slot of a specialist to a new identity and reports the
/// exact count of modified rows for operator confirmation. Idempotent.
pub async fn reassign_specialist_slots(
    pool: &Pool<Postgres>,
    from_email: &str,
    to_email: &str,
    to_name: &str,
) -> Result<u64> {
    tracing::debug!("Reassigning slots: {} -> {}", from_email, to_email);

    let result = sqlx::query(
        r#"
        UPDATE appointment_slots
        SET specialist_email = $2,
            specialist_name = $3
        WHERE specialist_email = $1
        "#,
    )
    .bind(from_email)
    .bind(to_email)
    .bind(to_name)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_slots_by_specialist(
    pool: &Pool<Postgres>,
    specialist_email: &str,
) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM appointment_slots
        WHERE specialist_email = $1
        "#,
    )
    .bind(specialist_email)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_all_slots(pool: &Pool<Postgres>) -> Result<u64> {
    let result = sqlx::query("DELETE FROM appointment_slots")
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Per-status totals for operator reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCounts {
    pub total: i64,
    pub available: i64,
    pub booked: i64,
}

pub async fn count_slots(
    pool: &Pool<Postgres>,
    specialist_email: Option<&str>,
) -> Result<SlotCounts> {
    let row: (i64, i64, i64) = match specialist_email {
        Some(email) => {
            sqlx::query_as(
                r#"
                SELECT COUNT(*),
                       COUNT(*) FILTER (WHERE status = 'available'),
                       COUNT(*) FILTER (WHERE status = 'booked')
                FROM appointment_slots
                WHERE specialist_email = $1
                "#,
            )
            .bind(email)
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_as(
                r#"
                SELECT COUNT(*),
                       COUNT(*) FILTER (WHERE status = 'available'),
                       COUNT(*) FILTER (WHERE status = 'booked')
                FROM appointment_slots
                "#,
            )
            .fetch_one(pool)
            .await?
        }
    };

    Ok(SlotCounts {
        total: row.0,
        available: row.1,
        booked: row.2,
    })
}
