//! # Slot Handlers
//!
//! Request handlers for the appointment slot lifecycle. Booking and reset
//! are each a single guarded UPDATE in the repository, so the occupant
//! fields and the status always change together; a handler never observes
//! or produces a half-transitioned slot.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use specialistly_core::{
    errors::MarketError,
    models::slot::{
        AppointmentSlot, BookSlotRequest, Booking, CreateSlotRequest, SlotResponse, SlotStatus,
    },
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for listing slots
#[derive(Debug, Deserialize)]
pub struct ListSlotsQuery {
    /// Owning specialist's email
    pub specialist_email: String,

    /// Optional status filter ("available" or "booked")
    pub status: Option<String>,
}

#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<Json<SlotResponse>, AppError> {
    if payload.end_time <= payload.start_time {
        return Err(AppError(MarketError::Validation(
            "end_time must be after start_time".to_string(),
        )));
    }

    let db_slot = specialistly_db::repositories::slot::create_slot(
        &state.db_pool,
        payload.date,
        payload.start_time,
        payload.end_time,
        &payload.specialist_email,
        &payload.specialist_name,
    )
    .await
    .map_err(MarketError::Database)?;

    let slot = AppointmentSlot::try_from(db_slot)?;
    Ok(Json(slot.into()))
}

#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListSlotsQuery>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    // Reject unknown status filters before touching the database
    let status = match &query.status {
        Some(raw) => Some(raw.parse::<SlotStatus>()?),
        None => None,
    };

    let db_slots = specialistly_db::repositories::slot::get_slots_by_specialist(
        &state.db_pool,
        &query.specialist_email,
        status.map(|s| s.as_str()),
    )
    .await
    .map_err(MarketError::Database)?;

    let slots = db_slots
        .into_iter()
        .map(|row| AppointmentSlot::try_from(row).map(SlotResponse::from))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(slots))
}

#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<SlotResponse>, AppError> {
    let booking = Booking {
        booked_by: payload.booked_by,
        customer_email: payload.customer_email,
        customer_name: payload.customer_name,
        google_meet_link: payload.google_meet_link,
        google_event_id: payload.google_event_id,
        service_title: payload.service_title,
    };

    let booked =
        specialistly_db::repositories::slot::book_slot(&state.db_pool, id, &booking)
            .await
            .map_err(MarketError::Database)?;

    match booked {
        Some(db_slot) => {
            let slot = AppointmentSlot::try_from(db_slot)?;
            Ok(Json(slot.into()))
        }
        // The guarded update did not match: distinguish a missing slot
        // from one that was already booked
        None => {
            let existing =
                specialistly_db::repositories::slot::get_slot_by_id(&state.db_pool, id)
                    .await
                    .map_err(MarketError::Database)?;

            match existing {
                Some(_) => Err(AppError(MarketError::Validation(format!(
                    "Slot {} is already booked",
                    id
                )))),
                None => Err(AppError(MarketError::NotFound(format!(
                    "Slot with ID {} not found",
                    id
                )))),
            }
        }
    }
}

#[axum::debug_handler]
pub async fn reset_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SlotResponse>, AppError> {
    let reset = specialistly_db::repositories::slot::reset_slot(&state.db_pool, id)
        .await
        .map_err(MarketError::Database)?;

    match reset {
        Some(db_slot) => {
            let slot = AppointmentSlot::try_from(db_slot)?;
            Ok(Json(slot.into()))
        }
        None => {
            let existing =
                specialistly_db::repositories::slot::get_slot_by_id(&state.db_pool, id)
                    .await
                    .map_err(MarketError::Database)?;

            match existing {
                Some(_) => Err(AppError(MarketError::Validation(format!(
                    "Slot {} is not booked",
                    id
                )))),
                None => Err(AppError(MarketError::NotFound(format!(
                    "Slot with ID {} not found",
                    id
                )))),
            }
        }
    }
}
