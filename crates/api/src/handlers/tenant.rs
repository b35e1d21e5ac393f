//! # Tenant Landing Handler
//!
//! Serves `/specialist/{tenant}`, the target of the subdomain rewrite.
//! This is where tenant existence is finally checked: the resolver treats
//! labels as opaque, so an unknown subdomain arrives here and gets a 404.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use specialistly_core::{
    errors::MarketError,
    models::slot::{AppointmentSlot, SlotResponse, SlotStatus},
    models::specialist::{SpecialistProfile, TenantPageResponse},
};

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn tenant_page(
    State(state): State<Arc<ApiState>>,
    Path(tenant): Path<String>,
) -> Result<Json<TenantPageResponse>, AppError> {
    let db_profile = specialistly_db::repositories::specialist::get_specialist_by_subdomain(
        &state.db_pool,
        &tenant,
    )
    .await
    .map_err(MarketError::Database)?
    .ok_or_else(|| MarketError::NotFound(format!("Specialist '{}' not found", tenant)))?;

    let profile = SpecialistProfile::from(db_profile);

    let db_slots = specialistly_db::repositories::slot::get_slots_by_specialist(
        &state.db_pool,
        &profile.email,
        Some(SlotStatus::Available.as_str()),
    )
    .await
    .map_err(MarketError::Database)?;

    let available_slots = db_slots
        .into_iter()
        .map(|row| AppointmentSlot::try_from(row).map(SlotResponse::from))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(TenantPageResponse {
        specialist: profile.into(),
        available_slots,
    }))
}
