use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use specialistly_core::{
    errors::MarketError,
    models::specialist::{CreateSpecialistRequest, SpecialistProfile, SpecialistResponse},
    tenant::RESERVED_SUBDOMAINS,
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Default platform commission when a profile does not specify one.
const DEFAULT_COMMISSION_PERCENTAGE: f64 = 10.0;

#[axum::debug_handler]
pub async fn create_specialist(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateSpecialistRequest>,
) -> Result<Json<SpecialistResponse>, AppError> {
    // Reserved labels can never be claimed as tenant subdomains
    if RESERVED_SUBDOMAINS.contains(&payload.subdomain.as_str()) {
        return Err(AppError(MarketError::Validation(format!(
            "Subdomain '{}' is reserved",
            payload.subdomain
        ))));
    }

    let existing = specialistly_db::repositories::specialist::get_specialist_by_subdomain(
        &state.db_pool,
        &payload.subdomain,
    )
    .await
    .map_err(MarketError::Database)?;

    if existing.is_some() {
        return Err(AppError(MarketError::Validation(format!(
            "Subdomain '{}' is already taken",
            payload.subdomain
        ))));
    }

    let existing_email = specialistly_db::repositories::specialist::get_specialist_by_email(
        &state.db_pool,
        &payload.email,
    )
    .await
    .map_err(MarketError::Database)?;

    if existing_email.is_some() {
        return Err(AppError(MarketError::Validation(format!(
            "A specialist with email '{}' already exists",
            payload.email
        ))));
    }

    let db_profile = specialistly_db::repositories::specialist::create_specialist(
        &state.db_pool,
        &payload.creator_name,
        &payload.email,
        &payload.subdomain,
        payload
            .commission_percentage
            .unwrap_or(DEFAULT_COMMISSION_PERCENTAGE),
    )
    .await
    .map_err(MarketError::Database)?;

    let profile = SpecialistProfile::from(db_profile);
    Ok(Json(profile.into()))
}

#[axum::debug_handler]
pub async fn get_specialist(
    State(state): State<Arc<ApiState>>,
    Path(subdomain): Path<String>,
) -> Result<Json<SpecialistResponse>, AppError> {
    let db_profile = specialistly_db::repositories::specialist::get_specialist_by_subdomain(
        &state.db_pool,
        &subdomain,
    )
    .await
    .map_err(MarketError::Database)?
    .ok_or_else(|| {
        MarketError::NotFound(format!("Specialist with subdomain '{}' not found", subdomain))
    })?;

    let profile = SpecialistProfile::from(db_profile);
    Ok(Json(profile.into()))
}
