use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::slot::SlotResponse;

/// A creator (specialist) profile
///
/// The Stripe fields are externally owned by the payment integration and
/// may be absent until onboarding completes; `commission_percentage` is
/// platform-owned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialistProfile {
    pub id: Uuid,
    pub creator_name: String,
    pub email: String,
    pub subdomain: String,
    pub stripe_account_id: Option<String>,
    pub stripe_connect_status: Option<String>,
    pub commission_percentage: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSpecialistRequest {
    pub creator_name: String,
    pub email: String,
    pub subdomain: String,
    pub commission_percentage: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialistResponse {
    pub id: Uuid,
    pub creator_name: String,
    pub email: String,
    pub subdomain: String,
    pub stripe_account_id: Option<String>,
    pub stripe_connect_status: Option<String>,
    pub commission_percentage: f64,
}

impl From<SpecialistProfile> for SpecialistResponse {
    fn from(profile: SpecialistProfile) -> Self {
        SpecialistResponse {
            id: profile.id,
            creator_name: profile.creator_name,
            email: profile.email,
            subdomain: profile.subdomain,
            stripe_account_id: profile.stripe_account_id,
            stripe_connect_status: profile.stripe_connect_status,
            commission_percentage: profile.commission_percentage,
        }
    }
}

/// Payload served for a resolved tenant landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantPageResponse {
    pub specialist: SpecialistResponse,
    pub available_slots: Vec<SlotResponse>,
}
