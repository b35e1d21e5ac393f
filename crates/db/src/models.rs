use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use specialistly_core::errors::MarketError;
use specialistly_core::models::slot::AppointmentSlot;
use specialistly_core::models::specialist::SpecialistProfile;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointmentSlot {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub specialist_email: String,
    pub specialist_name: String,
    pub booked_by: Option<String>,
    pub customer_email: Option<String>,
    pub customer_name: Option<String>,
    pub google_meet_link: Option<String>,
    pub google_event_id: Option<String>,
    pub service_title: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbAppointmentSlot> for AppointmentSlot {
    type Error = MarketError;

    fn try_from(row: DbAppointmentSlot) -> Result<Self, Self::Error> {
        Ok(AppointmentSlot {
            id: row.id,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            status: row.status.parse()?,
            specialist_email: row.specialist_email,
            specialist_name: row.specialist_name,
            booked_by: row.booked_by,
            customer_email: row.customer_email,
            customer_name: row.customer_name,
            google_meet_link: row.google_meet_link,
            google_event_id: row.google_event_id,
            service_title: row.service_title,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSpecialistProfile {
    pub id: Uuid,
    pub creator_name: String,
    pub email: String,
    pub subdomain: String,
    pub stripe_account_id: Option<String>,
    pub stripe_connect_status: Option<String>,
    pub commission_percentage: f64,
    pub created_at: DateTime<Utc>,
}

impl From<DbSpecialistProfile> for SpecialistProfile {
    fn from(row: DbSpecialistProfile) -> Self {
        SpecialistProfile {
            id: row.id,
            creator_name: row.creator_name,
            email: row.email,
            subdomain: row.subdomain,
            stripe_account_id: row.stripe_account_id,
            stripe_connect_status: row.stripe_connect_status,
            commission_percentage: row.commission_percentage,
            created_at: row.created_at,
        }
    }
}
