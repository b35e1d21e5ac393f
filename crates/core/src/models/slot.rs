use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{MarketError, MarketResult};

/// Lifecycle state of an appointment slot
///
/// Neither state is terminal: a slot cycles between `Available` and
/// `Booked` indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "available",
            SlotStatus::Booked => "booked",
        }
    }
}

impl std::str::FromStr for SlotStatus {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(SlotStatus::Available),
            "booked" => Ok(SlotStatus::Booked),
            other => Err(MarketError::Validation(format!(
                "Invalid slot status: {}",
                other
            ))),
        }
    }
}

/// Occupant details recorded when a slot is booked
///
/// All fields are set together in the same transition; the meet link and
/// event id are opaque strings supplied by the booking caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub booked_by: String,
    pub customer_email: String,
    pub customer_name: String,
    pub google_meet_link: String,
    pub google_event_id: String,
    pub service_title: String,
}

/// A bookable time interval owned by a specialist
///
/// Invariant: the occupant fields (`booked_by`, `customer_email`,
/// `customer_name`, `google_meet_link`, `google_event_id`,
/// `service_title`) are non-null if and only if `status` is `Booked`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentSlot {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: SlotStatus,
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

impl AppointmentSlot {
    /// Transitions `available → booked`, setting all occupant fields
    ///
    /// Rejects the transition when the slot is already booked.
    pub fn book(&mut self, booking: Booking) -> MarketResult<()> {
        if self.status == SlotStatus::Booked {
            return Err(MarketError::Validation(format!(
                "Slot {} is already booked",
                self.id
            )));
        }

        self.status = SlotStatus::Booked;
        self.booked_by = Some(booking.booked_by);
        self.customer_email = Some(booking.customer_email);
        self.customer_name = Some(booking.customer_name);
        self.google_meet_link = Some(booking.google_meet_link);
        self.google_event_id = Some(booking.google_event_id);
        self.service_title = Some(booking.service_title);
        Ok(())
    }

    /// Transitions `booked → available`, clearing every occupant field
    ///
    /// Rejects the transition when the slot is not booked.
    pub fn reset(&mut self) -> MarketResult<()> {
        if self.status != SlotStatus::Booked {
            return Err(MarketError::Validation(format!(
                "Slot {} is not booked",
                self.id
            )));
        }

        self.status = SlotStatus::Available;
        self.booked_by = None;
        self.customer_email = None;
        self.customer_name = None;
        self.google_meet_link = None;
        self.google_event_id = None;
        self.service_title = None;
        Ok(())
    }

    /// Checks the occupancy invariant: occupant fields present iff booked
    pub fn occupancy_consistent(&self) -> bool {
        let occupied = self.booked_by.is_some()
            && self.customer_email.is_some()
            && self.customer_name.is_some()
            && self.google_meet_link.is_some()
            && self.google_event_id.is_some()
            && self.service_title.is_some();
        let vacant = self.booked_by.is_none()
            && self.customer_email.is_none()
            && self.customer_name.is_none()
            && self.google_meet_link.is_none()
            && self.google_event_id.is_none()
            && self.service_title.is_none();

        match self.status {
            SlotStatus::Booked => occupied,
            SlotStatus::Available => vacant,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub specialist_email: String,
    pub specialist_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSlotRequest {
    pub booked_by: String,
    pub customer_email: String,
    pub customer_name: String,
    pub google_meet_link: String,
    pub google_event_id: String,
    pub service_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: SlotStatus,
    pub specialist_email: String,
    pub specialist_name: String,
    pub booked_by: Option<String>,
    pub customer_email: Option<String>,
    pub customer_name: Option<String>,
    pub google_meet_link: Option<String>,
    pub google_event_id: Option<String>,
    pub service_title: Option<String>,
}

impl From<AppointmentSlot> for SlotResponse {
    fn from(slot: AppointmentSlot) -> Self {
        SlotResponse {
            id: slot.id,
            date: slot.date,
            start_time: slot.start_time,
            end_time: slot.end_time,
            status: slot.status,
            specialist_email: slot.specialist_email,
            specialist_name: slot.specialist_name,
            booked_by: slot.booked_by,
            customer_email: slot.customer_email,
            customer_name: slot.customer_name,
            google_meet_link: slot.google_meet_link,
            google_event_id: slot.google_event_id,
            service_title: slot.service_title,
        }
    }
}
