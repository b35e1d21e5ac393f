use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use specialistly_core::models::slot::Booking;
use uuid::Uuid;

use crate::models::{DbAppointmentSlot, DbSpecialistProfile};
use crate::repositories::slot::SlotCounts;

// Mock repositories for testing
mock! {
    pub SlotRepo {
        pub async fn create_slot(
            &self,
            date: NaiveDate,
            start_time: NaiveTime,
            end_time: NaiveTime,
            specialist_email: &'static str,
            specialist_name: &'static str,
        ) -> eyre::Result<DbAppointmentSlot>;

        pub async fn get_slot_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAppointmentSlot>>;

        pub async fn get_slots_by_specialist(
            &self,
            specialist_email: &'static str,
            status: Option<&'static str>,
        ) -> eyre::Result<Vec<DbAppointmentSlot>>;

        pub async fn book_slot(
            &self,
            id: Uuid,
            booking: Booking,
        ) -> eyre::Result<Option<DbAppointmentSlot>>;

        pub async fn reset_slot(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAppointmentSlot>>;

        pub async fn reset_slots_by_customer(
            &self,
            customer_email: &'static str,
        ) -> eyre::Result<u64>;

        pub async fn reassign_specialist_slots(
            &self,
            from_email: &'static str,
            to_email: &'static str,
            to_name: &'static str,
        ) -> eyre::Result<u64>;

        pub async fn delete_slots_by_specialist(
            &self,
            specialist_email: &'static str,
        ) -> eyre::Result<u64>;

        pub async fn count_slots(
            &self,
            specialist_email: Option<&'static str>,
        ) -> eyre::Result<SlotCounts>;
    }
}

mock! {
    pub SpecialistRepo {
        pub async fn create_specialist(
            &self,
            creator_name: &'static str,
            email: &'static str,
            subdomain: &'static str,
            commission_percentage: f64,
        ) -> eyre::Result<DbSpecialistProfile>;

        pub async fn get_specialist_by_subdomain(
            &self,
            subdomain: &'static str,
        ) -> eyre::Result<Option<DbSpecialistProfile>>;

        pub async fn get_specialist_by_email(
            &self,
            email: &'static str,
        ) -> eyre::Result<Option<DbSpecialistProfile>>;
    }
}
