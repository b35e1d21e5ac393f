use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create appointment_slots table.
    // The occupancy CHECK enforces the slot invariant at the store level:
    // occupant fields are non-null exactly when status = 'booked'.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointment_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'available',
            specialist_email VARCHAR(255) NOT NULL,
            specialist_name VARCHAR(255) NOT NULL,
            booked_by VARCHAR(255) NULL,
            customer_email VARCHAR(255) NULL,
            customer_name VARCHAR(255) NULL,
            google_meet_link TEXT NULL,
            google_event_id VARCHAR(255) NULL,
            service_title VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time),
            CONSTRAINT valid_status CHECK (status IN ('available', 'booked')),
            CONSTRAINT occupancy_matches_status CHECK (
                (
                    status = 'booked'
                    AND booked_by IS NOT NULL
                    AND customer_email IS NOT NULL
                    AND customer_name IS NOT NULL
                    AND google_meet_link IS NOT NULL
                    AND google_event_id IS NOT NULL
                    AND service_title IS NOT NULL
                ) OR (
                    status = 'available'
                    AND booked_by IS NULL
                    AND customer_email IS NULL
                    AND customer_name IS NULL
                    AND google_meet_link IS NULL
                    AND google_event_id IS NULL
                    AND service_title IS NULL
                )
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create specialist_profiles table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS specialist_profiles (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            creator_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            subdomain VARCHAR(255) NOT NULL UNIQUE,
            stripe_account_id VARCHAR(255) NULL,
            stripe_connect_status VARCHAR(255) NULL,
            commission_percentage DOUBLE PRECISION NOT NULL DEFAULT 10.0,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_appointment_slots_specialist_email ON appointment_slots(specialist_email);
        CREATE INDEX IF NOT EXISTS idx_appointment_slots_status ON appointment_slots(status);
        CREATE INDEX IF NOT EXISTS idx_appointment_slots_customer_email ON appointment_slots(customer_email);
        CREATE INDEX IF NOT EXISTS idx_appointment_slots_date ON appointment_slots(date);
        CREATE INDEX IF NOT EXISTS idx_specialist_profiles_email ON specialist_profiles(email);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
