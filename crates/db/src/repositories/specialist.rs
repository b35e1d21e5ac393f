use crate::models::DbSpecialistProfile;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_specialist(
    pool: &Pool<Postgres>,
    creator_name: &str,
    email: &str,
    subdomain: &str,
    commission_percentage: f64,
) -> Result<DbSpecialistProfile> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating specialist profile: id={}, email={}, subdomain={}",
        id,
        email,
        subdomain
    );

    let profile = sqlx::query_as::<_, DbSpecialistProfile>(
        r#"
        INSERT INTO specialist_profiles (id, creator_name, email, subdomain, commission_percentage, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, creator_name, email, subdomain, stripe_account_id, stripe_connect_status, commission_percentage, created_at
        "#,
    )
    .bind(id)
    .bind(creator_name)
    .bind(email)
    .bind(subdomain)
    .bind(commission_percentage)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}

pub async fn get_specialist_by_subdomain(
    pool: &Pool<Postgres>,
    subdomain: &str,
) -> Result<Option<DbSpecialistProfile>> {
    let profile = sqlx::query_as::<_, DbSpecialistProfile>(
        r#"
        SELECT id, creator_name, email, subdomain, stripe_account_id, stripe_connect_status, commission_percentage, created_at
        FROM specialist_profiles
        WHERE subdomain = $1
        "#,
    )
    .bind(subdomain)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

pub async fn get_specialist_by_email(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<DbSpecialistProfile>> {
    let profile = sqlx::query_as::<_, DbSpecialistProfile>(
        r#"
        SELECT id, creator_name, email, subdomain, stripe_account_id, stripe_connect_status, commission_percentage, created_at
        FROM specialist_profiles
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}
