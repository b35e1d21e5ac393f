use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/specialists",
            post(handlers::specialist::create_specialist),
        )
        .route(
            "/api/specialists/:subdomain",
            get(handlers::specialist::get_specialist),
        )
}
