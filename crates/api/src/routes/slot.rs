use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots", post(handlers::slot::create_slot))
        .route("/api/slots", get(handlers::slot::list_slots))
        .route("/api/slots/:id/book", post(handlers::slot::book_slot))
        .route("/api/slots/:id/reset", post(handlers::slot::reset_slot))
}
