use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::bairros::handlers;
use crate::features::bairros::services::BairroService;

/// Create routes for the bairro feature
pub fn routes(service: Arc<BairroService>) -> Router {
    Router::new()
        .route(
            "/bairro",
            get(handlers::get_bairros)
                .post(handlers::insert_bairro)
                .put(handlers::update_bairro),
        )
        .with_state(service)
}
