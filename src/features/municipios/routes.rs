use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::municipios::handlers;
use crate::features::municipios::services::MunicipioService;

/// Create routes for the municipio feature
pub fn routes(service: Arc<MunicipioService>) -> Router {
    Router::new()
        .route(
            "/municipio",
            get(handlers::get_municipios)
                .post(handlers::insert_municipio)
                .put(handlers::update_municipio),
        )
        .with_state(service)
}
