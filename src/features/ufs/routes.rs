use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::ufs::handlers;
use crate::features::ufs::services::UfService;

/// Create routes for the UF feature
pub fn routes(service: Arc<UfService>) -> Router {
    Router::new()
        .route(
            "/uf",
            get(handlers::get_ufs)
                .post(handlers::insert_uf)
                .put(handlers::update_uf),
        )
        .with_state(service)
}
