use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::pessoas::handlers;
use crate::features::pessoas::services::PessoaService;

/// Create routes for the pessoa feature
pub fn routes(service: Arc<PessoaService>) -> Router {
    Router::new()
        .route(
            "/pessoa",
            get(handlers::get_pessoas)
                .post(handlers::insert_pessoa)
                .put(handlers::update_pessoa),
        )
        .with_state(service)
}
