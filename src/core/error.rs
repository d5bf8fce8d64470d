use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::MensagemErro;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Business rule violation (missing field, invalid status, unknown parent, duplicate)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed input (non-numeric filter, unreadable body)
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Replace a database fault with a 404-coded message, leaving other variants untouched.
    ///
    /// Used by the endpoints that report write failures to the client instead of
    /// letting them fall through to a 500.
    pub fn or_mensagem(self, mensagem: &str) -> Self {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error mapped to client message: {:?}", e);
                AppError::Validation(mensagem.to_string())
            }
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MensagemErro::new(
                        "Erro ao acessar o banco de dados.",
                        StatusCode::INTERNAL_SERVER_ERROR,
                    )),
                )
                    .into_response()
            }
            // Every client-facing failure is reported as 404
            AppError::Validation(msg) | AppError::BadRequest(msg) => (
                StatusCode::NOT_FOUND,
                Json(MensagemErro::new(msg, StatusCode::NOT_FOUND)),
            )
                .into_response(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_not_found() {
        let response = AppError::Validation("campo obrigatório".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_maps_to_not_found_with_message() {
        let response = AppError::BadRequest("Tipo de dado inválido.".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_maps_to_internal() {
        let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_or_mensagem_only_rewrites_database_errors() {
        let err = AppError::Database(sqlx::Error::RowNotFound).or_mensagem("falhou");
        assert!(matches!(err, AppError::Validation(ref m) if m == "falhou"));

        let err = AppError::BadRequest("original".to_string()).or_mensagem("falhou");
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "original"));
    }
}
