use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl AppJsonRejection {
    fn detail(&self) -> String {
        match &self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        }
    }

    /// Turn the rejection into the endpoint's own "invalid data type" message.
    ///
    /// Handlers take `Result<AppJson<T>, AppJsonRejection>` so each method can
    /// report its own wording.
    pub fn into_error(self, mensagem: &str) -> AppError {
        tracing::debug!("Rejected request body: {}", self.detail());
        AppError::BadRequest(mensagem.to_string())
    }
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        self.into_error("Tipo de dado inválido.").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::header::CONTENT_TYPE;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Corpo {
        status: i32,
    }

    async fn extrair(body: &'static str) -> Result<AppJson<Corpo>, AppJsonRejection> {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        AppJson::<Corpo>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_wrong_type_becomes_endpoint_message() {
        let Err(rejection) = extrair(r#"{"status": "um"}"#).await else {
            panic!("expected rejection");
        };

        let err = rejection.into_error("Tipo de dado inválido.");
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "Tipo de dado inválido."));
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let Ok(AppJson(corpo)) = extrair(r#"{"status": 1}"#).await else {
            panic!("expected body");
        };
        assert_eq!(corpo.status, 1);
    }
}
