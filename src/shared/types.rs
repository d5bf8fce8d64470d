use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MensagemErro {
    pub mensagem: String,
    pub status: u16,
}

impl MensagemErro {
    pub fn new(mensagem: impl Into<String>, status: StatusCode) -> Self {
        Self {
            mensagem: mensagem.into(),
            status: status.as_u16(),
        }
    }
}

/// A GET result: one object when an identifier lookup matched exactly one
/// record, otherwise a (possibly empty) list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UmOuLista<T> {
    Um(T),
    Lista(Vec<T>),
}

impl<T> UmOuLista<T> {
    /// Collapse `items` to a single object only when `by_id` is set and
    /// exactly one item matched.
    pub fn from_filtered(items: Vec<T>, by_id: bool) -> Self {
        if by_id && items.len() == 1 {
            let mut items = items;
            match items.pop() {
                Some(item) => UmOuLista::Um(item),
                None => UmOuLista::Lista(Vec::new()),
            }
        } else {
            UmOuLista::Lista(items)
        }
    }
}
