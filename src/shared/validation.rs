use crate::core::error::{AppError, Result};
use crate::shared::constants::{STATUS_ATIVO, STATUS_INATIVO, UFS_BRASIL};

/// True when a text field was omitted or sent empty
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

pub fn is_status_valido(status: i32) -> bool {
    status == STATUS_ATIVO || status == STATUS_INATIVO
}

/// Checks the name/abbreviation pair against the reference table of Brazilian
/// states. Comparison is case-insensitive.
pub fn is_uf_valida(nome: &str, sigla: &str) -> bool {
    let nome = nome.trim().to_uppercase();
    let sigla = sigla.trim().to_uppercase();
    UFS_BRASIL
        .iter()
        .any(|(ref_nome, ref_sigla)| *ref_nome == nome && *ref_sigla == sigla)
}

/// Parse an optional numeric identifier from a query string.
///
/// An absent parameter is `Ok(None)`; a present but non-numeric one fails with
/// `mensagem`.
pub fn parse_codigo(raw: Option<&str>, mensagem: &str) -> Result<Option<i64>> {
    raw.map(|v| {
        v.trim()
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest(mensagem.to_string()))
    })
    .transpose()
}

/// Same as [`parse_codigo`] for the 32-bit status filter
pub fn parse_status(raw: Option<&str>, mensagem: &str) -> Result<Option<i32>> {
    raw.map(|v| {
        v.trim()
            .parse::<i32>()
            .map_err(|_| AppError::BadRequest(mensagem.to_string()))
    })
    .transpose()
}
