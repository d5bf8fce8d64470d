use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppJsonRejection};
use crate::features::pessoas::dtos::{PessoaDto, PessoaQuery, PessoaResponseDto};
use crate::features::pessoas::models::PessoaFiltros;
use crate::features::pessoas::services::PessoaService;
use crate::shared::types::{MensagemErro, UmOuLista};
use crate::shared::validation::{parse_codigo, parse_status};

const ERRO_ALTERAR: &str = "Não foi possível alterar pessoa no banco de dados.";

/// Query persons
///
/// A lookup by `codigoPessoa` that matches returns the person with the full
/// address hierarchy; list results carry no addresses.
#[utoipa::path(
    get,
    path = "/pessoa",
    params(PessoaQuery),
    responses(
        (status = 200, description = "Person or list of persons", body = Vec<PessoaResponseDto>),
        (status = 404, description = "Non-numeric filter", body = MensagemErro)
    ),
    tag = "pessoa"
)]
pub async fn get_pessoas(
    State(service): State<Arc<PessoaService>>,
    Query(query): Query<PessoaQuery>,
) -> Result<Json<UmOuLista<PessoaResponseDto>>> {
    let filtros = PessoaFiltros {
        codigo_pessoa: parse_codigo(
            query.codigo_pessoa.as_deref(),
            "Não foi possível consultar Pessoa no banco de dados. O campo codigoPessoa deve conter apenas números.",
        )?,
        login: query.login,
        status: parse_status(
            query.status.as_deref(),
            "Não foi possível consultar Pessoa no banco de dados. O campo status deve conter apenas números.",
        )?,
    };

    let mut pessoas = service.find_by_filters(&filtros).await?;

    if filtros.codigo_pessoa.is_some() && pessoas.len() == 1 {
        if let Some(pessoa) = pessoas.pop() {
            pessoas.push(service.detalhar(pessoa).await?);
        }
    }

    Ok(Json(UmOuLista::from_filtered(
        pessoas,
        filtros.codigo_pessoa.is_some(),
    )))
}

/// Create a person with its addresses
#[utoipa::path(
    post,
    path = "/pessoa",
    request_body = PessoaDto,
    responses(
        (status = 200, description = "All persons after the insert", body = Vec<PessoaResponseDto>),
        (status = 404, description = "Validation failed", body = MensagemErro)
    ),
    tag = "pessoa"
)]
pub async fn insert_pessoa(
    State(service): State<Arc<PessoaService>>,
    payload: std::result::Result<AppJson<PessoaDto>, AppJsonRejection>,
) -> Result<Json<Vec<PessoaResponseDto>>> {
    let AppJson(dto) = payload.map_err(|rejection| {
        rejection.into_error(
            "Não foi possível incluir pessoa no banco de dados. Tipo de dado inválido.",
        )
    })?;

    let validada = service.validate_insert(&dto).await?;
    Ok(Json(service.insert(validada).await?))
}

/// Update a person and reconcile its addresses
#[utoipa::path(
    put,
    path = "/pessoa",
    request_body = PessoaDto,
    responses(
        (status = 200, description = "All persons after the update", body = Vec<PessoaResponseDto>),
        (status = 404, description = "Validation or database failure", body = MensagemErro)
    ),
    tag = "pessoa"
)]
pub async fn update_pessoa(
    State(service): State<Arc<PessoaService>>,
    payload: std::result::Result<AppJson<PessoaDto>, AppJsonRejection>,
) -> Result<Json<Vec<PessoaResponseDto>>> {
    let AppJson(dto) = payload.map_err(|rejection| {
        rejection.into_error(
            "Não foi possível alterar pessoa no banco de dados. Tipo de dado inválido.",
        )
    })?;

    let validada = service
        .validate_update(&dto)
        .await
        .map_err(|e| e.or_mensagem(ERRO_ALTERAR))?;
    let pessoas = service
        .update(validada)
        .await
        .map_err(|e| e.or_mensagem(ERRO_ALTERAR))?;
    Ok(Json(pessoas))
}
