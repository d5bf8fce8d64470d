use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppJsonRejection};
use crate::features::ufs::dtos::{UfDto, UfQuery, UfResponseDto};
use crate::features::ufs::models::UfFiltros;
use crate::features::ufs::services::UfService;
use crate::shared::types::{MensagemErro, UmOuLista};
use crate::shared::validation::{parse_codigo, parse_status};

/// Query states
///
/// Returns a single object when `codigoUF` matches exactly one state,
/// otherwise a list.
#[utoipa::path(
    get,
    path = "/uf",
    params(UfQuery),
    responses(
        (status = 200, description = "State or list of states", body = Vec<UfResponseDto>),
        (status = 404, description = "Non-numeric filter", body = MensagemErro)
    ),
    tag = "uf"
)]
pub async fn get_ufs(
    State(service): State<Arc<UfService>>,
    Query(query): Query<UfQuery>,
) -> Result<Json<UmOuLista<UfResponseDto>>> {
    let filtros = UfFiltros {
        codigo_uf: parse_codigo(
            query.codigo_uf.as_deref(),
            "Não foi possível consultar UF no banco de dados. o campo codigoUF deve receber apenas números.",
        )?,
        sigla: query.sigla,
        nome: query.nome,
        status: parse_status(
            query.status.as_deref(),
            "Não foi possível consultar UF no banco de dados. O campo status deve receber apenas números.",
        )?,
    };

    let ufs = service.find_by_filters(&filtros).await?;
    Ok(Json(UmOuLista::from_filtered(
        ufs,
        filtros.codigo_uf.is_some(),
    )))
}

/// Create a state
#[utoipa::path(
    post,
    path = "/uf",
    request_body = UfDto,
    responses(
        (status = 200, description = "All states after the insert", body = Vec<UfResponseDto>),
        (status = 404, description = "Validation failed", body = MensagemErro)
    ),
    tag = "uf"
)]
pub async fn insert_uf(
    State(service): State<Arc<UfService>>,
    payload: std::result::Result<AppJson<UfDto>, AppJsonRejection>,
) -> Result<Json<Vec<UfResponseDto>>> {
    let AppJson(dto) = payload.map_err(|rejection| {
        rejection.into_error("Não foi possível incluir UF no banco de dados. Tipo de dado inválido.")
    })?;

    let nova = service.validate_insert(&dto).await?;
    Ok(Json(service.insert(nova).await?))
}

/// Update a state
#[utoipa::path(
    put,
    path = "/uf",
    request_body = UfDto,
    responses(
        (status = 200, description = "All states after the update", body = Vec<UfResponseDto>),
        (status = 404, description = "Validation failed", body = MensagemErro)
    ),
    tag = "uf"
)]
pub async fn update_uf(
    State(service): State<Arc<UfService>>,
    payload: std::result::Result<AppJson<UfDto>, AppJsonRejection>,
) -> Result<Json<Vec<UfResponseDto>>> {
    let AppJson(dto) = payload.map_err(|rejection| {
        rejection.into_error("Não foi possível alterar UF no banco de dados. Tipo de dado inválido.")
    })?;

    let uf = service.validate_update(&dto).await?;
    Ok(Json(service.update(uf).await?))
}
