use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppJsonRejection};
use crate::features::bairros::dtos::{BairroDto, BairroQuery, BairroResponseDto};
use crate::features::bairros::models::BairroFiltros;
use crate::features::bairros::services::BairroService;
use crate::shared::types::{MensagemErro, UmOuLista};
use crate::shared::validation::{parse_codigo, parse_status};

/// Query neighborhoods
#[utoipa::path(
    get,
    path = "/bairro",
    params(BairroQuery),
    responses(
        (status = 200, description = "Neighborhood or list of neighborhoods", body = Vec<BairroResponseDto>),
        (status = 404, description = "Non-numeric filter", body = MensagemErro)
    ),
    tag = "bairro"
)]
pub async fn get_bairros(
    State(service): State<Arc<BairroService>>,
    Query(query): Query<BairroQuery>,
) -> Result<Json<UmOuLista<BairroResponseDto>>> {
    let filtros = BairroFiltros {
        codigo_bairro: parse_codigo(
            query.codigo_bairro.as_deref(),
            "Não foi possível consultar Bairro no banco de dados. O campo codigoBairro deve conter apenas números.",
        )?,
        codigo_municipio: parse_codigo(
            query.codigo_municipio.as_deref(),
            "Não foi possível consultar Bairro no banco de dados. O campo codigoMunicipio deve conter apenas números.",
        )?,
        nome: query.nome,
        status: parse_status(
            query.status.as_deref(),
            "Não foi possível consultar Bairro no banco de dados. O campo status deve conter apenas números.",
        )?,
    };

    let bairros = service.find_by_filters(&filtros).await?;
    Ok(Json(UmOuLista::from_filtered(
        bairros,
        filtros.codigo_bairro.is_some(),
    )))
}

/// Create a neighborhood
#[utoipa::path(
    post,
    path = "/bairro",
    request_body = BairroDto,
    responses(
        (status = 200, description = "All neighborhoods after the insert", body = Vec<BairroResponseDto>),
        (status = 404, description = "Validation failed", body = MensagemErro)
    ),
    tag = "bairro"
)]
pub async fn insert_bairro(
    State(service): State<Arc<BairroService>>,
    payload: std::result::Result<AppJson<BairroDto>, AppJsonRejection>,
) -> Result<Json<Vec<BairroResponseDto>>> {
    let AppJson(dto) = payload.map_err(|rejection| {
        rejection.into_error(
            "Não foi possível incluir bairro no banco de dados. Tipo de dado inválido.",
        )
    })?;

    let novo = service.validate_insert(&dto).await?;
    Ok(Json(service.insert(novo).await?))
}

/// Update a neighborhood
#[utoipa::path(
    put,
    path = "/bairro",
    request_body = BairroDto,
    responses(
        (status = 200, description = "All neighborhoods after the update", body = Vec<BairroResponseDto>),
        (status = 404, description = "Validation failed", body = MensagemErro)
    ),
    tag = "bairro"
)]
pub async fn update_bairro(
    State(service): State<Arc<BairroService>>,
    payload: std::result::Result<AppJson<BairroDto>, AppJsonRejection>,
) -> Result<Json<Vec<BairroResponseDto>>> {
    let AppJson(dto) = payload.map_err(|rejection| {
        rejection.into_error(
            "Não foi possível alterar bairro no banco de dados. Tipo de dado inválido.",
        )
    })?;

    let bairro = service.validate_update(&dto).await?;
    Ok(Json(service.update(bairro).await?))
}
