use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppJsonRejection};
use crate::features::municipios::dtos::{MunicipioDto, MunicipioQuery, MunicipioResponseDto};
use crate::features::municipios::models::MunicipioFiltros;
use crate::features::municipios::services::MunicipioService;
use crate::shared::types::{MensagemErro, UmOuLista};
use crate::shared::validation::{parse_codigo, parse_status};

const ERRO_CADASTRAR: &str = "Não foi possível cadastrar município no banco de dados.";
const ERRO_ALTERAR: &str = "Não foi possível alterar município no banco de dados.";

/// Query municipalities
#[utoipa::path(
    get,
    path = "/municipio",
    params(MunicipioQuery),
    responses(
        (status = 200, description = "Municipality or list of municipalities", body = Vec<MunicipioResponseDto>),
        (status = 404, description = "Non-numeric filter", body = MensagemErro)
    ),
    tag = "municipio"
)]
pub async fn get_municipios(
    State(service): State<Arc<MunicipioService>>,
    Query(query): Query<MunicipioQuery>,
) -> Result<Json<UmOuLista<MunicipioResponseDto>>> {
    let filtros = MunicipioFiltros {
        codigo_municipio: parse_codigo(
            query.codigo_municipio.as_deref(),
            "Não foi possível consultar Município no banco de dados. O campo codigoMunicipio deve conter apenas números.",
        )?,
        codigo_uf: parse_codigo(
            query.codigo_uf.as_deref(),
            "Não foi possível consultar Município no banco de dados. O campo codigoUF deve conter apenas números.",
        )?,
        nome: query.nome,
        status: parse_status(
            query.status.as_deref(),
            "Não foi possível consultar Município no banco de dados. O campo status deve conter apenas números.",
        )?,
    };

    let municipios = service.find_by_filters(&filtros).await?;
    Ok(Json(UmOuLista::from_filtered(
        municipios,
        filtros.codigo_municipio.is_some(),
    )))
}

/// Create a municipality
///
/// Database failures are reported as 404 with a generic message.
#[utoipa::path(
    post,
    path = "/municipio",
    request_body = MunicipioDto,
    responses(
        (status = 200, description = "All municipalities after the insert", body = Vec<MunicipioResponseDto>),
        (status = 404, description = "Validation or database failure", body = MensagemErro)
    ),
    tag = "municipio"
)]
pub async fn insert_municipio(
    State(service): State<Arc<MunicipioService>>,
    payload: std::result::Result<AppJson<MunicipioDto>, AppJsonRejection>,
) -> Result<Json<Vec<MunicipioResponseDto>>> {
    let AppJson(dto) = payload.map_err(|rejection| {
        rejection.into_error(
            "Não foi possível cadastrar município no banco de dados. Tipo de dado inválido.",
        )
    })?;

    let novo = service
        .validate_insert(&dto)
        .await
        .map_err(|e| e.or_mensagem(ERRO_CADASTRAR))?;
    let municipios = service
        .insert(novo)
        .await
        .map_err(|e| e.or_mensagem(ERRO_CADASTRAR))?;
    Ok(Json(municipios))
}

/// Update a municipality
#[utoipa::path(
    put,
    path = "/municipio",
    request_body = MunicipioDto,
    responses(
        (status = 200, description = "All municipalities after the update", body = Vec<MunicipioResponseDto>),
        (status = 404, description = "Validation or database failure", body = MensagemErro)
    ),
    tag = "municipio"
)]
pub async fn update_municipio(
    State(service): State<Arc<MunicipioService>>,
    payload: std::result::Result<AppJson<MunicipioDto>, AppJsonRejection>,
) -> Result<Json<Vec<MunicipioResponseDto>>> {
    let AppJson(dto) = payload.map_err(|rejection| {
        rejection.into_error(
            "Não foi possível alterar município no banco de dados. Tipo de dado inválido.",
        )
    })?;

    let municipio = service
        .validate_update(&dto)
        .await
        .map_err(|e| e.or_mensagem(ERRO_ALTERAR))?;
    let municipios = service
        .update(municipio)
        .await
        .map_err(|e| e.or_mensagem(ERRO_ALTERAR))?;
    Ok(Json(municipios))
}
