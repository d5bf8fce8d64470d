use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::municipios::models::Municipio;

/// Request body for POST/PUT `/municipio`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MunicipioDto {
    #[serde(rename = "codigoMunicipio")]
    pub codigo_municipio: Option<i64>,
    #[serde(rename = "codigoUF")]
    pub codigo_uf: Option<i64>,
    #[schema(example = "CAMPINAS")]
    pub nome: Option<String>,
    /// 1 = ativo, 2 = inativo
    pub status: Option<i32>,
}

/// Response DTO for a municipality, with the state flattened to its identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MunicipioResponseDto {
    #[serde(rename = "codigoMunicipio")]
    pub codigo_municipio: i64,
    #[serde(rename = "codigoUF")]
    pub codigo_uf: i64,
    pub nome: String,
    pub status: i32,
}

impl From<Municipio> for MunicipioResponseDto {
    fn from(m: Municipio) -> Self {
        Self {
            codigo_municipio: m.codigo_municipio,
            codigo_uf: m.codigo_uf,
            nome: m.nome,
            status: m.status,
        }
    }
}

/// Query parameters for GET `/municipio`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MunicipioQuery {
    #[serde(rename = "codigoMunicipio")]
    pub codigo_municipio: Option<String>,
    #[serde(rename = "codigoUF")]
    pub codigo_uf: Option<String>,
    pub nome: Option<String>,
    pub status: Option<String>,
}
