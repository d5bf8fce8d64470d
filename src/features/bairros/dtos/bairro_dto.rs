use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::bairros::models::Bairro;

/// Request body for POST/PUT `/bairro`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BairroDto {
    #[serde(rename = "codigoBairro")]
    pub codigo_bairro: Option<i64>,
    #[serde(rename = "codigoMunicipio")]
    pub codigo_municipio: Option<i64>,
    #[schema(example = "CENTRO")]
    pub nome: Option<String>,
    pub status: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BairroResponseDto {
    #[serde(rename = "codigoBairro")]
    pub codigo_bairro: i64,
    #[serde(rename = "codigoMunicipio")]
    pub codigo_municipio: i64,
    pub nome: String,
    pub status: i32,
}

impl From<Bairro> for BairroResponseDto {
    fn from(b: Bairro) -> Self {
        Self {
            codigo_bairro: b.codigo_bairro,
            codigo_municipio: b.codigo_municipio,
            nome: b.nome,
            status: b.status,
        }
    }
}

/// Query parameters for GET `/bairro`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BairroQuery {
    #[serde(rename = "codigoBairro")]
    pub codigo_bairro: Option<String>,
    #[serde(rename = "codigoMunicipio")]
    pub codigo_municipio: Option<String>,
    pub nome: Option<String>,
    pub status: Option<String>,
}
