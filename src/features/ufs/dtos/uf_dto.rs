use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::ufs::models::Uf;

/// Request body for POST/PUT `/uf`. Every field is optional so validation can
/// report exactly which one is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UfDto {
    #[serde(rename = "codigoUF")]
    pub codigo_uf: Option<i64>,
    #[schema(example = "SP")]
    pub sigla: Option<String>,
    #[schema(example = "SÃO PAULO")]
    pub nome: Option<String>,
    /// 1 = ativo, 2 = inativo
    pub status: Option<i32>,
}

/// Response DTO for a state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UfResponseDto {
    #[serde(rename = "codigoUF")]
    pub codigo_uf: i64,
    pub sigla: String,
    pub nome: String,
    pub status: i32,
}

impl From<Uf> for UfResponseDto {
    fn from(uf: Uf) -> Self {
        Self {
            codigo_uf: uf.codigo_uf,
            sigla: uf.sigla,
            nome: uf.nome,
            status: uf.status,
        }
    }
}

/// Query parameters for GET `/uf`. Numeric fields arrive as text so that
/// non-numeric input can be reported with a field-specific message.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UfQuery {
    #[serde(rename = "codigoUF")]
    pub codigo_uf: Option<String>,
    pub sigla: Option<String>,
    pub nome: Option<String>,
    pub status: Option<String>,
}
