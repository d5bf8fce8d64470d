use sqlx::FromRow;

/// Database model for a municipality. The owning state is kept as its
/// identifier only.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Municipio {
    pub codigo_municipio: i64,
    pub codigo_uf: i64,
    pub nome: String,
    pub status: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovoMunicipio {
    pub codigo_uf: i64,
    pub nome: String,
    pub status: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MunicipioFiltros {
    pub codigo_municipio: Option<i64>,
    pub codigo_uf: Option<i64>,
    pub nome: Option<String>,
    pub status: Option<i32>,
}
