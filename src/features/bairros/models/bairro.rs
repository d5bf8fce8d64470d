use sqlx::FromRow;

/// Database model for a neighborhood
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Bairro {
    pub codigo_bairro: i64,
    pub codigo_municipio: i64,
    pub nome: String,
    pub status: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovoBairro {
    pub codigo_municipio: i64,
    pub nome: String,
    pub status: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BairroFiltros {
    pub codigo_bairro: Option<i64>,
    pub codigo_municipio: Option<i64>,
    pub nome: Option<String>,
    pub status: Option<i32>,
}
