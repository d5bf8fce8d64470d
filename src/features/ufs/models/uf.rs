use sqlx::FromRow;

/// Database model for a Brazilian state (unidade federativa)
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Uf {
    pub codigo_uf: i64,
    pub sigla: String,
    pub nome: String,
    pub status: i32,
}

/// A validated state waiting for its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovaUf {
    pub sigla: String,
    pub nome: String,
    pub status: i32,
}

/// Optional equality filters, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UfFiltros {
    pub codigo_uf: Option<i64>,
    pub sigla: Option<String>,
    pub nome: Option<String>,
    pub status: Option<i32>,
}

impl UfFiltros {
    pub fn is_empty(&self) -> bool {
        self.codigo_uf.is_none()
            && self.sigla.is_none()
            && self.nome.is_none()
            && self.status.is_none()
    }
}
