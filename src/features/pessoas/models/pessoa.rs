use sqlx::FromRow;

/// Database model for a person. Addresses live in `tb_endereco`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Pessoa {
    pub codigo_pessoa: i64,
    pub nome: String,
    pub sobrenome: String,
    pub idade: i32,
    pub login: String,
    pub senha: String,
    pub status: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovaPessoa {
    pub nome: String,
    pub sobrenome: String,
    pub idade: i32,
    pub login: String,
    pub senha: String,
    pub status: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PessoaFiltros {
    pub codigo_pessoa: Option<i64>,
    pub login: Option<String>,
    pub status: Option<i32>,
}
