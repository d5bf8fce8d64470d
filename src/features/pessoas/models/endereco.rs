use sqlx::FromRow;

use crate::features::bairros::models::Bairro;
use crate::features::municipios::models::Municipio;
use crate::features::ufs::models::Uf;

/// Database model for an address owned by a person
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Endereco {
    pub codigo_endereco: i64,
    pub codigo_pessoa: i64,
    pub codigo_bairro: i64,
    pub nome_rua: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub cep: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovoEndereco {
    pub codigo_pessoa: i64,
    pub codigo_bairro: i64,
    pub nome_rua: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub cep: Option<String>,
}

/// An address together with its neighborhood, municipality and state.
/// A missing link leaves the remaining levels empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnderecoDetalhado {
    pub endereco: Endereco,
    pub bairro: Option<Bairro>,
    pub municipio: Option<Municipio>,
    pub uf: Option<Uf>,
}
