use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::pessoas::models::{Endereco, Pessoa};
use crate::features::ufs::dtos::UfResponseDto;

/// Request body for POST/PUT `/pessoa`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PessoaDto {
    #[serde(rename = "codigoPessoa")]
    pub codigo_pessoa: Option<i64>,
    pub nome: Option<String>,
    pub sobrenome: Option<String>,
    pub idade: Option<i32>,
    pub login: Option<String>,
    pub senha: Option<String>,
    pub status: Option<i32>,
    #[serde(default)]
    pub enderecos: Vec<EnderecoDto>,
}

/// Address entry inside a person payload. Without `codigoEndereco` it is a new
/// address; with one it updates the stored address of the same id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnderecoDto {
    pub codigo_endereco: Option<i64>,
    pub codigo_pessoa: Option<i64>,
    pub codigo_bairro: Option<i64>,
    pub nome_rua: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub cep: Option<String>,
}

/// Response DTO for a person. List views carry an empty `enderecos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PessoaResponseDto {
    pub codigo_pessoa: i64,
    pub nome: String,
    pub sobrenome: String,
    pub idade: i32,
    pub login: String,
    pub senha: String,
    pub status: i32,
    pub enderecos: Vec<EnderecoResponseDto>,
}

impl From<Pessoa> for PessoaResponseDto {
    fn from(p: Pessoa) -> Self {
        Self {
            codigo_pessoa: p.codigo_pessoa,
            nome: p.nome,
            sobrenome: p.sobrenome,
            idade: p.idade,
            login: p.login,
            senha: p.senha,
            status: p.status,
            enderecos: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnderecoResponseDto {
    pub codigo_endereco: i64,
    pub codigo_pessoa: i64,
    pub codigo_bairro: i64,
    pub nome_rua: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub cep: Option<String>,
    pub bairro: Option<BairroDetalheDto>,
}

impl From<Endereco> for EnderecoResponseDto {
    fn from(e: Endereco) -> Self {
        Self {
            codigo_endereco: e.codigo_endereco,
            codigo_pessoa: e.codigo_pessoa,
            codigo_bairro: e.codigo_bairro,
            nome_rua: e.nome_rua,
            numero: e.numero,
            complemento: e.complemento,
            cep: e.cep,
            bairro: None,
        }
    }
}

/// Neighborhood nested in an address, carrying its municipality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BairroDetalheDto {
    pub codigo_bairro: i64,
    pub codigo_municipio: i64,
    pub nome: String,
    pub status: i32,
    pub municipio: Option<MunicipioDetalheDto>,
}

/// Municipality nested in a neighborhood, carrying its state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MunicipioDetalheDto {
    #[serde(rename = "codigoMunicipio")]
    pub codigo_municipio: i64,
    #[serde(rename = "codigoUF")]
    pub codigo_uf: i64,
    pub nome: String,
    pub status: i32,
    pub uf: Option<UfResponseDto>,
}

/// Query parameters for GET `/pessoa`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PessoaQuery {
    #[serde(rename = "codigoPessoa")]
    pub codigo_pessoa: Option<String>,
    pub login: Option<String>,
    pub status: Option<String>,
}
