use utoipa::{Modify, OpenApi};

use crate::features::bairros::{dtos as bairros_dtos, handlers as bairros_handlers};
use crate::features::municipios::{dtos as municipios_dtos, handlers as municipios_handlers};
use crate::features::pessoas::{dtos as pessoas_dtos, handlers as pessoas_handlers};
use crate::features::ufs::{dtos as ufs_dtos, handlers as ufs_handlers};
use crate::shared::types::MensagemErro;

#[derive(OpenApi)]
#[openapi(
    paths(
        // UF
        ufs_handlers::get_ufs,
        ufs_handlers::insert_uf,
        ufs_handlers::update_uf,
        // Municipio
        municipios_handlers::get_municipios,
        municipios_handlers::insert_municipio,
        municipios_handlers::update_municipio,
        // Bairro
        bairros_handlers::get_bairros,
        bairros_handlers::insert_bairro,
        bairros_handlers::update_bairro,
        // Pessoa
        pessoas_handlers::get_pessoas,
        pessoas_handlers::insert_pessoa,
        pessoas_handlers::update_pessoa,
    ),
    components(
        schemas(
            // Shared
            MensagemErro,
            // UF
            ufs_dtos::UfDto,
            ufs_dtos::UfResponseDto,
            // Municipio
            municipios_dtos::MunicipioDto,
            municipios_dtos::MunicipioResponseDto,
            // Bairro
            bairros_dtos::BairroDto,
            bairros_dtos::BairroResponseDto,
            // Pessoa
            pessoas_dtos::PessoaDto,
            pessoas_dtos::EnderecoDto,
            pessoas_dtos::PessoaResponseDto,
            pessoas_dtos::EnderecoResponseDto,
            pessoas_dtos::BairroDetalheDto,
            pessoas_dtos::MunicipioDetalheDto,
        )
    ),
    tags(
        (name = "uf", description = "Brazilian states"),
        (name = "municipio", description = "Municipalities"),
        (name = "bairro", description = "Neighborhoods"),
        (name = "pessoa", description = "Persons and their addresses"),
    )
)]
pub struct ApiDoc;

/// Overrides title, version and description from configuration
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
