pub mod bairros;
pub mod municipios;
pub mod pessoas;
pub mod ufs;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::features::bairros::repositories::{BairroRepository, PgBairroRepository};
use crate::features::bairros::BairroService;
use crate::features::municipios::repositories::{MunicipioRepository, PgMunicipioRepository};
use crate::features::municipios::MunicipioService;
use crate::features::pessoas::repositories::{
    EnderecoRepository, PessoaRepository, PgEnderecoRepository, PgPessoaRepository,
};
use crate::features::pessoas::PessoaService;
use crate::features::ufs::repositories::{PgUfRepository, UfRepository};
use crate::features::ufs::UfService;

/// One service per entity, sharing the same repositories
#[derive(Clone)]
pub struct AppServices {
    pub ufs: Arc<UfService>,
    pub municipios: Arc<MunicipioService>,
    pub bairros: Arc<BairroService>,
    pub pessoas: Arc<PessoaService>,
}

impl AppServices {
    pub fn new(
        ufs: Arc<dyn UfRepository>,
        municipios: Arc<dyn MunicipioRepository>,
        bairros: Arc<dyn BairroRepository>,
        pessoas: Arc<dyn PessoaRepository>,
        enderecos: Arc<dyn EnderecoRepository>,
    ) -> Self {
        Self {
            ufs: Arc::new(UfService::new(Arc::clone(&ufs))),
            municipios: Arc::new(MunicipioService::new(Arc::clone(&municipios), ufs)),
            bairros: Arc::new(BairroService::new(Arc::clone(&bairros), municipios)),
            pessoas: Arc::new(PessoaService::new(pessoas, enderecos, bairros)),
        }
    }

    /// Services backed by PostgreSQL
    pub fn from_pool(pool: &PgPool) -> Self {
        Self::new(
            Arc::new(PgUfRepository::new(pool.clone())),
            Arc::new(PgMunicipioRepository::new(pool.clone())),
            Arc::new(PgBairroRepository::new(pool.clone())),
            Arc::new(PgPessoaRepository::new(pool.clone())),
            Arc::new(PgEnderecoRepository::new(pool.clone())),
        )
    }
}

/// Every entity route, without middleware
pub fn routes(services: &AppServices) -> Router {
    Router::new()
        .merge(ufs::routes(Arc::clone(&services.ufs)))
        .merge(municipios::routes(Arc::clone(&services.municipios)))
        .merge(bairros::routes(Arc::clone(&services.bairros)))
        .merge(pessoas::routes(Arc::clone(&services.pessoas)))
}
