mod municipio_repository;

pub use municipio_repository::{MunicipioRepository, PgMunicipioRepository};
