mod bairro_repository;

pub use bairro_repository::{BairroRepository, PgBairroRepository};
