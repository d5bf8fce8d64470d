mod uf_repository;

pub use uf_repository::{PgUfRepository, UfRepository};
