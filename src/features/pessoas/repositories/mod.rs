mod endereco_repository;
mod pessoa_repository;

pub use endereco_repository::{EnderecoRepository, PgEnderecoRepository};
pub use pessoa_repository::{PessoaRepository, PgPessoaRepository};
