mod pessoa_service;

pub use pessoa_service::{PessoaService, PessoaValidada};
