mod endereco;
mod pessoa;

pub use endereco::{Endereco, EnderecoDetalhado, NovoEndereco};
pub use pessoa::{NovaPessoa, Pessoa, PessoaFiltros};
