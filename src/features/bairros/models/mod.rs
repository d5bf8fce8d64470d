mod bairro;

pub use bairro::{Bairro, BairroFiltros, NovoBairro};
