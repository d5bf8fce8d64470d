mod uf;

pub use uf::{NovaUf, Uf, UfFiltros};
