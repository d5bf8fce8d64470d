mod municipio;

pub use municipio::{Municipio, MunicipioFiltros, NovoMunicipio};
