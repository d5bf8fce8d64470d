mod municipio_service;

pub use municipio_service::MunicipioService;
