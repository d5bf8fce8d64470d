mod bairro_service;

pub use bairro_service::BairroService;
