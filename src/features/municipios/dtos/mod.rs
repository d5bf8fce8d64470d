mod municipio_dto;

pub use municipio_dto::*;
