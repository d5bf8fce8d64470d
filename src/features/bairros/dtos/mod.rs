mod bairro_dto;

pub use bairro_dto::*;
