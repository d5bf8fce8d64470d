mod uf_dto;

pub use uf_dto::*;
