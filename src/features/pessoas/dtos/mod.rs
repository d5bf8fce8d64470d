mod pessoa_dto;

pub use pessoa_dto::*;
