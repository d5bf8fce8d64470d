mod uf_service;

pub use uf_service::UfService;
