mod bairro_handler;

pub use bairro_handler::*;
