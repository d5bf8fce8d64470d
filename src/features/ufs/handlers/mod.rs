mod uf_handler;

pub use uf_handler::*;
