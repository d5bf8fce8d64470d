mod municipio_handler;

pub use municipio_handler::*;
