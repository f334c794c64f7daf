// Domain layer: models, session context and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod session;
