// Domain layer: portfolio records and ports (interfaces).

pub mod model;
pub mod ports;
