// Domain layer: payload and report types plus the ports the core runs against.

pub mod model;
pub mod ports;
