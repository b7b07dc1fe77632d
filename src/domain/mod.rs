// Domain layer: plain models and the ports the purger depends on.

pub mod model;
pub mod ports;
