// Domain layer: field model and the ports hosts and formatters implement.

pub mod model;
pub mod ports;
