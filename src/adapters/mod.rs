// Adapters layer: concrete hosts the binder wires formatters into.

pub mod memory;

#[cfg(feature = "web")]
pub mod web;
