// Domain layer: initiative model, chart layout and the ports the core talks to.

pub mod chart;
pub mod model;
pub mod ports;
