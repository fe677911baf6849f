// Domain layer: invocation types and ports. No platform dependencies outside the `lambda` feature.

pub mod model;
pub mod ports;
