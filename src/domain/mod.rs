// Domain layer: the contact model and the ports the backends implement.

pub mod model;
pub mod ports;
