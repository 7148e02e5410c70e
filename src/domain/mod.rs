// Domain layer: the profile record and the ports the lookup depends on.
// No I/O lives here; adapters implement the ports.

pub mod model;
pub mod ports;
