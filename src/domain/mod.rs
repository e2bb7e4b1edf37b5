// Domain layer: vacancy records, statistics and the source port. No HTTP here.

pub mod model;
pub mod ports;
