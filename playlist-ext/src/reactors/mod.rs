mod boundary_reactor;
mod threshold_reactor;
mod trace_reactor;

pub use boundary_reactor::BoundaryReactor;
pub use threshold_reactor::ThresholdReactor;
pub use trace_reactor::TraceReactor;
