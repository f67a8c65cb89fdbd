pub mod gateways;
pub mod reactors;
