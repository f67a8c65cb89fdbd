mod uniform;

pub use uniform::UniformTransition;

use rand::RngCore;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

#[derive(Error, Debug)]
pub enum TransitionError {
    #[error("Invalid transition settings: {0}")]
    InvalidSettings(#[from] ValidationErrors),
}

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct TransitionConfig {
    #[validate(range(min = 1))]
    pub upper_bound: u8,
}

/// Produces a new state on each mutating playlist operation. The contract is
/// only "some new integer state"; how it is derived is up to the
/// implementation.
pub trait Transition {
    fn next_state(&self, current: Option<u8>, rng: &mut dyn RngCore) -> u8;
}
