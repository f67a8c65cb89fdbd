use rand::{Rng, RngCore};
use validator::Validate;

use super::{Transition, TransitionConfig, TransitionError};

/// Draws the next state uniformly from `0..upper_bound`, independently of
/// the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformTransition {
    upper_bound: u8,
}

impl UniformTransition {
    pub fn from_config(config: &TransitionConfig) -> Result<Self, TransitionError> {
        config.validate()?;
        Ok(UniformTransition {
            upper_bound: config.upper_bound,
        })
    }
}

impl Transition for UniformTransition {
    fn next_state(&self, _current: Option<u8>, rng: &mut dyn RngCore) -> u8 {
        rng.gen_range(0..self.upper_bound)
    }
}
