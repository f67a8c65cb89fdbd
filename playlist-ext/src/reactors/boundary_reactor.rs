use std::cell::Cell;

use common::subject_observer::{Observer, UpdateError};
use log::info;
use playlist::{EventType, Playlist};

/// Reacts at the lower boundary of the state space and at everything from
/// two upwards, ignoring only a state of one.
pub struct BoundaryReactor {
    name: String,
    reactions: Cell<u32>,
}

impl BoundaryReactor {
    pub fn new(name: &str) -> Self {
        BoundaryReactor {
            name: name.to_owned(),
            reactions: Cell::new(0),
        }
    }

    /// Number of updates this reactor has reacted to so far.
    pub fn reactions(&self) -> u32 {
        self.reactions.get()
    }

    fn should_react(&self, state: u8) -> bool {
        state == 0 || state >= 2
    }
}

impl Observer<Playlist, EventType> for BoundaryReactor {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, source: &Playlist, _event: EventType) -> Result<(), UpdateError> {
        if let Some(state) = source.state() {
            if self.should_react(state) {
                self.reactions.set(self.reactions.get() + 1);
                info!("{}: reacting to state {}", self.name, state);
            }
        }
        Ok(())
    }
}
