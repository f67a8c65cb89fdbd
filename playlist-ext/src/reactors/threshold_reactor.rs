use std::cell::Cell;

use common::subject_observer::{Observer, UpdateError};
use log::info;
use playlist::{EventType, Playlist};

/// Reacts whenever the observed state falls below its limit.
pub struct ThresholdReactor {
    name: String,
    limit: u8,
    reactions: Cell<u32>,
}

impl ThresholdReactor {
    pub fn new(name: &str, limit: u8) -> Self {
        ThresholdReactor {
            name: name.to_owned(),
            limit,
            reactions: Cell::new(0),
        }
    }

    /// Number of updates this reactor has reacted to so far.
    pub fn reactions(&self) -> u32 {
        self.reactions.get()
    }

    fn should_react(&self, state: u8) -> bool {
        state < self.limit
    }
}

impl Observer<Playlist, EventType> for ThresholdReactor {
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
