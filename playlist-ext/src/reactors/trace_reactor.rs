use common::subject_observer::{Observer, UpdateError};
use log::info;
use playlist::{EventType, Playlist};

/// Unconditional observer: logs every event it receives with the observed
/// state, no predicate.
pub struct TraceReactor {
    name: String,
}

impl TraceReactor {
    pub fn new(name: &str) -> Self {
        TraceReactor {
            name: name.to_owned(),
        }
    }
}

impl Observer<Playlist, EventType> for TraceReactor {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, source: &Playlist, event: EventType) -> Result<(), UpdateError> {
        info!(
            "{}: {} emitted {:?}, state {:?}",
            self.name,
            source.name(),
            event,
            source.state()
        );
        Ok(())
    }
}
