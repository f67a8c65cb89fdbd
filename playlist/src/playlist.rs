use std::rc::Rc;

use common::subject_observer::{Observer, SharedObservers, Subject, SubscriptionError};
use log::{info, warn};
use rand::Rng;

use crate::{transition::Transition, EventType};

/// The subject of the notification mechanism: owns the latest emitted state
/// and the observers interested in it. The observer list is an instance
/// field, so independent playlists keep independent subscriber lists.
pub struct Playlist {
    name: String,
    state: Option<u8>,
    observers: SharedObservers<Self, EventType>,
}

impl Subject<EventType> for Playlist {
    fn attach(&mut self, observer: Rc<dyn Observer<Self, EventType>>) {
        info!("{}: attached observer {}", self.name, observer.name());
        self.observers.push(observer);
    }

    fn detach(
        &mut self,
        observer: Rc<dyn Observer<Self, EventType>>,
    ) -> Result<(), SubscriptionError> {
        let position = self
            .observers
            .iter()
            .position(|obs| Rc::ptr_eq(obs, &observer))
            .ok_or_else(|| SubscriptionError::NotAttached(observer.name().to_owned()))?;
        self.observers.remove(position);
        info!("{}: detached observer {}", self.name, observer.name());
        Ok(())
    }

    // Borrows the playlist for the whole fan-out, so observers cannot
    // attach or detach from inside their own update.
    fn notify(&self, event: EventType) {
        info!("{}: notifying observers of {:?}", self.name, event);
        for obs in &self.observers {
            if let Err(err) = obs.update(self, event) {
                warn!("{}: {}", self.name, err);
            }
        }
    }
}

impl Playlist {
    pub fn new(name: &str) -> Self {
        Playlist {
            name: name.to_owned(),
            state: None,
            observers: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latest emitted state; `None` until the first business operation.
    pub fn state(&self) -> Option<u8> {
        self.state
    }

    /// Business operation: records a new song, derives the next state through
    /// the transition and notifies every observer before returning.
    pub fn add_song(&mut self, title: &str, transition: &impl Transition, rng: &mut impl Rng) {
        let state = transition.next_state(self.state, rng);
        self.state = Some(state);
        info!("{}: added {:?}, state changed to {}", self.name, title, state);
        self.notify(EventType::SongAdded);
    }

    /// Business operation: drops a song, with the same state/notify contract
    /// as [`Playlist::add_song`].
    pub fn remove_song(&mut self, title: &str, transition: &impl Transition, rng: &mut impl Rng) {
        let state = transition.next_state(self.state, rng);
        self.state = Some(state);
        info!(
            "{}: removed {:?}, state changed to {}",
            self.name, title, state
        );
        self.notify(EventType::SongRemoved);
    }
}
