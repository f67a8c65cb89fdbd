use std::rc::Rc;

use thiserror::Error;

/// Observers kept by a subject, in attachment order.
pub type SharedObservers<S, E> = Vec<Rc<dyn Observer<S, E>>>;

#[derive(Error, Debug, PartialEq)]
pub enum SubscriptionError {
    #[error("Observer {0} is not attached")]
    NotAttached(String),
}

/// Failure an observer may signal while processing an update. The subject
/// consumes it during the fan-out; it never aborts the notification cycle.
#[derive(Error, Debug, PartialEq)]
#[error("Observer {observer} failed to process update: {reason}")]
pub struct UpdateError {
    pub observer: String,
    pub reason: String,
}

pub trait Observer<S: Subject<E>, E: Clone> {
    /// Identity label, used for logging only.
    fn name(&self) -> &str;

    /// Receive an update from the subject. The subject is borrowed for the
    /// duration of the call only; observers read its state, never mutate it.
    fn update(&self, source: &S, event: E) -> Result<(), UpdateError>;
}

pub trait Subject<E: Clone> {
    /// Append an observer to the collection. Duplicate handles are not
    /// deduplicated: each occurrence is notified once per cycle.
    fn attach(&mut self, observer: Rc<dyn Observer<Self, E>>);

    /// Remove the first occurrence of the observer (handle identity).
    /// Fails with [`SubscriptionError::NotAttached`] when the observer is not
    /// currently attached, leaving the collection unchanged.
    fn detach(&mut self, observer: Rc<dyn Observer<Self, E>>) -> Result<(), SubscriptionError>;

    /// Invoke `update` on every currently attached observer, in attachment
    /// order, synchronously on the caller's thread.
    fn notify(&self, event: E);
}
