use std::{fmt::Debug, io::Error, net::ToSocketAddrs};

use common::subject_observer::{Observer, UpdateError};
use dipstick::{Input, Statsd};
use log::trace;
use playlist::{EventType, Playlist};

use crate::gateways::{PLAYLIST_PROXY, STATE};

/// Observer that forwards the playlist state to a statsd endpoint as a
/// gauge.
pub struct StatsdGateway {}

impl StatsdGateway {
    pub fn new<A>(address: A) -> Result<Self, Error>
    where
        A: ToSocketAddrs + Debug + Clone,
    {
        let statsd_scope = Statsd::send_to(address)?.metrics();
        PLAYLIST_PROXY.target(statsd_scope);

        Ok(StatsdGateway {})
    }
}

impl Observer<Playlist, EventType> for StatsdGateway {
    fn name(&self) -> &str {
        "statsd-gateway"
    }

    fn update(&self, source: &Playlist, event: EventType) -> Result<(), UpdateError> {
        if let Some(state) = source.state() {
            trace!("Sending state {} after {:?}", state, event);
            STATE.value(state);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::StatsdGateway;

    #[test]
    fn test_statsd_gateway_new() {
        // When
        let result = StatsdGateway::new("");
        // Then
        assert!(
            matches!(result, Err(_)),
            "Should fail when address is not valid"
        );

        // When
        let result = StatsdGateway::new("127.0.0.1:8125");
        // Then
        assert!(
            matches!(result, Ok(_)),
            "Should succeed when address is valid"
        );
    }
}
