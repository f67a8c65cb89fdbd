mod statsd_gateway;

pub use statsd_gateway::StatsdGateway;

use dipstick::*;

metrics! {
    PLAYLIST_PROXY: Proxy = "playlist" => {
        STATE: Gauge = "state";
    }
}
