use std::rc::Rc;

use anyhow::Result;
use common::subject_observer::{Observer, Subject};
use log::{info, LevelFilter};
use playlist::{
    transition::{TransitionConfig, UniformTransition},
    Playlist,
};
use playlist_ext::{
    gateways::StatsdGateway,
    reactors::{BoundaryReactor, ThresholdReactor, TraceReactor},
};
use rand::thread_rng;
use simple_logger::SimpleLogger;

use crate::config::AppConfig;

mod config;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let config = AppConfig::new()?;
    let transition = UniformTransition::from_config(&TransitionConfig {
        upper_bound: config.state_upper_bound,
    })?;
    let mut rng = thread_rng();

    let mut playlist = Playlist::new(&config.playlist_name);
    let early_adopter = Rc::new(ThresholdReactor::new("early-adopter", 3));
    let milestone_watcher = Rc::new(BoundaryReactor::new("milestone-watcher"));
    playlist.attach(early_adopter.clone());
    playlist.attach(milestone_watcher.clone());
    playlist.attach(Rc::new(TraceReactor::new("trace")));
    if let Some(address) = &config.statsd_address {
        playlist.attach(Rc::new(StatsdGateway::new(address.as_str())?));
    }

    for round in 0..config.rounds {
        playlist.add_song(&format!("track-{}", round + 1), &transition, &mut rng);
    }

    playlist.detach(early_adopter.clone())?;

    playlist.remove_song("track-1", &transition, &mut rng);

    info!(
        "Done: {} reactions from {}, {} from {}",
        early_adopter.reactions(),
        early_adopter.name(),
        milestone_watcher.reactions(),
        milestone_watcher.name()
    );

    Ok(())
}
