pub mod playlist;
pub mod transition;

pub use playlist::Playlist;

/// Events emitted by the playlist's business operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventType {
    SongAdded,
    SongRemoved,
}
