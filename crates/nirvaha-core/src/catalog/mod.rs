//! Static meditation and sound-healing catalogs.

mod meditation;
mod sound;

pub use meditation::{filter_sessions, MeditationCategory, MeditationSession, MEDITATIONS};
pub use sound::{
    Favorites, SoundTrack, TrackPlayer, SOUND_BACKGROUND_VIDEO, SOUND_BENEFITS, SOUND_TRACKS,
};
