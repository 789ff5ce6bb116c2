//! Sacred-frequency sound healing catalog.
//!
//! There is no audio engine behind these cards. [`TrackPlayer`] only records
//! which card shows the pause icon.

use std::collections::BTreeSet;

/// One frequency card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundTrack {
    pub id: u32,
    pub name: &'static str,
    pub frequency: &'static str,
    pub duration: &'static str,
    pub benefits: &'static str,
    pub description: &'static str,
    /// CSS modifier for the card gradient
    pub tint: &'static str,
}

impl SoundTrack {
    /// Benefits split into individual tags.
    pub fn benefit_tags(&self) -> Vec<&'static str> {
        self.benefits.split(',').map(str::trim).collect()
    }
}

pub static SOUND_TRACKS: &[SoundTrack] = &[
    SoundTrack {
        id: 1,
        name: "432 Hz Miracle Tone",
        frequency: "432 Hz",
        duration: "15 min",
        benefits: "Universal healing, Pure effects, Natural frequency of the universe",
        description: "Known as the miracle tone, 432 Hz resonates with the universe's natural frequency.",
        tint: "tint-blue",
    },
    SoundTrack {
        id: 2,
        name: "528 Hz Love Frequency",
        frequency: "528 Hz",
        duration: "20 min",
        benefits: "DNA repair, Transformation, Miracles",
        description: "The frequency of love and miracles, helping in cellular healing and transformation.",
        tint: "tint-green",
    },
    SoundTrack {
        id: 3,
        name: "639 Hz Heart Chakra",
        frequency: "639 Hz",
        duration: "25 min",
        benefits: "Relationships, Love, Heart Chakra healing",
        description: "Connects with the heart chakra, promoting love and positive relationships.",
        tint: "tint-pink",
    },
    SoundTrack {
        id: 4,
        name: "741 Hz Spiritual Detox",
        frequency: "741 Hz",
        duration: "30 min",
        benefits: "Spiritual awakening, Intuition, Expression",
        description: "Cleanses the body from toxins and electromagnetic radiation.",
        tint: "tint-purple",
    },
];

/// (title, description) blurbs under the track grid.
pub static SOUND_BENEFITS: &[(&str, &str)] = &[
    (
        "Stress Reduction",
        "Sacred frequencies help reduce stress and anxiety levels",
    ),
    (
        "Energy Balance",
        "Align and balance your body's natural energy centers",
    ),
    (
        "Deep Healing",
        "Promote cellular healing and spiritual transformation",
    ),
];

pub const SOUND_BACKGROUND_VIDEO: &str = "/videos/sound-healing-bg.mp4";

/// Play/pause indicator state for the track grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackPlayer {
    current: Option<u32>,
    playing: bool,
}

impl TrackPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play button pressed on track `id`.
    ///
    /// Pressing the playing track pauses it; any other press selects and
    /// plays that track.
    pub fn press(&mut self, id: u32) {
        if self.is_playing(id) {
            self.playing = false;
        } else {
            self.current = Some(id);
            self.playing = true;
        }
        tracing::debug!(track = id, playing = self.playing, "Track toggled");
    }

    pub fn is_playing(&self, id: u32) -> bool {
        self.playing && self.current == Some(id)
    }

    pub fn current(&self) -> Option<u32> {
        self.current
    }
}

/// Heart toggles on the track grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<u32>,
}

impl Favorites {
    /// Flip membership; returns whether `id` is now a favourite.
    pub fn toggle(&mut self, id: u32) -> bool {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_track_ids_unique() {
        let ids: HashSet<_> = SOUND_TRACKS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_benefit_tags() {
        let tags = SOUND_TRACKS[1].benefit_tags();
        assert_eq!(tags, vec!["DNA repair", "Transformation", "Miracles"]);
    }

    #[test]
    fn test_press_plays_then_pauses() {
        let mut player = TrackPlayer::new();
        player.press(2);
        assert!(player.is_playing(2));
        player.press(2);
        assert!(!player.is_playing(2));
        assert_eq!(player.current(), Some(2));
    }

    #[test]
    fn test_press_other_track_switches() {
        let mut player = TrackPlayer::new();
        player.press(1);
        player.press(3);
        assert!(!player.is_playing(1));
        assert!(player.is_playing(3));
    }

    #[test]
    fn test_favorites_toggle() {
        let mut favs = Favorites::default();
        assert!(favs.toggle(4));
        assert!(favs.contains(4));
        assert!(!favs.toggle(4));
        assert!(favs.is_empty());
    }
}
