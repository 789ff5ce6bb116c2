//! Sound Healing page: frequency cards with a play/pause indicator and a
//! favourite toggle. No audio is played.

use dioxus::prelude::*;
use nirvaha_core::catalog::{
    Favorites, SoundTrack, TrackPlayer, SOUND_BACKGROUND_VIDEO, SOUND_BENEFITS, SOUND_TRACKS,
};
use nirvaha_ui::{GlowPanel, IconButton, PageHero};

use crate::components::icons::{HeartIcon, PauseIcon, PlayIcon};

#[component]
pub fn SoundHealing() -> Element {
    let player = use_signal(TrackPlayer::new);
    let favorites = use_signal(Favorites::default);

    rsx! {
        div { class: "sound-page",
            video {
                class: "page-video",
                autoplay: true,
                r#loop: true,
                muted: true,
                playsinline: true,
                source { src: SOUND_BACKGROUND_VIDEO, r#type: "video/mp4" }
            }
            div { class: "hero-overlay" }

            div { class: "container",
                PageHero {
                    title: "Sacred Sound Healing",
                    subtitle: "Experience the healing power of sacred frequencies. Each tone is carefully crafted to resonate with your body's natural energy centers.".to_string(),
                }

                div { class: "card-grid two",
                    for track in SOUND_TRACKS {
                        TrackCard { key: "{track.id}", track: track.clone(), player, favorites }
                    }
                }

                GlowPanel { class: "benefits".to_string(),
                    h2 { class: "section-title centered", "Benefits of Sound Healing" }
                    div { class: "card-grid three",
                        for (title, description) in SOUND_BENEFITS.iter() {
                            div { key: "{title}", class: "benefit",
                                h3 { class: "benefit-title", "{title}" }
                                p { class: "card-text", "{description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TrackCard(
    track: SoundTrack,
    mut player: Signal<TrackPlayer>,
    mut favorites: Signal<Favorites>,
) -> Element {
    let id = track.id;
    let playing = player.read().is_playing(id);
    let favorite = favorites.read().contains(id);

    let (play_class, play_label) = if playing {
        ("play-btn playing", format!("Pause {}", track.name))
    } else {
        ("play-btn", format!("Play {}", track.name))
    };
    let heart_label = if favorite {
        "Remove from favourites"
    } else {
        "Add to favourites"
    };

    rsx! {
        article { class: "card track-card {track.tint}",
            div { class: "track-header",
                h3 { class: "card-title", "{track.name}" }
                span { class: "track-frequency", "{track.frequency}" }
            }
            p { class: "card-text", "{track.description}" }
            div { class: "tag-row",
                for tag in track.benefit_tags() {
                    span { key: "{tag}", class: "tag", "{tag}" }
                }
            }
            div { class: "track-footer",
                span { class: "track-duration", "{track.duration}" }
                div { class: "track-actions",
                    IconButton {
                        class: play_class.to_string(),
                        aria_label: play_label,
                        onclick: move |_| player.write().press(id),
                        if playing {
                            PauseIcon {}
                        } else {
                            PlayIcon {}
                        }
                    }
                    IconButton {
                        class: "favorite-btn".to_string(),
                        aria_label: heart_label.to_string(),
                        onclick: move |_| {
                            let added = favorites.write().toggle(id);
                            tracing::debug!(track = id, added, "Favourite toggled");
                        },
                        HeartIcon { filled: favorite }
                    }
                }
            }
        }
    }
}
