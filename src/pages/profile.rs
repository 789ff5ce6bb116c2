//! Profile page: summary header, stat tiles and a tabbed dashboard.

use dioxus::prelude::*;
use nirvaha_core::profile::{
    Achievement, ProfileTab, ACHIEVEMENTS, PROFILE, RECENT_ACTIVITIES, USER_STATS,
};
use nirvaha_ui::{Button, ButtonVariant, ProgressBar};

#[component]
pub fn Profile() -> Element {
    let mut tab = use_signal(ProfileTab::default);

    rsx! {
        div { class: "container profile",
            header { class: "profile-header card",
                div { class: "profile-avatar", "{PROFILE.avatar}" }
                div {
                    h1 { class: "profile-name", "{PROFILE.name}" }
                    p { class: "card-text", "{PROFILE.tagline}" }
                }
            }

            div { class: "card-grid four",
                for stat in USER_STATS {
                    div { key: "{stat.label}", class: "card stat-tile",
                        h3 { class: "stat-label", "{stat.label}" }
                        p { class: "stat-value", "{stat.value}" }
                    }
                }
            }

            nav { class: "profile-tabs", role: "tablist",
                for t in ProfileTab::ALL {
                    Button {
                        key: "{t.id()}",
                        variant: ButtonVariant::Ghost,
                        class: tab_class(tab() == t),
                        onclick: move |_| tab.set(t),
                        "{t.label()}"
                    }
                }
            }

            div { class: "profile-panel fade-up", key: "{tab().id()}",
                {match tab() {
                    ProfileTab::Progress => rsx! {
                        div { class: "card",
                            h3 { class: "card-title", "Weekly Progress" }
                            div { class: "chart-placeholder", "Progress Chart Placeholder" }
                        }
                    },
                    ProfileTab::Activities => rsx! {
                        for activity in RECENT_ACTIVITIES {
                            div { key: "{activity.title}", class: "card activity",
                                span { class: "activity-icon", "{activity.icon}" }
                                div {
                                    h3 { class: "card-title", "{activity.title}" }
                                    p { class: "card-text", "{activity.duration} \u{2022} {activity.when}" }
                                }
                            }
                        }
                    },
                    ProfileTab::Achievements => rsx! {
                        div { class: "card-grid three",
                            for achievement in ACHIEVEMENTS {
                                AchievementCard { key: "{achievement.title}", achievement }
                            }
                        }
                    },
                }}
            }
        }
    }
}

fn tab_class(active: bool) -> String {
    if active {
        "tab active".to_string()
    } else {
        "tab".to_string()
    }
}

#[component]
fn AchievementCard(achievement: Achievement) -> Element {
    rsx! {
        div { class: if achievement.is_complete() { "card achievement complete" } else { "card achievement" },
            div { class: "achievement-header",
                span { class: "activity-icon", "{achievement.icon}" }
                div {
                    h3 { class: "card-title", "{achievement.title}" }
                    p { class: "card-text", "{achievement.description}" }
                }
            }
            ProgressBar { percent: achievement.percent() }
        }
    }
}
