//! Profile dashboard content.
//!
//! Every number here is a display literal. Nothing is measured or tracked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NirvahaError;

/// Header block at the top of the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: &'static str,
    pub tagline: &'static str,
    pub avatar: &'static str,
}

pub const PROFILE: ProfileSummary = ProfileSummary {
    name: "Sarah Peace",
    tagline: "Spiritual Seeker \u{2022} Member since January 2024",
    avatar: "\u{1F9D8}\u{200D}\u{2640}\u{FE0F}",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const USER_STATS: [UserStat; 4] = [
    UserStat { label: "Meditation Time", value: "45h 30m" },
    UserStat { label: "Sessions Completed", value: "128" },
    UserStat { label: "Streak Days", value: "15" },
    UserStat { label: "Achievements", value: "8" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Meditation,
    Sound,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub title: &'static str,
    pub duration: &'static str,
    pub when: &'static str,
    pub icon: &'static str,
}

pub const RECENT_ACTIVITIES: [Activity; 3] = [
    Activity {
        kind: ActivityKind::Meditation,
        title: "Morning Mindfulness",
        duration: "15 minutes",
        when: "2 hours ago",
        icon: "\u{1F9D8}\u{200D}\u{2640}\u{FE0F}",
    },
    Activity {
        kind: ActivityKind::Sound,
        title: "432 Hz Healing",
        duration: "20 minutes",
        when: "Yesterday",
        icon: "\u{1F3B5}",
    },
    Activity {
        kind: ActivityKind::Chat,
        title: "Divine Chat Session",
        duration: "10 minutes",
        when: "2 days ago",
        icon: "\u{1F4AD}",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    /// Percent, 0..=100
    pub progress: u8,
    pub icon: &'static str,
}

impl Achievement {
    pub fn percent(&self) -> u8 {
        self.progress.min(100)
    }

    pub fn is_complete(&self) -> bool {
        self.percent() == 100
    }
}

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        title: "Early Bird",
        description: "Complete 10 morning meditations",
        progress: 80,
        icon: "\u{1F305}",
    },
    Achievement {
        title: "Sound Master",
        description: "Try all sound healing frequencies",
        progress: 60,
        icon: "\u{1F52E}",
    },
    Achievement {
        title: "Zen Seeker",
        description: "Maintain a 7-day streak",
        progress: 100,
        icon: "\u{2728}",
    },
];

/// Tabs of the profile dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Progress,
    Activities,
    Achievements,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [
        ProfileTab::Progress,
        ProfileTab::Activities,
        ProfileTab::Achievements,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ProfileTab::Progress => "progress",
            ProfileTab::Activities => "activities",
            ProfileTab::Achievements => "achievements",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Progress => "Progress",
            ProfileTab::Activities => "Activities",
            ProfileTab::Achievements => "Achievements",
        }
    }
}

impl fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProfileTab {
    type Err = NirvahaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileTab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| NirvahaError::UnknownTab(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_progress() {
        assert_eq!(ProfileTab::default(), ProfileTab::Progress);
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("activities".parse::<ProfileTab>().unwrap(), ProfileTab::Activities);
        assert!(matches!(
            "settings".parse::<ProfileTab>(),
            Err(NirvahaError::UnknownTab(_))
        ));
    }

    #[test]
    fn test_percent_and_completion() {
        assert_eq!(ACHIEVEMENTS[0].percent(), 80);
        assert!(!ACHIEVEMENTS[0].is_complete());
        assert!(ACHIEVEMENTS[2].is_complete());
    }

    #[test]
    fn test_progress_is_clamped() {
        let overflowing = Achievement {
            title: "x",
            description: "y",
            progress: 140,
            icon: "",
        };
        assert_eq!(overflowing.percent(), 100);
        assert!(overflowing.is_complete());
    }

    #[test]
    fn test_stats_labels() {
        let labels: Vec<_> = USER_STATS.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec!["Meditation Time", "Sessions Completed", "Streak Days", "Achievements"]
        );
    }
}
