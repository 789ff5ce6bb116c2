//! Guided meditation catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NirvahaError;

/// Filter pill on the meditation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeditationCategory {
    #[default]
    All,
    Krishna,
    Shiva,
    Ganesha,
}

impl MeditationCategory {
    pub const ALL: [MeditationCategory; 4] = [
        MeditationCategory::All,
        MeditationCategory::Krishna,
        MeditationCategory::Shiva,
        MeditationCategory::Ganesha,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MeditationCategory::All => "all",
            MeditationCategory::Krishna => "krishna",
            MeditationCategory::Shiva => "shiva",
            MeditationCategory::Ganesha => "ganesha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MeditationCategory::All => "All Meditations",
            MeditationCategory::Krishna => "Krishna Meditation",
            MeditationCategory::Shiva => "Shiva Meditation",
            MeditationCategory::Ganesha => "Ganesha Meditation",
        }
    }

    /// Whether a session tagged `tag` is shown under this filter.
    pub fn matches(&self, tag: MeditationCategory) -> bool {
        *self == MeditationCategory::All || *self == tag
    }
}

impl fmt::Display for MeditationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MeditationCategory {
    type Err = NirvahaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeditationCategory::ALL
            .into_iter()
            .find(|c| c.id() == s || c.display_name() == s)
            .ok_or_else(|| NirvahaError::UnknownCategory(s.to_string()))
    }
}

/// One guided session card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeditationSession {
    pub id: u32,
    pub title: &'static str,
    pub duration: &'static str,
    pub category: MeditationCategory,
    pub instructor: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub level: &'static str,
}

pub static MEDITATIONS: &[MeditationSession] = &[
    MeditationSession {
        id: 1,
        title: "Overcoming Fear",
        duration: "10 min",
        category: MeditationCategory::Krishna,
        instructor: "with Krishna",
        image: "/assets/meditation/krishna-fear.jpg",
        description: "Release fear and find courage through Krishna's guidance",
        level: "All Levels",
    },
    MeditationSession {
        id: 2,
        title: "Inner Peace & Detachment",
        duration: "15 min",
        category: MeditationCategory::Shiva,
        instructor: "with Shiva",
        image: "/assets/meditation/shiva-peace.jpg",
        description: "Find stillness and let go of attachments",
        level: "All Levels",
    },
    MeditationSession {
        id: 3,
        title: "Clarity & Wisdom",
        duration: "10 min",
        category: MeditationCategory::Ganesha,
        instructor: "with Ganesha",
        image: "/assets/meditation/ganesha-clarity.jpg",
        description: "Clear obstacles and gain mental clarity",
        level: "All Levels",
    },
];

/// Sessions shown for `category`, in catalog order.
pub fn filter_sessions(category: MeditationCategory) -> Vec<&'static MeditationSession> {
    MEDITATIONS
        .iter()
        .filter(|session| category.matches(session.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = MEDITATIONS.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), MEDITATIONS.len());
    }

    #[test]
    fn test_all_shows_everything_in_order() {
        let shown: Vec<u32> = filter_sessions(MeditationCategory::All)
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(shown, vec![1, 2, 3]);
    }

    #[test]
    fn test_category_filters_exactly() {
        let shown = filter_sessions(MeditationCategory::Shiva);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Inner Peace & Detachment");
    }

    #[test]
    fn test_parse_by_id_or_label() {
        assert_eq!(
            "ganesha".parse::<MeditationCategory>().unwrap(),
            MeditationCategory::Ganesha
        );
        assert_eq!(
            "All Meditations".parse::<MeditationCategory>().unwrap(),
            MeditationCategory::All
        );
        assert!("vishnu".parse::<MeditationCategory>().is_err());
    }
}
