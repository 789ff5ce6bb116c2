//! Spiritual guides available in Divine Chat.
//!
//! Exactly three guides exist. Each carries its own greeting, tagline and
//! quick-response suggestions; the replies themselves are shared (see
//! [`crate::chat::REPLY_POOL`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NirvahaError;

/// One of the three fixed guide personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpiritualGuide {
    #[default]
    Krishna,
    Shiva,
    Ganesha,
}

impl SpiritualGuide {
    /// All guides in display order.
    pub const ALL: [SpiritualGuide; 3] = [
        SpiritualGuide::Krishna,
        SpiritualGuide::Shiva,
        SpiritualGuide::Ganesha,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SpiritualGuide::Krishna => "krishna",
            SpiritualGuide::Shiva => "shiva",
            SpiritualGuide::Ganesha => "ganesha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SpiritualGuide::Krishna => "Lord Krishna",
            SpiritualGuide::Shiva => "Lord Shiva",
            SpiritualGuide::Ganesha => "Lord Ganesha",
        }
    }

    pub fn avatar(&self) -> &'static str {
        "\u{1F549}\u{FE0F}"
    }

    /// First message of every conversation with this guide.
    pub fn greeting(&self) -> &'static str {
        match self {
            SpiritualGuide::Krishna => {
                "Namaste! I am Krishna, your guide on the path of dharma. How may I assist you today?"
            }
            SpiritualGuide::Shiva => {
                "Om Namah Shivaya! I am Shiva, the destroyer of ignorance. What wisdom do you seek?"
            }
            SpiritualGuide::Ganesha => {
                "Om Gam Ganapataye Namaha! I am Ganesha, remover of obstacles. How may I help you on your journey?"
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SpiritualGuide::Krishna => "Wisdom from the Bhagavad Gita",
            SpiritualGuide::Shiva => "Transformation and enlightenment",
            SpiritualGuide::Ganesha => "Wisdom and new beginnings",
        }
    }

    /// CSS modifier used for the selected guide card gradient.
    pub fn style(&self) -> &'static str {
        match self {
            SpiritualGuide::Krishna => "tint-blue",
            SpiritualGuide::Shiva => "tint-indigo",
            SpiritualGuide::Ganesha => "tint-red",
        }
    }

    /// Quick-response suggestions shown above the conversation.
    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            SpiritualGuide::Krishna => &[
                "Tell me about karma yoga",
                "Guide me through the Gita",
                "How to find my dharma?",
                "Explain divine consciousness",
            ],
            SpiritualGuide::Shiva => &[
                "Teach me meditation",
                "Understanding consciousness",
                "Path to enlightenment",
                "Power of transformation",
            ],
            SpiritualGuide::Ganesha => &[
                "Remove my obstacles",
                "Bless my new beginning",
                "Path to success",
                "Finding inner wisdom",
            ],
        }
    }

    /// Input placeholder, e.g. "Ask Lord Shiva anything...".
    pub fn prompt_placeholder(&self) -> String {
        format!("Ask {} anything...", self.display_name())
    }
}

impl fmt::Display for SpiritualGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SpiritualGuide {
    type Err = NirvahaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpiritualGuide::ALL
            .into_iter()
            .find(|guide| guide.id() == s)
            .ok_or_else(|| NirvahaError::UnknownGuide(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exactly_three_guides_with_unique_ids() {
        let ids: HashSet<_> = SpiritualGuide::ALL.iter().map(|g| g.id()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_default_is_krishna() {
        assert_eq!(SpiritualGuide::default(), SpiritualGuide::Krishna);
    }

    #[test]
    fn test_parse_roundtrip_and_unknown() {
        for guide in SpiritualGuide::ALL {
            assert_eq!(guide.id().parse::<SpiritualGuide>().unwrap(), guide);
        }
        let err = "vishnu".parse::<SpiritualGuide>().unwrap_err();
        assert!(matches!(err, NirvahaError::UnknownGuide(ref id) if id == "vishnu"));
    }

    #[test]
    fn test_each_guide_has_four_suggestions() {
        for guide in SpiritualGuide::ALL {
            assert_eq!(guide.suggestions().len(), 4);
            assert!(guide.greeting().contains(&guide.display_name()["Lord ".len()..]));
        }
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(
            SpiritualGuide::Shiva.prompt_placeholder(),
            "Ask Lord Shiva anything..."
        );
    }
}
