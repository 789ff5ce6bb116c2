//! Brand copy for the home and about pages.

pub const BRAND_NAME: &str = "NIRVAHA";
pub const BRAND_TAGLINE: &str = "HARMONY OF MIND";
pub const BRAND_BLURB: &str = "Bridging ancient wisdom with modern technology for spiritual growth.";
pub const LOGO_PATH: &str = "/assets/nirvaha-logo.png";
pub const HOME_BACKGROUND_VIDEO: &str = "/meditation.mp4";

/// A titled card with an icon; `path` is set when the card links somewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub path: Option<&'static str>,
}

pub const HOME_SERVICES: [Feature; 3] = [
    Feature {
        icon: "\u{1F9D8}\u{200D}\u{2640}\u{FE0F}",
        title: "Guided Meditation",
        description: "Experience deep meditation with divine guidance",
        path: Some("/meditation"),
    },
    Feature {
        icon: "\u{1F3B5}",
        title: "Sound Healing",
        description: "Heal through sacred frequencies and vibrations",
        path: Some("/sound-healing"),
    },
    Feature {
        icon: "\u{1F4AB}",
        title: "Divine Chat",
        description: "Connect with spiritual wisdom through AI",
        path: Some("/divine-chat"),
    },
];

pub const ABOUT_FEATURES: [Feature; 4] = [
    Feature {
        icon: "\u{1F9D8}\u{200D}\u{2640}\u{FE0F}",
        title: "Guided Meditation",
        description: "Expert-led sessions for all experience levels",
        path: None,
    },
    Feature {
        icon: "\u{1F3B5}",
        title: "Sound Healing",
        description: "Sacred frequencies for deep healing and transformation",
        path: None,
    },
    Feature {
        icon: "\u{1F916}",
        title: "AI Spiritual Guide",
        description: "24/7 support for your spiritual journey",
        path: None,
    },
    Feature {
        icon: "\u{2728}",
        title: "Energy Healing",
        description: "Chakra balancing and energy alignment",
        path: None,
    },
];

/// Tips row under the chat window.
pub const CHAT_TIPS: [Feature; 3] = [
    Feature {
        icon: "\u{1F9D8}\u{200D}\u{2640}\u{FE0F}",
        title: "Meditation Tips",
        description: "Ask for guided meditation sessions",
        path: None,
    },
    Feature {
        icon: "\u{2728}",
        title: "Spiritual Guidance",
        description: "Get personalized spiritual advice",
        path: None,
    },
    Feature {
        icon: "\u{1F3B5}",
        title: "Sound Healing",
        description: "Discover healing frequencies",
        path: None,
    },
];

pub const MISSION: &str = "At Nirvaha, we believe in bridging the gap between ancient spiritual wisdom and modern technology. \
Our mission is to make spiritual growth and inner peace accessible to everyone, anywhere in the world. \
Through our platform, we combine traditional meditation practices, sacred sound healing, and artificial \
intelligence to create a unique and personalized spiritual journey for each seeker.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Founder {
    pub name: &'static str,
    pub photo: &'static str,
    pub bio: &'static str,
    pub quote: &'static str,
}

pub const FOUNDER: Founder = Founder {
    name: "Sai Eshwar",
    photo: "/assets/team/founder.jpg",
    bio: "With over a decade of experience in both technology and spiritual practices, \
Sai Eshwar founded Nirvaha with a vision to make spiritual wisdom accessible in our digital age. \
His journey from a software engineer to a spiritual tech entrepreneur reflects Nirvaha's \
core mission of bridging ancient wisdom with modern innovation.",
    quote: "\"Our goal is to create a space where technology serves as a gateway to spiritual growth, \
making the transformative power of meditation and sound healing available to everyone, \
anywhere in the world.\"",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_services_all_link() {
        assert!(HOME_SERVICES.iter().all(|s| s.path.is_some()));
    }

    #[test]
    fn test_about_features_are_static() {
        assert!(ABOUT_FEATURES.iter().all(|f| f.path.is_none()));
    }
}
