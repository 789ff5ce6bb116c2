//! Contact page content: internship programme, channels, FAQ.

/// Hosted application form for the internship programme. Opened in a new
/// tab; nothing is ever posted to it from here.
pub const INTERNSHIP_FORM_URL: &str = "https://forms.zohopublic.in/saieshwarerelli10gm1/form/InternshipOpportunitiesatNIRVAHA/formperma/svJExoTEaaUdA3cO9RRE0B7GsuAbZOj1QB7LLAVavzc";

pub const INTERNSHIP_DAYS: u32 = 45;

/// Button text on the contact page's internship panel.
pub const INTERNSHIP_APPLY_LABEL: &str = "Apply for Internship";

/// Button text on the footer's internship call-out.
pub const FOOTER_APPLY_LABEL: &str = "Apply Now";

pub const INTERNSHIP_OFFERS: [&str; 4] = [
    "Real-world experience",
    "Official offer letter",
    "Growth opportunities",
    "45-day structured program",
];

pub const INTERNSHIP_DOMAINS: [&str; 4] = [
    "Web Development",
    "Machine Learning",
    "UI/UX Designer",
    "Data Analytics",
];

/// A clickable contact card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub info: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: "\u{1F4E7}",
        title: "Email",
        info: "soulverse23@gmail.com",
        href: "mailto:soulverse23@gmail.com",
    },
    ContactChannel {
        icon: "\u{1F4F1}",
        title: "Phone",
        info: "+91 7780754541",
        href: "tel:+917780754541",
    },
    ContactChannel {
        icon: "\u{1F4CD}",
        title: "Location",
        info: "Hyderabad, India",
        href: "#",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 4] = [
    Faq {
        question: "What is the internship duration?",
        answer: "The internship program runs for 45 days.",
    },
    Faq {
        question: "Is this a paid internship?",
        answer: "Please check the detailed information in the application form for compensation details.",
    },
    Faq {
        question: "What are the eligibility criteria?",
        answer: "We welcome students from various branches. Specific requirements are listed in the application form.",
    },
    Faq {
        question: "Will I receive a certificate?",
        answer: "Yes, successful interns receive an official offer letter and completion certificate.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_labels_differ_by_placement() {
        assert_eq!(INTERNSHIP_APPLY_LABEL, "Apply for Internship");
        assert_eq!(FOOTER_APPLY_LABEL, "Apply Now");
    }

    #[test]
    fn test_form_url_is_https() {
        assert!(INTERNSHIP_FORM_URL.starts_with("https://"));
    }

    #[test]
    fn test_offers_mention_duration() {
        let days = format!("{}-day", INTERNSHIP_DAYS);
        assert!(INTERNSHIP_OFFERS.iter().any(|o| o.starts_with(&days)));
    }

    #[test]
    fn test_channel_links() {
        assert!(CONTACT_CHANNELS[0].href.starts_with("mailto:"));
        assert!(CONTACT_CHANNELS[1].href.starts_with("tel:"));
    }
}
