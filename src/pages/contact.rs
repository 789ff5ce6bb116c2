//! Contact page: internship programme, contact channels and FAQ.

use dioxus::prelude::*;
use nirvaha_core::contact::{
    CONTACT_CHANNELS, FAQS, INTERNSHIP_DAYS, INTERNSHIP_APPLY_LABEL, INTERNSHIP_DOMAINS,
    INTERNSHIP_FORM_URL, INTERNSHIP_OFFERS,
};
use nirvaha_ui::{ExternalButton, GlowPanel, PageHero};

#[component]
pub fn Contact() -> Element {
    rsx! {
        div { class: "container",
            PageHero {
                title: "Join Our Team",
                subtitle: "Discover opportunities to grow with Nirvaha".to_string(),
            }

            GlowPanel { class: "internship".to_string(), glow: 0.2,
                div { class: "internship-header",
                    span { class: "internship-icon", "\u{1F31F}" }
                    h2 { class: "section-title", "Internship Opportunities" }
                }
                p { class: "section-body",
                    "Risk Guard Enterprise x NIRVAHA is offering a {INTERNSHIP_DAYS}-day internship"
                }
                div { class: "internship-columns",
                    div {
                        h3 { class: "card-title", "What We Offer:" }
                        ul { class: "check-list",
                            for offer in INTERNSHIP_OFFERS {
                                li { key: "{offer}",
                                    span { class: "check", "\u{2713}" }
                                    "{offer}"
                                }
                            }
                        }
                    }
                    div {
                        h3 { class: "card-title", "Available Domains:" }
                        div { class: "tag-row",
                            for domain in INTERNSHIP_DOMAINS {
                                span { key: "{domain}", class: "tag", "{domain}" }
                            }
                        }
                    }
                }
                ExternalButton { href: INTERNSHIP_FORM_URL.to_string(), "{INTERNSHIP_APPLY_LABEL}" }
            }

            div { class: "card-grid three",
                for channel in CONTACT_CHANNELS {
                    a { key: "{channel.title}", class: "card contact-card", href: channel.href,
                        div { class: "card-icon", "{channel.icon}" }
                        h3 { class: "card-title", "{channel.title}" }
                        p { class: "card-text", "{channel.info}" }
                    }
                }
            }

            section { class: "section",
                h2 { class: "section-title centered", "Frequently Asked Questions" }
                div { class: "faq-list",
                    for faq in FAQS {
                        div { key: "{faq.question}", class: "card faq",
                            h3 { class: "card-title", "{faq.question}" }
                            p { class: "card-text", "{faq.answer}" }
                        }
                    }
                }
            }
        }
    }
}
