//! Site footer: brand blurb, link columns, internship call-out,
//! newsletter field and copyright line.

use chrono::Datelike;
use dioxus::prelude::*;
use nirvaha_core::contact::{FOOTER_APPLY_LABEL, INTERNSHIP_FORM_URL};
use nirvaha_core::nav::{footer_groups, FooterLink, NewsletterForm};
use nirvaha_core::site::{BRAND_BLURB, BRAND_NAME};
use nirvaha_ui::{Button, ButtonVariant, ExternalButton, Input};

#[component]
pub fn Footer() -> Element {
    let mut newsletter = use_signal(NewsletterForm::default);
    let year = chrono::Local::now().year();

    let on_subscribe = move |e: FormEvent| {
        e.prevent_default();
        newsletter.write().submit();
    };

    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div { class: "footer-brand",
                    h3 { class: "footer-brand-name", "{BRAND_NAME}" }
                    p { class: "footer-blurb", "{BRAND_BLURB}" }
                }

                for group in footer_groups() {
                    div { key: "{group.title}", class: "footer-column",
                        h4 { class: "footer-heading", "{group.title}" }
                        ul { class: "footer-links",
                            for link in group.links.iter().copied() {
                                li { key: "{link.name}", FooterEntry { link } }
                            }
                        }
                    }
                }
            }

            div { class: "footer-callout",
                div {
                    h4 { class: "footer-heading", "Join our internship program" }
                    p { class: "footer-blurb",
                        "Grow with a team building mindful technology."
                    }
                }
                ExternalButton { href: INTERNSHIP_FORM_URL.to_string(), "{FOOTER_APPLY_LABEL}" }
            }

            form { class: "newsletter", onsubmit: on_subscribe,
                Input {
                    value: newsletter.read().email.clone(),
                    oninput: move |email: String| newsletter.write().set_email(email),
                    input_type: "email".to_string(),
                    label: "Newsletter e-mail".to_string(),
                    placeholder: "Enter your email".to_string(),
                }
                Button { variant: ButtonVariant::Primary, button_type: "submit".to_string(), "Subscribe" }
            }

            p { class: "footer-copyright",
                "© {year} {BRAND_NAME}. All rights reserved."
            }
        }
    }
}

#[component]
fn FooterEntry(link: FooterLink) -> Element {
    if link.external {
        return rsx! {
            a {
                class: "footer-link",
                href: link.path,
                target: "_blank",
                rel: "noopener noreferrer",
                "{link.name}"
            }
        };
    }

    rsx! {
        Link { to: link.path, class: "footer-link",
            "{link.name}"
            if link.highlight {
                span { class: "badge-new", "New" }
            }
        }
    }
}
