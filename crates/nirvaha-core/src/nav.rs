//! Navigation links, footer groups, and navbar view-state.

/// Scroll offset (px) past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// A navbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

/// Main navbar links, left to right.
pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { name: "Home", path: "/" },
    NavLink { name: "Divine Chat", path: "/divine-chat" },
    NavLink { name: "Meditation", path: "/meditation" },
    NavLink { name: "Sound Healing", path: "/sound-healing" },
    NavLink { name: "About", path: "/about" },
    NavLink { name: "Contact", path: "/contact" },
];

/// The profile icon (desktop) / "Profile" entry (mobile menu).
pub const PROFILE_LINK: NavLink = NavLink {
    name: "Profile",
    path: "/profile",
};

/// A footer entry. External links open in a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub name: &'static str,
    pub path: &'static str,
    /// Rendered with a "New" badge
    pub highlight: bool,
    pub external: bool,
}

impl FooterLink {
    const fn internal(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            highlight: false,
            external: false,
        }
    }

    const fn external(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            highlight: false,
            external: true,
        }
    }
}

/// A titled column of footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterGroup {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

const COMPANY_LINKS: &[FooterLink] = &[
    FooterLink::internal("About Us", "/about"),
    FooterLink::internal("Contact", "/contact"),
    FooterLink {
        name: "Internships",
        path: "/contact",
        highlight: true,
        external: false,
    },
];

const FEATURE_LINKS: &[FooterLink] = &[
    FooterLink::internal("Meditation", "/meditation"),
    FooterLink::internal("Sound Healing", "/sound-healing"),
    FooterLink::internal("Divine Chat", "/divine-chat"),
    FooterLink::internal("Profile", "/profile"),
];

const SOCIAL_LINKS: &[FooterLink] = &[
    FooterLink::external("LinkedIn", "https://www.linkedin.com/company/soulverse23/"),
    FooterLink::external("Instagram", "https://www.instagram.com/_nirvaha_/"),
];

pub const COMPANY: FooterGroup = FooterGroup {
    title: "Company",
    links: COMPANY_LINKS,
};

pub const FEATURES: FooterGroup = FooterGroup {
    title: "Features",
    links: FEATURE_LINKS,
};

pub const SOCIAL: FooterGroup = FooterGroup {
    title: "Social",
    links: SOCIAL_LINKS,
};

/// Footer columns in display order.
pub fn footer_groups() -> [FooterGroup; 3] {
    [COMPANY, FEATURES, SOCIAL]
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Whether `link_path` is the page currently shown.
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    normalize(current_path) == normalize(link_path)
}

/// Navbar view-state: mobile menu visibility and scroll styling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavMenu {
    open: bool,
    scrolled: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Called when a mobile link is followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns true if the scrolled style changed.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

/// Footer newsletter field. Submitting only logs the address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Log and clear the field, returning what was entered.
    pub fn submit(&mut self) -> String {
        let email = std::mem::take(&mut self.email);
        tracing::info!(email = %email, "Newsletter subscription");
        email
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_paths_unique() {
        let paths: HashSet<_> = NAV_LINKS.iter().map(|l| l.path).collect();
        assert_eq!(paths.len(), NAV_LINKS.len());
        assert!(!paths.contains(PROFILE_LINK.path));
    }

    #[test]
    fn test_is_active_exact_match() {
        assert!(is_active("/", "/"));
        assert!(is_active("/meditation", "/meditation"));
        assert!(is_active("/meditation/", "/meditation"));
        assert!(is_active("/contact?ref=footer", "/contact"));
        assert!(!is_active("/meditation", "/"));
        assert!(!is_active("/", "/meditation"));
        assert!(!is_active("/sound-healing", "/sound"));
    }

    #[test]
    fn test_toggle_twice_restores_closed() {
        let mut menu = NavMenu::new();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert_eq!(menu, NavMenu::new());
    }

    #[test]
    fn test_close_from_open() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        let mut menu = NavMenu::new();
        assert!(!menu.on_scroll(20.0));
        assert!(!menu.is_scrolled());
        assert!(menu.on_scroll(20.5));
        assert!(menu.is_scrolled());
        assert!(!menu.on_scroll(300.0));
        assert!(menu.on_scroll(0.0));
        assert!(!menu.is_scrolled());
    }

    #[test]
    fn test_footer_groups() {
        let groups = footer_groups();
        assert_eq!(groups.map(|g| g.title), ["Company", "Features", "Social"]);
        let highlighted: Vec<_> = COMPANY.links.iter().filter(|l| l.highlight).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].name, "Internships");
        assert!(SOCIAL.links.iter().all(|l| l.external));
    }

    #[test]
    fn test_newsletter_submit_clears() {
        let mut form = NewsletterForm::default();
        form.set_email("seeker@example.com");
        assert_eq!(form.submit(), "seeker@example.com");
        assert!(form.email.is_empty());
    }
}
