//! Global CSS styles.
//!
//! The `:root` custom properties are generated from [`super::colors`]; the
//! rules below only ever refer to those variables.

use std::fmt::Write as _;

use super::colors::*;

/// Complete stylesheet injected once by the root component.
pub fn global_styles() -> String {
    format!("{}{}", root_variables(), BASE_STYLES)
}

fn root_variables() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in [
        ("navy-deep", NAVY_DEEP),
        ("navy", NAVY),
        ("navy-light", NAVY_LIGHT),
        ("teal", TEAL),
        ("teal-soft", TEAL_SOFT),
        ("teal-border", TEAL_BORDER),
        ("teal-glow", TEAL_GLOW),
        ("text-primary", TEXT_PRIMARY),
        ("text-muted", TEXT_MUTED),
    ] {
        let _ = writeln!(css, "  --{name}: {value};");
    }
    css.push_str("}\n");

    for (name, value) in TINTS {
        let _ = writeln!(
            css,
            ".tint-{name} {{ background-image: linear-gradient(90deg, {value}, transparent); }}"
        );
    }
    css
}

const BASE_STYLES: &str = r#"
/* === Reset === */
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }

html, body {
  background: var(--navy-deep);
  color: var(--text-primary);
  font-family: "Inter", system-ui, -apple-system, sans-serif;
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }
img { display: block; max-width: 100%; }
button { font: inherit; cursor: pointer; border: none; background: none; color: inherit; }
button:disabled { cursor: not-allowed; opacity: 0.5; }

.sr-only {
  position: absolute; width: 1px; height: 1px; overflow: hidden;
  clip: rect(0, 0, 0, 0); white-space: nowrap; border: 0;
}

/* === Layout === */
.app-shell { min-height: 100vh; display: flex; flex-direction: column; }
.page { flex: 1; padding-top: 5rem; }
.container { max-width: 80rem; margin: 0 auto; padding: 3rem 1rem 6rem; position: relative; }
.section { padding: 6rem 1rem; max-width: 80rem; margin: 0 auto; }
.section-header { text-align: center; margin-bottom: 4rem; }
.section-title { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
.section-title.centered { text-align: center; }
.section-body { color: var(--text-muted); max-width: 48rem; margin-bottom: 2rem; }

.card-grid { display: grid; gap: 2rem; margin: 3rem 0; }
.card-grid.two { grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); }
.card-grid.three { grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
.card-grid.four { grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); }

/* === Typography === */
.gradient-title {
  font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem;
  background: linear-gradient(90deg, var(--teal), rgba(0, 213, 176, 0.8), var(--teal));
  -webkit-background-clip: text; background-clip: text; color: transparent;
}
.page-hero { text-align: center; margin-bottom: 4rem; }
.page-subtitle { font-size: 1.25rem; color: var(--text-muted); max-width: 42rem; margin: 0 auto; }

.fade-up { animation: fade-up 0.8s ease-out both; }
@keyframes fade-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-soft, .btn-ghost {
  display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem;
  padding: 0.75rem 2rem; border-radius: 9999px; font-weight: 500;
  transition: transform 0.2s, background 0.2s, color 0.2s;
}
.btn-primary { background: var(--teal); color: var(--navy-deep); box-shadow: 0 10px 25px var(--teal-soft); }
.btn-primary:hover { transform: scale(1.05); opacity: 0.9; }
.btn-secondary { background: var(--navy-light); color: var(--text-primary); }
.btn-secondary:hover { transform: scale(1.05); }
.btn-soft { width: 100%; background: var(--teal-soft); color: var(--text-primary); }
.btn-soft:hover { background: rgba(0, 213, 176, 0.3); }
.btn-ghost { padding: 0.5rem 1.5rem; color: var(--text-muted); }
.btn-ghost:hover { color: var(--text-primary); background: var(--navy-light); }

.icon-btn {
  width: 3rem; height: 3rem; border-radius: 9999px;
  display: inline-flex; align-items: center; justify-content: center;
}
.icon { width: 1.5rem; height: 1.5rem; }
.icon-sm { width: 1rem; height: 1rem; }
.icon-lg { width: 2rem; height: 2rem; }

/* === Navbar === */
.navbar {
  position: fixed; top: 0; left: 0; right: 0; z-index: 50;
  transition: background 0.3s, backdrop-filter 0.3s;
}
.navbar.scrolled { background: rgba(10, 25, 47, 0.9); backdrop-filter: blur(12px); box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3); }
.navbar-inner {
  max-width: 80rem; margin: 0 auto; padding: 1rem;
  display: flex; align-items: center; justify-content: space-between;
}
.brand { display: flex; align-items: center; gap: 0.75rem; }
.brand-logo img { width: 3rem; height: 3rem; border-radius: 9999px; }
.brand-text { display: flex; flex-direction: column; line-height: 1.1; }
.brand-name { font-size: 1.5rem; font-weight: 700; color: var(--teal); letter-spacing: 0.1em; }
.brand-tagline { font-size: 0.7rem; color: var(--text-muted); letter-spacing: 0.2em; }

.nav-links { display: flex; align-items: center; gap: 2rem; }
.nav-link { position: relative; color: var(--text-muted); transition: color 0.2s; }
.nav-link:hover { color: var(--teal); }
.nav-underline {
  position: absolute; left: 0; bottom: -0.25rem; height: 2px; width: 100%;
  background: var(--teal); transform: scaleX(0); transition: transform 0.3s;
}
.nav-underline.active { transform: scaleX(1); }
.nav-link:has(.nav-underline.active) { color: var(--teal); }
.nav-profile { color: var(--text-muted); }
.nav-profile:hover { color: var(--teal); }

.nav-toggle { display: none; color: var(--text-primary); padding: 0.5rem; }
.mobile-menu {
  display: flex; flex-direction: column; gap: 0.25rem; padding: 1rem;
  background: rgba(10, 25, 47, 0.95); backdrop-filter: blur(12px);
}
.mobile-link { padding: 0.75rem 1rem; border-radius: 0.5rem; color: var(--text-muted); }
.mobile-link.active, .mobile-link:hover { color: var(--teal); background: var(--navy-light); }

@media (max-width: 768px) {
  .nav-links { display: none; }
  .nav-toggle { display: block; }
  .gradient-title { font-size: 2.25rem; }
}

/* === Cards & panels === */
.card {
  background: rgba(17, 34, 64, 0.5); backdrop-filter: blur(12px);
  border: 1px solid var(--teal-border); border-radius: 1.5rem; padding: 2rem;
  transition: border-color 0.3s, transform 0.3s;
}
.card:hover { border-color: rgba(0, 213, 176, 0.4); }
.card-icon { font-size: 2.25rem; margin-bottom: 1.5rem; }
.card-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
.card-text { color: var(--text-muted); }
.card-more { margin-top: 1.5rem; display: flex; align-items: center; gap: 0.5rem; color: var(--teal); }
.service-card { display: block; }
.service-card:hover { transform: scale(1.02); }
.service-card:hover .card-more { transform: translateX(0.5rem); }

.glow-panel {
  position: relative; overflow: hidden; margin: 5rem 0;
  background: var(--navy); border-radius: 1.5rem; padding: 3rem;
}
.glow-orbs { position: absolute; inset: 0; pointer-events: none; }
.glow-orb { position: absolute; width: 24rem; height: 24rem; border-radius: 9999px; background: var(--teal); filter: blur(64px); }
.glow-orb-top { top: -6rem; left: -6rem; }
.glow-orb-bottom { bottom: -6rem; right: -6rem; }
.glow-panel-content { position: relative; z-index: 1; }
.cta { text-align: center; }
.cta .section-body { margin-left: auto; margin-right: auto; }

.tag-row { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
.tag { padding: 0.25rem 0.75rem; border-radius: 9999px; background: var(--teal-soft); color: var(--teal); font-size: 0.875rem; }

/* === Inputs === */
.input-field {
  flex: 1; padding: 0.75rem 1.25rem; border-radius: 9999px;
  background: var(--navy-light); border: 1px solid var(--teal-border);
  color: var(--text-primary); outline: none;
}
.input-field:focus { border-color: var(--teal); box-shadow: 0 0 0 2px var(--teal-soft); }

/* === Category pills === */
.category-pills { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-bottom: 3rem; }
.pill { padding: 0.75rem 1.5rem; border-radius: 9999px; background: var(--navy); color: var(--text-muted); border: 1px solid var(--teal-border); }
.pill:hover { color: var(--text-primary); }
.pill.selected { background: var(--teal); color: var(--navy-deep); }

/* === Home === */
.home-hero { position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center; overflow: hidden; margin-top: -5rem; }
.hero-video, .page-video { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.page-video { position: fixed; z-index: -2; }
.hero-overlay { position: absolute; inset: 0; background: rgba(10, 25, 47, 0.8); }
.sound-page .hero-overlay { position: fixed; z-index: -1; }
.hero-content { position: relative; z-index: 1; text-align: center; padding: 0 1rem; max-width: 64rem; }
.hero-title { font-size: 3.75rem; }
.hero-subtitle { font-size: 1.5rem; color: var(--text-muted); margin-bottom: 3rem; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }

/* === About === */
.founder { display: grid; grid-template-columns: 16rem 1fr; gap: 3rem; align-items: center; margin: 5rem 0; }
.founder-photo { width: 16rem; height: 16rem; object-fit: cover; border-radius: 1.5rem; }
.founder-name { font-size: 1.25rem; color: var(--teal); margin-bottom: 1rem; }
.founder-quote { font-style: italic; color: var(--text-muted); border-left: 3px solid var(--teal); padding-left: 1rem; }
@media (max-width: 768px) { .founder { grid-template-columns: 1fr; } }

/* === Contact === */
.internship-header { display: flex; align-items: center; gap: 1rem; }
.internship-icon { font-size: 2.5rem; }
.internship-columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 2rem; margin-bottom: 2rem; }
.check-list { list-style: none; display: flex; flex-direction: column; gap: 0.5rem; color: var(--text-muted); }
.check { color: var(--teal); margin-right: 0.5rem; }
.contact-card { text-align: center; }
.faq-list { display: grid; gap: 1.5rem; }

/* === Meditation === */
.session-card { padding: 0; overflow: hidden; }
.session-media { position: relative; aspect-ratio: 16 / 9; }
.session-media img { width: 100%; height: 100%; object-fit: cover; }
.session-shade { position: absolute; inset: 0; background: linear-gradient(to top, var(--navy), transparent); opacity: 0.6; }
.session-duration {
  position: absolute; top: 1rem; right: 1rem; padding: 0.25rem 1rem; border-radius: 9999px;
  background: rgba(10, 25, 47, 0.8); color: var(--teal); font-size: 0.875rem;
}
.session-body { padding: 1.5rem; }
.session-meta { display: flex; justify-content: space-between; font-size: 0.875rem; color: var(--text-muted); margin-bottom: 0.5rem; }
.session-level { color: var(--teal); }

/* === Sound healing === */
.sound-page { position: relative; }
.track-header, .track-footer { display: flex; align-items: center; justify-content: space-between; }
.track-header { margin-bottom: 1rem; }
.track-frequency { color: var(--teal); font-weight: 500; }
.track-duration { color: var(--text-muted); }
.track-actions { display: flex; align-items: center; gap: 1rem; }
.play-btn { background: var(--teal-soft); color: var(--teal); }
.play-btn.playing { background: var(--teal); color: var(--navy-deep); }
.favorite-btn { color: var(--teal); }
.heart.filled { fill: currentColor; }
.benefit { text-align: center; }
.benefit-title { font-size: 1.25rem; font-weight: 600; color: var(--teal); margin-bottom: 0.5rem; }

/* === Profile === */
.profile-header { display: flex; align-items: center; gap: 2rem; margin-bottom: 2rem; }
.profile-avatar {
  width: 6rem; height: 6rem; border-radius: 9999px; font-size: 3rem;
  display: flex; align-items: center; justify-content: center; background: var(--teal-soft);
}
.profile-name { font-size: 1.875rem; font-weight: 700; }
.stat-tile { text-align: center; }
.stat-label { color: var(--text-muted); font-weight: 400; margin-bottom: 0.5rem; }
.stat-value { font-size: 1.875rem; font-weight: 700; color: var(--teal); }
.profile-tabs { display: flex; gap: 0.5rem; margin-bottom: 2rem; }
.tab.active { background: var(--teal); color: var(--navy-deep); }
.profile-panel { display: flex; flex-direction: column; gap: 1rem; }
.chart-placeholder {
  height: 16rem; border-radius: 0.75rem; background: var(--navy-light);
  display: flex; align-items: center; justify-content: center; color: var(--text-muted);
}
.activity, .achievement-header { display: flex; align-items: center; gap: 1rem; }
.achievement-header { margin-bottom: 1rem; }
.activity-icon { font-size: 2rem; }
.achievement.complete { border-color: var(--teal); }
.progress-track { height: 0.5rem; border-radius: 9999px; background: var(--navy-light); overflow: hidden; }
.progress-fill { height: 100%; background: var(--teal); transition: width 0.5s; }
.progress-label { margin-top: 0.5rem; text-align: right; font-size: 0.875rem; color: var(--text-muted); }

/* === Divine chat === */
.guide-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1rem; margin-bottom: 2rem; }
.guide-card {
  text-align: left; padding: 1.5rem; border-radius: 1rem;
  background: var(--navy); border: 1px solid var(--teal-border); transition: transform 0.2s;
}
.guide-card:hover { transform: scale(1.02); }
.guide-card.selected { border-color: var(--teal); }
.guide-avatar { font-size: 2rem; }
.guide-name { font-weight: 600; margin: 0.5rem 0 0.25rem; }
.guide-description { color: var(--text-muted); font-size: 0.875rem; }

.chat-panel { padding: 0; overflow: hidden; display: flex; flex-direction: column; }
.chat-header { display: flex; align-items: center; gap: 1rem; padding: 1.5rem; border-bottom: 1px solid var(--teal-border); }
.chat-title { font-size: 1.25rem; font-weight: 700; }
.chat-status { display: flex; align-items: center; gap: 0.5rem; color: var(--teal); font-size: 0.875rem; }
.status-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: var(--teal); animation: pulse 2s infinite; }
@keyframes pulse { 50% { opacity: 0.4; } }

.quick-responses { display: flex; flex-wrap: wrap; gap: 0.5rem; padding: 1rem 1.5rem; }
.quick-chip { padding: 0.5rem 1rem; border-radius: 9999px; background: var(--teal-soft); color: var(--teal); font-size: 0.875rem; }
.quick-chip:hover { background: rgba(0, 213, 176, 0.3); }

.chat-messages { height: 28rem; overflow-y: auto; padding: 1.5rem; display: flex; flex-direction: column; gap: 1rem; }
.message-row { display: flex; align-items: flex-end; gap: 0.5rem; }
.message-row-sent { justify-content: flex-end; }
.message-row-received { justify-content: flex-start; }
.message-avatar { font-size: 1.5rem; }
.message-bubble { max-width: 70%; padding: 0.75rem 1rem; border-radius: 1rem; }
.message-bubble-sent { background: var(--teal); color: var(--navy-deep); border-bottom-right-radius: 0.25rem; }
.message-bubble-received { background: var(--navy-light); border-bottom-left-radius: 0.25rem; }
.message-bubble-time { margin-top: 0.25rem; font-size: 0.75rem; opacity: 0.7; }
.typing { display: flex; gap: 0.25rem; }
.typing-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: var(--teal); animation: bounce 1s infinite; }
.typing-dot:nth-child(2) { animation-delay: 0.15s; }
.typing-dot:nth-child(3) { animation-delay: 0.3s; }
@keyframes bounce { 50% { transform: translateY(-0.35rem); } }

.chat-input-bar { display: flex; align-items: center; gap: 0.75rem; padding: 1rem 1.5rem; border-top: 1px solid var(--teal-border); }
.chat-input-field {
  flex: 1; padding: 0.75rem 1.25rem; border-radius: 9999px; outline: none;
  background: var(--navy-light); border: 1px solid var(--teal-border); color: var(--text-primary);
}
.chat-input-field:focus { border-color: var(--teal); }
.mic-btn, .chat-send-btn {
  width: 3rem; height: 3rem; border-radius: 9999px;
  display: inline-flex; align-items: center; justify-content: center;
  background: var(--teal-soft); color: var(--teal);
}
.mic-btn.recording { background: #ef4444; color: var(--text-primary); animation: pulse 1.5s infinite; }
.chat-send-btn.active { background: var(--teal); color: var(--navy-deep); }
.send-icon { width: 1.25rem; height: 1.25rem; }

/* === Footer === */
.footer { background: var(--navy); border-top: 1px solid var(--teal-border); padding: 4rem 1rem 2rem; }
.footer-grid { max-width: 80rem; margin: 0 auto; display: grid; grid-template-columns: 2fr repeat(3, 1fr); gap: 2rem; }
.footer-brand-name { font-size: 1.5rem; font-weight: 700; color: var(--teal); letter-spacing: 0.1em; }
.footer-blurb { color: var(--text-muted); margin-top: 0.5rem; }
.footer-heading { font-weight: 600; margin-bottom: 1rem; }
.footer-links { list-style: none; display: flex; flex-direction: column; gap: 0.5rem; }
.footer-link { color: var(--text-muted); display: inline-flex; align-items: center; gap: 0.5rem; }
.footer-link:hover { color: var(--teal); }
.badge-new { padding: 0 0.5rem; border-radius: 9999px; font-size: 0.7rem; background: var(--teal); color: var(--navy-deep); }
.footer-callout {
  max-width: 80rem; margin: 3rem auto 0; padding: 2rem; border-radius: 1.5rem;
  display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1rem;
  background: var(--navy-light); border: 1px solid var(--teal-border);
}
.newsletter { max-width: 32rem; margin: 3rem auto 0; display: flex; gap: 0.75rem; }
.footer-copyright { text-align: center; margin-top: 3rem; font-size: 0.875rem; color: var(--text-muted); }
@media (max-width: 768px) { .footer-grid { grid-template-columns: 1fr 1fr; } }

/* === Not found === */
.not-found { text-align: center; }
.not-found .page-subtitle { margin-bottom: 2rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_defines_palette() {
        let css = global_styles();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--navy-deep: #0a192f;"));
        assert!(css.contains("--teal: #00d5b0;"));
    }

    #[test]
    fn every_tint_has_a_rule() {
        let css = root_variables();
        for tint in ["blue", "indigo", "red", "green", "pink", "purple"] {
            assert!(css.contains(&format!(".tint-{tint} {{")), "missing tint-{tint}");
        }
    }

    #[test]
    fn rules_only_use_defined_variables() {
        let css = global_styles();
        let defined = root_variables();
        for var in BASE_STYLES.split("var(--").skip(1) {
            let name = var.split(')').next().unwrap_or_default();
            assert!(
                defined.contains(&format!("--{name}:")),
                "undefined variable --{name}"
            );
        }
        assert!(css.len() > BASE_STYLES.len());
    }
}
