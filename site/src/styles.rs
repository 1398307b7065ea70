//! CSS for the landing page.
//!
//! [`LANDING_CSS`] holds the layout and component rules. It only refers to
//! colors and fonts through the custom properties declared by
//! [`Theme::css_variables`], so swapping the theme restyles the page.
//!
//! # Customization
//!
//! ```rust
//! use morr_site::styles::stylesheet;
//! use morr_site::theme::Theme;
//!
//! let mut theme = Theme::default();
//! theme.background_color.insert("brand", "#ff0066");
//! let css = stylesheet(&theme);
//! assert!(css.contains(".bg-brand { background-color: #ff0066; }"));
//! ```

use crate::theme::{DarkMode, Theme};

/// Layout and component rules, dark by default.
pub const LANDING_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--color-bg-primary);
    color: #e6e8e8;
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 24px;
}

/* Badge */
.badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 6px 14px;
    border-radius: 999px;
    border: 1px solid rgba(44, 185, 129, 0.3);
    background: var(--color-primary-bg);
    color: var(--color-primary);
    font-size: 14px;
    font-weight: 500;
}

.badge-icon {
    font-size: 10px;
    animation: pulse 2s ease-in-out infinite;
}

/* Headline */
.headline {
    font-size: clamp(40px, 6vw, 72px);
    font-weight: 700;
    line-height: 1.1;
    letter-spacing: -0.02em;
    margin: 24px 0;
}

.headline-line {
    display: block;
}

.headline-accent {
    color: var(--color-primary);
}

.section-description {
    max-width: 640px;
    color: #9aa3a3;
    font-size: 18px;
}

/* Hero */
.hero {
    padding: 120px 0 96px;
    text-align: center;
}

.hero .section-description {
    margin: 0 auto;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 16px;
    margin-top: 40px;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 12px 24px;
    border-radius: 10px;
    font-weight: 600;
    transition: background 0.15s ease, border-color 0.15s ease;
}

.btn-primary {
    background: var(--color-primary);
    color: var(--color-bg-primary);
}

.btn-primary:hover {
    background: var(--color-primary-dark);
}

.btn-secondary {
    border: 1px solid var(--color-bg-tertiary);
    background: var(--color-bg-secondary);
}

.btn-secondary:hover {
    border-color: var(--color-primary);
}

.btn-tertiary {
    color: var(--color-primary);
    padding-left: 8px;
    padding-right: 8px;
}

.trustbar {
    margin-top: 64px;
    color: #6b7373;
    font-size: 14px;
}

.trustbar-logos {
    display: flex;
    justify-content: center;
    gap: 32px;
    margin-top: 16px;
}

.trustbar-logos img {
    height: 28px;
    opacity: 0.6;
}

/* Proactive AI */
.proactive-ai {
    padding: 96px 0;
    background: var(--color-bg-secondary);
}

.section-header {
    text-align: center;
    margin-bottom: 64px;
}

.section-header .section-description {
    margin: 0 auto;
}

.blocks-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 24px;
}

.block-card {
    display: flex;
    flex-direction: column;
    gap: 20px;
    padding: 28px;
    border-radius: 16px;
    border: 1px solid var(--color-bg-tertiary);
    background: var(--color-bg-primary);
}

.block-card.is-featured {
    border-color: var(--color-primary);
}

.block-title {
    display: flex;
    align-items: center;
    gap: 12px;
    font-size: 22px;
    margin: 0;
}

.block-description {
    color: #9aa3a3;
    margin: 0;
}

.block-preview {
    padding: 16px;
    border-radius: 12px;
    background: var(--color-bg-secondary);
    border: 1px solid var(--color-bg-tertiary);
    font-size: 14px;
}

.meeting-list {
    list-style: none;
    margin: 0 0 12px;
    padding: 0;
}

.meeting {
    display: flex;
    justify-content: space-between;
    padding: 8px 0;
    border-bottom: 1px solid var(--color-bg-tertiary);
}

.meeting-time,
.meeting-kind {
    color: #6b7373;
}

.alert {
    padding: 12px;
    border-radius: 8px;
    margin-bottom: 8px;
}

.alert-risk {
    background: rgba(220, 38, 38, 0.12);
    border-left: 3px solid #dc2626;
}

.alert-recommendation {
    background: var(--color-primary-bg);
    border-left: 3px solid var(--color-primary);
}

.alert-percentage {
    float: right;
    font-weight: 700;
}

.preview-phase {
    color: var(--color-primary);
    font-weight: 600;
    margin-bottom: 8px;
}

.typing-label {
    display: block;
    color: #6b7373;
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.06em;
}

.typing-caret {
    display: inline-block;
    width: 2px;
    height: 1em;
    margin-left: 1px;
    vertical-align: text-bottom;
    background: var(--color-primary);
    animation: blink 1s step-end infinite;
}

.action-list {
    list-style: none;
    margin: 0;
    padding: 0;
}

.action-list li {
    padding: 6px 0;
}

.action-phase {
    color: var(--color-primary);
    font-weight: 600;
}

.role-list {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    margin-top: auto;
}

.role {
    padding: 4px 10px;
    border-radius: 999px;
    background: var(--color-bg-tertiary);
    font-size: 12px;
}

@keyframes blink {
    50% { opacity: 0; }
}

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.4; }
}

@media (prefers-reduced-motion: reduce) {
    .typing-caret,
    .badge-icon {
        animation: none;
    }
}
"#;

/// Light fallback used with [`DarkMode::Media`].
const LIGHT_SCHEME_CSS: &str = r#"
@media (prefers-color-scheme: light) {
    body {
        background: #ffffff;
        color: #141718;
    }
}
"#;

/// Content Security Policy for the rendered page.
///
/// The page ships no scripts; styles are inline, fonts come from Google Fonts.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; font-src 'self' https://fonts.gstatic.com; script-src 'none'; connect-src 'none';";

/// Complete stylesheet for `theme`: variables, utilities, then layout.
pub fn stylesheet(theme: &Theme) -> String {
    let mut css = theme.css_variables();
    css.push_str(&theme.utility_css());
    css.push_str(LANDING_CSS);
    if theme.dark_mode == DarkMode::Media {
        css.push_str(LIGHT_SCHEME_CSS);
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_come_before_layout() {
        let css = stylesheet(&Theme::default());
        let vars = css.find(":root {").unwrap();
        let body = css.find("body {").unwrap();
        assert!(vars < body);
    }

    #[test]
    fn layout_uses_theme_variables_only() {
        for var in ["--color-primary)", "--color-bg-primary)", "--font-sans)"] {
            assert!(LANDING_CSS.contains(var), "{var}");
        }
        assert!(!LANDING_CSS.contains("#2cb981"));
    }

    #[test]
    fn media_dark_mode_adds_light_scheme() {
        let class_theme = Theme::default();
        assert!(!stylesheet(&class_theme).contains("prefers-color-scheme"));

        let media_theme = Theme {
            dark_mode: DarkMode::Media,
            ..Theme::default()
        };
        assert!(stylesheet(&media_theme).contains("prefers-color-scheme: light"));
    }
}
