//! Page-level settings for [`crate::render_landing`].

use crate::content::{hero_content, proactive_ai_content, HeroContent, ProactiveAiContent};
use crate::theme::Theme;

/// Google Fonts stylesheet for the default font stack.
pub const DM_SANS_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=DM+Sans:wght@400;500;600;700&display=swap";

/// Everything needed to render the landing page.
///
/// `SiteConfig::default()` is the production Morr.ai page; override fields
/// for previews:
///
/// ```rust
/// use morr_site::SiteConfig;
///
/// let config = SiteConfig {
///     title: "Morr.ai (preview)".into(),
///     font_stylesheet: None,
///     ..Default::default()
/// };
/// assert_eq!(config.lang, "en");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// `<title>` text
    pub title: String,
    /// `lang` attribute of the document
    pub lang: String,
    /// `<meta name="description">` content
    pub description: String,
    /// External font stylesheet; `None` relies on the local font stack
    pub font_stylesheet: Option<String>,
    /// Colors, fonts and dark-mode strategy
    pub theme: Theme,
    /// Hero copy
    pub hero: HeroContent,
    /// Proactive AI copy
    pub proactive_ai: ProactiveAiContent,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let hero = hero_content();
        Self {
            title: "Morr.ai - AI that works before you ask".into(),
            lang: "en".into(),
            description: hero.description.clone(),
            font_stylesheet: Some(DM_SANS_STYLESHEET.into()),
            theme: Theme::default(),
            hero,
            proactive_ai: proactive_ai_content(),
        }
    }
}
