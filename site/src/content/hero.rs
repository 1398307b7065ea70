//! Hero section copy.

use super::{Badge, Headline};
use serde::{Deserialize, Serialize};

/// A call-to-action link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Button label
    pub text: String,
    /// Target URL or path
    pub href: String,
    /// Trailing glyph, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// The three hero actions, in decreasing visual weight.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaSet {
    /// Filled button
    pub primary: CallToAction,
    /// Outlined button
    pub secondary: CallToAction,
    /// Text link
    pub tertiary: CallToAction,
}

/// Social-proof strip under the hero actions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustBar {
    /// Caption
    pub text: String,
    /// Logo image URLs
    #[serde(default)]
    pub logos: Vec<String>,
}

/// Everything the hero section renders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Pill above the headline
    pub badge: Badge,
    /// Two-line headline
    pub headline: Headline,
    /// Lead paragraph
    pub description: String,
    /// Action buttons
    pub cta: CtaSet,
    /// Optional social-proof strip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trustbar: Option<TrustBar>,
}

/// The Morr.ai hero copy.
pub fn hero_content() -> HeroContent {
    HeroContent {
        badge: Badge {
            text: "AI that works before you ask".into(),
            icon: Some("●".into()),
        },
        headline: Headline {
            primary: "Work Smarter.".into(),
            secondary: "Stay Ahead.".into(),
            accent: "Stay Ahead.".into(),
        },
        description: "Morr.ai connects seamlessly with your existing tools, learns your workflow, \
                      and proactively anticipates your needs. From preparing meeting briefs to \
                      delivering real-time insights and automating tasks."
            .into(),
        cta: CtaSet {
            primary: CallToAction {
                text: "Get Early Access".into(),
                href: "/signup".into(),
                icon: Some("→".into()),
            },
            secondary: CallToAction {
                text: "Request Demo".into(),
                href: "/demo".into(),
                icon: None,
            },
            tertiary: CallToAction {
                text: "Join Waitlist".into(),
                href: "/waitlist".into(),
                icon: None,
            },
        },
        trustbar: Some(TrustBar {
            text: "Trusted by forward-thinking teams".into(),
            logos: Vec::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn description_is_a_single_paragraph() {
        let hero = hero_content();
        assert!(hero.description.starts_with("Morr.ai connects seamlessly"));
        assert!(hero.description.contains("workflow, and proactively"));
        assert!(!hero.description.contains("  "));
    }

    #[test]
    fn accent_is_the_second_line() {
        let hero = hero_content();
        assert_eq!(hero.headline.accent, hero.headline.secondary);
    }

    #[test]
    fn serializes_with_front_end_keys() {
        let json = serde_json::to_value(hero_content()).unwrap();
        assert_eq!(json["badge"]["icon"], "●");
        assert_eq!(json["cta"]["tertiary"]["href"], "/waitlist");
        assert!(json["cta"]["secondary"].get("icon").is_none());
        assert_eq!(json["trustbar"]["logos"], serde_json::json!([]));
    }

    #[test]
    fn round_trips_through_json() {
        let hero = hero_content();
        let text = serde_json::to_string(&hero).unwrap();
        let back: HeroContent = serde_json::from_str(&text).unwrap();
        assert_eq!(back, hero);
    }
}
