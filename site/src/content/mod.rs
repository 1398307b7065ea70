//! Marketing copy for the landing page.
//!
//! Content is plain data: owned strings, serializable with serde so it can be
//! exported as JSON with the field names the site's front end expects
//! (`camelCase`, block previews tagged as `{ "type": ..., "data": ... }`).
//!
//! # Example
//!
//! ```rust
//! use morr_site::content::{hero_content, proactive_ai_content};
//!
//! let hero = hero_content();
//! assert_eq!(hero.cta.primary.href, "/signup");
//!
//! let blocks = proactive_ai_content();
//! assert!(blocks.block("know-everything").is_some());
//! ```

mod hero;
mod proactive_ai;

pub use hero::{hero_content, CallToAction, CtaSet, HeroContent, TrustBar};
pub use proactive_ai::{
    proactive_ai_content, ActionLine, Alert, AlertKind, AnalyticsPreview, BlockContent,
    KnowledgePreview, Meeting, MeetingsPreview, ProactiveAiBlock, ProactiveAiContent,
    WorkflowPreview,
};

use serde::{Deserialize, Serialize};

/// Small pill above a section headline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Badge label
    pub text: String,
    /// Leading glyph, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Two-line headline with a highlighted fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    /// First line
    pub primary: String,
    /// Second line
    pub secondary: String,
    /// Text rendered in the accent color wherever it occurs in a line
    pub accent: String,
}

impl Headline {
    /// Split `line` around the first occurrence of the accent text.
    ///
    /// Returns `(before, accent, after)`, or `None` when the accent is empty
    /// or absent from `line`.
    ///
    /// ```rust
    /// use morr_site::content::Headline;
    ///
    /// let headline = Headline {
    ///     primary: "AI-Powered Outcomes for".into(),
    ///     secondary: "Every Sales Role".into(),
    ///     accent: "Sales".into(),
    /// };
    /// assert_eq!(
    ///     headline.split_accent(&headline.secondary),
    ///     Some(("Every ", "Sales", " Role"))
    /// );
    /// assert_eq!(headline.split_accent(&headline.primary), None);
    /// ```
    pub fn split_accent<'a>(&'a self, line: &'a str) -> Option<(&'a str, &'a str, &'a str)> {
        if self.accent.is_empty() {
            return None;
        }
        let start = line.find(self.accent.as_str())?;
        let end = start + self.accent.len();
        Some((&line[..start], &line[start..end], &line[end..]))
    }

    /// Both lines, in display order.
    pub fn lines(&self) -> [&str; 2] {
        [&self.primary, &self.secondary]
    }
}

/// A labelled line that the page animates as if it were being typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingText {
    /// Caption above the line
    pub label: String,
    /// Typed text; ends with a `|` glyph when `has_cursor` is set
    pub text: String,
    /// Whether a blinking caret follows the text
    #[serde(default)]
    pub has_cursor: bool,
}

impl TypingText {
    /// The text without the trailing cursor glyph, which is rendered as a caret element instead.
    pub fn display_text(&self) -> &str {
        if self.has_cursor {
            self.text.strip_suffix('|').unwrap_or(&self.text)
        } else {
            &self.text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headline(accent: &str) -> Headline {
        Headline {
            primary: "Work Smarter.".into(),
            secondary: "Stay Ahead.".into(),
            accent: accent.into(),
        }
    }

    #[test]
    fn accent_covering_the_whole_line() {
        let h = headline("Stay Ahead.");
        assert_eq!(h.split_accent(&h.secondary), Some(("", "Stay Ahead.", "")));
        assert_eq!(h.split_accent(&h.primary), None);
    }

    #[test]
    fn empty_accent_never_matches() {
        let h = headline("");
        assert_eq!(h.split_accent(&h.primary), None);
    }

    #[test]
    fn accent_splits_on_char_boundaries() {
        let h = Headline {
            primary: "Ünïcode → ready".into(),
            secondary: String::new(),
            accent: "→".into(),
        };
        assert_eq!(h.split_accent(&h.primary), Some(("Ünïcode ", "→", " ready")));
    }

    #[test]
    fn cursor_glyph_is_stripped_only_with_cursor() {
        let mut typing = TypingText {
            label: "During Client Call".into(),
            text: "Cli|".into(),
            has_cursor: true,
        };
        assert_eq!(typing.display_text(), "Cli");
        typing.has_cursor = false;
        assert_eq!(typing.display_text(), "Cli|");
    }

    #[test]
    fn typing_text_uses_camel_case_keys() {
        let typing = TypingText {
            label: "L".into(),
            text: "t|".into(),
            has_cursor: true,
        };
        let json = serde_json::to_value(&typing).unwrap();
        assert_eq!(json["hasCursor"], serde_json::Value::Bool(true));
    }

    #[test]
    fn badge_without_icon_omits_the_key() {
        let badge = Badge {
            text: "Proactive AI".into(),
            icon: None,
        };
        let json = serde_json::to_string(&badge).unwrap();
        assert_eq!(json, r#"{"text":"Proactive AI"}"#);
    }
}
