//! # morr-site
//!
//! Leptos SSR renderer for the Morr.ai landing page.
//!
//! The page is built from typed content, a theme and a small class-name
//! composer, and rendered to a static HTML string with
//! [Leptos](https://leptos.dev/) server-side rendering.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration needed
//! - **Typed Content** - Hero and feature copy as serde-serializable structs
//! - **Themeable** - Colors and fonts become CSS custom properties and utilities
//! - **Class Composition** - [`cn!`] joins literal, conditional and nested classes
//!
//! ## Quick Start
//!
//! ```rust
//! use morr_site::{render_landing, SiteConfig};
//!
//! let html = render_landing(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Get Early Access"));
//! ```
//!
//! ## Architecture
//!
//! - [`classnames`] - [`ClassValue`], [`compose`] and the [`cn!`] family of macros
//! - [`content`] - Marketing copy
//! - [`theme`] - Styling configuration
//! - [`styles`] - Layout CSS and stylesheet assembly
//! - [`components`] - Leptos UI components
//! - [`config`] - Page-level settings
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classnames;
pub mod components;
pub mod config;
pub mod content;
pub mod styles;
pub mod theme;

pub use classnames::{compose, ClassValue};
pub use config::SiteConfig;

use anyhow::{Context, Result};
use components::LandingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Render the complete landing page.
///
/// Returns an HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use morr_site::{render_landing, SiteConfig};
///
/// let config = SiteConfig {
///     title: "Preview".into(),
///     ..Default::default()
/// };
/// let html = render_landing(&config);
/// assert!(html.contains("<title>Preview</title>"));
/// ```
pub fn render_landing(config: &SiteConfig) -> String {
    debug!(
        title = %config.title,
        blocks = config.proactive_ai.blocks.len(),
        dark_mode = ?config.theme.dark_mode,
        "rendering landing page"
    );

    let doc = view! { <LandingDocument config=config.clone() /> };
    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the landing page and write it to `path`, creating parent directories.
pub fn write_landing(path: impl AsRef<Path>, config: &SiteConfig) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let html = render_landing(config);
    fs::write(path, &html).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = html.len(), "landing page written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DarkMode, Theme};

    #[test]
    fn renders_default_document() {
        let html = render_landing(&SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains(r#"lang="en""#));
        assert!(html.contains("Morr.ai - AI that works before you ask"));
    }

    #[test]
    fn renders_hero_copy_and_actions() {
        let html = render_landing(&SiteConfig::default());

        assert!(html.contains("AI that works before you ask"));
        assert!(html.contains("Work Smarter."));
        assert!(html.contains("headline-accent"));
        assert!(html.contains(r#"href="/signup""#));
        assert!(html.contains(r#"href="/demo""#));
        assert!(html.contains(r#"href="/waitlist""#));
        assert!(html.contains(r#"class="btn btn-primary""#));
        assert!(html.contains(r#"class="btn btn-tertiary""#));
        assert!(html.contains("Trusted by forward-thinking teams"));
        // no logos configured
        assert!(!html.contains(r#"class="trustbar-logos""#));
    }

    #[test]
    fn renders_every_block() {
        let config = SiteConfig::default();
        let html = render_landing(&config);

        for block in &config.proactive_ai.blocks {
            assert!(html.contains(&format!(r#"id="{}""#, block.id)), "{}", block.id);
        }
        assert!(html.contains("Make Smarter Decisions"));
        assert!(html.contains("alert alert-risk"));
        assert!(html.contains("87%"));
        assert!(html.contains("block-card block-meetings is-featured"));
        assert!(html.contains(r#"class="block-card block-analytics""#));
        assert!(html.contains("typing-caret"));
        assert!(!html.contains("New f|"));
    }

    #[test]
    fn class_dark_mode_marks_root() {
        let html = render_landing(&SiteConfig::default());
        assert!(html.contains(r#"class="dark""#));

        let config = SiteConfig {
            theme: Theme {
                dark_mode: DarkMode::Media,
                ..Theme::default()
            },
            ..Default::default()
        };
        let html = render_landing(&config);
        assert!(!html.contains(r#"class="dark""#));
        assert!(html.contains("prefers-color-scheme: light"));
    }

    #[test]
    fn theme_variables_are_inlined() {
        let html = render_landing(&SiteConfig::default());
        assert!(html.contains("--color-primary: #2cb981;"));
        assert!(html.contains(".bg-primary { background-color: #2cb981; }"));
    }

    #[test]
    fn font_stylesheet_is_optional() {
        let html = render_landing(&SiteConfig::default());
        assert!(html.contains("fonts.googleapis.com/css2?family=DM+Sans"));

        let config = SiteConfig {
            font_stylesheet: None,
            ..Default::default()
        };
        assert!(!render_landing(&config).contains(r#"rel="stylesheet""#));
    }
}
