//! Leptos UI components for the landing page.
//!
//! Each component is a Leptos `#[component]` function taking owned content,
//! so sections can be rendered on their own or composed into a custom page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! ├── HeroSection
//! │   ├── SectionBadge
//! │   ├── HeadlineLines
//! │   └── CtaLink (primary, secondary, tertiary)
//! └── ProactiveAiSection
//!     ├── SectionBadge
//!     ├── HeadlineLines
//!     └── BlockCard (per block)
//!         └── BlockPreview
//!             └── TypingLine
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_landing`], but can be
//! rendered directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use morr_site::components::HeroSection;
//! use morr_site::content::hero_content;
//!
//! let html = view! { <HeroSection content=hero_content() /> }.to_html();
//! ```

mod block;
mod document;
mod headline;
mod hero;
mod preview;
mod proactive_ai;

pub use block::BlockCard;
pub use document::LandingDocument;
pub use headline::{HeadlineLines, SectionBadge};
pub use hero::{CtaLink, CtaVariant, HeroSection};
pub use preview::{BlockPreview, TypingLine};
pub use proactive_ai::ProactiveAiSection;
