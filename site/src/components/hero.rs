//! Hero section - badge, headline, actions and trust bar

use super::{HeadlineLines, SectionBadge};
use crate::content::{CallToAction, HeroContent, TrustBar};
use crate::{class_map, cn};
use leptos::prelude::*;

/// Visual weight of a call-to-action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaVariant {
    /// Filled button
    Primary,
    /// Outlined button
    Secondary,
    /// Text link
    Tertiary,
}

/// A call-to-action link styled by variant.
#[component]
pub fn CtaLink(action: CallToAction, variant: CtaVariant) -> impl IntoView {
    let class = cn!(
        "btn",
        class_map! {
            "btn-primary" => variant == CtaVariant::Primary,
            "btn-secondary" => variant == CtaVariant::Secondary,
            "btn-tertiary" => variant == CtaVariant::Tertiary,
        }
    );

    view! {
        <a href=action.href class=class>
            {action.text}
            {action.icon.map(|icon| view! {
                <span class="btn-icon" aria-hidden="true">{icon}</span>
            })}
        </a>
    }
}

/// The top-of-page hero.
#[component]
pub fn HeroSection(content: HeroContent) -> impl IntoView {
    let HeroContent {
        badge,
        headline,
        description,
        cta,
        trustbar,
    } = content;

    view! {
        <section id="hero" class="hero">
            <div class="container">
                <SectionBadge badge=badge />
                <h1 class="headline">
                    <HeadlineLines headline=headline />
                </h1>
                <p class="section-description">{description}</p>
                <div class="hero-actions">
                    <CtaLink action=cta.primary variant=CtaVariant::Primary />
                    <CtaLink action=cta.secondary variant=CtaVariant::Secondary />
                    <CtaLink action=cta.tertiary variant=CtaVariant::Tertiary />
                </div>
                {trustbar.map(|bar| view! { <TrustBarStrip bar=bar /> })}
            </div>
        </section>
    }
}

#[component]
fn TrustBarStrip(bar: TrustBar) -> impl IntoView {
    let TrustBar { text, logos } = bar;
    let logos = (!logos.is_empty()).then(|| {
        view! {
            <div class="trustbar-logos">
                {logos.into_iter().map(|src| view! { <img src=src alt="" /> }).collect::<Vec<_>>()}
            </div>
        }
    });

    view! {
        <div class="trustbar">
            <p class="trustbar-text">{text}</p>
            {logos}
        </div>
    }
}
