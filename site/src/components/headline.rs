//! Badge and headline pieces shared by every section.

use crate::content::{Badge, Headline};
use leptos::prelude::*;

/// Pill above a headline, with an optional leading glyph.
#[component]
pub fn SectionBadge(badge: Badge) -> impl IntoView {
    view! {
        <span class="badge">
            {badge.icon.map(|icon| view! {
                <span class="badge-icon" aria-hidden="true">{icon}</span>
            })}
            <span class="badge-text">{badge.text}</span>
        </span>
    }
}

/// Headline lines with the accent fragment wrapped in `.headline-accent`.
///
/// Meant to sit inside the caller's `<h1>` or `<h2>`. Empty lines are skipped.
#[component]
pub fn HeadlineLines(headline: Headline) -> impl IntoView {
    headline
        .lines()
        .into_iter()
        .filter(|line| !line.is_empty())
        .map(|line| match headline.split_accent(line) {
            Some((before, accent, after)) => view! {
                <span class="headline-line">
                    {before.to_owned()}
                    <span class="headline-accent">{accent.to_owned()}</span>
                    {after.to_owned()}
                </span>
            }
            .into_any(),
            None => view! { <span class="headline-line">{line.to_owned()}</span> }.into_any(),
        })
        .collect::<Vec<_>>()
}
