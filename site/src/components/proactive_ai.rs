//! Proactive AI section - header plus the grid of feature blocks

use super::{BlockCard, HeadlineLines, SectionBadge};
use crate::content::ProactiveAiContent;
use leptos::prelude::*;

/// The feature-block section.
#[component]
pub fn ProactiveAiSection(content: ProactiveAiContent) -> impl IntoView {
    let ProactiveAiContent {
        badge,
        headline,
        description,
        blocks,
    } = content;

    view! {
        <section id="proactive-ai" class="proactive-ai">
            <div class="container">
                <header class="section-header">
                    <SectionBadge badge=badge />
                    <h2 class="headline">
                        <HeadlineLines headline=headline />
                    </h2>
                    <p class="section-description">{description}</p>
                </header>
                <div class="blocks-grid">
                    {blocks.into_iter().enumerate().map(|(index, block)| view! {
                        <BlockCard block=block featured={index == 0} />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
