//! Feature block card

use super::BlockPreview;
use crate::content::ProactiveAiBlock;
use crate::{class_map, cn};
use leptos::prelude::*;

/// One Proactive AI block: heading, preview, action lines and roles.
///
/// `featured` highlights the card's border; the section sets it on the first block.
#[component]
pub fn BlockCard(
    block: ProactiveAiBlock,
    #[prop(default = false)]
    featured: bool,
) -> impl IntoView {
    let class = cn!(
        "block-card",
        format!("block-{}", block.content.kind()),
        class_map! { "is-featured" => featured }
    );

    let actions = block
        .action_lines()
        .map(|line| {
            let phase = line.phase.map(|phase| format!("{phase}: "));
            let text = line.text.to_owned();
            view! {
                <li>
                    {phase.map(|phase| view! { <span class="action-phase">{phase}</span> })}
                    {text}
                </li>
            }
        })
        .collect::<Vec<_>>();

    let ProactiveAiBlock {
        id,
        title,
        description,
        icon,
        content,
        roles,
        ..
    } = block;

    view! {
        <article id=id class=class>
            <h3 class="block-title">
                <span class="block-icon" aria-hidden="true">{icon}</span>
                {title}
            </h3>
            <p class="block-description">{description}</p>
            <BlockPreview content=content />
            <ul class="action-list">{actions}</ul>
            <div class="role-list">
                {roles.into_iter().map(|role| view! { <span class="role">{role}</span> }).collect::<Vec<_>>()}
            </div>
        </article>
    }
}
