//! Live previews inside feature blocks.

use crate::content::{
    Alert, AnalyticsPreview, BlockContent, KnowledgePreview, MeetingsPreview, TypingText,
    WorkflowPreview,
};
use crate::{class_map, cn};
use leptos::prelude::*;

/// The preview panel for a block, dispatched on its kind.
#[component]
pub fn BlockPreview(content: BlockContent) -> impl IntoView {
    let class = cn!("block-preview", format!("preview-{}", content.kind()));

    let body = match content {
        BlockContent::Meetings(preview) => view! { <Meetings preview=preview /> }.into_any(),
        BlockContent::Analytics(preview) => view! { <Analytics preview=preview /> }.into_any(),
        BlockContent::Knowledge(preview) => view! { <Knowledge preview=preview /> }.into_any(),
        BlockContent::Workflow(preview) => view! { <Workflow preview=preview /> }.into_any(),
    };

    view! { <div class=class>{body}</div> }
}

/// A labelled line with an optional blinking caret.
///
/// The trailing `|` glyph in the text becomes a `.typing-caret` element.
#[component]
pub fn TypingLine(text: TypingText) -> impl IntoView {
    let class = cn!("typing-line", class_map! { "has-cursor" => text.has_cursor });
    let shown = text.display_text().to_owned();
    let caret = text
        .has_cursor
        .then(|| view! { <span class="typing-caret" aria-hidden="true"></span> });

    view! {
        <div class=class>
            <span class="typing-label">{text.label}</span>
            <span class="typing-text">{shown}{caret}</span>
        </div>
    }
}

#[component]
fn Meetings(preview: MeetingsPreview) -> impl IntoView {
    view! {
        <ul class="meeting-list">
            {preview.meetings.into_iter().map(|meeting| view! {
                <li class="meeting">
                    <span class="meeting-title">{meeting.title}</span>
                    <span class="meeting-time">{meeting.time}</span>
                    <span class="meeting-kind">{meeting.kind}</span>
                </li>
            }).collect::<Vec<_>>()}
        </ul>
        <TypingLine text=preview.context />
    }
}

#[component]
fn Analytics(preview: AnalyticsPreview) -> impl IntoView {
    preview
        .alerts
        .into_iter()
        .map(|alert| view! { <AlertCard alert=alert /> })
        .collect::<Vec<_>>()
}

#[component]
fn AlertCard(alert: Alert) -> impl IntoView {
    let class = cn!("alert", format!("alert-{}", alert.kind.as_str()));

    view! {
        <div class=class>
            <strong class="alert-label">{alert.label}</strong>
            {alert.percentage.map(|percentage| view! {
                <span class="alert-percentage">{percentage}</span>
            })}
            <p class="alert-text">{alert.text}</p>
        </div>
    }
}

#[component]
fn Knowledge(preview: KnowledgePreview) -> impl IntoView {
    view! { <TypingLine text=preview.search /> }
}

#[component]
fn Workflow(preview: WorkflowPreview) -> impl IntoView {
    view! {
        <div class="preview-phase">{preview.phase}</div>
        <TypingLine text=preview.context />
    }
}
