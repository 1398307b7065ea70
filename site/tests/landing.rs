//! End-to-end rendering through the public API.

use morr_site::content::{hero_content, BlockContent, TypingText, WorkflowPreview};
use morr_site::{class_list, class_map, cn, compose, render_landing, write_landing, ClassValue, SiteConfig};
use pretty_assertions::assert_eq;

#[test]
fn composer_properties_hold_through_the_public_api() {
    assert_eq!(cn!(0, "a", false, "b"), "a b");
    assert_eq!(cn!(vec!["a", "b"], "c"), "a b c");
    assert_eq!(cn!(class_map! { "x" => true, "y" => false, "z" => 1 }), "x z");
    assert_eq!(
        cn!("a", class_list!["b", class_list!["c", "d"]], class_map! { "e" => true }),
        "a b c d e"
    );
    assert_eq!(compose(&[ClassValue::from("solo")]), "solo");
}

#[test]
fn custom_content_is_rendered() {
    let mut config = SiteConfig::default();
    config.hero.headline.primary = "Sell more.".into();
    config.hero.headline.secondary = "Prep less.".into();
    config.hero.headline.accent = "less".into();
    config.hero.trustbar = None;
    config.proactive_ai.blocks.truncate(1);
    config.proactive_ai.blocks[0].content = BlockContent::Workflow(WorkflowPreview {
        phase: "Wrap-up".into(),
        context: TypingText {
            label: "After the call".into(),
            text: "Follow-up drafted".into(),
            has_cursor: false,
        },
    });

    let html = render_landing(&config);

    assert!(html.contains("Sell more."));
    assert!(html.contains(r#"<span class="headline-accent">less</span>"#));
    assert!(!html.contains(r#"class="trustbar""#));
    assert!(html.contains("Wrap-up"));
    assert!(html.contains("Follow-up drafted"));
    assert!(!html.contains(r#"class="typing-caret""#));
    assert!(!html.contains("smarter-decisions"));
}

#[test]
fn hero_copy_is_not_escaped_into_entities() {
    let html = render_landing(&SiteConfig::default());
    let hero = hero_content();
    assert!(html.contains(&hero.description));
    assert!(html.contains("→"));
}

#[test]
fn writes_document_to_nested_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dist").join("index.html");

    write_landing(&path, &SiteConfig::default()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert_eq!(written, render_landing(&SiteConfig::default()));
}

#[test]
fn write_error_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    std::fs::write(&blocker, "not a directory").unwrap();
    let path = blocker.join("index.html");

    let err = write_landing(&path, &SiteConfig::default()).unwrap_err();
    assert!(format!("{err:#}").contains("occupied"));
}
