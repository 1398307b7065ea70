//! Root document component - the complete HTML page

use super::{HeroSection, ProactiveAiSection};
use crate::config::SiteConfig;
use crate::styles::{stylesheet, CSP};
use crate::theme::DarkMode;
use crate::{class_map, cn};
use leptos::prelude::*;

/// The complete landing page document
#[component]
pub fn LandingDocument(config: SiteConfig) -> impl IntoView {
    let SiteConfig {
        title,
        lang,
        description,
        font_stylesheet,
        theme,
        hero,
        proactive_ai,
    } = config;

    // class strategy needs the marker on <html>; media strategy leaves it bare
    let html_class = cn!(class_map! { "dark" => theme.dark_mode == DarkMode::Class });
    let css = stylesheet(&theme);

    view! {
        <html lang=lang class=html_class>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=description />
                <title>{title}</title>
                {font_stylesheet.map(|href| view! { <link rel="stylesheet" href=href /> })}
                <style>{css}</style>
            </head>
            <body class="bg-bg-primary">
                <main>
                    <HeroSection content=hero />
                    <ProactiveAiSection content=proactive_ai />
                </main>
            </body>
        </html>
    }
}
