//! Styling configuration: fonts, color palettes and per-utility colors.
//!
//! A [`Theme`] is turned into CSS in two ways:
//!
//! - [`Theme::css_variables`] declares every palette shade and the font stack
//!   as custom properties on `:root`;
//! - [`Theme::utility_css`] emits one rule per utility color entry
//!   (`.bg-primary`, `.text-primary-dark`, `.border-primary`, ...).
//!
//! [`Theme::to_json`] exports the same configuration in the shape of a
//! Tailwind config object so the front-end build can consume it.
//!
//! # Example
//!
//! ```rust
//! use morr_site::theme::Theme;
//!
//! let theme = Theme::default();
//! assert_eq!(theme.palette_color("primary", "DEFAULT"), Some("#2cb981"));
//! assert!(theme.utility_css().contains(".bg-bg-primary { background-color: #141718; }"));
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt::Write as _;

/// Shade name that maps to the bare palette name (`primary`, not `primary-DEFAULT`).
pub const DEFAULT_SHADE: &str = "DEFAULT";

/// How dark styles are activated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// A `dark` class on the root element
    #[default]
    Class,
    /// The `prefers-color-scheme` media query
    Media,
}

/// Ordered name → CSS color map.
///
/// Insertion order is kept so generated CSS and JSON are deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorScale {
    entries: Vec<(String, String)>,
}

impl ColorScale {
    /// Empty scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry, keeping the position of a replaced one.
    pub fn with(mut self, name: impl Into<String>, color: impl Into<String>) -> Self {
        self.insert(name, color);
        self
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, color: impl Into<String>) {
        let name = name.into();
        let color = color.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((name, color)),
        }
    }

    /// Color for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, color)| color.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), color.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scale has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, color) in &self.entries {
            map.serialize_entry(name, color)?;
        }
        map.end()
    }
}

/// A named group of shades, e.g. `primary` with `DEFAULT`, `dark` and `bg`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette name
    pub name: String,
    /// Shades
    pub shades: ColorScale,
}

/// The site's styling configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Source globs scanned for class names by the front-end build
    pub content: Vec<String>,
    /// Dark-mode strategy
    pub dark_mode: DarkMode,
    /// Sans-serif font stack, most preferred first
    pub font_sans: Vec<String>,
    /// Color palettes
    pub colors: Vec<Palette>,
    /// `.bg-*` utilities
    pub background_color: ColorScale,
    /// `.text-*` utilities
    pub text_color: ColorScale,
    /// `.border-*` utilities
    pub border_color: ColorScale,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            content: vec!["./src/**/*.{html,js,svelte,ts}".into()],
            dark_mode: DarkMode::Class,
            font_sans: [
                "DM Sans",
                "ui-sans-serif",
                "system-ui",
                "-apple-system",
                "BlinkMacSystemFont",
                "Segoe UI",
                "Roboto",
                "Helvetica Neue",
                "Arial",
                "Noto Sans",
                "sans-serif",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            colors: vec![
                Palette {
                    name: "primary".into(),
                    shades: ColorScale::new()
                        .with(DEFAULT_SHADE, "#2cb981")
                        .with("dark", "#2a9d53")
                        .with("bg", "#152320"),
                },
                Palette {
                    name: "bg".into(),
                    shades: ColorScale::new()
                        .with("primary", "#141718")
                        .with("secondary", "#1a1d1e")
                        .with("tertiary", "#2a2d2e"),
                },
            ],
            background_color: ColorScale::new()
                .with("primary", "#2cb981")
                .with("primary-dark", "#2a9d53")
                .with("primary-bg", "#152320")
                .with("bg-primary", "#141718")
                .with("bg-secondary", "#1a1d1e")
                .with("bg-tertiary", "#2a2d2e"),
            text_color: ColorScale::new()
                .with("primary", "#2cb981")
                .with("primary-dark", "#2a9d53"),
            border_color: ColorScale::new()
                .with("primary", "#2cb981")
                .with("primary-dark", "#2a9d53"),
        }
    }
}

impl Theme {
    /// Resolve a palette shade; `DEFAULT` is the palette's base color.
    pub fn palette_color(&self, palette: &str, shade: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|p| p.name == palette)
            .and_then(|p| p.shades.get(shade))
    }

    /// `font-family` value for the sans stack.
    ///
    /// Family names containing spaces are quoted; generic families are not.
    pub fn font_family_sans(&self) -> String {
        self.font_sans
            .iter()
            .map(|family| {
                if family.contains(' ') {
                    format!("'{family}'")
                } else {
                    family.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `:root` block declaring the font stack and every palette shade.
    ///
    /// Shades are named `--color-<palette>` for `DEFAULT` and
    /// `--color-<palette>-<shade>` otherwise.
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        let _ = writeln!(css, "    --font-sans: {};", self.font_family_sans());
        for palette in &self.colors {
            for (shade, color) in palette.shades.iter() {
                let _ = writeln!(
                    css,
                    "    --color-{}: {};",
                    shade_name(&palette.name, shade),
                    color
                );
            }
        }
        css.push_str("}\n");
        css
    }

    /// One rule per utility color entry, background first, then text, then border.
    pub fn utility_css(&self) -> String {
        let groups = [
            ("bg", "background-color", &self.background_color),
            ("text", "color", &self.text_color),
            ("border", "border-color", &self.border_color),
        ];
        let mut css = String::new();
        for (prefix, property, scale) in groups {
            for (name, color) in scale.iter() {
                let _ = writeln!(css, ".{prefix}-{name} {{ {property}: {color}; }}");
            }
        }
        css
    }

    /// Export as a Tailwind-style config object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&TailwindConfig::from(self))
    }
}

fn shade_name(palette: &str, shade: &str) -> String {
    if shade == DEFAULT_SHADE {
        palette.to_owned()
    } else {
        format!("{palette}-{shade}")
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct TailwindConfig<'a> {
    content: &'a [String],
    dark_mode: DarkMode,
    theme: TailwindTheme<'a>,
    plugins: [(); 0],
}

#[derive(serde::Serialize)]
struct TailwindTheme<'a> {
    extend: TailwindExtend<'a>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct TailwindExtend<'a> {
    font_family: FontFamily<'a>,
    colors: Palettes<'a>,
    background_color: &'a ColorScale,
    text_color: &'a ColorScale,
    border_color: &'a ColorScale,
}

#[derive(serde::Serialize)]
struct FontFamily<'a> {
    sans: &'a [String],
}

struct Palettes<'a>(&'a [Palette]);

impl Serialize for Palettes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for palette in self.0 {
            map.serialize_entry(&palette.name, &palette.shades)?;
        }
        map.end()
    }
}

impl<'a> From<&'a Theme> for TailwindConfig<'a> {
    fn from(theme: &'a Theme) -> Self {
        Self {
            content: &theme.content,
            dark_mode: theme.dark_mode,
            theme: TailwindTheme {
                extend: TailwindExtend {
                    font_family: FontFamily {
                        sans: &theme.font_sans,
                    },
                    colors: Palettes(&theme.colors),
                    background_color: &theme.background_color,
                    text_color: &theme.text_color,
                    border_color: &theme.border_color,
                },
            },
            plugins: [],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn palette_lookup() {
        let theme = Theme::default();
        assert_eq!(theme.palette_color("primary", "dark"), Some("#2a9d53"));
        assert_eq!(theme.palette_color("bg", "tertiary"), Some("#2a2d2e"));
        assert_eq!(theme.palette_color("bg", DEFAULT_SHADE), None);
        assert_eq!(theme.palette_color("accent", "dark"), None);
    }

    #[test]
    fn font_stack_quotes_multi_word_families() {
        let theme = Theme::default();
        let stack = theme.font_family_sans();
        assert!(stack.starts_with("'DM Sans', ui-sans-serif, system-ui"));
        assert!(stack.ends_with("'Noto Sans', sans-serif"));
    }

    #[test]
    fn css_variables_name_default_shade_after_palette() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("    --color-primary: #2cb981;\n"));
        assert!(css.contains("    --color-primary-bg: #152320;\n"));
        assert!(css.contains("    --color-bg-secondary: #1a1d1e;\n"));
        assert!(css.trim_end().ends_with('}'));
    }

    #[test]
    fn utility_rules_follow_insertion_order() {
        let theme = Theme {
            background_color: ColorScale::new().with("b", "#000").with("a", "#111"),
            text_color: ColorScale::new(),
            border_color: ColorScale::new().with("a", "#222"),
            ..Theme::default()
        };
        assert_eq!(
            theme.utility_css(),
            ".bg-b { background-color: #000; }\n\
             .bg-a { background-color: #111; }\n\
             .border-a { border-color: #222; }\n"
        );
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut scale = ColorScale::new().with("a", "#000").with("b", "#111");
        scale.insert("a", "#fff");
        let entries: Vec<_> = scale.iter().collect();
        assert_eq!(entries, vec![("a", "#fff"), ("b", "#111")]);
        assert_eq!(scale.len(), 2);
    }

    #[test]
    fn json_export_has_tailwind_shape() {
        let json = Theme::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["darkMode"], "class");
        assert_eq!(value["content"][0], "./src/**/*.{html,js,svelte,ts}");
        assert_eq!(value["theme"]["extend"]["fontFamily"]["sans"][0], "DM Sans");
        assert_eq!(value["theme"]["extend"]["colors"]["primary"]["DEFAULT"], "#2cb981");
        assert_eq!(value["theme"]["extend"]["colors"]["bg"]["primary"], "#141718");
        assert_eq!(value["theme"]["extend"]["backgroundColor"]["primary-bg"], "#152320");
        assert_eq!(value["theme"]["extend"]["borderColor"]["primary-dark"], "#2a9d53");
        assert_eq!(value["plugins"], serde_json::json!([]));
    }

    #[test]
    fn json_export_keeps_palette_order() {
        let json = Theme::default().to_json().unwrap();
        let primary = json.find("\"primary\": {").unwrap();
        let bg = json.find("\"bg\": {").unwrap();
        assert!(primary < bg);
    }
}
