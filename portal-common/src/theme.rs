//! Theme tokens for the portal pages
//!
//! Declarative data only. The web app injects [`Theme::css_variables`] into the
//! document head and stylesheets refer to the custom properties.

use std::fmt::Write;

/// Font stack and color tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub font_mono: Vec<&'static str>,
    pub portal_blue: &'static str,
    pub portal_light_blue: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_mono: vec!["Courier New", "Monaco", "Consolas", "monospace"],
            portal_blue: "#00BFFF",
            portal_light_blue: "#E0F7FF",
        }
    }
}

impl Theme {
    /// CSS `font-family` value for the monospace stack. Names with spaces are quoted.
    pub fn font_mono_family(&self) -> String {
        self.font_mono
            .iter()
            .map(|name| {
                if name.contains(' ') {
                    format!("'{name}'")
                } else {
                    name.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render the tokens as a `:root` block of CSS custom properties.
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        let _ = writeln!(css, "  --font-mono: {};", self.font_mono_family());
        let _ = writeln!(css, "  --portal-blue: {};", self.portal_blue);
        let _ = writeln!(css, "  --portal-light-blue: {};", self.portal_light_blue);
        css.push('}');
        css
    }
}
