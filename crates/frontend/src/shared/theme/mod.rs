//! Visual tokens of the tabbed sections.
//!
//! Each section has its own accent; the tokens are handed to the stylesheet
//! as CSS custom properties on the tabbed panel root.

/// Accent palette of a tabbed section.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Palette {
    #[default]
    Navy,
    Grey,
}

impl Palette {
    /// Returns the palette name as a string (used for the CSS class).
    pub fn as_str(&self) -> &'static str {
        match self {
            Palette::Navy => "navy",
            Palette::Grey => "grey",
        }
    }
}

/// Tokens consumed by `TabbedPanel`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TabTheme {
    pub palette: Palette,
    /// Active tab text and highlight bar.
    pub accent: &'static str,
    /// Tab list rule.
    pub border: &'static str,
    /// Hovered / focused tab background.
    pub hover: &'static str,
    /// Minimum tab width in the horizontal strip, in px.
    pub strip_min_width: u32,
}

impl TabTheme {
    pub const fn navy() -> Self {
        Self {
            palette: Palette::Navy,
            accent: "var(--green)",
            border: "var(--lightest-navy)",
            hover: "var(--light-navy)",
            strip_min_width: 120,
        }
    }

    pub const fn grey() -> Self {
        Self {
            palette: Palette::Grey,
            accent: "var(--orange)",
            border: "var(--lightest-grey)",
            hover: "var(--light-grey)",
            strip_min_width: 260,
        }
    }

    /// Inline style declaring the tokens as custom properties.
    pub fn style(&self) -> String {
        format!(
            "--tab-accent: {}; --tab-border: {}; --tab-hover: {}; --tab-strip-min-width: {}px;",
            self.accent, self.border, self.hover, self.strip_min_width
        )
    }
}

impl Default for TabTheme {
    fn default() -> Self {
        Self::navy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_declares_tokens() {
        let style = TabTheme::grey().style();
        assert!(style.contains("--tab-accent: var(--orange);"));
        assert!(style.contains("--tab-strip-min-width: 260px;"));
    }

    #[test]
    fn test_default_is_navy() {
        assert_eq!(TabTheme::default().palette, Palette::Navy);
        assert_eq!(Palette::Grey.as_str(), "grey");
    }
}
