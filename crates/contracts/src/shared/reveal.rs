//! Reveal-on-scroll configuration.
//!
//! A section starts offset and transparent, and transitions to its resting
//! state the first time enough of it enters the viewport.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealOrigin {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevealConfig {
    pub origin: RevealOrigin,
    /// Travel distance in pixels.
    pub distance: u32,
    /// Transition length in milliseconds.
    pub duration: u32,
    /// Milliseconds before the transition starts.
    pub delay: u32,
    pub opacity: f64,
    pub scale: f64,
    pub easing: String,
    /// Replay every time the section re-enters the viewport.
    pub reset: bool,
    /// Visible fraction that triggers the reveal.
    pub view_factor: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            origin: RevealOrigin::Bottom,
            distance: 20,
            duration: 500,
            delay: 200,
            opacity: 0.0,
            scale: 1.0,
            easing: "cubic-bezier(0.645, 0.045, 0.355, 1)".to_string(),
            reset: false,
            view_factor: 0.25,
        }
    }
}

impl RevealConfig {
    fn offset_transform(&self) -> String {
        let d = self.distance;
        match self.origin {
            RevealOrigin::Bottom => format!("translateY({}px)", d),
            RevealOrigin::Top => format!("translateY(-{}px)", d),
            RevealOrigin::Left => format!("translateX(-{}px)", d),
            RevealOrigin::Right => format!("translateX({}px)", d),
        }
    }

    /// Inline style applied on mount, before the section is visible.
    pub fn initial_style(&self) -> String {
        format!(
            "opacity: {}; transform: {} scale({});",
            self.opacity,
            self.offset_transform(),
            self.scale
        )
    }

    /// Inline style applied once the section is in view.
    pub fn revealed_style(&self) -> String {
        format!(
            "opacity: 1; transform: translate(0, 0) scale(1); \
             transition: opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
            d = self.duration,
            e = self.easing,
            delay = self.delay
        )
    }
}

/// Whether the on-mount reveal should run at all.
pub fn should_reveal(prefers_reduced_motion: bool) -> bool {
    !prefers_reduced_motion
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reduced_motion_skips_reveal() {
        assert!(!should_reveal(true));
        assert!(should_reveal(false));
    }

    #[test]
    fn test_default_styles() {
        let config = RevealConfig::default();
        assert_eq!(
            config.initial_style(),
            "opacity: 0; transform: translateY(20px) scale(1);"
        );
        let revealed = config.revealed_style();
        assert!(revealed.starts_with("opacity: 1;"));
        assert!(revealed.contains("500ms cubic-bezier(0.645, 0.045, 0.355, 1) 200ms"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: RevealConfig =
            serde_json::from_value(json!({ "origin": "left", "distance": 40 }))
                .unwrap();
        assert_eq!(config.origin, RevealOrigin::Left);
        assert_eq!(config.view_factor, 0.25);
        assert!(config.initial_style().contains("translateX(-40px)"));
    }

    #[test]
    fn test_timing_keys_are_milliseconds() {
        let config: RevealConfig =
            serde_json::from_value(json!({ "duration": 800, "delay": 0, "viewFactor": 0.5 }))
                .unwrap();
        assert_eq!((config.duration, config.delay), (800, 0));
        assert_eq!(config.view_factor, 0.5);
        assert!(config.revealed_style().contains("opacity 800ms"));
        assert!(config.revealed_style().contains(") 0ms"));
    }
}
