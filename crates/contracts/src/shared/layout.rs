//! Viewport-dependent geometry of the tab strip.

/// At or below this width the tab list is a horizontal strip.
pub const HORIZONTAL_BREAKPOINT_PX: f64 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn for_viewport_width(width: f64) -> Self {
        if width <= HORIZONTAL_BREAKPOINT_PX {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// CSS transform placing the highlight bar under the active tab.
pub fn highlight_transform(active: usize, orientation: Orientation) -> String {
    match orientation {
        Orientation::Vertical => format!("translateY(calc({} * var(--tab-height)))", active),
        Orientation::Horizontal => format!("translateX(calc({} * var(--tab-width)))", active),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_breakpoint() {
        assert_eq!(Orientation::for_viewport_width(1280.0), Orientation::Vertical);
        assert_eq!(Orientation::for_viewport_width(600.0), Orientation::Horizontal);
        assert_eq!(Orientation::for_viewport_width(375.0), Orientation::Horizontal);
    }

    #[test]
    fn test_highlight_transform() {
        assert_eq!(
            highlight_transform(2, Orientation::Vertical),
            "translateY(calc(2 * var(--tab-height)))"
        );
        assert_eq!(
            highlight_transform(0, Orientation::Horizontal),
            "translateX(calc(0 * var(--tab-width)))"
        );
    }
}
