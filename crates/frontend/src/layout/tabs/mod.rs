//! Tabbed panel module
//!
//! Contains:
//! - `tabbed_panel` - generic `TabbedPanel` (tab list, highlight bar, panels, keyboard focus)
//! - `page` - `TabPanelPage`, the cross-fading wrapper of a single panel
//! - `observers` - subscribers notified on mount and tab change

pub mod observers;
pub mod page;
pub mod tabbed_panel;

pub use observers::{default_observers, SharedObserver, TabLogObserver};
pub use page::TabPanelPage;
pub use tabbed_panel::TabbedPanel;
