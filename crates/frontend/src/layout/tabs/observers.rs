use crate::shared::reveal::RevealObserver;
use contracts::shared::reveal::RevealConfig;
use contracts::shared::tab_controller::TabPanelObserver;
use leptos::logging::log;
use std::sync::Arc;

pub type SharedObserver = Arc<dyn TabPanelObserver + Send + Sync>;

/// Traces panel lifecycle to the browser console.
pub struct TabLogObserver;

impl TabPanelObserver for TabLogObserver {
    fn on_mount(&self, section_id: &str) {
        log!("🔨 TabbedPanel MOUNTED: '{}'", section_id);
    }

    fn on_tab_change(&self, section_id: &str, index: usize) {
        log!("🔀 '{}' switched to tab {}", section_id, index);
    }
}

/// Reveal-on-scroll plus logging, the set every section uses.
pub fn default_observers(reveal: &RevealConfig) -> Vec<SharedObserver> {
    vec![
        Arc::new(RevealObserver::new(reveal.clone())) as SharedObserver,
        Arc::new(TabLogObserver) as SharedObserver,
    ]
}
