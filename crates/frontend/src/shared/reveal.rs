//! Reveal-on-scroll for whole sections.
//!
//! The section is put in its offset state on mount and moved to its resting
//! state by an `IntersectionObserver` once `view_factor` of it is visible.
//! Nothing happens when the user prefers reduced motion.

use contracts::shared::reveal::{should_reveal, RevealConfig};
use contracts::shared::tab_controller::TabPanelObserver;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Read the reduced-motion media query.
pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub struct RevealObserver {
    config: RevealConfig,
}

impl RevealObserver {
    pub fn new(config: RevealConfig) -> Self {
        Self { config }
    }
}

impl TabPanelObserver for RevealObserver {
    fn on_mount(&self, section_id: &str) {
        if !should_reveal(prefers_reduced_motion()) {
            log::debug!("reveal skipped for '{}': reduced motion", section_id);
            return;
        }

        let element = match window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(section_id))
        {
            Some(el) => el,
            None => {
                log::warn!("reveal target '{}' not found", section_id);
                return;
            }
        };

        reveal(&element, &self.config);
    }
}

fn reveal(element: &Element, config: &RevealConfig) {
    let initial = config.initial_style();
    let revealed = config.revealed_style();
    let reset = config.reset;

    let _ = element.set_attribute("style", &initial);

    let on_intersect = {
        let initial = initial.clone();
        let revealed = revealed.clone();
        Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if entry.is_intersecting() {
                        let _ = target.set_attribute("style", &revealed);
                        if !reset {
                            observer.unobserve(&target);
                        }
                    } else if reset {
                        let _ = target.set_attribute("style", &initial);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.view_factor));

    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            on_intersect.forget(); // Keep the closure alive
        }
        Err(_) => {
            // No observer support: show the section right away.
            let _ = element.set_attribute("style", &revealed);
        }
    }
}
