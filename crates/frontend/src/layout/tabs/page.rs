//! TabPanelPage component - wrapper of a single tab panel
//!
//! Responsible for:
//! - `hidden` / ARIA attributes following the controller
//! - the cross-fade classes when the panel is shown or hidden
//! - lifecycle logging for debugging

use contracts::shared::tab_controller::PanelAttrs;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;

/// Duration of the panel cross-fade.
pub const FADE_TIMEOUT_MS: u32 = 250;

/// Transition phase of a panel; mirrors the usual enter/exit class protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    Entering,
    EnterActive,
    Entered,
    Exiting,
    ExitActive,
    Exited,
}

impl FadePhase {
    pub fn initial(visible: bool) -> Self {
        if visible {
            FadePhase::Entered
        } else {
            FadePhase::Exited
        }
    }

    pub fn start(visible: bool) -> Self {
        if visible {
            FadePhase::Entering
        } else {
            FadePhase::Exiting
        }
    }

    /// Phase after the start phase has been painted.
    pub fn active(self) -> Self {
        match self {
            FadePhase::Entering => FadePhase::EnterActive,
            FadePhase::Exiting => FadePhase::ExitActive,
            other => other,
        }
    }

    /// Phase once the timeout has elapsed.
    pub fn done(self) -> Self {
        match self {
            FadePhase::Entering | FadePhase::EnterActive | FadePhase::Entered => FadePhase::Entered,
            _ => FadePhase::Exited,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            FadePhase::Entering => "fade-enter",
            FadePhase::EnterActive => "fade-enter fade-enter-active",
            FadePhase::Entered => "fade-enter-done",
            FadePhase::Exiting => "fade-exit",
            FadePhase::ExitActive => "fade-exit fade-exit-active",
            FadePhase::Exited => "fade-exit-done",
        }
    }
}

/// One panel of a [`TabbedPanel`](super::TabbedPanel).
///
/// Only the active panel is visible and reachable with the keyboard; the
/// rest are `hidden`, `aria-hidden` and `tabindex="-1"`.
#[component]
pub fn TabPanelPage(
    #[prop(into)] attrs: Signal<PanelAttrs>,
    children: Children,
) -> impl IntoView {
    let panel_id = attrs.with_untracked(|a| a.id.clone());
    let labelled_by = attrs.with_untracked(|a| a.labelled_by.clone());
    let visible = Memo::new(move |_| attrs.with(|a| !a.hidden));

    let phase = RwSignal::new(FadePhase::initial(visible.get_untracked()));
    let generation = StoredValue::new(0u32);

    Effect::new(move |prev: Option<bool>| {
        let now = visible.get();
        if prev.is_some_and(|was| was != now) {
            generation.update_value(|g| *g = g.wrapping_add(1));
            let current = generation.get_value();
            let start = FadePhase::start(now);
            phase.set(start);

            leptos::task::spawn_local(async move {
                TimeoutFuture::new(0).await;
                if generation.get_value() != current {
                    return;
                }
                phase.set(start.active());

                TimeoutFuture::new(FADE_TIMEOUT_MS).await;
                if generation.get_value() != current {
                    return;
                }
                phase.set(start.done());
            });
        }
        now
    });

    log!("🔨 TabPanelPage CREATED for: '{}'", panel_id);
    let id_for_cleanup = panel_id.clone();
    on_cleanup(move || {
        log!("💥 TabPanelPage DESTROYED for: '{}'", id_for_cleanup);
    });

    view! {
        <div
            id=panel_id
            class=move || format!("tabbed-panel__panel {}", phase.get().class())
            role="tabpanel"
            aria-labelledby=labelled_by
            aria-hidden=move || attrs.with(|a| a.aria_hidden.to_string())
            tabindex=move || attrs.with(|a| a.tab_index)
            hidden=move || attrs.with(|a| a.hidden)
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_sequence() {
        let start = FadePhase::start(true);
        assert_eq!(start.class(), "fade-enter");
        assert_eq!(start.active().class(), "fade-enter fade-enter-active");
        assert_eq!(start.active().done(), FadePhase::Entered);
    }

    #[test]
    fn test_exit_sequence() {
        let start = FadePhase::start(false);
        assert_eq!(start.active(), FadePhase::ExitActive);
        assert_eq!(start.done().class(), "fade-exit-done");
    }

    #[test]
    fn test_initial_phase_has_no_animation() {
        assert_eq!(FadePhase::initial(true), FadePhase::Entered);
        assert_eq!(FadePhase::initial(false), FadePhase::Exited);
    }
}
