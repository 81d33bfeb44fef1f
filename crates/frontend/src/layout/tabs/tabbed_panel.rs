//! TabbedPanel - tab list, highlight bar and panels driven by one
//! [`TabController`].
//!
//! Keyboard focus goes through an explicit arena of button refs indexed by
//! tab position. An arrow key only moves the controller's focus index; the
//! focus effect then either focuses the addressed button or commits the wrap
//! as a second transition, which the same effect settles on its next run.

use super::observers::SharedObserver;
use super::page::TabPanelPage;
use crate::shared::theme::TabTheme;
use contracts::shared::layout::{highlight_transform, Orientation};
use contracts::shared::tab_controller::{FocusTarget, TabController, TabKey};
use leptos::ev;
use leptos::html::Button;
use leptos::prelude::*;

fn current_orientation() -> Orientation {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(Orientation::for_viewport_width)
        .unwrap_or_default()
}

/// Generic tabbed panel.
///
/// # Props
/// - `section_id`   : id of the enclosing section, also the element id prefix
/// - `items`        : one tab per item, in order
/// - `label`        : tab button text of an item
/// - `render_panel` : panel content of an item
/// - `theme`        : accent tokens
/// - `observers`    : notified on mount and on every tab change
#[component]
pub fn TabbedPanel<T, L, P>(
    #[prop(into)] section_id: String,
    #[prop(into)] aria_label: String,
    items: Vec<T>,
    label: L,
    render_panel: P,
    #[prop(optional)] theme: TabTheme,
    #[prop(optional)] observers: Vec<SharedObserver>,
) -> impl IntoView
where
    T: 'static,
    L: Fn(&T) -> String + 'static,
    P: Fn(T) -> AnyView + 'static,
{
    let controller = RwSignal::new(TabController::new(section_id.clone(), items.len()));
    let tab_refs: Vec<NodeRef<Button>> = (0..items.len()).map(|_| NodeRef::new()).collect();

    let orientation = RwSignal::new(current_orientation());
    let resize = window_event_listener(ev::resize, move |_| {
        orientation.set(current_orientation());
    });
    on_cleanup(move || resize.remove());

    // Focus: settle the focus index after every keyboard move.
    let focus_target = Memo::new(move |_| controller.with(TabController::settle));
    {
        let tab_refs = tab_refs.clone();
        Effect::new(move |_| match focus_target.get() {
            FocusTarget::Element(index) => {
                if let Some(button) = tab_refs.get(index).and_then(|r| r.get()) {
                    let _ = button.focus();
                }
            }
            FocusTarget::WrapTo(index) => controller.update(|c| c.apply_wrap(index)),
            FocusTarget::None => {}
        });
    }

    // Mount notification runs once, after the section is in the DOM.
    {
        let observers = observers.clone();
        let section_id = section_id.clone();
        Effect::new(move |_| {
            for observer in &observers {
                observer.on_mount(&section_id);
            }
        });
    }

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if let Some(key) = TabKey::from_key(&ev.key()) {
            ev.prevent_default();
            controller.update(|c| c.on_key(key));
        }
    };

    let buttons = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let attrs = controller.with_untracked(|c| c.tab_attrs(index));
            let observers = observers.clone();
            let section_id = section_id.clone();
            let select = move |_: ev::MouseEvent| {
                let changed = controller.with_untracked(|c| c.active() != index);
                controller.update(|c| {
                    c.select_tab(index);
                });
                if changed {
                    for observer in &observers {
                        observer.on_tab_change(&section_id, index);
                    }
                }
            };

            view! {
                <button
                    node_ref=tab_refs[index]
                    id=attrs.id
                    class="tabbed-panel__tab"
                    class:tabbed-panel__tab--active=move || controller.with(|c| c.is_active(index))
                    role="tab"
                    tabindex=move || controller.with(|c| c.tab_attrs(index).tab_index)
                    aria-selected=move || controller.with(|c| c.is_active(index)).to_string()
                    aria-controls=attrs.controls
                    on:click=select
                >
                    <span>{label(item)}</span>
                </button>
            }
        })
        .collect_view();

    let panels = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let attrs = Signal::derive(move || controller.with(|c| c.panel_attrs(index)));
            let content = render_panel(item);
            view! {
                <TabPanelPage attrs=attrs>
                    {content}
                </TabPanelPage>
            }
        })
        .collect_view();

    let highlight = move || {
        highlight_transform(controller.with(|c| c.active()), orientation.get())
    };

    view! {
        <div class=format!("tabbed-panel tabbed-panel--{}", theme.palette.as_str()) style=theme.style()>
            <div
                class="tabbed-panel__tabs"
                role="tablist"
                aria-label=aria_label
                on:keydown=on_keydown
            >
                {buttons}
                <div class="tabbed-panel__highlight" style:transform=highlight></div>
            </div>
            <div class="tabbed-panel__panels">
                {panels}
            </div>
        </div>
    }
}
