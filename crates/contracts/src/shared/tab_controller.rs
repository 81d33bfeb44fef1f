//! Tabbed panel state machine.
//!
//! Holds the active tab, the keyboard focus index and the tab count. The
//! focus index may leave the valid range for one transition: `settle()`
//! reports the wrap and the owner applies it as a second transition.

/// Direction of a keyboard focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    Previous,
    Next,
}

impl TabKey {
    /// Map a `KeyboardEvent.key` value. Left/right serve the horizontal strip.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "Up" | "ArrowLeft" | "Left" => Some(TabKey::Previous),
            "ArrowDown" | "Down" | "ArrowRight" | "Right" => Some(TabKey::Next),
            _ => None,
        }
    }
}

/// What the view should do after a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Nothing to focus (focus unset or no tabs).
    None,
    /// Move DOM focus to the tab button at this index.
    Element(usize),
    /// Focus fell off one end; commit this index as the next transition.
    WrapTo(usize),
}

/// Attributes of one tab button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabAttrs {
    pub id: String,
    pub controls: String,
    pub selected: bool,
    pub tab_index: &'static str,
}

/// Attributes of one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelAttrs {
    pub id: String,
    pub labelled_by: String,
    pub hidden: bool,
    pub aria_hidden: bool,
    pub tab_index: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabController {
    prefix: String,
    len: usize,
    active: usize,
    focus: Option<isize>,
}

impl TabController {
    /// `prefix` keeps element ids unique when several tab lists share a page.
    pub fn new(prefix: impl Into<String>, len: usize) -> Self {
        Self {
            prefix: prefix.into(),
            len,
            active: 0,
            focus: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn focus(&self) -> Option<isize> {
        self.focus
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Activate tab `index`. Returns `false` (and changes nothing) when out of range.
    pub fn select_tab(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        self.focus = Some(index as isize);
        true
    }

    /// Move focus one step without correcting the range.
    ///
    /// An unset focus starts from the active tab, which is the only tab
    /// reachable with the Tab key.
    pub fn on_key(&mut self, key: TabKey) {
        let current = self.focus.unwrap_or(self.active as isize);
        self.focus = Some(match key {
            TabKey::Previous => current - 1,
            TabKey::Next => current + 1,
        });
    }

    /// Inspect the current focus index.
    pub fn settle(&self) -> FocusTarget {
        let Some(focus) = self.focus else {
            return FocusTarget::None;
        };
        if self.len == 0 {
            return FocusTarget::None;
        }
        if focus < 0 {
            FocusTarget::WrapTo(self.len - 1)
        } else if focus as usize >= self.len {
            FocusTarget::WrapTo(0)
        } else {
            FocusTarget::Element(focus as usize)
        }
    }

    /// Commit a wrap reported by `settle()`.
    pub fn apply_wrap(&mut self, index: usize) {
        self.focus = Some(index as isize);
    }

    /// Key press with the wrap applied inline. Returns the tab to focus.
    pub fn step(&mut self, key: TabKey) -> Option<usize> {
        self.on_key(key);
        loop {
            match self.settle() {
                FocusTarget::None => return None,
                FocusTarget::Element(index) => return Some(index),
                FocusTarget::WrapTo(index) => self.apply_wrap(index),
            }
        }
    }

    pub fn tab_id(&self, index: usize) -> String {
        format!("tab-{}-{}", self.prefix, index)
    }

    pub fn panel_id(&self, index: usize) -> String {
        format!("panel-{}-{}", self.prefix, index)
    }

    pub fn tab_attrs(&self, index: usize) -> TabAttrs {
        let selected = self.is_active(index);
        TabAttrs {
            id: self.tab_id(index),
            controls: self.panel_id(index),
            selected,
            tab_index: if selected { "0" } else { "-1" },
        }
    }

    pub fn panel_attrs(&self, index: usize) -> PanelAttrs {
        let visible = self.is_active(index);
        PanelAttrs {
            id: self.panel_id(index),
            labelled_by: self.tab_id(index),
            hidden: !visible,
            aria_hidden: !visible,
            tab_index: if visible { "0" } else { "-1" },
        }
    }
}

/// Subscriber notified by the view around controller transitions.
pub trait TabPanelObserver {
    fn on_mount(&self, _section_id: &str) {}
    fn on_tab_change(&self, _section_id: &str, _index: usize) {}
}
