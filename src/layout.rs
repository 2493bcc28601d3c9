//! Application shell state shared between the editor view and its surroundings.
//!
//! The sidebar's collapsed flag lives in one store that owns it; interested
//! views subscribe explicitly instead of listening for a global event.

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub sidebar_collapsed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&LayoutState)>;

/// Owns [`LayoutState`] and notifies subscribers when it changes.
#[derive(Default)]
pub struct LayoutStore {
    state: LayoutState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl LayoutStore {
    pub fn new(state: LayoutState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&LayoutState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Sets the flag, notifying subscribers only if it actually changed.
    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        if self.state.sidebar_collapsed == collapsed {
            return;
        }
        self.state.sidebar_collapsed = collapsed;
        debug!("Sidebar collapsed: {}", collapsed);
        self.notify();
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        let collapsed = !self.state.sidebar_collapsed;
        self.set_sidebar_collapsed(collapsed);
        collapsed
    }

    fn notify(&mut self) {
        let state = self.state;
        for (_, listener) in &mut self.listeners {
            listener(&state);
        }
    }
}
