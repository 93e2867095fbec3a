//! Application state store.
//!
//! Owns the screen-navigation state (`{current_screen, selected_level}`)
//! that the host shell reads to decide what to present. Instantiated once at
//! the application's composition root and passed by reference; there is no
//! process-wide singleton. Single-threaded like the rest of the simulation:
//! all access goes through `&mut self`.

use strum_macros::AsRefStr;

/// The screens the application shell can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum ScreenKind {
    #[default]
    Landing,
    LevelSelect,
    Game,
}

/// Snapshot of the application's navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppState {
    pub current_screen: ScreenKind,
    /// 1-based level number, set when entering the game screen.
    pub selected_level: Option<usize>,
}

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState)>;

/// Owner of the application state, with change notification.
#[derive(Default)]
pub struct Store {
    state: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot copy of the current state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Navigates to a screen, replacing the whole state and notifying
    /// subscribers.
    pub fn set_screen(&mut self, screen: ScreenKind, selected_level: Option<usize>) {
        self.state = AppState {
            current_screen: screen,
            selected_level,
        };
        let snapshot = self.state;
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }

    /// Registers a listener invoked after every state change.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener. Returns whether it was still registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}
