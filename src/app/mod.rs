//! App layer - central state management and command processing
//!
//! The App actor receives UI events and network responses, updates
//! state, and emits network commands and render state. Each screen is
//! a self-contained controller; navigation drops the old controller,
//! which is what makes late responses for it unmatchable.

pub mod actor;
pub mod address_detail;
pub mod state;
pub mod wallet_detail;
pub mod wallet_list;

pub use actor::AppActor;
pub use state::AppState;

use crate::messages::ApiCommand;
use crate::models::Network;
use crate::routes::Route;

/// What a controller wants done after handling an event or response
#[derive(Debug, Default)]
pub struct Effects {
    /// Network command to dispatch
    pub command: Option<ApiCommand>,
    /// Route to navigate to
    pub goto: Option<Route>,
    /// Network of the wallet being navigated to, when known
    pub network_hint: Option<Network>,
    /// Line for the activity log
    pub note: Option<String>,
}

impl Effects {
    pub fn none() -> Self {
        Effects::default()
    }

    pub fn command(command: ApiCommand) -> Self {
        Effects {
            command: Some(command),
            ..Default::default()
        }
    }

    pub fn goto(route: Route) -> Self {
        Effects {
            goto: Some(route),
            ..Default::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_hint(mut self, network: Network) -> Self {
        self.network_hint = Some(network);
        self
    }
}

/// Monotonic request-id allocator shared by all controllers
#[derive(Debug)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    pub fn new() -> Self {
        IdGen { next: 1 }
    }

    pub fn next(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}
