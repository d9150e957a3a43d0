//! Synchronous event bus.
//!
//! The frame driver posts [`GameEvent`]s; registered listeners receive them
//! in registration order, synchronously, on the driver's thread. Events are
//! a closed enum, so listeners match exhaustively instead of probing
//! notification types.
//!
//! The model is passed by shared reference per delivery rather than stored
//! in each listener, so listeners hold no long-lived aliases of mutable
//! game state.

use anyhow::Result;

use arena_duel_model::GameModel;
use arena_duel_types::GameEvent;

/// A subscriber on the bus.
///
/// `notify` runs to completion before the bus moves on; an error aborts the
/// fan-out and propagates to the poster.
pub trait Listener {
    fn notify(&mut self, event: GameEvent, model: &dyn GameModel) -> Result<()>;
}

/// Orders listeners and fans events out to them.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Box<dyn Listener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener. Delivery follows registration order.
    pub fn register(&mut self, listener: Box<dyn Listener>) {
        self.listeners.push(listener);
    }

    /// Deliver `event` to every listener, stopping at the first error.
    pub fn post(&mut self, event: GameEvent, model: &dyn GameModel) -> Result<()> {
        for listener in &mut self.listeners {
            listener.notify(event, model)?;
        }
        Ok(())
    }
}
