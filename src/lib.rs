//! Arena Duel (workspace facade crate).
//!
//! This package keeps the `arena_duel::{events,model,term,types,view}`
//! public API stable while the implementation lives in dedicated crates
//! under `crates/`.

pub use arena_duel_events as events;
pub use arena_duel_model as model;
pub use arena_duel_term as term;
pub use arena_duel_types as types;
pub use arena_duel_view as view;
