//! Gossip benchmark instances
//!
//! [`build`] is a pure function from an [`AgentCount`] to an [`Instance`];
//! serialization lives in [`crate::output`].

mod builder;
mod count;
pub mod types;

pub use builder::{build, module_name, proposition, ACTIONS, IDLE_STATE, SIGNAL_STATE};
pub use count::AgentCount;
pub use types::{Instance, ModuleSpec, StateSpec, Transition};
