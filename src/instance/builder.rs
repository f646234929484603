//! Gossip instance construction
//!
//! Every agent owns one proposition `g{i}` and a two-state automaton. In `s1`
//! it idles (`a`) or signals (`g`). In `s2` its proposition holds; it waits
//! (`w`) while nobody else signals and drops back (`g`) once someone does.

use super::count::AgentCount;
use super::types::{Instance, ModuleSpec, StateSpec, Transition};

/// Actions available to every agent
pub const ACTIONS: [&str; 3] = ["a", "g", "w"];

/// Representation tag the consumer expects for module-based games
pub const INSTANCE_TYPE: &str = "module";

/// Payoff placeholder: left undefined for the solver to decide
pub const UNDEFINED_PAYOFF: &str = "?";

pub const IDLE_STATE: &str = "s1";
pub const SIGNAL_STATE: &str = "s2";

/// Build the gossip instance for `count` agents
pub fn build(count: AgentCount) -> Instance {
    log::debug!("building gossip instance with {} agents", count);

    let ap: Vec<String> = count.indices().map(proposition).collect();
    let goal = format!("F G ({})", ap.join(" & "));

    let modules = count
        .indices()
        .map(|i| (module_name(i), build_module(count, i)))
        .collect();

    Instance {
        name: format!("gossip{}", count),
        ap,
        kind: INSTANCE_TYPE.to_string(),
        goal,
        modules,
    }
}

/// Proposition owned by agent `i`
pub fn proposition(i: usize) -> String {
    format!("g{}", i)
}

pub fn module_name(i: usize) -> String {
    format!("A{}", i)
}

fn build_module(count: AgentCount, i: usize) -> ModuleSpec {
    let own = proposition(i);

    // Empty for a single agent; kept literal rather than replaced by a constant
    let nobody_else = count
        .others(i)
        .map(|j| format!("!{}", proposition(j)))
        .collect::<Vec<_>>()
        .join(" & ");
    let somebody_else = count
        .others(i)
        .map(proposition)
        .collect::<Vec<_>>()
        .join(" | ");

    let idle = StateSpec {
        labels: Vec::new(),
        transitions: vec![
            Transition::new("a", "true", IDLE_STATE),
            Transition::new("g", "true", SIGNAL_STATE),
        ],
    };
    let signal = StateSpec {
        labels: vec![own.clone()],
        transitions: vec![
            Transition::new("w", nobody_else, SIGNAL_STATE),
            Transition::new("g", somebody_else, IDLE_STATE),
        ],
    };

    ModuleSpec {
        goal: format!("G F {}", own),
        payoff: UNDEFINED_PAYOFF.to_string(),
        actions: ACTIONS.iter().map(|a| a.to_string()).collect(),
        labels: vec![own],
        initial: IDLE_STATE.to_string(),
        states: vec![
            (IDLE_STATE.to_string(), idle),
            (SIGNAL_STATE.to_string(), signal),
        ],
    }
}
