//! Document model for generated instances
//!
//! Field order in each struct is the key order of the serialized object.

use serde::{Serialize, Serializer};

/// A complete game instance: the top-level JSON document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instance {
    /// Instance name, e.g. `gossip3`
    pub name: String,
    /// Atomic propositions, in declaration order
    pub ap: Vec<String>,
    /// Game representation understood by the consumer (always `module`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Global temporal goal
    pub goal: String,
    /// Modules keyed by agent name, in creation order
    #[serde(serialize_with = "serialize_ordered")]
    pub modules: Vec<(String, ModuleSpec)>,
}

impl Instance {
    /// Look up a module by name
    pub fn module(&self, name: &str) -> Option<&ModuleSpec> {
        lookup(&self.modules, name)
    }
}

/// One agent's local automaton
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleSpec {
    pub goal: String,
    pub payoff: String,
    pub actions: Vec<String>,
    pub labels: Vec<String>,
    pub initial: String,
    #[serde(serialize_with = "serialize_ordered")]
    pub states: Vec<(String, StateSpec)>,
}

impl ModuleSpec {
    /// Look up a state by name
    pub fn state(&self, name: &str) -> Option<&StateSpec> {
        lookup(&self.states, name)
    }

    pub fn has_action(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSpec {
    /// Propositions that hold while the module is in this state
    pub labels: Vec<String>,
    pub transitions: Vec<Transition>,
}

impl StateSpec {
    /// Transitions taken under the given action, in declaration order
    pub fn transitions_for<'a>(&'a self, action: &'a str) -> impl Iterator<Item = &'a Transition> {
        self.transitions.iter().filter(move |t| t.action == action)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub action: String,
    pub guard: String,
    pub to: String,
}

impl Transition {
    pub fn new(action: impl Into<String>, guard: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            guard: guard.into(),
            to: to.into(),
        }
    }
}

fn lookup<'a, T>(entries: &'a [(String, T)], name: &str) -> Option<&'a T> {
    entries.iter().find(|(key, _)| key == name).map(|(_, value)| value)
}

/// Serialize a list of named entries as a JSON object, keeping list order
#[allow(clippy::ptr_arg)]
fn serialize_ordered<S, T>(entries: &Vec<(String, T)>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_module() -> ModuleSpec {
        ModuleSpec {
            goal: "G F p".to_string(),
            payoff: "?".to_string(),
            actions: vec!["a".to_string(), "b".to_string()],
            labels: vec!["p".to_string()],
            initial: "q0".to_string(),
            states: vec![
                (
                    "q0".to_string(),
                    StateSpec {
                        labels: vec![],
                        transitions: vec![
                            Transition::new("a", "true", "q1"),
                            Transition::new("b", "true", "q0"),
                        ],
                    },
                ),
                (
                    "q1".to_string(),
                    StateSpec {
                        labels: vec!["p".to_string()],
                        transitions: vec![Transition::new("a", "true", "q0")],
                    },
                ),
            ],
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let module = sample_module();
        assert!(module.state("q1").is_some());
        assert!(module.state("q2").is_none());
        assert!(module.has_action("b"));
        assert!(!module.has_action("c"));
    }

    #[test]
    fn test_transitions_for_action() {
        let module = sample_module();
        let q0 = module.state("q0").unwrap();
        let targets: Vec<_> = q0.transitions_for("a").map(|t| t.to.as_str()).collect();
        assert_eq!(targets, vec!["q1"]);
    }

    #[test]
    fn test_states_serialize_in_list_order() {
        let mut module = sample_module();
        module.states.reverse();
        let json = serde_json::to_string(&module).unwrap();
        let q1 = json.find("\"q1\":").unwrap();
        let q0 = json.find("\"q0\":").unwrap();
        assert!(q1 < q0, "states should keep list order: {}", json);
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let instance = Instance {
            name: "x".to_string(),
            ap: vec!["p".to_string()],
            kind: "module".to_string(),
            goal: "true".to_string(),
            modules: vec![("M".to_string(), sample_module())],
        };
        let json = serde_json::to_string(&instance).unwrap();
        assert!(json.contains(r#""type":"module""#));
        assert!(!json.contains("kind"));
        assert!(instance.module("M").is_some());
    }
}
