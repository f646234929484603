//! Lint engine for checking generated instances.
//!
//! Applies the well-formedness rules a module-game reader enforces: every
//! label and guard proposition is declared, actions and targets exist, guards
//! parse, and each state's guards cover every valuation without one action
//! leading to two different targets at once.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use serde::Deserialize;

use crate::error::ParseError;
use crate::guard::{self, lexer::Token, Guard};
use crate::instance::{Instance, ModuleSpec, StateSpec};

/// Action name that stands for every declared action
pub const WILDCARD_ACTION: &str = "*";

/// Payoff spellings a reader accepts
const PAYOFFS: [&str; 5] = ["1", "true", "0", "false", "?"];

/// Temporal operators that may appear as bare letters in goal formulas
const TEMPORAL_OPERATORS: [&str; 7] = ["F", "G", "X", "U", "R", "W", "M"];

/// Options for the lint pass
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Run lint checks during generation
    pub enabled: bool,
    /// Treat any warning as fatal
    pub deny_warnings: bool,
    /// Upper bound on propositions enumerated per state for coverage checks
    pub max_enumerated_propositions: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            deny_warnings: false,
            max_enumerated_propositions: 16,
        }
    }
}

impl LintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_deny_warnings(mut self, deny: bool) -> Self {
        self.deny_warnings = deny;
        self
    }

    pub fn with_max_enumerated_propositions(mut self, max: usize) -> Self {
        self.max_enumerated_propositions = max;
        self
    }
}

/// A lint warning about an instance defect
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    /// Path to the offending item, e.g. `A1/s2/w#0`
    pub location: String,
    pub message: String,
    /// Guard syntax error with its source text, when the guard failed to parse
    pub diagnostic: Option<GuardDiagnostic>,
}

impl LintWarning {
    fn new(category: LintCategory, location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category,
            location: location.into(),
            message: message.into(),
            diagnostic: None,
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning[{}] {}: {}", self.category, self.location, self.message)
    }
}

/// A guard that failed to parse
#[derive(Debug)]
pub struct GuardDiagnostic {
    pub source: String,
    pub error: ParseError,
}

impl GuardDiagnostic {
    /// Render with source context, named after the transition location
    pub fn render(&self, location: &str) -> String {
        self.error.format(&self.source, location)
    }
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Proposition,
    Goal,
    Label,
    Payoff,
    State,
    Action,
    Guard,
    Completeness,
    Overlap,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Proposition => write!(f, "proposition"),
            LintCategory::Goal => write!(f, "goal"),
            LintCategory::Label => write!(f, "label"),
            LintCategory::Payoff => write!(f, "payoff"),
            LintCategory::State => write!(f, "state"),
            LintCategory::Action => write!(f, "action"),
            LintCategory::Guard => write!(f, "guard"),
            LintCategory::Completeness => write!(f, "completeness"),
            LintCategory::Overlap => write!(f, "overlap"),
        }
    }
}

/// Run all lint checks on an instance.
pub fn check(instance: &Instance, config: &LintConfig) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let declared: HashSet<&str> = instance.ap.iter().map(String::as_str).collect();

    check_propositions(instance, &mut warnings);
    check_goal(&instance.goal, "instance", &declared, &mut warnings);
    for (name, module) in &instance.modules {
        check_module(name, module, &declared, config, &mut warnings);
    }

    log::debug!("lint found {} warnings in {}", warnings.len(), instance.name);
    warnings
}

// ── Declarations ──────────────────────────────────────────────────

fn check_propositions(instance: &Instance, warnings: &mut Vec<LintWarning>) {
    let mut seen = HashSet::new();
    for ap in &instance.ap {
        if !seen.insert(ap.as_str()) {
            warnings.push(LintWarning::new(
                LintCategory::Proposition,
                "ap",
                format!("proposition '{}' is declared more than once", ap),
            ));
        }
    }
}

/// Goal formulas are LTL; only their atoms are checked here.
fn check_goal(goal: &str, location: &str, declared: &HashSet<&str>, warnings: &mut Vec<LintWarning>) {
    let undeclared: BTreeSet<String> = guard::lexer::lex(goal)
        .filter_map(|(tok, _)| match tok {
            Ok(Token::Ident(name)) => Some(name),
            _ => None,
        })
        .filter(|name| !TEMPORAL_OPERATORS.contains(&name.as_str()))
        .filter(|name| !declared.contains(name.as_str()))
        .collect();

    for name in undeclared {
        warnings.push(LintWarning::new(
            LintCategory::Goal,
            location,
            format!("goal references undeclared proposition '{}'", name),
        ));
    }
}

// ── Modules ───────────────────────────────────────────────────────

fn check_module(
    name: &str,
    module: &ModuleSpec,
    declared: &HashSet<&str>,
    config: &LintConfig,
    warnings: &mut Vec<LintWarning>,
) {
    check_goal(&module.goal, name, declared, warnings);

    if !PAYOFFS.contains(&module.payoff.as_str()) {
        warnings.push(LintWarning::new(
            LintCategory::Payoff,
            name,
            format!("unsupported payoff '{}'", module.payoff),
        ));
    }

    for label in &module.labels {
        if !declared.contains(label.as_str()) {
            warnings.push(LintWarning::new(
                LintCategory::Label,
                name,
                format!("module label '{}' is not a declared proposition", label),
            ));
        }
    }

    if module.state(&module.initial).is_none() {
        warnings.push(LintWarning::new(
            LintCategory::State,
            name,
            format!("initial state '{}' is not defined", module.initial),
        ));
    }

    for (state_name, state) in &module.states {
        let location = format!("{}/{}", name, state_name);
        check_state(&location, module, state, declared, config, warnings);
    }
}

fn check_state(
    location: &str,
    module: &ModuleSpec,
    state: &StateSpec,
    declared: &HashSet<&str>,
    config: &LintConfig,
    warnings: &mut Vec<LintWarning>,
) {
    for label in &state.labels {
        if !module.labels.contains(label) {
            warnings.push(LintWarning::new(
                LintCategory::Label,
                location,
                format!("state label '{}' is not among the module labels", label),
            ));
        }
    }

    // Parsed guards, or None for transitions whose guard is broken
    let mut parsed: Vec<Option<Guard>> = Vec::with_capacity(state.transitions.len());

    for (index, transition) in state.transitions.iter().enumerate() {
        let at = format!("{}/{}#{}", location, transition.action, index);

        if transition.action != WILDCARD_ACTION && !module.has_action(&transition.action) {
            warnings.push(LintWarning::new(
                LintCategory::Action,
                at.as_str(),
                format!("action '{}' is not declared", transition.action),
            ));
        }

        if module.state(&transition.to).is_none() {
            warnings.push(LintWarning::new(
                LintCategory::State,
                at.as_str(),
                format!("target state '{}' is not defined", transition.to),
            ));
        }

        parsed.push(check_guard(&at, &transition.guard, declared, warnings));
    }

    let Some(guards) = parsed.into_iter().collect::<Option<Vec<_>>>() else {
        log::debug!("skipping coverage checks for {}: unparsed guards", location);
        return;
    };
    check_coverage(location, module, state, &guards, config, warnings);
}

fn check_guard(
    at: &str,
    text: &str,
    declared: &HashSet<&str>,
    warnings: &mut Vec<LintWarning>,
) -> Option<Guard> {
    if text.trim().is_empty() {
        warnings.push(LintWarning::new(
            LintCategory::Guard,
            at,
            "guard is empty; readers expect a formula such as 'true'",
        ));
        return None;
    }

    let parsed = match guard::parse(text) {
        Ok(g) => g,
        Err(mut errors) => {
            let message = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            let mut warning = LintWarning::new(
                LintCategory::Guard,
                at,
                format!("guard '{}' does not parse: {}", text, message),
            );
            if !errors.is_empty() {
                warning.diagnostic = Some(GuardDiagnostic {
                    source: text.to_string(),
                    error: errors.swap_remove(0),
                });
            }
            warnings.push(warning);
            return None;
        }
    };

    let undeclared: Vec<&str> = parsed
        .propositions()
        .into_iter()
        .filter(|p| !declared.contains(p))
        .collect();
    if !undeclared.is_empty() {
        warnings.push(LintWarning::new(
            LintCategory::Guard,
            at,
            format!("guard references undeclared propositions: {}", undeclared.join(", ")),
        ));
        return None;
    }

    Some(parsed)
}

// ── Coverage ──────────────────────────────────────────────────────

/// Every valuation must enable some transition, and no valuation may enable
/// transitions to two different targets under the same action.
fn check_coverage(
    location: &str,
    module: &ModuleSpec,
    state: &StateSpec,
    guards: &[Guard],
    config: &LintConfig,
    warnings: &mut Vec<LintWarning>,
) {
    let props: Vec<&str> = guards
        .iter()
        .flat_map(|g| g.propositions())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    if props.len() > config.max_enumerated_propositions || props.len() >= u64::BITS as usize {
        log::debug!(
            "skipping coverage checks for {}: {} propositions exceed the limit of {}",
            location,
            props.len(),
            config.max_enumerated_propositions
        );
        return;
    }

    let index: HashMap<&str, usize> = props.iter().enumerate().map(|(i, p)| (*p, i)).collect();

    // Expand the wildcard so overlaps are detected per concrete action
    let actions_of = |action: &str| -> Vec<String> {
        if action == WILDCARD_ACTION {
            module.actions.clone()
        } else {
            vec![action.to_string()]
        }
    };

    let mut uncovered: Option<u64> = None;
    let mut overlapping: BTreeSet<String> = BTreeSet::new();

    for mask in 0..(1u64 << props.len()) {
        let truth = |p: &str| index.get(p).is_some_and(|&i| mask >> i & 1 == 1);

        // Transitions sharing an action and target merge into one, so only
        // distinct targets under the same action count as an overlap
        let mut targets_by_action: HashMap<String, BTreeSet<&str>> = HashMap::new();
        let mut any_enabled = false;
        for (transition, guard) in state.transitions.iter().zip(guards) {
            if guard.eval(&truth) {
                any_enabled = true;
                for action in actions_of(&transition.action) {
                    targets_by_action
                        .entry(action)
                        .or_default()
                        .insert(transition.to.as_str());
                }
            }
        }

        if !any_enabled && uncovered.is_none() {
            uncovered = Some(mask);
        }
        overlapping.extend(
            targets_by_action
                .into_iter()
                .filter(|(_, targets)| targets.len() > 1)
                .map(|(action, _)| action),
        );
    }

    if let Some(mask) = uncovered {
        warnings.push(LintWarning::new(
            LintCategory::Completeness,
            location,
            format!(
                "no transition is enabled when {}",
                describe_valuation(&props, mask)
            ),
        ));
    }
    for action in overlapping {
        warnings.push(LintWarning::new(
            LintCategory::Overlap,
            location,
            format!("transitions under action '{}' to different targets overlap", action),
        ));
    }
}

fn describe_valuation(props: &[&str], mask: u64) -> String {
    if props.is_empty() {
        return "no propositions hold".to_string();
    }
    props
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if mask >> i & 1 == 1 {
                p.to_string()
            } else {
                format!("!{}", p)
            }
        })
        .collect::<Vec<_>>()
        .join(" & ")
}
