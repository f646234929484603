//! Guard formula syntax tree

use std::collections::BTreeSet;

/// A propositional formula over atomic propositions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    /// `true` / `false`
    Const(bool),
    /// Atomic proposition
    Var(String),
    Not(Box<Guard>),
    /// Conjunction of two or more operands
    And(Vec<Guard>),
    /// Disjunction of two or more operands
    Or(Vec<Guard>),
    Xor(Box<Guard>, Box<Guard>),
    Implies(Box<Guard>, Box<Guard>),
    Iff(Box<Guard>, Box<Guard>),
}

impl Guard {
    pub fn var(name: impl Into<String>) -> Self {
        Guard::Var(name.into())
    }

    pub fn not(inner: Guard) -> Self {
        Guard::Not(Box::new(inner))
    }

    /// Evaluate under a valuation that reports whether a proposition holds
    pub fn eval<F>(&self, truth: &F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        match self {
            Guard::Const(value) => *value,
            Guard::Var(name) => truth(name.as_str()),
            Guard::Not(inner) => !inner.eval(truth),
            Guard::And(operands) => operands.iter().all(|g| g.eval(truth)),
            Guard::Or(operands) => operands.iter().any(|g| g.eval(truth)),
            Guard::Xor(lhs, rhs) => lhs.eval(truth) != rhs.eval(truth),
            Guard::Implies(lhs, rhs) => !lhs.eval(truth) || rhs.eval(truth),
            Guard::Iff(lhs, rhs) => lhs.eval(truth) == rhs.eval(truth),
        }
    }

    /// Propositions mentioned anywhere in the formula
    pub fn propositions(&self) -> BTreeSet<&str> {
        let mut props = BTreeSet::new();
        self.collect_propositions(&mut props);
        props
    }

    fn collect_propositions<'a>(&'a self, props: &mut BTreeSet<&'a str>) {
        match self {
            Guard::Const(_) => {}
            Guard::Var(name) => {
                props.insert(name.as_str());
            }
            Guard::Not(inner) => inner.collect_propositions(props),
            Guard::And(operands) | Guard::Or(operands) => {
                for operand in operands {
                    operand.collect_propositions(props);
                }
            }
            Guard::Xor(lhs, rhs) | Guard::Implies(lhs, rhs) | Guard::Iff(lhs, rhs) => {
                lhs.collect_propositions(props);
                rhs.collect_propositions(props);
            }
        }
    }
}
