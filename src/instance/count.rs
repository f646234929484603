//! Validated agent count

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::GenerateError;

/// Number of agents in an instance; always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgentCount(NonZeroUsize);

impl AgentCount {
    pub fn new(n: usize) -> Result<Self, GenerateError> {
        NonZeroUsize::new(n)
            .map(Self)
            .ok_or_else(|| GenerateError::invalid_argument(n.to_string(), "agent count must be positive"))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Agent indices `1..=n`, ascending
    pub fn indices(self) -> impl Iterator<Item = usize> {
        1..=self.get()
    }

    /// Every agent index except `i`, ascending
    pub fn others(self, i: usize) -> impl Iterator<Item = usize> {
        self.indices().filter(move |&j| j != i)
    }
}

impl FromStr for AgentCount {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GenerateError::invalid_argument(s, "missing agent count"));
        }
        // Parse signed first so "-3" is reported as non-positive, not as garbage
        let value: i128 = trimmed
            .parse()
            .map_err(|_| GenerateError::invalid_argument(s, "expected a positive integer"))?;
        if value <= 0 {
            return Err(GenerateError::invalid_argument(s, "agent count must be positive"));
        }
        let n = usize::try_from(value)
            .map_err(|_| GenerateError::invalid_argument(s, "agent count is too large"))?;
        Self::new(n)
    }
}

impl fmt::Display for AgentCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(input: &str) -> String {
        match input.parse::<AgentCount>() {
            Err(GenerateError::InvalidArgument { reason, .. }) => reason,
            other => panic!("expected InvalidArgument for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!("3".parse::<AgentCount>().unwrap().get(), 3);
        assert_eq!(" 12 ".parse::<AgentCount>().unwrap().get(), 12);
        assert_eq!("+4".parse::<AgentCount>().unwrap().get(), 4);
    }

    #[test]
    fn test_reject_zero_and_negative() {
        assert_eq!(reason("0"), "agent count must be positive");
        assert_eq!(reason("-3"), "agent count must be positive");
    }

    #[test]
    fn test_reject_non_integer() {
        assert_eq!(reason("abc"), "expected a positive integer");
        assert_eq!(reason("2.5"), "expected a positive integer");
        assert_eq!(reason(""), "missing agent count");
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(AgentCount::new(0).is_err());
        assert_eq!(AgentCount::new(1).unwrap().get(), 1);
    }

    #[test]
    fn test_others_skips_self() {
        let count = AgentCount::new(4).unwrap();
        assert_eq!(count.others(2).collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq!(AgentCount::new(1).unwrap().others(1).count(), 0);
    }
}
