//! Rewrite rules and rule sets.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OakError, Result};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Where in a name a rule looks for its substring.
///
/// Configuration files may use the lowercase names, the capitalized names
/// (`Prefix`, `Anywhere`, `Suffix`) or the short selectors `<`, `*` and `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[serde(alias = "Prefix", alias = "<")]
    Prefix,
    #[serde(alias = "Anywhere", alias = "*")]
    Anywhere,
    #[serde(alias = "Suffix", alias = ">")]
    Suffix,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Prefix => "prefix",
            Position::Anywhere => "anywhere",
            Position::Suffix => "suffix",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = OakError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "prefix" | "<" => Ok(Position::Prefix),
            "anywhere" | "*" => Ok(Position::Anywhere),
            "suffix" | ">" => Ok(Position::Suffix),
            other => Err(OakError::UnknownPosition(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Occurrence
// ---------------------------------------------------------------------------

/// Which occurrences an [`Position::Anywhere`] rule replaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occurrence {
    #[default]
    First,
    All,
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// One attempted name-rewrite step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub position: Position,
    /// Substring to look for. Empty matches every name.
    pub old: String,
    pub new: String,
    /// Stop evaluating once this rule has matched.
    #[serde(alias = "stopAfter")]
    pub stop_after: bool,
    #[serde(default)]
    pub occurrence: Occurrence,
}

impl Rule {
    /// Create a rule replacing the first occurrence.
    pub fn new(
        position: Position,
        old: impl Into<String>,
        new: impl Into<String>,
        stop_after: bool,
    ) -> Self {
        Self {
            position,
            old: old.into(),
            new: new.into(),
            stop_after,
            occurrence: Occurrence::First,
        }
    }

    /// Stopping prefix rule.
    pub fn prefix(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self::new(Position::Prefix, old, new, true)
    }

    /// Stopping anywhere rule.
    pub fn anywhere(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self::new(Position::Anywhere, old, new, true)
    }

    /// Stopping suffix rule.
    pub fn suffix(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self::new(Position::Suffix, old, new, true)
    }

    /// Set whether evaluation stops after this rule matches.
    pub fn stop_after(mut self, stop_after: bool) -> Self {
        self.stop_after = stop_after;
        self
    }

    /// Set which occurrences an anywhere rule replaces.
    pub fn occurrence(mut self, occurrence: Occurrence) -> Self {
        self.occurrence = occurrence;
        self
    }
}

// ---------------------------------------------------------------------------
// RuleSet
// ---------------------------------------------------------------------------

/// Ordered rules, evaluated front to back.
///
/// The default set turns `is_x` into `isnt_x` and falls back to prefixing
/// `not_` onto any other name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: vec![Rule::prefix("is_", "isnt_"), Rule::prefix("", "not_")],
        }
    }
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Append a rule.
    pub fn then(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Copy of this set where every rule stops after matching, so the first
    /// matching rule always decides the name.
    pub fn first_match_wins(&self) -> Self {
        Self {
            rules: self
                .rules
                .iter()
                .cloned()
                .map(|r| r.stop_after(true))
                .collect(),
        }
    }

    /// Parse a rule set from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let set: RuleSet = serde_json::from_str(json)?;
        if set.is_empty() {
            return Err(OakError::InvalidRules(
                "rule set must contain at least one rule".to_string(),
            ));
        }
        Ok(set)
    }

    /// Load a rule set from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}
