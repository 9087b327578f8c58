use thiserror::Error;

use crate::record::Field;

/// Errors surfaced by parsing and lookup.
#[derive(Debug, Error)]
pub enum Error {
  /// The registry answered, but its text says the domain is not registered.
  #[error("the WHOIS record indicates {domain} was not found or is unavailable")]
  DomainNotFound { domain: String },
  #[error("whois operation failed: {0}")]
  WhoIs(#[from] whois_rust::WhoIsError),
  #[error("bundled WHOIS server map is invalid: {0}")]
  ServerMap(String),
  #[error(transparent)]
  Ruleset(#[from] RulesetError),
}

impl Error {
  #[must_use]
  pub const fn is_not_found(&self) -> bool {
    matches!(self, Self::DomainNotFound { .. })
  }
}

/// A ruleset definition that cannot be compiled. Always a programming error
/// in the ruleset table, never a property of the input text.
#[derive(Debug, Clone, Error)]
pub enum RulesetError {
  #[error("ruleset '{ruleset}': invalid pattern for {field}: {source}")]
  InvalidPattern {
    ruleset: &'static str,
    field: Field,
    #[source]
    source: regex::Error,
  },
  #[error("ruleset '{ruleset}': {field} is declared more than once")]
  DuplicateField { ruleset: &'static str, field: Field },
  #[error(
    "ruleset '{ruleset}': {field} holds a single value but is matched in all-matches mode"
  )]
  CardinalityMismatch { ruleset: &'static str, field: Field },
  #[error("ruleset name '{0}' is defined more than once")]
  DuplicateRuleset(&'static str),
  #[error("suffix '{suffix}' points at unknown ruleset '{ruleset}'")]
  UnknownRuleset {
    suffix: &'static str,
    ruleset: &'static str,
  },
  #[error("no fallback ruleset named '{0}'")]
  MissingDefault(&'static str),
}
