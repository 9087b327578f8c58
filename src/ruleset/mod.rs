//! Per-registry extraction rulesets.
//!
//! A ruleset pairs an ordered list of field patterns with an ordered list of
//! "not found" predicates. Definitions are plain `const` data
//! ([`RulesetDef`], see [`table`]); they are compiled once into a [`Catalog`]
//! that the dispatcher and extraction engine share for the life of the
//! process.

mod dispatch;
pub mod table;

use std::collections::HashMap;
use std::sync::LazyLock;

use memchr::memmem;
use regex::{Captures, Regex};

use crate::error::RulesetError;
use crate::record::Field;

pub use dispatch::{normalize_domain, SUFFIXES};

/// Name of the ruleset used when no suffix matches.
pub const DEFAULT_RULESET: &str = "default";

/// Checks appended to every ruleset: the lookup layer reports these when no
/// registry could be asked at all.
pub const BASELINE_NOT_FOUND: &[NotFoundCheck] = &[
  NotFoundCheck::Contains("This TLD has no whois server"),
  NotFoundCheck::Contains("No whois server is known for this kind of object"),
];

/// How a pattern is applied to the response text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// Only the first match counts.
  First,
  /// Every non-overlapping match contributes a value.
  All,
}

/// One field's extraction rule, as written in the table.
#[derive(Debug, Clone, Copy)]
pub struct FieldPattern {
  pub field: Field,
  pub mode: Mode,
  pub pattern: &'static str,
  /// A match is discarded when this pattern matches right after the
  /// captured value (a trailing negative look-ahead).
  pub reject_followed_by: Option<&'static str>,
}

impl FieldPattern {
  #[must_use]
  pub const fn first(field: Field, pattern: &'static str) -> Self {
    Self {
      field,
      mode: Mode::First,
      pattern,
      reject_followed_by: None,
    }
  }

  #[must_use]
  pub const fn all(field: Field, pattern: &'static str) -> Self {
    Self {
      field,
      mode: Mode::All,
      pattern,
      reject_followed_by: None,
    }
  }

  #[must_use]
  pub const fn unless_followed_by(self, guard: &'static str) -> Self {
    Self {
      reject_followed_by: Some(guard),
      ..self
    }
  }
}

/// A text test meaning "the registry says this domain is not registered".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundCheck {
  /// Substring anywhere in the raw text.
  Contains(&'static str),
  /// The whole text, trimmed, equals the needle.
  Equals(&'static str),
  /// The text (leading whitespace ignored) starts with the needle.
  StartsWith(&'static str),
  /// Like `StartsWith`, ignoring ASCII case.
  StartsWithIgnoreCase(&'static str),
  /// The text (trailing whitespace ignored) ends with the needle.
  EndsWith(&'static str),
}

impl NotFoundCheck {
  #[must_use]
  pub fn matches(&self, text: &str) -> bool {
    match *self {
      Self::Contains(needle) => {
        memmem::find(text.as_bytes(), needle.as_bytes()).is_some()
      }
      Self::Equals(needle) => text.trim() == needle,
      Self::StartsWith(needle) => text.trim_start().starts_with(needle),
      Self::StartsWithIgnoreCase(needle) => {
        let text = text.trim_start().as_bytes();
        text.len() >= needle.len()
          && text[..needle.len()].eq_ignore_ascii_case(needle.as_bytes())
      }
      Self::EndsWith(needle) => text.trim_end().ends_with(needle),
    }
  }
}

/// A registry's ruleset as declared in the table.
#[derive(Debug, Clone, Copy)]
pub struct RulesetDef {
  pub name: &'static str,
  pub fields: &'static [FieldPattern],
  pub not_found: &'static [NotFoundCheck],
}

/// A compiled field rule.
#[derive(Debug)]
pub struct Rule {
  field: Field,
  mode: Mode,
  regex: Regex,
  guard: Option<Regex>,
}

impl Rule {
  #[must_use]
  pub const fn field(&self) -> Field {
    self.field
  }

  #[must_use]
  pub const fn mode(&self) -> Mode {
    self.mode
  }

  /// First acceptable match at or after byte offset `start`.
  fn find_at<'t>(&self, text: &'t str, mut start: usize) -> Option<Captures<'t>> {
    while start <= text.len() {
      let caps = self.regex.captures_at(text, start)?;
      let Some(guard) = &self.guard else {
        return Some(caps);
      };
      let whole = caps.get(0)?;
      let value_end = caps.get(1).map_or(whole.end(), |m| m.end());
      if !guard.is_match(&text[value_end..]) {
        return Some(caps);
      }
      start = next_boundary(text, whole.start());
    }
    None
  }

  pub(crate) fn first_match<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
    self.find_at(text, 0)
  }

  pub(crate) fn all_matches<'t>(&self, text: &'t str) -> Vec<Captures<'t>> {
    let mut found = Vec::new();
    let mut start = 0;
    while let Some(caps) = self.find_at(text, start) {
      let Some(whole) = caps.get(0) else { break };
      start = if whole.is_empty() {
        next_boundary(text, whole.end())
      } else {
        whole.end()
      };
      found.push(caps);
      if start > text.len() {
        break;
      }
    }
    found
  }
}

fn next_boundary(text: &str, at: usize) -> usize {
  at + text[at..].chars().next().map_or(1, char::len_utf8)
}

/// A compiled, immutable ruleset.
#[derive(Debug)]
pub struct Ruleset {
  name: &'static str,
  rules: Vec<Rule>,
  not_found: Vec<NotFoundCheck>,
}

impl Ruleset {
  /// Compiles a definition, appending [`BASELINE_NOT_FOUND`] to its checks.
  ///
  /// # Errors
  ///
  /// Returns a [`RulesetError`] if a pattern does not compile, a field is
  /// declared twice, or a single-valued field is matched in
  /// [`Mode::All`].
  pub fn compile(def: &RulesetDef) -> Result<Self, RulesetError> {
    let mut rules: Vec<Rule> = Vec::with_capacity(def.fields.len());
    for fp in def.fields {
      if rules.iter().any(|r| r.field == fp.field) {
        return Err(RulesetError::DuplicateField {
          ruleset: def.name,
          field: fp.field,
        });
      }
      if fp.mode == Mode::All && !fp.field.is_multi() {
        return Err(RulesetError::CardinalityMismatch {
          ruleset: def.name,
          field: fp.field,
        });
      }
      let invalid = |source| RulesetError::InvalidPattern {
        ruleset: def.name,
        field: fp.field,
        source,
      };
      let regex = Regex::new(fp.pattern).map_err(invalid)?;
      let guard = fp
        .reject_followed_by
        .map(|g| Regex::new(&format!("^(?:{g})")))
        .transpose()
        .map_err(invalid)?;
      rules.push(Rule {
        field: fp.field,
        mode: fp.mode,
        regex,
        guard,
      });
    }

    let not_found = def
      .not_found
      .iter()
      .chain(BASELINE_NOT_FOUND)
      .copied()
      .collect();

    Ok(Self {
      name: def.name,
      rules,
      not_found,
    })
  }

  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  #[must_use]
  pub fn rules(&self) -> &[Rule] {
    &self.rules
  }

  #[must_use]
  pub fn not_found_checks(&self) -> &[NotFoundCheck] {
    &self.not_found
  }

  /// Runs the not-found checks in order, stopping at the first hit.
  #[must_use]
  pub fn is_not_found(&self, text: &str) -> bool {
    self.not_found.iter().any(|check| check.matches(text))
  }

  /// Whether the ruleset asks for `field` at all.
  #[must_use]
  pub fn covers(&self, field: Field) -> bool {
    self.rules.iter().any(|r| r.field == field)
  }
}

/// Every compiled ruleset plus the suffix index used for dispatch.
#[derive(Debug)]
pub struct Catalog {
  rulesets: Vec<Ruleset>,
  by_name: HashMap<&'static str, usize>,
  suffixes: HashMap<String, usize>,
  fallback: usize,
}

impl Catalog {
  /// Compiles `defs` and indexes `suffixes` (suffix → ruleset name).
  ///
  /// # Errors
  ///
  /// Fails on the first malformed definition, on duplicate ruleset names, on
  /// a suffix naming an unknown ruleset, or when [`DEFAULT_RULESET`] is
  /// missing.
  pub fn build(
    defs: &[RulesetDef],
    suffixes: &[(&'static str, &'static str)],
  ) -> Result<Self, RulesetError> {
    let mut rulesets = Vec::with_capacity(defs.len());
    let mut by_name = HashMap::with_capacity(defs.len());
    for def in defs {
      if by_name.insert(def.name, rulesets.len()).is_some() {
        return Err(RulesetError::DuplicateRuleset(def.name));
      }
      rulesets.push(Ruleset::compile(def)?);
    }

    let fallback = *by_name
      .get(DEFAULT_RULESET)
      .ok_or(RulesetError::MissingDefault(DEFAULT_RULESET))?;

    let mut index = HashMap::with_capacity(suffixes.len());
    for &(suffix, ruleset) in suffixes {
      let Some(&i) = by_name.get(ruleset) else {
        return Err(RulesetError::UnknownRuleset { suffix, ruleset });
      };
      index.insert(suffix.to_lowercase(), i);
    }

    Ok(Self {
      rulesets,
      by_name,
      suffixes: index,
      fallback,
    })
  }

  /// Looks a ruleset up by its table name.
  #[must_use]
  pub fn get(&self, name: &str) -> Option<&Ruleset> {
    self.by_name.get(name).map(|&i| &self.rulesets[i])
  }

  #[must_use]
  pub fn default_ruleset(&self) -> &Ruleset {
    &self.rulesets[self.fallback]
  }

  pub fn iter(&self) -> impl Iterator<Item = &Ruleset> {
    self.rulesets.iter()
  }
}

static CATALOG: LazyLock<Result<Catalog, RulesetError>> =
  LazyLock::new(|| Catalog::build(table::RULESETS, SUFFIXES));

/// The process-wide catalog built from the bundled table.
///
/// # Errors
///
/// Returns the [`RulesetError`] that stopped the bundled table from
/// compiling. This only happens if the table itself is broken.
pub fn catalog() -> Result<&'static Catalog, RulesetError> {
  CATALOG.as_ref().map_err(Clone::clone)
}

/// Picks the ruleset for `domain` from the bundled catalog.
///
/// # Errors
///
/// Only fails when the bundled table is malformed; see [`catalog`].
pub fn select_ruleset(domain: &str) -> Result<&'static Ruleset, RulesetError> {
  Ok(catalog()?.select(domain))
}
