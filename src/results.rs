use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use console::{style, Style};
use serde::Serialize;

use crate::record::WhoisRecord;

/// Outcome of one target, in the order the targets were given.
#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Lookup {
  pub target: String,
  /// Ruleset that handled the response.
  pub ruleset: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub record: Option<WhoisRecord>,
  #[serde(skip_serializing_if = "std::ops::Not::not")]
  pub not_found: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub raw: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl Lookup {
  #[must_use]
  pub const fn failed(&self) -> bool {
    self.not_found || self.error.is_some()
  }
}

/// Helper: coloured keys so the summary is easy to scan.
fn key(s: &str) -> console::StyledObject<&str> {
  style(s).bold().cyan()
}

fn header(title: &str, emoji: &str) {
  println!(
    "\n{} {}",
    style(emoji).bold(),
    Style::new().bold().underlined().apply_to(title)
  );
}

fn line(label: &str, value: Option<String>) {
  match value {
    Some(v) => println!("  {} {}", key(label), v),
    None => println!("  {} {}", key(label), style("N/A").dim()),
  }
}

fn text(value: Option<&str>) -> Option<String> {
  value.map(str::to_owned)
}

fn date(value: Option<&DateTime<Utc>>) -> Option<String> {
  value.map(DateTime::to_rfc3339)
}

fn list(value: Option<&[String]>) -> Option<String> {
  value.map(|v| v.join(", "))
}

fn print_registration(r: &WhoisRecord) {
  header("Registration", "📜");
  line("Domain Name:", text(r.domain_name.as_deref()));
  line("Registrar:", text(r.registrar.as_deref()));
  line("Registrar URL:", text(r.registrar_url.as_deref()));
  line("Reseller:", text(r.reseller.as_deref()));
  line("WHOIS Server:", text(r.whois_server.as_deref()));
  line("Referral URL:", text(r.referral_url.as_deref()));
  line("Created:", date(r.creation_date.as_ref()));
  line("Updated:", date(r.updated_date.as_ref()));
  line("Expires:", date(r.expiration_date.as_ref()));
  line("Status:", list(r.status.as_deref()));
  line("Name Servers:", list(r.name_servers.as_deref()));
  line("DNSSEC:", text(r.dnssec.as_deref()));
}

fn print_registrant(r: &WhoisRecord) {
  header("Registrant", "👤");
  line("Name:", text(r.name.as_deref()));
  line("Organization:", text(r.org.as_deref()));
  line("Address:", text(r.address.as_deref()));
  line("City:", text(r.city.as_deref()));
  line("State:", text(r.state.as_deref()));
  line("Postal Code:", text(r.registrant_postal_code.as_deref()));
  line("Country:", text(r.country.as_deref()));
  line("Emails:", list(r.emails.as_deref()));
}

fn print_lookup(lookup: &Lookup) {
  println!(
    "{} {}  {}",
    style("•").magenta(),
    Style::new()
      .bold()
      .magenta()
      .apply_to(format!("WHOIS record for: {}", lookup.target)),
    style(format!("[{}]", lookup.ruleset)).dim()
  );

  if let Some(record) = &lookup.record {
    print_registration(record);
    print_registrant(record);
  }

  if lookup.not_found {
    println!(
      "  {}",
      style("Registry reports this domain as not registered").yellow()
    );
  }

  if let Some(raw) = &lookup.raw {
    header("Raw Response", "📄");
    for l in raw.lines() {
      println!("  {}", style(l).dim());
    }
  }

  if let Some(e) = &lookup.error {
    header("Error", "❌");
    eprintln!("  {}", style(e).red().bold());
  }
}

pub fn print_human_readable(lookups: &[Lookup]) {
  for (i, lookup) in lookups.iter().enumerate() {
    if i > 0 {
      println!();
    }
    print_lookup(lookup);
  }
}

pub fn print_json(lookups: &[Lookup]) -> Result<()> {
  serde_json::to_string_pretty(lookups)
    .map(|s| println!("{s}"))
    .context("Failed to serialize results to JSON")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn json_skips_empty_parts() {
    let lookup = Lookup {
      target: "example.com".into(),
      ruleset: "com".into(),
      record: Some(WhoisRecord {
        registrar: Some("Example Registrar".into()),
        ..WhoisRecord::default()
      }),
      ..Lookup::default()
    };
    let json = serde_json::to_value(&lookup).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "target": "example.com",
        "ruleset": "com",
        "record": { "registrar": "Example Registrar" }
      })
    );
    assert!(!lookup.failed());
  }

  #[test]
  fn not_found_and_errors_count_as_failures() {
    let not_found = Lookup {
      not_found: true,
      ..Lookup::default()
    };
    let errored = Lookup {
      error: Some("timed out".into()),
      ..Lookup::default()
    };
    assert!(not_found.failed());
    assert!(errored.failed());
    assert_eq!(
      serde_json::to_value(&not_found).unwrap()["notFound"],
      serde_json::json!(true)
    );
  }

  #[test]
  fn dates_render_as_rfc3339() {
    let ts = DateTime::parse_from_rfc3339("1995-08-14T04:00:00Z")
      .unwrap()
      .with_timezone(&Utc);
    assert_eq!(
      date(Some(&ts)).as_deref(),
      Some("1995-08-14T04:00:00+00:00")
    );
    assert_eq!(
      list(Some(&["a".to_owned(), "b".to_owned()][..])).as_deref(),
      Some("a, b")
    );
  }
}
