//! Turns raw WHOIS text plus a ruleset into a [`WhoisRecord`].

use regex::Captures;
use tracing::debug;

use crate::dates::parse_timestamp;
use crate::error::Error;
use crate::record::{Field, Slot, WhoisRecord};
use crate::ruleset::{self, Mode, Rule, Ruleset};

/// Parses `raw` as the WHOIS response for `domain`.
///
/// Selects the ruleset from the domain's suffix, fails fast when the text
/// says the domain is not registered, then extracts every declared field.
///
/// # Errors
///
/// [`Error::DomainNotFound`] when a not-found check matches, and
/// [`Error::Ruleset`] only if the bundled ruleset table is malformed.
pub fn parse(domain: &str, raw: &str) -> Result<WhoisRecord, Error> {
  let ruleset = ruleset::select_ruleset(domain)?;
  parse_with(ruleset, domain, raw)
}

/// Like [`parse`], with the ruleset chosen by the caller.
///
/// # Errors
///
/// [`Error::DomainNotFound`] when a not-found check of `ruleset` matches.
pub fn parse_with(
  ruleset: &Ruleset,
  domain: &str,
  raw: &str,
) -> Result<WhoisRecord, Error> {
  if is_not_found(raw, ruleset) {
    debug!(domain, ruleset = ruleset.name(), "registry reports no such domain");
    return Err(Error::DomainNotFound {
      domain: ruleset::normalize_domain(domain),
    });
  }
  Ok(extract(raw, ruleset))
}

/// Whether `text` matches any of the ruleset's not-found checks.
#[must_use]
pub fn is_not_found(text: &str, ruleset: &Ruleset) -> bool {
  ruleset.is_not_found(text)
}

/// Applies every rule of `ruleset` to `text`, in declaration order.
///
/// Misses are not errors: a field whose pattern does not match, or whose
/// value does not normalize (an unparseable date), stays `None`.
#[must_use]
pub fn extract(text: &str, ruleset: &Ruleset) -> WhoisRecord {
  let mut record = WhoisRecord::default();
  let mut populated = 0usize;
  for rule in ruleset.rules() {
    let candidates = match rule.mode() {
      Mode::All => all_values(rule, text),
      Mode::First => first_values(rule, text),
    };
    if assign(&mut record, rule.field(), &candidates) {
      populated += 1;
    }
  }
  debug!(ruleset = ruleset.name(), populated, "extracted record");
  record
}

/// Group 1 of every match, or the whole match when group 1 did not take part.
fn all_values<'t>(rule: &Rule, text: &'t str) -> Vec<&'t str> {
  rule
    .all_matches(text)
    .iter()
    .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
    .map(|m| m.as_str())
    .collect()
}

fn first_values<'t>(rule: &Rule, text: &'t str) -> Vec<&'t str> {
  let Some(caps) = rule.first_match(text) else {
    return Vec::new();
  };
  let groups = participating_groups(&caps);
  if rule.field().is_multi() {
    // A block: one value per line, up to the first blank line.
    groups.into_iter().flat_map(block_lines).collect()
  } else {
    groups.into_iter().take(1).collect()
  }
}

fn participating_groups<'t>(caps: &Captures<'t>) -> Vec<&'t str> {
  if caps.len() == 1 {
    return caps.get(0).map(|m| m.as_str()).into_iter().collect();
  }
  caps.iter().skip(1).flatten().map(|m| m.as_str()).collect()
}

fn block_lines(block: &str) -> impl Iterator<Item = &str> {
  block
    .lines()
    .map(str::trim)
    .skip_while(|line| line.is_empty())
    .take_while(|line| !line.is_empty())
}

/// Normalizes `candidates` into the field's slot. Returns whether the field
/// ended up populated.
fn assign(record: &mut WhoisRecord, field: Field, candidates: &[&str]) -> bool {
  let mut values = candidates.iter().map(|v| v.trim()).filter(|v| !v.is_empty());
  match record.slot(field) {
    Slot::Text(slot) => {
      *slot = values.next().map(str::to_owned);
      slot.is_some()
    }
    Slot::Timestamp(slot) => {
      let Some(raw) = values.next() else {
        return false;
      };
      *slot = parse_timestamp(raw);
      if slot.is_none() {
        debug!(%field, value = raw, "dropping unparseable date");
      }
      slot.is_some()
    }
    Slot::List(slot) => {
      let mut unique: Vec<String> = Vec::new();
      for value in values {
        if !unique.iter().any(|seen| seen == value) {
          unique.push(value.to_owned());
        }
      }
      *slot = (!unique.is_empty()).then_some(unique);
      slot.is_some()
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::{DateTime, TimeZone, Utc};

  use super::*;
  use crate::ruleset::catalog;

  fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
  }

  fn ruleset(name: &str) -> &'static Ruleset {
    catalog().unwrap().get(name).unwrap()
  }

  fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|v| (*v).to_owned()).collect())
  }

  #[test]
  fn com_record_with_three_fields() {
    let raw = "Domain Name: EXAMPLE.COM\nRegistrar: Example Registrar\nCreation Date: 1995-08-14T04:00:00Z\n";
    let record = parse("example.com", raw).unwrap();
    assert_eq!(
      record,
      WhoisRecord {
        domain_name: Some("EXAMPLE.COM".into()),
        registrar: Some("Example Registrar".into()),
        creation_date: Some(utc(1995, 8, 14, 4, 0, 0)),
        ..WhoisRecord::default()
      }
    );
  }

  #[test]
  fn com_no_match_is_not_found() {
    let err = parse("example.com", "No match for \"EXAMPLE.COM\".").unwrap_err();
    assert!(matches!(
      err,
      Error::DomainNotFound { ref domain } if domain == "example.com"
    ));
  }

  #[test]
  fn name_servers_keep_source_order() {
    let raw = "Name Server: NS1.EXAMPLE.COM\nName Server: NS2.EXAMPLE.COM\n";
    let record = parse("example.com", raw).unwrap();
    assert_eq!(
      record.name_servers,
      strings(&["NS1.EXAMPLE.COM", "NS2.EXAMPLE.COM"])
    );
  }

  #[test]
  fn multi_values_are_deduplicated_in_first_seen_order() {
    let raw = "Name Server: b.example\nName Server: a.example\nName Server: b.example\n\
               Domain Status: ok\nDomain Status: ok\n";
    let record = parse("example.com", raw).unwrap();
    assert_eq!(record.name_servers, strings(&["b.example", "a.example"]));
    assert_eq!(record.status, strings(&["ok"]));
  }

  #[test]
  fn not_found_wins_over_extractable_data() {
    let raw = "Domain Name: EXAMPLE.COM\nNo match for \"EXAMPLE.COM\".\n";
    assert!(parse("example.com", raw).unwrap_err().is_not_found());
  }

  #[test]
  fn baseline_checks_apply_to_every_ruleset() {
    for domain in ["example.zz", "example.de", "example.pp.ua"] {
      let err = parse(domain, "This TLD has no whois server.").unwrap_err();
      assert!(err.is_not_found(), "{domain}");
    }
  }

  #[test]
  fn unparseable_dates_leave_the_field_absent() {
    let raw = "Domain Name: EXAMPLE.COM\nCreation Date: before Aug-1996\n";
    let record = parse("example.com", raw).unwrap();
    assert_eq!(record.domain_name.as_deref(), Some("EXAMPLE.COM"));
    assert_eq!(record.creation_date, None);
  }

  #[test]
  fn fields_outside_the_ruleset_stay_absent() {
    let raw = "Domain Name: example.ae\nRegistrar: Someone\nStatus: ok\n";
    let ae = ruleset("ae");
    assert!(ae.covers(Field::DomainName));
    assert!(!ae.covers(Field::Registrar));
    let record = extract(raw, ae);
    assert_eq!(record.domain_name.as_deref(), Some("example.ae"));
    assert_eq!(record.registrar, None);
  }

  #[test]
  fn extraction_is_idempotent() {
    let raw = "Domain Name: EXAMPLE.COM\nName Server: NS1.EXAMPLE.COM\nRegistrant Email: a@example.com\n";
    let ruleset = ruleset("com");
    assert_eq!(extract(raw, ruleset), extract(raw, ruleset));
  }

  #[test]
  fn empty_text_gives_an_empty_record() {
    assert!(parse("example.com", "").unwrap().is_empty());
  }

  #[test]
  fn alternation_uses_whichever_branch_matched() {
    let raw = "Domain Name: example.in\nLast Updated On: 2024-01-02\nCreated On: 2001-02-03\n";
    let record = parse("example.in", raw).unwrap();
    assert_eq!(record.updated_date, Some(utc(2024, 1, 2, 0, 0, 0)));
    assert_eq!(record.creation_date, Some(utc(2001, 2, 3, 0, 0, 0)));
  }

  const UK: &str = "
    Domain name:
        example.co.uk

    Data validation:
        Nominet was able to match the registrant's name and address against a 3rd party data source on 10-Dec-2012

    Registrar:
        Example Registrar Ltd [Tag = EXAMPLE]
        URL: https://www.example-registrar.co.uk

    Relevant dates:
        Registered on: 14-Feb-1999
        Expiry date:  14-Feb-2026
        Last updated:  13-Jan-2025

    Registration status:
        Registered until expiry date.

    Name servers:
        ns1.example.net
        ns2.example.net

    WHOIS lookup made at 10:00:00 01-Feb-2025
";

  #[test]
  fn uk_skips_hosts_followed_by_headings() {
    let record = parse("example.co.uk", UK).unwrap();
    assert_eq!(record.domain_name.as_deref(), Some("example.co.uk"));
    assert_eq!(
      record.registrar.as_deref(),
      Some("Example Registrar Ltd [Tag = EXAMPLE]")
    );
    assert_eq!(
      record.registrar_url.as_deref(),
      Some("https://www.example-registrar.co.uk")
    );
    assert_eq!(record.creation_date, Some(utc(1999, 2, 14, 0, 0, 0)));
    assert_eq!(record.expiration_date, Some(utc(2026, 2, 14, 0, 0, 0)));
    assert_eq!(record.updated_date, Some(utc(2025, 1, 13, 0, 0, 0)));
    assert_eq!(record.status, strings(&["Registered until expiry date."]));
    assert_eq!(
      record.name_servers,
      strings(&["ns1.example.net", "ns2.example.net"])
    );
  }

  #[test]
  fn uk_no_match() {
    let raw = "\n    No match for \"nothere.co.uk\".\n";
    assert!(parse("nothere.co.uk", raw).unwrap_err().is_not_found());
  }

  #[test]
  fn de_reads_denic_layout() {
    let raw = "Domain: example.de\nNserver: ns1.example.net\nNserver: ns2.example.net\n\
               Status: connect\nChanged: 2018-03-12T21:44:25+01:00\n";
    let record = parse("example.de", raw).unwrap();
    assert_eq!(record.domain_name.as_deref(), Some("example.de"));
    assert_eq!(record.status, strings(&["connect"]));
    assert_eq!(record.updated_date, Some(utc(2018, 3, 12, 20, 44, 25)));
    assert_eq!(
      record.name_servers,
      strings(&["ns1.example.net", "ns2.example.net"])
    );
    assert_eq!(record.name, None);

    let free = "Domain: nothere.de\nStatus: free\n";
    assert!(parse("nothere.de", free).unwrap_err().is_not_found());
  }

  #[test]
  fn eu_name_server_block_stops_at_blank_line() {
    let raw = "Domain: example.eu\nScript: LATIN\n\nRegistrant:\n        NOT DISCLOSED!\n\n\
               Registrar:\n        Name: Example Registrar GmbH\n        Website: https://www.example-registrar.eu\n\n\
               Name servers:\n        ns1.example.eu\n        ns2.example.eu\n\n\
               Keys:\n        flags:KSK protocol:3 algorithm:ECDSA_P256_SHA256\n";
    let record = parse("example.eu", raw).unwrap();
    assert_eq!(record.domain_name.as_deref(), Some("example.eu"));
    assert_eq!(record.registrar.as_deref(), Some("Example Registrar GmbH"));
    assert_eq!(
      record.registrar_url.as_deref(),
      Some("https://www.example-registrar.eu")
    );
    assert_eq!(
      record.name_servers,
      strings(&["ns1.example.eu", "ns2.example.eu"])
    );

    assert!(parse("nothere.eu", "\nStatus: AVAILABLE\n")
      .unwrap_err()
      .is_not_found());
  }

  #[test]
  fn jp_reads_bracketed_labels() {
    let raw = "Domain Information:\n\
               [Domain Name]                   EXAMPLE.JP\n\n\
               [Registrant]                    Example Co., Ltd.\n\n\
               [Name Server]                   ns1.example.jp\n\
               [Name Server]                   ns2.example.jp\n\n\
               [Created on]                    2005/05/30\n\
               [Expires on]                    2025/05/31\n\
               [Status]                        Active\n";
    let record = parse("example.jp", raw).unwrap();
    assert_eq!(record.domain_name.as_deref(), Some("EXAMPLE.JP"));
    assert_eq!(record.org.as_deref(), Some("Example Co., Ltd."));
    assert_eq!(
      record.name_servers,
      strings(&["ns1.example.jp", "ns2.example.jp"])
    );
    assert_eq!(record.creation_date, Some(utc(2005, 5, 30, 0, 0, 0)));
    assert_eq!(record.expiration_date, Some(utc(2025, 5, 31, 0, 0, 0)));
    assert_eq!(record.status, strings(&["Active"]));
  }

  #[test]
  fn ch_reads_values_on_the_line_after_labels() {
    let raw = "Requests of this client are not permitted.\n\n\
               Domain name:\nexample.ch\n\n\
               Holder of domain name:\nExample AG\nDomain Administrator\nBahnhofstrasse 1\n8001 Zuerich\n\n\
               Registrar:\nExample Registrar AG\n\n\
               First registration date:\n2001-02-12\n\n\
               DNSSEC:N\n\n\
               Name servers:\nns1.example.ch\nns2.example.ch\n\n";
    let record = parse("example.ch", raw).unwrap();
    assert_eq!(record.domain_name.as_deref(), Some("example.ch"));
    assert_eq!(record.registrar.as_deref(), Some("Example Registrar AG"));
    assert_eq!(record.creation_date, Some(utc(2001, 2, 12, 0, 0, 0)));
    assert_eq!(record.dnssec.as_deref(), Some("N"));
    assert_eq!(
      record.name_servers,
      strings(&["ns1.example.ch", "ns2.example.ch"])
    );
    assert_eq!(parse("example.li", raw).unwrap(), record);
  }

  #[test]
  fn it_ignores_indented_contact_dates() {
    let raw = "Domain:             example.it\n\
               Status:             ok\n\
               Created:            2000-01-01 00:00:00\n\
               Last Update:        2024-01-16 00:52:43\n\
               Expire Date:        2025-01-01\n\n\
               Registrant\n  Organization:     Example S.p.A.\n  Address:          Via Roma 1\n\
               \x20                   Milano\n  Created:          2010-05-01 10:00:00\n\n\
               Nameservers\n  ns1.example.it\n  ns2.example.it\n\n";
    let record = parse("example.it", raw).unwrap();
    assert_eq!(record.domain_name.as_deref(), Some("example.it"));
    assert_eq!(record.creation_date, Some(utc(2000, 1, 1, 0, 0, 0)));
    assert_eq!(record.updated_date, Some(utc(2024, 1, 16, 0, 52, 43)));
    assert_eq!(record.expiration_date, Some(utc(2025, 1, 1, 0, 0, 0)));
    assert_eq!(record.status, strings(&["ok"]));
    assert_eq!(record.org.as_deref(), Some("Example S.p.A."));
    assert_eq!(record.address.as_deref(), Some("Via Roma 1"));
    assert_eq!(
      record.name_servers,
      strings(&["ns1.example.it", "ns2.example.it"])
    );
  }

  #[test]
  fn tw_reads_positional_registrant_block() {
    let raw = "Domain Name: example.tw\n\
               \x20  Domain Status: clientTransferProhibited\n\
               \x20  Registrant:\n\
               \x20     Example Inc.\n\
               \x20     Example Inc.  dns-admin@example.tw\n\
               \x20     +886.212345678\n\
               \x20     +886.212345679\n\
               \x20     1 Example Road\n\
               \x20     Taipei City, Taipei\n\
               \x20     TW\n\n\
               \x20  Record expires on 2025-10-19 00:00:00 (UTC+8)\n\
               \x20  Record created on 2000-10-19 00:00:00 (UTC+8)\n\n\
               \x20  Domain servers in listed order:\n\
               \x20     ns1.example.tw\n\
               \x20     ns2.example.tw\n\n\
               Registration Service Provider: EXAMPLE-REG\n\
               Registration Service URL: http://www.example.com.tw/\n";
    let record = parse("example.tw", raw).unwrap();
    assert_eq!(record.domain_name.as_deref(), Some("example.tw"));
    assert_eq!(record.name.as_deref(), Some("Example Inc."));
    assert_eq!(record.address.as_deref(), Some("1 Example Road"));
    assert_eq!(record.city.as_deref(), Some("Taipei City"));
    assert_eq!(record.state.as_deref(), Some("Taipei"));
    assert_eq!(record.country.as_deref(), Some("TW"));
    assert_eq!(record.creation_date, Some(utc(2000, 10, 19, 0, 0, 0)));
    assert_eq!(record.expiration_date, Some(utc(2025, 10, 19, 0, 0, 0)));
    assert_eq!(record.registrar.as_deref(), Some("EXAMPLE-REG"));
    assert_eq!(
      record.name_servers,
      strings(&["ns1.example.tw", "ns2.example.tw"])
    );
  }

  #[test]
  fn pl_creation_date_skips_option_created() {
    let raw = "DOMAIN NAME:           example.pl\n\
               option created:        2020.01.01 00:00:00\n\
               created:               1999.01.01 13:00:00\n\
               last modified:         2024.03.03 10:00:00\n\
               renewal date:          2025.01.01 13:00:00\n\n\
               REGISTRAR:\nExample Registrar Sp. z o.o.\n";
    let record = parse("example.pl", raw).unwrap();
    assert_eq!(record.domain_name.as_deref(), Some("example.pl"));
    assert_eq!(record.creation_date, Some(utc(1999, 1, 1, 13, 0, 0)));
    assert_eq!(record.updated_date, Some(utc(2024, 3, 3, 10, 0, 0)));
    assert_eq!(record.expiration_date, Some(utc(2025, 1, 1, 13, 0, 0)));
    assert_eq!(
      record.registrar.as_deref(),
      Some("Example Registrar Sp. z o.o.")
    );
  }

  #[test]
  fn ua_dates_with_hour_only_offsets() {
    let raw = "domain:           example.ua\n\
               status:           ok\n\
               created:          2000-06-22 15:53:00+03\n\
               modified:         2023-05-10 10:00:00+03\n\
               expires:          2025-06-22 15:53:00+03\n";
    let record = parse("example.ua", raw).unwrap();
    assert_eq!(record.creation_date, Some(utc(2000, 6, 22, 12, 53, 0)));
    assert_eq!(record.updated_date, Some(utc(2023, 5, 10, 7, 0, 0)));
    assert_eq!(record.expiration_date, Some(utc(2025, 6, 22, 12, 53, 0)));
  }

  #[test]
  fn kz_and_jp_dates_with_zone_notes() {
    let kz = "Domain Name............: example.kz\n\
              Domain created: 2009-01-21 18:42:11 (GMT+0:00)\n\
              Last modified : 2023-02-01 10:00:00 (GMT+0:00)\n";
    let record = parse("example.kz", kz).unwrap();
    assert_eq!(record.creation_date, Some(utc(2009, 1, 21, 18, 42, 11)));
    assert_eq!(record.updated_date, Some(utc(2023, 2, 1, 10, 0, 0)));

    let jp = "[Domain Name]                   EXAMPLE.JP\n\
              [Last Update]                   2024/06/01 01:05:03 (JST)\n";
    let record = parse("example.jp", jp).unwrap();
    assert_eq!(record.updated_date, Some(utc(2024, 6, 1, 1, 5, 3)));
  }

  #[test]
  fn kz_reads_dotted_labels() {
    let raw = "Whois Server for the KZ top level domain name.\n\n\
               Domain Name............: example.kz\n\n\
               Organization Using Domain Name\n\
               Name...................: Example LLP\n\
               Organization Name......: Example LLP\n\n\
               Administrative Contact/Agent\n\
               Email Address..........: admin@example.kz\n\n\
               Nameserver in listed order\n\n\
               Primary server.........: ns1.example.kz\n\
               Primary ip address.....: 192.0.2.1\n\n\
               Secondary server.......: ns2.example.kz\n\
               Secondary ip address...: 192.0.2.2\n\n\
               Current Registar: HOSTER.KZ\n";
    let record = parse("example.kz", raw).unwrap();
    assert_eq!(record.domain_name.as_deref(), Some("example.kz"));
    assert_eq!(record.org.as_deref(), Some("Example LLP"));
    assert_eq!(record.registrar.as_deref(), Some("HOSTER.KZ"));
    assert_eq!(record.emails, strings(&["admin@example.kz"]));
    assert_eq!(
      record.name_servers,
      strings(&["ns1.example.kz", "ns2.example.kz"])
    );
  }
}
