//! The normalized WHOIS record and its field identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies one field of a [`WhoisRecord`].
///
/// Rulesets key their patterns by `Field`, and the extraction engine writes
/// through [`WhoisRecord::slot`], so every assignment is checked against the
/// record's real shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
  DomainName,
  Registrar,
  RegistrarUrl,
  Reseller,
  WhoisServer,
  ReferralUrl,
  UpdatedDate,
  CreationDate,
  ExpirationDate,
  NameServers,
  Status,
  Emails,
  Dnssec,
  Name,
  Org,
  Address,
  City,
  State,
  RegistrantPostalCode,
  Country,
}

impl Field {
  pub const ALL: [Self; 20] = [
    Self::DomainName,
    Self::Registrar,
    Self::RegistrarUrl,
    Self::Reseller,
    Self::WhoisServer,
    Self::ReferralUrl,
    Self::UpdatedDate,
    Self::CreationDate,
    Self::ExpirationDate,
    Self::NameServers,
    Self::Status,
    Self::Emails,
    Self::Dnssec,
    Self::Name,
    Self::Org,
    Self::Address,
    Self::City,
    Self::State,
    Self::RegistrantPostalCode,
    Self::Country,
  ];

  /// The serialized (camelCase) field name.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::DomainName => "domainName",
      Self::Registrar => "registrar",
      Self::RegistrarUrl => "registrarUrl",
      Self::Reseller => "reseller",
      Self::WhoisServer => "whoisServer",
      Self::ReferralUrl => "referralUrl",
      Self::UpdatedDate => "updatedDate",
      Self::CreationDate => "creationDate",
      Self::ExpirationDate => "expirationDate",
      Self::NameServers => "nameServers",
      Self::Status => "status",
      Self::Emails => "emails",
      Self::Dnssec => "dnssec",
      Self::Name => "name",
      Self::Org => "org",
      Self::Address => "address",
      Self::City => "city",
      Self::State => "state",
      Self::RegistrantPostalCode => "registrantPostalCode",
      Self::Country => "country",
    }
  }

  /// Whether the field collects every distinct value instead of one.
  #[must_use]
  pub const fn is_multi(self) -> bool {
    matches!(self, Self::NameServers | Self::Status | Self::Emails)
  }

  /// Fields named like `*Date` hold timestamps.
  #[must_use]
  pub fn is_temporal(self) -> bool {
    self.name().to_ascii_lowercase().contains("date")
  }
}

impl std::fmt::Display for Field {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

/// Mutable view of one record field, typed by what it stores.
pub enum Slot<'a> {
  Text(&'a mut Option<String>),
  Timestamp(&'a mut Option<DateTime<Utc>>),
  List(&'a mut Option<Vec<String>>),
}

/// Registration data extracted from a WHOIS response.
///
/// Every field is optional: `None` means the registry's text did not carry
/// it (or the ruleset does not ask for it). Present strings are trimmed and
/// non-empty; present lists hold at least one unique value in the order the
/// values first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisRecord {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub domain_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub registrar: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub registrar_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reseller: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub whois_server: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub referral_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_date: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub creation_date: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expiration_date: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name_servers: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub emails: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dnssec: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub org: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub address: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub city: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub state: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub registrant_postal_code: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub country: Option<String>,
}

impl WhoisRecord {
  /// Returns the storage for `field`.
  pub fn slot(&mut self, field: Field) -> Slot<'_> {
    match field {
      Field::DomainName => Slot::Text(&mut self.domain_name),
      Field::Registrar => Slot::Text(&mut self.registrar),
      Field::RegistrarUrl => Slot::Text(&mut self.registrar_url),
      Field::Reseller => Slot::Text(&mut self.reseller),
      Field::WhoisServer => Slot::Text(&mut self.whois_server),
      Field::ReferralUrl => Slot::Text(&mut self.referral_url),
      Field::UpdatedDate => Slot::Timestamp(&mut self.updated_date),
      Field::CreationDate => Slot::Timestamp(&mut self.creation_date),
      Field::ExpirationDate => Slot::Timestamp(&mut self.expiration_date),
      Field::NameServers => Slot::List(&mut self.name_servers),
      Field::Status => Slot::List(&mut self.status),
      Field::Emails => Slot::List(&mut self.emails),
      Field::Dnssec => Slot::Text(&mut self.dnssec),
      Field::Name => Slot::Text(&mut self.name),
      Field::Org => Slot::Text(&mut self.org),
      Field::Address => Slot::Text(&mut self.address),
      Field::City => Slot::Text(&mut self.city),
      Field::State => Slot::Text(&mut self.state),
      Field::RegistrantPostalCode => {
        Slot::Text(&mut self.registrant_postal_code)
      }
      Field::Country => Slot::Text(&mut self.country),
    }
  }

  /// True when no field was populated.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    *self == Self::default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn temporal_fields_are_exactly_the_timestamp_slots() {
    let mut record = WhoisRecord::default();
    for field in Field::ALL {
      let is_timestamp = matches!(record.slot(field), Slot::Timestamp(_));
      assert_eq!(field.is_temporal(), is_timestamp, "{field}");
    }
  }

  #[test]
  fn multi_fields_are_exactly_the_list_slots() {
    let mut record = WhoisRecord::default();
    for field in Field::ALL {
      let is_list = matches!(record.slot(field), Slot::List(_));
      assert_eq!(field.is_multi(), is_list, "{field}");
    }
  }

  #[test]
  fn serializes_camel_case_and_skips_absent_fields() {
    let record = WhoisRecord {
      domain_name: Some("EXAMPLE.COM".into()),
      registrant_postal_code: Some("12345".into()),
      name_servers: Some(vec!["ns1.example.com".into()]),
      ..WhoisRecord::default()
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "domainName": "EXAMPLE.COM",
        "registrantPostalCode": "12345",
        "nameServers": ["ns1.example.com"],
      })
    );
  }

  #[test]
  fn empty_record_reports_empty() {
    assert!(WhoisRecord::default().is_empty());
    let record = WhoisRecord {
      dnssec: Some("unsigned".into()),
      ..WhoisRecord::default()
    };
    assert!(!record.is_empty());
  }
}
