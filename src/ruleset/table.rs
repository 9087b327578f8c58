//! The bundled registry rulesets.
//!
//! Each entry mirrors the labels one registry (or registry family) prints.
//! Patterns are case-insensitive unless noted. Positional patterns (fixed
//! line offsets after a heading) are the most fragile entries here: they
//! break as soon as a registry reflows its output.

use super::FieldPattern as P;
use super::NotFoundCheck::{Contains, EndsWith, Equals, StartsWith, StartsWithIgnoreCase};
use super::{NotFoundCheck, RulesetDef};
use crate::record::Field as F;

/// RFC 5322-ish address matcher shared by the rulesets that scrape every
/// e-mail address out of the response.
const EMAIL: &str = r"(?i)[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?";

const NO_MATCH_QUOTED: NotFoundCheck = Contains("No match for \"");

/// ICANN-style "Label: value" layout used by most gTLD registries.
const BASE: &[P] = &[
  P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
  P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
  P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
  P::first(F::Reseller, r"(?i)Reseller:\s*(.+)"),
  P::first(F::WhoisServer, r"(?i)Whois Server:\s*(.+)"),
  P::first(F::ReferralUrl, r"(?i)Referral URL:\s*(.+)"),
  P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
  P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
  P::first(F::ExpirationDate, r"(?i)Expir\w+ Date:\s*(.+)"),
  P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
  P::all(F::Status, r"(?i)Status:\s*(.+)"),
  P::all(F::Emails, EMAIL),
  P::first(F::Dnssec, r"(?i)dnssec:\s*(\S+)"),
  P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
  P::first(F::Org, r"(?i)Registrant\s*Organization:\s*(.+)"),
  P::first(F::Address, r"(?i)Registrant Street:\s*(.+)"),
  P::first(F::City, r"(?i)Registrant City:\s*(.+)"),
  P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
  P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.+)"),
  P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
];

/// Coordination Center for TLD RU layout, shared by several Russian zones.
const RU: &[P] = &[
  P::first(F::DomainName, r"(?i)domain:\s*(.+)"),
  P::first(F::Registrar, r"(?i)registrar:\s*(.+)"),
  P::first(F::CreationDate, r"(?i)created:\s*(.+)"),
  P::first(F::ExpirationDate, r"(?i)paid-till:\s*(.+)"),
  P::all(F::NameServers, r"(?i)nserver:\s*(.+)"),
  P::all(F::Status, r"(?i)state:\s*(.+)"),
  P::all(F::Emails, EMAIL),
  P::first(F::Org, r"(?i)org:\s*(.+)"),
];

const BZ: &[P] = &[
  P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
  P::first(F::WhoisServer, r"(?i)Registrar WHOIS Server:\s*(.+)"),
  P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
  P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
  P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
  P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
  P::first(F::Org, r"(?i)Registrant Organization:\s*(.+)"),
  P::first(F::Address, r"(?i)Registrant Street:\s*(.+)"),
  P::first(F::City, r"(?i)Registrant City:\s*(.+)"),
  P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
  P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.+)"),
  P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
  P::first(F::Emails, r"(?i)Registrant Email:\s*(.+)"),
  P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
  P::first(
    F::ExpirationDate,
    r"(?i)Registrar Registration Expiration Date:\s*(.+)",
  ),
  P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
  P::first(F::Dnssec, r"(?i)DNSSEC:\s*(.+)"),
  P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
];

const CH_LI: &[P] = &[
  P::first(F::DomainName, r"(?i)\nDomain name:\n*(.+)"),
  P::first(F::Name, r"(?i)Holder of domain name:\s*(?:.*\n){1}\s*(.+)"),
  P::first(F::Address, r"(?i)Holder of domain name:\s*(?:.*\n){2}\s*(.+)"),
  P::first(F::Registrar, r"(?i)Registrar:\n*(.+)"),
  P::first(F::CreationDate, r"(?i)First registration date:\n*(.+)"),
  P::first(F::Dnssec, r"(?i)DNSSEC:(\S+)"),
  P::first(F::NameServers, r"(?i)Name servers:\n *([\n\S\s]+)"),
];

const SE_NU: &[P] = &[
  P::first(F::DomainName, r"(?i)domain\.*: *(.+)"),
  P::first(F::Name, r"(?i)holder\.*: *(.+)"),
  P::first(F::CreationDate, r"(?i)created\.*: *(.+)"),
  P::first(F::UpdatedDate, r"(?i)modified\.*: *(.+)"),
  P::first(F::ExpirationDate, r"(?i)expires\.*: *(.+)"),
  P::all(F::NameServers, r"(?i)nserver\.*: *(.+)"),
  P::first(F::Dnssec, r"(?i)dnssec\.*: *(.+)"),
  P::all(F::Status, r"(?i)status\.*: *(.+)"),
  P::first(F::Registrar, r"(?i)registrar: *(.+)"),
];

/// Every bundled ruleset. `default` is the fallback for unknown suffixes.
pub const RULESETS: &[RulesetDef] = &[
  RulesetDef {
    name: "default",
    fields: BASE,
    not_found: &[],
  },
  RulesetDef {
    name: "com",
    fields: BASE,
    not_found: &[NO_MATCH_QUOTED],
  },
  RulesetDef {
    name: "org",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)Whois Server:\s*(.+)"),
      P::first(F::ReferralUrl, r"(?i)Referral URL:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::all(F::Status, r"(?i)Status:\s*(.+)"),
      P::all(F::Emails, EMAIL),
    ],
    not_found: &[
      StartsWithIgnoreCase("NOT FOUND"),
      StartsWith("Domain not found"),
    ],
  },
  RulesetDef {
    name: "cl",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain name:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant name:\s*(.+)"),
      P::first(F::Org, r"(?i)Registrant organisation:\s*(.+)"),
      P::first(F::Registrar, r"(?i)registrar name:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiration date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name server:\s*(.+)"),
    ],
    not_found: &[NO_MATCH_QUOTED],
  },
  RulesetDef {
    name: "sg",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain name:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant:\n\s+Name:(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation date:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::first(F::Dnssec, r"(?i)DNSSEC:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name server:\s*(.+)"),
    ],
    not_found: &[Contains("Domain Not Found")],
  },
  RulesetDef {
    name: "pe",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain name:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)WHOIS Server:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Sponsoring Registrar:\s*(.+)"),
      P::first(F::Org, r"(?i)Admin Name:\s*(.+)"),
      P::first(F::Emails, r"(?i)Admin Email:\s*(.+)"),
      P::first(F::Dnssec, r"(?i)DNSSEC:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name server:\s*(.+)"),
    ],
    not_found: &[NO_MATCH_QUOTED],
  },
  RulesetDef {
    name: "ro",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::ReferralUrl, r"(?i)Referral URL:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Registered On:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expires On:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Nameserver:\s*(.+)"),
      P::first(F::Dnssec, r"(?i)DNSSEC:\s*(.+)"),
    ],
    not_found: &[Equals("NOT FOUND")],
  },
  RulesetDef {
    name: "ru",
    fields: RU,
    not_found: &[Contains("No entries found")],
  },
  RulesetDef {
    name: "nl",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Date\sout\sof\squarantine:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated\sDate:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation\sDate:\s*(.+)"),
      P::all(F::Status, r"(?i)Status:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.*\n)"),
      P::first(F::Dnssec, r"(?i)DNSSEC:\s*(.+)"),
    ],
    not_found: &[EndsWith("is free")],
  },
  RulesetDef {
    name: "lt",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain:\s?(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expires:\s?(.+)"),
      P::first(F::CreationDate, r"(?i)Registered:\s?(.+)"),
      P::all(F::Status, r"(?i)\nStatus:\s?(.+)"),
    ],
    not_found: &[EndsWith("available")],
  },
  RulesetDef {
    name: "name",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Sponsoring Registrar:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Created On:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expires On:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated On:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
    ],
    not_found: &[Contains("No match for ")],
  },
  RulesetDef {
    name: "us",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)Registrar WHOIS Server:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::Org, r"(?i)Registrant Organization:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant Street:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant City:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.+)"),
      P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
      P::first(F::Emails, r"(?i)Registrant Email:\s*(.+)"),
    ],
    not_found: &[Contains("No Data Found")],
  },
  RulesetDef {
    name: "pl",
    fields: &[
      P::first(F::DomainName, r"(?i)DOMAIN NAME:\s*(.+)\n"),
      P::all(F::NameServers, r"(?i)nameservers:\s+([^\s]+)\.[^\n]*\n"),
      P::first(F::Registrar, r"(?i)REGISTRAR:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)URL:\s*(.+)"),
      P::first(F::Status, r"(?i)Registration status:\n\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant:\n\s*(.+)"),
      // "created:" but not "option created:"
      P::first(F::CreationDate, r"(?i)(?:^|[^ ])created:\s*(.+)\n"),
      P::first(F::ExpirationDate, r"(?i)renewal date:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)last modified:\s*(.+)\n"),
    ],
    not_found: &[Contains("No information available about domain name")],
  },
  RulesetDef {
    name: "group",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)Registrar WHOIS Server:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expir\w+ Date:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain status:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
    ],
    not_found: &[Contains("Domain not found")],
  },
  RulesetDef {
    name: "ca",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain name:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)Registrar WHOIS Server:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain status:\s*(.+)"),
      P::all(F::Emails, r"(?i)Email:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiry Date:\s*(.+)"),
      P::first(F::Dnssec, r"(?i)dnssec:\s*(\S+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
    ],
    not_found: &[
      Contains("Domain status:         available"),
      Contains("Not found:"),
    ],
  },
  RulesetDef {
    name: "me",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::Org, r"(?i)Registrant Organization:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant Address:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant City:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
      P::first(F::Country, r"(?i)Registrant Country/Economy:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.+)"),
      P::first(F::Emails, r"(?i)Registrant E-mail:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Nameservers:\s*(.+)"),
    ],
    not_found: &[Contains("NOT FOUND")],
  },
  RulesetDef {
    name: "uk",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)URL:\s*(.+)"),
      P::all(F::Status, r"(?i)Registration status:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Registered on:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiry date:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Last updated:\s*(.+)"),
      // Host names, but not the headings that follow the name server list.
      P::all(
        F::NameServers,
        r"(?i)([\w.-]+\.(?:[\w-]+\.){1,2}[a-zA-Z]{2,})\s+",
      )
      .unless_followed_by(r"(?i)\s+(?:Relevant|Data)"),
    ],
    not_found: &[Contains("No match for ")],
  },
  RulesetDef {
    name: "fr",
    fields: &[
      P::first(F::DomainName, r"(?i)domain:\s*(.+)"),
      P::first(F::Registrar, r"(?i)registrar:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)created:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expir\w+ Date:\s?(.+)"),
      P::all(F::NameServers, r"(?i)nserver:\s*(.+)"),
      P::all(F::Status, r"(?i)status:\s*(.+)"),
      P::all(F::Emails, EMAIL),
      P::first(F::UpdatedDate, r"(?i)last-update:\s*(.+)"),
    ],
    not_found: &[Contains("No entries found")],
  },
  RulesetDef {
    name: "fi",
    fields: &[
      P::first(F::DomainName, r"(?i)domain\.?:\s*(\S+)"),
      P::first(F::Name, r"(?i)Holder\s*name\.?:\s*(.+)"),
      P::first(F::Address, r"(?i)Holder[\w\W]*address\.?:\s*(.+)"),
      P::all(F::Status, r"(?i)status\.?:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)created\.?:\s*(\S+)"),
      P::first(F::UpdatedDate, r"(?i)modified\.?:\s*(\S+)"),
      P::first(F::ExpirationDate, r"(?i)expires\.?:\s*(\S+)"),
      P::all(F::NameServers, r"(?i)nserver\.?:\s*(\S+) \[\S+\]"),
      P::first(F::Dnssec, r"(?i)dnssec\.?:\s*(\S+)"),
      P::first(F::Registrar, r"(?i)Registrar\s*registrar\.?:\s*(.+)"),
    ],
    not_found: &[Contains("Domain not ")],
  },
  RulesetDef {
    name: "jp",
    fields: &[
      P::first(F::DomainName, r"(?im)^\[Domain Name\]\s*(.+)$"),
      P::first(F::Org, r"(?im)^\[(?:Organization|Registrant)\](.+)$"),
      P::first(F::CreationDate, r"(?i)\[Created on\]\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)\[Expires on\]\s*(.+)"),
      P::all(F::NameServers, r"(?im)^\[Name Server\]\s*(.+)$"),
      P::first(F::UpdatedDate, r"(?im)^\[Last Updated?\]\s?(.+)$"),
      P::all(F::Status, r"(?i)\[(?:State|Status)\]\s*(.+)"),
    ],
    not_found: &[Contains("No match!!")],
  },
  RulesetDef {
    name: "au",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)\n"),
      P::first(F::UpdatedDate, r"(?i)Last Modified:\s*(.+)\n"),
      P::first(F::Registrar, r"(?i)Registrar Name:\s*(.+)\n"),
      P::all(F::Status, r"(?i)Status:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
    ],
    not_found: &[Equals("No Data Found")],
  },
  RulesetDef {
    name: "rs",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain name:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain status:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Registration date:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Modification date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiration date:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant:.*\nAddress:\s*(.+)"),
      P::all(F::NameServers, r"(?i)DNS:\s*(\S+)"),
      P::first(F::Dnssec, r"(?i)DNSSEC signed:\s*(\S+)"),
    ],
    not_found: &[Equals("%ERROR:103: Domain is not registered")],
  },
  RulesetDef {
    name: "eu",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain:\s*([^\n\r]+)"),
      P::first(F::Registrar, r"(?i)Registrar:\n\s*Name:\s*([^\n\r]+)"),
      P::first(F::RegistrarUrl, r"(?i)\n\s*Website:\s*([^\n\r]+)"),
      P::first(F::NameServers, r"(?i)Name servers:\n\s*([\n\S\s]+)"),
    ],
    not_found: &[Equals("Status: AVAILABLE")],
  },
  RulesetDef {
    name: "ee",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain:\s*[\n\r]+\s*name:\s*([^\n\r]+)"),
      P::first(
        F::Status,
        r"(?i)Domain:\s*[\n\r]+\s*name:\s*[^\n\r]+\sstatus:\s*([^\n\r]+)",
      ),
      P::first(
        F::CreationDate,
        r"(?i)Domain:\s*[\n\r]+\s*name:\s*[^\n\r]+\sstatus:\s*[^\n\r]+\sregistered:\s*([^\n\r]+)",
      ),
      P::first(
        F::UpdatedDate,
        r"(?i)Domain:\s*[\n\r]+\s*name:\s*[^\n\r]+\sstatus:\s*[^\n\r]+\sregistered:\s*[^\n\r]+\schanged:\s*([^\n\r]+)",
      ),
      P::first(
        F::ExpirationDate,
        r"(?i)Domain:\s*[\n\r]+\s*name:\s*[^\n\r]+\sstatus:\s*[^\n\r]+\sregistered:\s*[^\n\r]+\schanged:\s*[^\n\r]+\sexpire:\s*([^\n\r]+)",
      ),
      P::first(F::Registrar, r"(?i)Registrar:\s*[\n\r]+\s*name:\s*([^\n\r]+)"),
      P::all(F::NameServers, r"(?i)nserver:\s*(.*)"),
    ],
    not_found: &[Equals("Domain not found")],
  },
  RulesetDef {
    name: "br",
    fields: &[
      P::first(F::DomainName, r"(?i)domain:\s*(.+)\n"),
      P::first(F::Name, r"(?i)owner:\s*([\S ]+)"),
      P::first(F::Country, r"(?i)country:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)created:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)changed:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)expires:\s*(.+)"),
      P::all(F::Status, r"(?i)status:\s*(.+)"),
      P::all(F::NameServers, r"(?i)nserver:\s*(.+)"),
      P::all(F::Emails, r"(?i)e-mail:\s*(.+)"),
    ],
    not_found: &[Contains("Not found:")],
  },
  RulesetDef {
    name: "kr",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name\s*:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant\s*:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant Address\s*:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Zip Code\s*:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Registered Date\s*:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Last updated Date\s*:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiration Date\s*:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Authorized Agency\s*:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Host Name\s*:\s*(.+)"),
      P::all(F::Emails, r"(?i)AC E-Mail\s*:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status\s*:\s*(.+)"),
    ],
    not_found: &[EndsWith(" no match")],
  },
  RulesetDef {
    name: "pt",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiration Date:\s*(.+)"),
      P::first(F::Name, r"(?i)Owner Name:\s*(.+)"),
      P::first(F::Address, r"(?i)Owner Address:\s*(.+)"),
      P::first(F::City, r"(?i)Owner Locality:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Owner ZipCode:\s*(.+)"),
      P::first(F::Emails, r"(?i)Owner Email:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+) \|"),
    ],
    not_found: &[Equals("No entries found")],
  },
  RulesetDef {
    name: "bg",
    fields: &[
      P::first(F::DomainName, r"(?i)DOMAIN NAME:\s*(.+)\n"),
      P::first(F::Status, r"(?i)registration status:\s*(.+)"),
    ],
    not_found: &[Contains("does not exist in database!")],
  },
  RulesetDef {
    name: "de",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain:\s*(.+)"),
      P::first(F::Status, r"(?i)Status:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Changed:\s*(.+)"),
      P::first(F::Name, r"(?i)name:\s*(.+)"),
      P::first(F::Org, r"(?i)Organisation:\s*(.+)"),
      P::first(F::Address, r"(?i)Address:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)PostalCode:\s*(.+)"),
      P::first(F::City, r"(?i)City:\s*(.+)"),
      P::first(F::Country, r"(?i)CountryCode:\s*(.+)"),
      P::all(F::Emails, r"(?i)Email:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Nserver:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)created:\s*(.+)"),
    ],
    not_found: &[Contains("Status: free")],
  },
  RulesetDef {
    name: "at",
    fields: &[
      P::first(F::DomainName, r"(?i)domain:\s*(.+)"),
      P::first(F::Registrar, r"(?i)registrar:\s*(.+)"),
      P::all(F::NameServers, r"(?i)nserver:\s*(.+)"),
      P::first(F::Name, r"(?i)personname:\s*(.+)"),
      P::first(F::Org, r"(?i)organization:\s*(.+)"),
      P::first(F::Address, r"(?i)street address:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)postal code:\s*(.+)"),
      P::first(F::City, r"(?i)city:\s*(.+)"),
      P::first(F::Country, r"(?i)country:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)changed:\s*(.+)"),
      P::all(F::Emails, r"(?i)e-mail:\s*(.+)"),
    ],
    not_found: &[Contains("Status: free")],
  },
  RulesetDef {
    name: "be",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain:\s*(.+)"),
      P::first(F::Status, r"(?i)Status:\s*(.+)"),
      P::first(F::Name, r"(?i)Name:\s*(.+)"),
      P::first(F::Org, r"(?i)Organisation:\s*(.+)"),
      P::all(F::Emails, r"(?i)Email:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Registered:\s*(.+)"),
      P::first(F::NameServers, r"(?i)Nameservers:\s*((?:\s+?[\w.]+\s)*)"),
    ],
    not_found: &[Contains("Status: AVAILABLE")],
  },
  RulesetDef {
    name: "info",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)Whois Server:\s*(.+)"),
      P::first(F::ReferralUrl, r"(?i)Referral URL:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::all(F::Status, r"(?i)Status:\s*(.+)"),
      P::all(F::Emails, EMAIL),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::Org, r"(?i)Registrant Organization:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant Street:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant City:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.+)"),
      P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
    ],
    not_found: &[Contains("Domain not found")],
  },
  RulesetDef {
    name: "bz",
    fields: BZ,
    not_found: &[Contains("No entries found")],
  },
  RulesetDef {
    name: "studio",
    fields: BZ,
    not_found: &[Contains("Domain not found.")],
  },
  RulesetDef {
    name: "club",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Sponsoring Registrar:\s*(.+)"),
      P::first(
        F::RegistrarUrl,
        r"(?i)Registrar URL \(registration services\):\s*(.+)",
      ),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant Address1:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant City:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.+)"),
      P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
      P::first(F::Emails, r"(?i)Registrant Email:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Domain Registration Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Domain Expiration Date:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Domain Last Updated Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
    ],
    not_found: &[Contains("Not found:")],
  },
  RulesetDef {
    name: "io",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::Org, r"(?i)Registrant Organization:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
      P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
    ],
    not_found: &[Contains("is available for purchase")],
  },
  RulesetDef {
    name: "biz",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant Street:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant City:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.+)"),
      P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
      P::first(F::Emails, r"(?i)Registrant Email:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(
        F::ExpirationDate,
        r"(?i)Registrar Registration Expiration Date:\s*(.+)",
      ),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
    ],
    not_found: &[Contains("No Data Found")],
  },
  RulesetDef {
    name: "mobi",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::Org, r"(?i)Registrant Organization:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant Address:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant City:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
      P::first(F::Country, r"(?i)Registrant Country/Economy:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.+)"),
      P::first(F::Emails, r"(?i)Registrant E-mail:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
    ],
    not_found: &[Contains("NOT FOUND")],
  },
  RulesetDef {
    name: "kg",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain\s*(\w+\.\w{2,5})"),
      P::first(F::Registrar, r"(?i)Domain support:\s*(.+)"),
      P::first(F::Name, r"(?i)Name:\s*(.+)"),
      P::first(F::Address, r"(?i)Address:\s*(.+)"),
      P::first(F::Emails, r"(?i)Email:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Record created:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Record expires on\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Record last updated on\s*(.+)"),
      P::first(
        F::NameServers,
        r"(?i)Name servers in the listed order:\s*([\d\w.\s]+)",
      ),
    ],
    not_found: &[Contains(
      "Data not found. This domain is available for registration",
    )],
  },
  RulesetDef {
    name: "ch",
    fields: CH_LI,
    not_found: &[Contains(
      "We do not have an entry in our database matching your query.",
    )],
  },
  RulesetDef {
    name: "id",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:(.+)"),
      P::first(F::Registrar, r"(?i)Sponsoring Registrar Organization:(.+)"),
      P::first(F::CreationDate, r"(?i)Created On:(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiration Date:(.+)"),
      P::first(F::UpdatedDate, r"(?i)Last Updated On:(.+)"),
      P::first(F::Dnssec, r"(?i)DNSSEC:(.+)"),
      P::all(F::Status, r"(?i)Status:(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:(.+)"),
    ],
    not_found: &[Contains("NOT FOUND")],
  },
  RulesetDef {
    name: "se",
    fields: SE_NU,
    not_found: &[Contains("not found.")],
  },
  RulesetDef {
    name: "jobs",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name: *(.+)"),
      P::first(F::WhoisServer, r"(?i)Registrar WHOIS Server: *(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL: *(.+)"),
      P::first(F::Registrar, r"(?i)Registrar: *(.+)"),
      P::first(F::Emails, r"(?i)Registrant Email: (.+)"),
      P::all(F::Status, r"(?i)Domain Status: *(.+)"),
      P::first(F::Name, r"(?i)Registrant Name: (.+)"),
      P::first(F::Org, r"(?i)Registrant Organization: (.+)"),
      P::first(F::Address, r"(?i)Registrant Street: (.*)"),
      P::first(F::City, r"(?i)Registrant City: (.*)"),
      P::first(F::State, r"(?i)Registrant State/Province: (.*)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code: (.*)"),
      P::first(F::Country, r"(?i)Registrant Country: (.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date: *(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date: *(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date: *(.+)"),
      P::all(F::NameServers, r"(?i)Name Server: *(.+)"),
    ],
    not_found: &[Contains("not found.")],
  },
  RulesetDef {
    name: "it",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain: *(.+)"),
      // Top-level labels only; contact blocks indent theirs.
      P::first(F::CreationDate, r"(?i)(?:^|[^ ])Created: *(.+)"),
      P::first(F::UpdatedDate, r"(?i)(?:^|[^ ])Last Update: *(.+)"),
      P::first(F::ExpirationDate, r"(?i)(?:^|[^ ])Expire Date: *(.+)"),
      P::all(F::Status, r"(?i)Status: *(.+)"),
      P::first(F::NameServers, r"(?i)Nameservers\s((?:.+\n)*)"),
      P::first(F::Org, r"(?i)Registrant[\s\S]*?Organization:(.*)"),
      P::first(F::Address, r"(?i)Registrant[\s\S]*?Address:(.*)"),
    ],
    not_found: &[Contains("not found.")],
  },
  RulesetDef {
    name: "sa",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name: *(.+)"),
      P::first(F::CreationDate, r"(?i)Created on: *(.+)"),
      P::first(F::UpdatedDate, r"(?i)Last Updated on: *(.+)"),
      P::first(F::NameServers, r"(?i)Name Servers:\s((?:.+\n)*)"),
      P::first(F::Name, r"(?i)Registrant:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant[\s\S]*?Address:((?:.+\n)*)"),
    ],
    not_found: &[Contains("not found.")],
  },
  RulesetDef {
    name: "sk",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain: *(.+)"),
      P::first(F::CreationDate, r"(?i)Domain:[\s\S]*?Created: *(.+)"),
      P::first(F::UpdatedDate, r"(?i)Domain:[\s\S]*?Updated: *(.+)"),
      P::first(F::ExpirationDate, r"(?i)Valid Until: *(.+)"),
      P::all(F::NameServers, r"(?i)Nameserver: *(.+)"),
      P::first(F::Registrar, r"(?i)Registrar[\s\S]*?Organization:(.*)"),
    ],
    not_found: &[Contains("not found.")],
  },
  RulesetDef {
    name: "mx",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name: *(.+)"),
      P::first(F::CreationDate, r"(?i)Created On: *(.+)"),
      P::first(F::UpdatedDate, r"(?i)Last Updated On: *(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiration Date: *(.+)"),
      P::all(F::NameServers, r"(?i)DNS: (.*)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant[\s\S]*?Name:(.*)"),
      P::first(F::City, r"(?i)Registrant[\s\S]*?City:(.*)"),
      P::first(F::State, r"(?i)Registrant[\s\S]*?State:(.*)"),
      P::first(F::Country, r"(?i)Registrant[\s\S]*?Country:(.*)"),
    ],
    not_found: &[Contains("not found.")],
  },
  RulesetDef {
    name: "tw",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name: *(.+)"),
      P::first(F::CreationDate, r"(?i)Record created on (.+) "),
      P::first(F::ExpirationDate, r"(?i)Record expires on (.+) "),
      P::first(F::NameServers, r"(?i)Domain servers in listed order:((?:\s.+)*)"),
      P::first(F::Registrar, r"(?i)Registration Service Provider: *(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registration Service URL: *(.+)"),
      // Registrant block: name line, then address lines at fixed offsets.
      P::first(F::Name, r"(?i)Registrant:\s+(.*)"),
      P::first(F::Org, r"(?i)Registrant:\s*(.*)"),
      P::first(F::City, r"(?i)Registrant:\s*(?:.*\n){5}\s+(.*),"),
      P::first(F::Address, r"(?i)Registrant:\s*(?:.*\n){4}\s+(.*)"),
      P::first(F::State, r"(?i)Registrant:\s*(?:.*\n){5}.*, (.*)"),
      P::first(F::Country, r"(?i)Registrant:\s*(?:.*\n){6}\s+(.*)"),
    ],
    not_found: &[Contains("not found.")],
  },
  RulesetDef {
    name: "tr",
    fields: &[
      P::first(F::DomainName, r"(?i)\[\*\*\] Domain Name: *(.+)"),
      P::first(F::CreationDate, r"(?i)Created on.*: *(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expires on.*: *(.+)"),
      P::first(F::Status, r"(?i)Transfer Status: *(.+)"),
      P::first(F::NameServers, r"(?i)\[\*\*\] Domain servers:((?:\s.+)*)"),
      P::first(F::Name, r"(?i)\[\*\*\] Registrant:[\s\S]((?:\s.+)*)"),
    ],
    not_found: &[Contains("not found.")],
  },
  RulesetDef {
    name: "is",
    fields: &[
      P::first(F::DomainName, r"(?i)domain\.*: *(.+)"),
      P::first(F::Name, r"(?i)person\.*: *(.+)"),
      P::first(F::Address, r"(?i)address\.*: *(.+)"),
      P::first(F::CreationDate, r"(?i)created\.*: *(.+)"),
      P::first(F::ExpirationDate, r"(?i)expires\.*: *(.+)"),
      P::first(F::Emails, r"(?i)e-mail: *(.+)"),
      P::all(F::NameServers, r"(?i)nserver\.*: *(.+)"),
      P::first(F::Dnssec, r"(?i)dnssec\.*: *(.+)"),
    ],
    not_found: &[Contains("No entries found")],
  },
  RulesetDef {
    name: "dk",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain: *(.+)"),
      P::first(F::CreationDate, r"(?i)Registered: *(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expires: *(.+)"),
      P::first(F::Registrar, r"(?i)Registrar: *(.+)"),
      P::first(F::Dnssec, r"(?i)Dnssec: *(.+)"),
      P::first(F::Status, r"(?i)Status: *(.+)"),
      P::first(F::NameServers, r"(?i)Nameservers\n *([\n\S\s]+)"),
    ],
    not_found: &[Contains("No match for ")],
  },
  RulesetDef {
    name: "ai",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name\s*:\s*(.+)"),
      P::first(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date: *(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant\s*Name:\s*(.+)"),
      P::first(F::Org, r"(?i)Registrant\s*Organization:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant\s*Street:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant\s*City:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant\s*State.*:\s*(.+)"),
      P::first(
        F::RegistrantPostalCode,
        r"(?i)Registrant\s*Postal\s*Code\s*:\s*(.+)",
      ),
      P::first(F::Country, r"(?i)Registrant\s*Country\s*:\s*(.+)"),
      P::first(F::Emails, r"(?i)Registrant\s*Email\.*:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server\.*:\s*(.+)"),
    ],
    not_found: &[Contains("not registered")],
  },
  RulesetDef {
    name: "il",
    fields: &[
      P::first(F::DomainName, r"(?i)domain: *(.+)"),
      P::first(F::ExpirationDate, r"(?i)validity: *(.+)"),
      P::first(F::Name, r"(?i)person: *(.+)"),
      P::first(F::Address, r"(?i)address *(.+)"),
      P::first(F::Dnssec, r"(?i)DNSSEC: *(.+)"),
      P::first(F::Status, r"(?i)status: *(.+)"),
      P::all(F::NameServers, r"(?i)nserver: *(.+)"),
      P::first(F::Emails, r"(?i)e-mail: *(.+)"),
      P::first(F::Registrar, r"(?i)registrar name: *(.+)"),
      P::first(F::ReferralUrl, r"(?i)registrar info: *(.+)"),
    ],
    not_found: &[Contains("No data was found")],
  },
  RulesetDef {
    name: "in",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::first(
        F::UpdatedDate,
        r"(?i)Updated Date:\s*(.+)|Last Updated On:\s*(.+)",
      ),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)|Created On:\s*(.+)"),
      P::first(
        F::ExpirationDate,
        r"(?i)Expiration Date:\s*(.+)|Registry Expiry Date:\s*(.+)",
      ),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::first(F::Org, r"(?i)Registrant Organization:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
      P::all(F::Status, r"(?i)Status:\s*(.+)"),
      P::all(F::Emails, EMAIL),
      P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
      P::first(F::Dnssec, r"(?i)DNSSEC:\s*(\S+)"),
    ],
    not_found: &[Contains("NOT FOUND")],
  },
  RulesetDef {
    name: "cat",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain status:\s*(.+)"),
      P::all(F::Emails, EMAIL),
    ],
    not_found: &[Contains("no matching objects")],
  },
  RulesetDef {
    name: "ie",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain status:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::all(F::Emails, EMAIL),
    ],
    not_found: &[Contains("no matching objects")],
  },
  RulesetDef {
    name: "nz",
    fields: &[
      P::first(F::DomainName, r"(?i)domain_name:\s*([^\n\r]+)"),
      P::first(F::Registrar, r"(?i)registrar_name:\s*([^\n\r]+)"),
      P::first(F::UpdatedDate, r"(?i)domain_datelastmodified:\s*([^\n\r]+)"),
      P::first(F::CreationDate, r"(?i)domain_dateregistered:\s*([^\n\r]+)"),
      P::first(F::ExpirationDate, r"(?i)domain_datebilleduntil:\s*([^\n\r]+)"),
      P::all(F::NameServers, r"(?i)ns_name_\d*:\s*([^\n\r]+)"),
      P::all(F::Status, r"(?i)status:\s*([^\n\r]+)"),
      P::all(F::Emails, EMAIL),
      P::first(F::Name, r"(?i)registrant_contact_name:\s*([^\n\r]+)"),
      P::first(F::Address, r"(?i)registrant_contact_address\d*:\s*([^\n\r]+)"),
      P::first(F::City, r"(?i)registrant_contact_city:\s*([^\n\r]+)"),
      P::first(
        F::RegistrantPostalCode,
        r"(?i)registrant_contact_postalcode:\s*([^\n\r]+)",
      ),
      P::first(F::Country, r"(?i)registrant_contact_country:\s*([^\n\r]+)"),
    ],
    not_found: &[Contains("no matching objects")],
  },
  RulesetDef {
    name: "lu",
    fields: &[
      P::first(F::DomainName, r"(?i)domainname:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)registered:\s*(.+)"),
      P::all(F::NameServers, r"(?i)nserver:\s*(.+)"),
      P::first(F::Status, r"(?i)domaintype:\s*(.+)"),
      P::first(F::Registrar, r"(?i)registrar-name:\s*(.+)"),
      P::first(F::Name, r"(?i)org-name:\s*(.+)"),
      P::first(F::Address, r"(?i)org-address:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)org-zipcode:\s*(.+)"),
      P::first(F::City, r"(?i)org-city:\s*(.+)"),
      P::first(F::Country, r"(?i)org-country:\s*(.+)"),
    ],
    not_found: &[Contains("No such domain")],
  },
  RulesetDef {
    name: "cz",
    fields: &[
      P::first(F::DomainName, r"(?i)domain:\s*(.+)"),
      P::first(F::Name, r"(?i)registrant:\s*(.+)"),
      P::first(F::Registrar, r"(?i)registrar:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)registered:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)changed:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)expire:\s*(.+)"),
      P::all(F::NameServers, r"(?i)nserver:\s*(.+)"),
      P::all(F::Status, r"(?i)status:\s*(.+)"),
    ],
    not_found: &[
      Contains("% No entries found."),
      Contains("Your connection limit exceeded"),
    ],
  },
  RulesetDef {
    name: "online",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)Registrar WHOIS Server:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::Emails, r"(?i)Registrant Email:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::Dnssec, r"(?i)DNSSEC:\s*(\S+)"),
    ],
    not_found: &[Contains("Not found:")],
  },
  RulesetDef {
    name: "hr",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)Registrar WHOIS Server:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(
        F::ExpirationDate,
        r"(?i)Registrar Registration Expiration Date:\s*(.+)",
      ),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant Street:\s*(.+)"),
    ],
    not_found: &[Contains("ERROR: No entries found")],
  },
  RulesetDef {
    name: "hk",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::Dnssec, r"(?i)DNSSEC:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)Registrar WHOIS Server:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar Name:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Domain Name Commencement Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiry Date:\s*(.+)"),
      P::first(F::NameServers, r"(?i)Name Servers Information:\s+((?:.+\n)*)"),
    ],
    not_found: &[
      Contains("ERROR: No entries found"),
      Contains("The domain has not been registered"),
    ],
  },
  RulesetDef {
    name: "ua",
    fields: &[
      P::first(F::DomainName, r"(?i)domain:\s*(.+)"),
      P::all(F::Status, r"(?i)status:\s*(.+)"),
      P::first(F::Registrar, r"(?i)organization-loc:(.*)"),
      P::first(F::RegistrarUrl, r"(?i)url:(.*)"),
      P::first(F::UpdatedDate, r"(?i)modified:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)created:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)expires:\s*(.+)"),
      P::all(F::NameServers, r"(?i)nserver:\s*(.+)"),
      P::all(F::Emails, EMAIL),
    ],
    not_found: &[Contains("ERROR: No entries found")],
  },
  RulesetDef {
    name: "ukr",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain name \(UTF8\):\s*(.+)"),
      P::first(F::Status, r"(?i)Registry Status:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiration Date:\s*(.+)"),
      P::first(
        F::NameServers,
        r"(?i)Domain servers in listed order:\s+((?:.+\n)*)",
      ),
    ],
    not_found: &[Contains("No match for domain")],
  },
  RulesetDef {
    name: "pp.ua",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Status, r"(?i)status:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Sponsoring Registrar:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Last Updated On:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Created On:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiration Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
    ],
    not_found: &[Contains("No entries found.")],
  },
  RulesetDef {
    name: "hn",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)WHOIS Server:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant City:\s*(.*)"),
      P::first(F::Address, r"(?i)Registrant Street:\s*(.*)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.*)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.*)"),
      P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
      P::first(F::Emails, r"(?i)Registrant Email:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
    ],
    not_found: &[Equals("No matching record.")],
  },
  RulesetDef {
    name: "lat",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)Registrar WHOIS Server:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::Emails, r"(?i)Registrant Email:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant City:\s*(.*)"),
      P::first(F::Address, r"(?i)Registrant Street:\s*(.*)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.*)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.*)"),
      P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
    ],
    not_found: &[Equals("No matching record.")],
  },
  RulesetDef {
    name: "cn",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Registration Time:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiration Time:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::all(F::Status, r"(?i)Status:\s*(.+)"),
      P::all(F::Emails, EMAIL),
      P::first(F::Dnssec, r"(?i)dnssec:\s*(\S+)"),
      P::first(F::Name, r"(?i)Registrant:\s*(.+)"),
    ],
    not_found: &[Equals("No matching record.")],
  },
  RulesetDef {
    name: "app",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)Whois Server:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expir\w+ Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::all(F::Status, r"(?i)Status:\s*(.+)"),
      P::all(F::Emails, EMAIL),
      P::first(F::Dnssec, r"(?i)dnssec:\s*(\S+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::Org, r"(?i)Registrant\s*Organization:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant Street:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant City:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.+)"),
      P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
    ],
    not_found: &[Equals("Domain not found.")],
  },
  RulesetDef {
    name: "money",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)Registrar WHOIS Server:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::all(F::Emails, EMAIL),
      P::first(F::Dnssec, r"(?i)DNSSEC:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::Org, r"(?i)Registrant Organization:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant Street:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant City:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.+)"),
      P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
    ],
    not_found: &[Equals("Domain not found.")],
  },
  RulesetDef {
    name: "ar",
    fields: &[
      P::first(F::DomainName, r"(?i)domain:\s*(.+)"),
      P::first(F::Registrar, r"(?i)registrar:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)whois:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)changed:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)created:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)expire:\s*(.+)"),
      P::all(F::NameServers, r"(?i)nserver:\s*(.+) \(.*\)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::all(F::Emails, EMAIL),
      P::first(F::Name, r"(?i)name:\s*(.+)"),
    ],
    not_found: &[Equals(
      "El dominio no se encuentra registrado en NIC Argentina",
    )],
  },
  RulesetDef {
    name: "by",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Update Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiration Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::Name, r"(?i)Person:\s*(.+)"),
      P::first(F::Org, r"(?i)Org:\s*(.+)"),
      P::first(F::Country, r"(?i)Country:\s*(.+)"),
      P::first(F::Address, r"(?i)Address:\s*(.+)"),
    ],
    not_found: &[Equals("Object does not exist")],
  },
  RulesetDef {
    name: "cr",
    fields: &[
      P::first(F::DomainName, r"(?i)domain:\s*(.+)"),
      P::first(F::Name, r"(?i)name:\s*(.+)"),
      P::first(F::Registrar, r"(?i)registrar:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)changed:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)registered:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)expire:\s*(.+)"),
      P::all(F::NameServers, r"(?i)nserver:\s*(.+)"),
      P::all(F::Status, r"(?i)status:\s*(.+)"),
      P::first(F::Org, r"(?i)org:\s*(.+)"),
      P::first(F::Address, r"(?i)address:\s*(.+)"),
    ],
    not_found: &[Equals("El dominio no existe.")],
  },
  RulesetDef {
    name: "ve",
    fields: &[
      P::first(F::DomainName, r"(?i)Nombre de Dominio:\s*(.+)"),
      P::first(F::Status, r"(?i)Estatus del dominio:\s*(.+)"),
      P::first(F::Registrar, r"(?i)registrar:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Ultima Actualización:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Fecha de Creación:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Fecha de Vencimiento:\s*(.+)"),
      P::first(F::NameServers, r"(?i)Nombres de Dominio:((?:\s+- .*)*)"),
      P::first(F::Name, r"(?i)Titular:\s*(?:.*\n){1}\s+(.*)"),
      P::first(F::City, r"(?i)Titular:\s*(?:.*\n){3}\s+([\s\w]*)"),
      P::first(F::Address, r"(?i)Titular:\s*(?:.*\n){2}\s+(.*)"),
      P::first(F::State, r"(?i)Titular:\s*(?:.*\n){3}\s+.*?,(.*),"),
      P::first(F::Country, r"(?i)Titular:\s*(?:.*\n){3}\s+.*, .+ {2}(.*)"),
      P::first(F::Emails, r"(?i)Titular:\s*.*\t(.*)"),
    ],
    not_found: &[Equals("El dominio no existe.")],
  },
  RulesetDef {
    name: "do",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)WHOIS Server:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::Org, r"(?i)Registrant Organization:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant Street:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant City:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.+)"),
      P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
      P::first(F::Emails, r"(?i)Registrant Email:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::first(F::Dnssec, r"(?i)DNSSEC:\s*(.+)"),
    ],
    not_found: &[Equals("Extensión de dominio no válido.")],
  },
  RulesetDef {
    name: "ae",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::Status, r"(?i)Status:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Contact Name:\s*(.+)"),
    ],
    not_found: &[Equals("No Data Found")],
  },
  RulesetDef {
    name: "si",
    fields: &[
      P::first(F::DomainName, r"(?i)domain:\s*(.+)"),
      P::first(F::Registrar, r"(?i)registrar:\s*(.+)"),
      P::all(F::NameServers, r"(?i)nameserver:\s*(.+)"),
      P::first(F::Name, r"(?i)registrant:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)created:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)expire:\s*(.+)"),
    ],
    not_found: &[Contains("No entries found for the selected source(s).")],
  },
  RulesetDef {
    name: "no",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name.*:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Additional information:\nCreated:\s*(.+)"),
      P::first(
        F::UpdatedDate,
        r"(?i)Additional information:\n(?:.*\n)Last updated:\s*(.+)",
      ),
    ],
    not_found: &[Contains("No match")],
  },
  RulesetDef {
    name: "kz",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name............:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Current Registr?ar:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Domain created:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Last modified\s*:\s*(.+)"),
      P::all(F::NameServers, r"(?i)server.*:\s*(.+)"),
      // Case-sensitive: " clientTransferProhibited - ..." lines.
      P::all(F::Status, r" (.+?) -"),
      P::all(F::Emails, EMAIL),
      P::first(F::Org, r"(?i)Organization Name.*:\s*(.+)"),
    ],
    not_found: &[Contains("*** Nothing found for this query.")],
  },
  RulesetDef {
    name: "ir",
    fields: &[
      P::first(F::DomainName, r"(?i)domain:\s*(.+)"),
      P::first(F::Name, r"(?i)person:\s*(.+)"),
      P::first(F::Org, r"(?i)org:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)last-updated:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)expire-date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)nserver:\s*(.+)"),
      P::all(F::Emails, EMAIL),
    ],
    not_found: &[NO_MATCH_QUOTED],
  },
  RulesetDef {
    name: "life",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:+\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::all(F::Emails, EMAIL),
    ],
    not_found: &[Contains("Domain not found.")],
  },
  RulesetDef {
    name: "zhongguo",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Registration Time:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Sponsoring Registrar:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Expiration Time:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
      P::all(F::Emails, EMAIL),
    ],
    not_found: &[NO_MATCH_QUOTED],
  },
  RulesetDef {
    name: "ml",
    fields: &[
      // The value runs up to the first "i" or "(" of the trailing note.
      P::first(F::DomainName, r"(?i)Domain name:\s*([^(i|\n)]+)"),
      P::first(F::Registrar, r"(?i)Organization:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Domain registered:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Record will expire on:\s*(.+)"),
      P::first(F::NameServers, r"(?i)Domain Nameservers:\s+((?:.+\n)*)"),
      P::all(F::Emails, EMAIL),
    ],
    not_found: &[Contains(
      "Invalid query or domain name not known in the Point ML Domain Registry",
    )],
  },
  RulesetDef {
    name: "za",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name:\s*(.+)"),
      P::first(F::WhoisServer, r"(?i)Registrar WHOIS Server:\s*(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\s*(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL:\s*(.+)"),
      P::all(F::Status, r"(?i)Domain Status:\s*(.+)"),
      P::first(F::Name, r"(?i)Registrant Name:\s*(.+)"),
      P::first(F::Org, r"(?i)Registrant Organization:\s*(.+)"),
      P::first(F::Address, r"(?i)Registrant Street:\s*(.+)"),
      P::first(F::City, r"(?i)Registrant City:\s*(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province:\s*(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code:\s*(.+)"),
      P::first(F::Country, r"(?i)Registrant Country:\s*(.+)"),
      P::first(F::Emails, r"(?i)Registrant Email:\s*(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date:\s*(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date:\s*(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date:\s*(.+)"),
      P::all(F::NameServers, r"(?i)Name Server:\s*(.+)"),
    ],
    not_found: &[StartsWith("Available")],
  },
  RulesetDef {
    name: "gg",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain:\n +(.+)"),
      P::first(F::Registrar, r"(?i)Registrar:\n\s+(.+)"),
      P::first(F::CreationDate, r"(?i)Relevant dates:\n\s+Registered on (.+)"),
    ],
    not_found: &[Contains("NOT FOUND")],
  },
  RulesetDef {
    name: "bw",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name\.*: *(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date: (.+)"),
      P::first(F::Registrar, r"(?i)Registrar: (.+)"),
      P::first(F::Name, r"(?i)RegistrantName: *(.+)"),
      P::first(F::Org, r"(?i)RegistrantOrganization: (.+)"),
      P::first(F::Address, r"(?i)RegistrantStreet: *(.+)"),
      P::first(F::City, r"(?i)RegistrantCity: *(.+)"),
      P::first(F::Country, r"(?i)RegistrantCountry\.*: *(.+)"),
      P::first(F::Emails, r"(?i)RegistrantEmail\.*: *(.+)"),
      P::all(F::NameServers, r"(?i)Name Server\.*: *(.+)"),
      P::first(F::Dnssec, r"(?i)dnssec\.*: *(.+)"),
    ],
    not_found: &[Contains("not registered")],
  },
  RulesetDef {
    name: "tn",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain name.*: (.+)"),
      P::first(F::Registrar, r"(?i)Registrar.*: (.+)"),
      P::first(F::CreationDate, r"(?i)Creation date.*: (.+)"),
      P::first(F::Status, r"(?i)Domain status.*: (.+)"),
      // Owner contact block, one label per line at fixed offsets.
      P::first(F::Name, r"(?i)Owner Contact\nName.*: (.+)"),
      P::first(F::Address, r"(?i)Owner Contact\n.*:.*\n.*\n.*: (.+)"),
      P::first(F::City, r"(?i)Owner Contact\n.*:.*\n.*\n.*\n.*: (.+)"),
      P::first(F::State, r"(?i)Owner Contact\n.*:.*\n.*\n.*\n.*\n.*\n.*: (.+)"),
      P::first(
        F::RegistrantPostalCode,
        r"(?i)Owner Contact\n.*:.*\n.*\n.*\n.*\n.*\n.*\n.*: (.+)",
      ),
      P::first(
        F::Country,
        r"(?i)Owner Contact\n.*:.*\n.*\n.*\n.*\n.*\n.*\n.*\n.*: (.+)",
      ),
      P::first(
        F::Emails,
        r"(?i)Owner Contact\n.*:.*\n.*\n.*\n.*\n.*\n.*\n.*\n.*\n.*\n.*\n.*:(.+)",
      ),
      P::first(F::NameServers, r"(?i)servers\nName.*: (.+)(?:\nName.*:)? (.+)"),
    ],
    not_found: &[StartsWith("Available")],
  },
  RulesetDef {
    name: "site",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name: *(.+)"),
      P::first(F::Registrar, r"(?i)Registrar: *(.+)"),
      P::first(F::WhoisServer, r"(?i)Whois Server: *(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date: *(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date: *(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date: *(.+)"),
      P::all(F::NameServers, r"(?i)Name Server: *(.+)"),
      P::all(F::Status, r"(?i)Domain Status: *(.+)"),
      P::all(F::Emails, EMAIL),
      P::first(F::Dnssec, r"(?i)DNSSEC: *(\S+)"),
      P::first(F::Name, r"(?i)Registrant Name: *(.+)"),
      P::first(F::Org, r"(?i)Registrant\s*Organization: *(.+)"),
      P::first(F::Address, r"(?i)Registrant Street: *(.+)"),
      P::first(F::City, r"(?i)Registrant City: *(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province: *(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code: *(.+)"),
      P::first(F::Country, r"(?i)Registrant Country: *(.+)"),
    ],
    not_found: &[Contains("DOMAIN NOT FOUND")],
  },
  RulesetDef {
    name: "design",
    fields: &[
      P::first(F::DomainName, r"(?i)Domain Name: *(.+)"),
      P::first(F::RegistrarUrl, r"(?i)Registrar URL: *(.+)"),
      P::first(F::WhoisServer, r"(?i)Registrar WHOIS Server: *(.+)"),
      P::first(F::UpdatedDate, r"(?i)Updated Date: *(.+)"),
      P::first(F::CreationDate, r"(?i)Creation Date: *(.+)"),
      P::first(F::ExpirationDate, r"(?i)Registry Expiry Date: *(.+)"),
      P::all(F::NameServers, r"(?i)Name Server: *(.+)"),
      P::all(F::Status, r"(?i)Domain Status: *(.+)"),
      P::all(F::Emails, EMAIL),
      P::first(F::Dnssec, r"(?i)DNSSEC: *(\S+)"),
      P::first(F::Name, r"(?i)Registrant Name: *(.+)"),
      P::first(F::Org, r"(?i)Registrant\s*Organization: *(.+)"),
      P::first(F::Address, r"(?i)Registrant Street: *(.+)"),
      P::first(F::City, r"(?i)Registrant City: *(.+)"),
      P::first(F::State, r"(?i)Registrant State/Province: *(.+)"),
      P::first(F::RegistrantPostalCode, r"(?i)Registrant Postal Code: *(.+)"),
      P::first(F::Country, r"(?i)Registrant Country: *(.+)"),
    ],
    not_found: &[Contains("No Data Found")],
  },
];

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn ruleset_names_are_unique() {
    let mut seen = HashSet::new();
    for def in RULESETS {
      assert!(seen.insert(def.name), "duplicate ruleset {}", def.name);
    }
  }

  #[test]
  fn every_definition_declares_a_domain_name_pattern() {
    for def in RULESETS {
      assert!(
        def.fields.iter().any(|p| p.field == F::DomainName),
        "{} has no domainName pattern",
        def.name
      );
    }
  }

  #[test]
  fn every_non_fallback_ruleset_has_its_own_not_found_check() {
    for def in RULESETS.iter().filter(|d| d.name != "default") {
      assert!(!def.not_found.is_empty(), "{}", def.name);
    }
  }
}
