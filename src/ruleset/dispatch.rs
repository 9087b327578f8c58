use tracing::debug;

use super::{Catalog, Ruleset};

/// Suffix → ruleset name. Order is irrelevant: lookup always prefers the
/// longest matching tail, so `pp.ua` wins over `ua` wherever it is listed.
pub const SUFFIXES: &[(&str, &str)] = &[
  ("com", "com"),
  ("net", "com"),
  ("space", "com"),
  ("org", "org"),
  ("pe", "pe"),
  ("cl", "cl"),
  ("sg", "sg"),
  ("ro", "ro"),
  ("nl", "nl"),
  ("lt", "lt"),
  ("fi", "fi"),
  ("hr", "hr"),
  ("name", "name"),
  ("me", "me"),
  ("ae", "ae"),
  ("au", "au"),
  ("ru", "ru"),
  ("рф", "ru"),
  ("xn--p1ai", "ru"),
  ("su", "ru"),
  ("city", "ru"),
  ("style", "ru"),
  ("рус", "ru"),
  ("xn--p1acf", "ru"),
  ("us", "us"),
  ("uk", "uk"),
  ("fr", "fr"),
  ("pl", "pl"),
  ("ca", "ca"),
  ("br", "br"),
  ("eu", "eu"),
  ("ee", "ee"),
  ("kr", "kr"),
  ("pt", "pt"),
  ("bg", "bg"),
  ("de", "de"),
  ("at", "at"),
  ("be", "be"),
  ("info", "info"),
  ("si", "si"),
  ("kg", "kg"),
  ("io", "io"),
  ("biz", "biz"),
  ("mobi", "mobi"),
  ("ch", "ch"),
  ("li", "ch"),
  ("id", "id"),
  ("sk", "sk"),
  ("se", "se"),
  ("nu", "se"),
  ("no", "no"),
  ("is", "is"),
  ("dk", "dk"),
  ("it", "it"),
  ("mx", "mx"),
  ("ai", "ai"),
  ("il", "il"),
  ("in", "in"),
  ("cat", "cat"),
  ("ie", "ie"),
  ("nz", "nz"),
  ("lu", "lu"),
  ("cz", "cz"),
  ("online", "online"),
  ("cn", "cn"),
  ("app", "app"),
  ("money", "money"),
  ("ar", "ar"),
  ("by", "by"),
  ("cr", "cr"),
  ("do", "do"),
  ("jobs", "jobs"),
  ("lat", "lat"),
  ("sa", "sa"),
  ("tw", "tw"),
  ("tr", "tr"),
  ("ve", "ve"),
  ("ua", "ua"),
  ("pp.ua", "pp.ua"),
  ("укр", "ukr"),
  ("xn--j1amh", "ukr"),
  ("kz", "kz"),
  ("ir", "ir"),
  ("中国", "zhongguo"),
  ("xn--fiqs8s", "zhongguo"),
  ("ml", "ml"),
  ("group", "group"),
  ("za", "za"),
  ("bw", "bw"),
  ("bz", "bz"),
  ("gg", "gg"),
  ("design", "design"),
  ("studio", "studio"),
  ("life", "life"),
  ("tn", "tn"),
  ("rs", "rs"),
  ("site", "site"),
  ("hk", "hk"),
  ("club", "club"),
  ("jp", "jp"),
  ("hn", "hn"),
];

/// Lowercases and strips surrounding whitespace plus any trailing root dot.
#[must_use]
pub fn normalize_domain(domain: &str) -> String {
  domain.trim().trim_end_matches('.').to_lowercase()
}

impl Catalog {
  /// Picks the ruleset for `domain`: the longest known suffix that has at
  /// least one label in front of it, else the fallback ruleset.
  #[must_use]
  pub fn select(&self, domain: &str) -> &Ruleset {
    let domain = normalize_domain(domain);
    let ruleset = self
      .by_suffix(&domain)
      .unwrap_or_else(|| self.default_ruleset());
    debug!(%domain, ruleset = ruleset.name(), "selected ruleset");
    ruleset
  }

  fn by_suffix(&self, domain: &str) -> Option<&Ruleset> {
    // Tails after each dot, left to right, are longest first.
    domain
      .match_indices('.')
      .map(|(i, _)| &domain[i + 1..])
      .find_map(|tail| self.suffixes.get(tail))
      .map(|&i| &self.rulesets[i])
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ruleset::{catalog, DEFAULT_RULESET};

  fn pick(domain: &str) -> &'static str {
    catalog().unwrap().select(domain).name()
  }

  #[test]
  fn compound_suffix_beats_its_parent() {
    assert_eq!(pick("example.pp.ua"), "pp.ua");
    assert_eq!(pick("example.com.ua"), "ua");
    assert_eq!(pick("example.ua"), "ua");
  }

  #[test]
  fn aliases_share_a_ruleset() {
    assert_eq!(pick("example.net"), "com");
    assert_eq!(pick("example.space"), "com");
    assert_eq!(pick("example.li"), "ch");
    assert_eq!(pick("example.nu"), "se");
    for domain in ["example.su", "example.city", "example.style"] {
      assert_eq!(pick(domain), "ru", "{domain}");
    }
  }

  #[test]
  fn unicode_and_ace_forms_match() {
    assert_eq!(pick("пример.рф"), "ru");
    assert_eq!(pick("xn--e1afmkfd.xn--p1ai"), "ru");
    assert_eq!(pick("пример.укр"), "ukr");
    assert_eq!(pick("example.xn--j1amh"), "ukr");
    assert_eq!(pick("例子.中国"), "zhongguo");
    assert_eq!(pick("example.xn--fiqs8s"), "zhongguo");
    assert_eq!(pick("пример.рус"), "ru");
    assert_eq!(pick("example.xn--p1acf"), "ru");
  }

  #[test]
  fn input_is_normalized() {
    assert_eq!(pick("  WWW.Example.CO.UK. "), "uk");
    assert_eq!(pick("Example.ORG"), "org");
  }

  #[test]
  fn unknown_or_bare_suffix_falls_back() {
    assert_eq!(pick("example.zz"), DEFAULT_RULESET);
    assert_eq!(pick("com"), DEFAULT_RULESET);
    assert_eq!(pick(""), DEFAULT_RULESET);
    assert_eq!(pick("localhost"), DEFAULT_RULESET);
  }

  #[test]
  fn selection_is_deterministic() {
    for &(suffix, ruleset) in SUFFIXES {
      let domain = format!("example.{suffix}");
      assert_eq!(pick(&domain), ruleset, "{domain}");
      assert_eq!(pick(&domain), pick(&domain));
    }
  }
}
