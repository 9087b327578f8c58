use std::{sync::LazyLock, time::Duration};

use tracing::{debug, instrument};
use whois_rust::{WhoIs, WhoIsLookupOptions, WhoIsServerValue};

use crate::{error::Error, extract, record::WhoisRecord};

static DEFAULT_SERVERS_JSON: &str = include_str!("../../config/servers.json");

/// Referral hops followed when nothing else is configured.
pub const DEFAULT_FOLLOW: u16 = 2;

static WHOIS_CLIENT: LazyLock<Result<WhoIs, String>> = LazyLock::new(|| {
  WhoIs::from_string(DEFAULT_SERVERS_JSON).map_err(|e| e.to_string())
});

fn client() -> Result<&'static WhoIs, Error> {
  WHOIS_CLIENT
    .as_ref()
    .map_err(|e| Error::ServerMap(e.clone()))
}

/// Knobs passed through to the lookup library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOptions {
  /// Ask this host instead of the one the server map picks.
  pub server: Option<String>,
  /// How many `Registrar WHOIS Server:` style referrals to chase.
  pub follow: u16,
  pub timeout: Option<Duration>,
}

impl Default for LookupOptions {
  fn default() -> Self {
    Self {
      server: None,
      follow: DEFAULT_FOLLOW,
      timeout: None,
    }
  }
}

/// Queries the registry for `domain` and returns the response untouched.
///
/// # Errors
///
/// Returns [`Error::WhoIs`] when the domain or server is not a valid host,
/// or when the lookup itself fails; the library's error is passed through
/// unchanged.
#[instrument(skip(options), fields(server = options.server.as_deref()))]
pub async fn fetch_raw(
  domain: &str,
  options: &LookupOptions,
) -> Result<String, Error> {
  let whois = client()?;
  let mut opts = WhoIsLookupOptions::from_string(domain)?;
  opts.follow = options.follow;
  if let Some(host) = options.server.as_deref() {
    opts.server = Some(WhoIsServerValue::from_string(host)?);
  }
  if options.timeout.is_some() {
    opts.timeout = options.timeout;
  }
  let raw = whois.lookup_async(opts).await?;
  debug!(bytes = raw.len(), "received whois response");
  Ok(raw)
}

/// [`fetch_raw`] followed by [`extract::parse`].
///
/// # Errors
///
/// Transport failures as for [`fetch_raw`], plus [`Error::DomainNotFound`]
/// when the registry reports the domain as unregistered.
pub async fn fetch_and_parse(
  domain: &str,
  options: &LookupOptions,
) -> Result<WhoisRecord, Error> {
  let raw = fetch_raw(domain, options).await?;
  extract::parse(domain, &raw)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ruleset::SUFFIXES;

  #[test]
  fn bundled_server_map_loads() {
    assert!(client().is_ok());
  }

  #[test]
  fn server_map_covers_every_dispatched_suffix() {
    let map: serde_json::Value =
      serde_json::from_str(DEFAULT_SERVERS_JSON).unwrap();
    let map = map.as_object().unwrap();
    assert_eq!(map[""], "whois.iana.org");
    for &(suffix, _) in SUFFIXES {
      assert!(map.contains_key(suffix), "no server for .{suffix}");
    }
  }

  #[test]
  fn default_options_follow_referrals() {
    let opts = LookupOptions::default();
    assert_eq!(opts.follow, DEFAULT_FOLLOW);
    assert!(opts.server.is_none());
    assert!(opts.timeout.is_none());
  }
}
