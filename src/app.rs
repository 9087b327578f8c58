use std::{path::Path, time::Duration};

use anyhow::{bail, Context, Result};
use clap::Parser;
use console::style;
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::warn;

use crate::cli::Cli;
use crate::error::Error;
use crate::extract;
use crate::providers::whois::{self, LookupOptions, DEFAULT_FOLLOW};
use crate::results::{self, Lookup};
use crate::ruleset;
use crate::spinner::Spinner;
use crate::user_config::{self, UserConfig};

pub struct App {
  cli: Cli,
  config: UserConfig,
  options: LookupOptions,
}

impl App {
  pub fn new() -> Self {
    Self::from_parts(Cli::parse(), user_config::load())
  }

  fn from_parts(cli: Cli, stored: UserConfig) -> Self {
    let config = merge(&cli, stored);
    let options = LookupOptions {
      server: config.server.clone(),
      follow: config.follow.unwrap_or(DEFAULT_FOLLOW),
      timeout: config.timeout_secs.map(Duration::from_secs),
    };
    Self {
      cli,
      config,
      options,
    }
  }

  /// Runs every requested target. Returns `false` when any of them failed
  /// or was reported as not registered.
  pub async fn run(&self) -> Result<bool> {
    if self.cli.save_config {
      user_config::store(&self.config)
        .context("Failed to save user config")?;
      if !self.cli.json {
        println!("{}", style("Configuration saved.").green());
      }
    }

    if self.cli.config_show {
      let shown = serde_json::to_string_pretty(&self.config)
        .context("Failed to serialize configuration")?;
      println!("{shown}");
      return Ok(true);
    }

    let lookups = match &self.cli.file {
      Some(path) => vec![self.parse_file(path)?],
      None => self.lookup_all().await,
    };

    if self.cli.json {
      results::print_json(&lookups)?;
    } else {
      results::print_human_readable(&lookups);
    }
    Ok(lookups.iter().all(|l| !l.failed()))
  }

  fn parse_file(&self, path: &Path) -> Result<Lookup> {
    let [domain] = self.cli.targets.as_slice() else {
      bail!("--file takes exactly one domain");
    };
    let bytes = std::fs::read(path)
      .with_context(|| format!("Failed to read {}", path.display()))?;
    let raw = String::from_utf8_lossy(&bytes).into_owned();
    Ok(self.outcome(domain, Ok(raw)))
  }

  async fn lookup_all(&self) -> Vec<Lookup> {
    let total = self.cli.targets.len();
    let spinner = (!self.cli.json)
      .then(|| Spinner::new(&format!("Querying WHOIS for {total} domain(s)...")));

    let options = &self.options;
    let mut tasks: FuturesUnordered<_> = self
      .cli
      .targets
      .iter()
      .enumerate()
      .map(|(i, domain)| async move {
        (i, whois::fetch_raw(domain, options).await)
      })
      .collect();

    let mut done: Vec<Option<Lookup>> = Vec::with_capacity(total);
    done.resize_with(total, || None);
    let mut finished = 0;
    while let Some((i, fetched)) = tasks.next().await {
      done[i] = Some(self.outcome(&self.cli.targets[i], fetched));
      finished += 1;
      if let Some(s) = &spinner {
        s.set_message(format!("Querying WHOIS... {finished}/{total}"));
      }
    }
    drop(spinner);

    done.into_iter().flatten().collect()
  }

  fn outcome(&self, domain: &str, fetched: Result<String, Error>) -> Lookup {
    let mut lookup = Lookup {
      target: domain.to_owned(),
      ..Lookup::default()
    };

    let raw = match fetched {
      Ok(raw) => raw,
      Err(e) => {
        warn!(domain, error = %e, "lookup failed");
        lookup.error = Some(e.to_string());
        return lookup;
      }
    };

    let parsed = match ruleset::select_ruleset(domain) {
      Ok(rs) => {
        lookup.ruleset = rs.name().to_owned();
        extract::parse_with(rs, domain, &raw)
      }
      Err(e) => Err(e.into()),
    };
    match parsed {
      Ok(record) => lookup.record = Some(record),
      Err(e) if e.is_not_found() => lookup.not_found = true,
      Err(e) => lookup.error = Some(e.to_string()),
    }

    if self.cli.raw {
      lookup.raw = Some(raw);
    }
    lookup
  }
}

/// Flags win over stored values.
fn merge(cli: &Cli, stored: UserConfig) -> UserConfig {
  UserConfig {
    follow: cli.follow.or(stored.follow),
    timeout_secs: cli.timeout.or(stored.timeout_secs),
    server: cli.server.clone().or(stored.server),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn app(args: &[&str], stored: UserConfig) -> App {
    let argv = std::iter::once("whoisparse").chain(args.iter().copied());
    App::from_parts(Cli::try_parse_from(argv).unwrap(), stored)
  }

  #[test]
  fn flags_override_stored_config() {
    let stored = UserConfig {
      follow: Some(5),
      timeout_secs: Some(30),
      server: Some("whois.stored.example".into()),
    };
    let app = app(&["example.com", "--follow", "0"], stored);
    assert_eq!(app.options.follow, 0);
    assert_eq!(app.options.timeout, Some(Duration::from_secs(30)));
    assert_eq!(app.options.server.as_deref(), Some("whois.stored.example"));
  }

  #[test]
  fn defaults_apply_without_config() {
    let app = app(&["example.com"], UserConfig::default());
    assert_eq!(app.options, LookupOptions::default());
  }

  #[test]
  fn outcome_records_the_ruleset_and_fields() {
    let app = app(&["example.de", "--raw"], UserConfig::default());
    let raw = "Domain: example.de\nNserver: ns1.example.net\n".to_owned();
    let lookup = app.outcome("example.de", Ok(raw.clone()));
    assert_eq!(lookup.ruleset, "de");
    assert_eq!(
      lookup.record.and_then(|r| r.name_servers),
      Some(vec!["ns1.example.net".to_owned()])
    );
    assert_eq!(lookup.raw, Some(raw));
    assert!(lookup.error.is_none());
  }

  #[test]
  fn outcome_flags_not_found() {
    let app = app(&["nothere.de"], UserConfig::default());
    let lookup =
      app.outcome("nothere.de", Ok("Domain: nothere.de\nStatus: free\n".into()));
    assert!(lookup.not_found);
    assert!(lookup.record.is_none());
    assert!(lookup.raw.is_none());
    assert!(lookup.failed());
  }

  #[test]
  fn parse_file_reads_a_saved_response() {
    let path = std::env::temp_dir()
      .join(format!("whoisparse-{}-com.txt", std::process::id()));
    std::fs::write(&path, "Domain Name: EXAMPLE.COM\nRegistrar: Example Registrar\n")
      .unwrap();
    let path_arg = path.to_string_lossy().into_owned();
    let app =
      app(&["example.com", "--file", path_arg.as_str()], UserConfig::default());
    let lookup = app.parse_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(lookup.ruleset, "com");
    assert_eq!(
      lookup.record.and_then(|r| r.registrar).as_deref(),
      Some("Example Registrar")
    );
  }

  #[test]
  fn parse_file_wants_one_domain() {
    let app = app(
      &["a.com", "b.com", "--file", "saved.txt"],
      UserConfig::default(),
    );
    assert!(app.parse_file(Path::new("saved.txt")).is_err());
  }
}
