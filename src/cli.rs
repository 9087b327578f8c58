use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "whoisparse", version)]
#[command(
  about = "Look up domains over WHOIS and print normalized registration records.",
  long_about = "Queries the registry for each domain, picks the extraction ruleset matching its suffix, and prints the registrar, dates, status, name servers and registrant details found in the response. A saved response can be parsed instead with --file."
)]
pub struct Cli {
  /// Domain names to look up.
  #[arg(required_unless_present = "config_show", value_name = "DOMAIN")]
  pub targets: Vec<String>,

  /// Output results in JSON format instead of human-readable text.
  #[arg(long)]
  pub json: bool,

  /// Also print the raw WHOIS response.
  #[arg(long)]
  pub raw: bool,

  /// Parse a saved WHOIS response instead of querying. Takes one domain.
  #[arg(long, value_name = "PATH")]
  pub file: Option<PathBuf>,

  /// Query this WHOIS server instead of the one picked for the suffix.
  #[arg(long, value_name = "HOST", conflicts_with = "file")]
  pub server: Option<String>,

  /// Number of registrar referrals to follow.
  #[arg(long, value_name = "N", conflicts_with = "file")]
  pub follow: Option<u16>,

  /// Per-lookup timeout in seconds.
  #[arg(long, value_name = "SECS", conflicts_with = "file")]
  pub timeout: Option<u64>,

  /// Persist --server, --follow and --timeout into the user config file.
  #[arg(long)]
  pub save_config: bool,

  /// Print the current merged configuration and exit.
  #[arg(long)]
  pub config_show: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_args(args: &[&str]) -> Vec<String> {
    std::iter::once("whoisparse".to_string())
      .chain(args.iter().map(std::string::ToString::to_string))
      .collect()
  }

  #[test]
  fn test_basic_target() {
    let args = make_args(&["example.com"]);
    let cli = Cli::try_parse_from(args).expect("Should parse basic target");
    assert_eq!(cli.targets, vec!["example.com"]);
    assert!(!cli.json);
    assert!(!cli.raw);
    assert!(cli.file.is_none());
    assert!(cli.server.is_none());
    assert!(cli.follow.is_none());
    assert!(cli.timeout.is_none());
  }

  #[test]
  fn test_multiple_targets_keep_order() {
    let args = make_args(&["example.com", "example.de", "example.co.uk"]);
    let cli = Cli::try_parse_from(args).expect("Should parse several targets");
    assert_eq!(cli.targets, vec!["example.com", "example.de", "example.co.uk"]);
  }

  #[test]
  fn test_lookup_flags() {
    let args = make_args(&[
      "example.com",
      "--server",
      "whois.verisign-grs.com",
      "--follow",
      "0",
      "--timeout",
      "15",
      "--json",
      "--raw",
    ]);
    let cli = Cli::try_parse_from(args).expect("Should parse lookup flags");
    assert_eq!(cli.server.as_deref(), Some("whois.verisign-grs.com"));
    assert_eq!(cli.follow, Some(0));
    assert_eq!(cli.timeout, Some(15));
    assert!(cli.json);
    assert!(cli.raw);
  }

  #[test]
  fn test_file_flag() {
    let args = make_args(&["example.de", "--file", "denic.txt"]);
    let cli = Cli::try_parse_from(args).expect("Should parse --file");
    assert_eq!(cli.file, Some(PathBuf::from("denic.txt")));
  }

  #[test]
  fn test_file_conflicts_with_server() {
    let args =
      make_args(&["example.de", "--file", "denic.txt", "--server", "x.y"]);
    let result = Cli::try_parse_from(args);
    assert!(
      matches!(
        result.unwrap_err().kind(),
        clap::error::ErrorKind::ArgumentConflict
      ),
      "--file and --server should conflict"
    );
  }

  #[test]
  fn test_follow_must_be_a_number() {
    let args = make_args(&["example.com", "--follow", "many"]);
    assert!(Cli::try_parse_from(args).is_err());
  }

  #[test]
  fn test_config_flags() {
    let args = make_args(&["example.com", "--save-config", "--config-show"]);
    let cli = Cli::try_parse_from(args).expect("Should parse config flags");
    assert!(cli.save_config);
    assert!(cli.config_show);
  }

  #[test]
  fn test_config_show_needs_no_target() {
    let args = make_args(&["--config-show"]);
    let cli = Cli::try_parse_from(args).expect("Should parse --config-show");
    assert!(cli.config_show);
    assert!(cli.targets.is_empty());
  }

  #[test]
  fn test_missing_target_arg_fails() {
    let args = make_args(&[]);
    let result = Cli::try_parse_from(args);
    assert!(
      matches!(
        result.unwrap_err().kind(),
        clap::error::ErrorKind::MissingRequiredArgument
      ),
      "Error kind should be MissingRequiredArgument"
    );
  }
}
