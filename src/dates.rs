//! Lenient timestamp parsing for WHOIS date fields.
//!
//! Registries print dates in dozens of shapes. Parsing runs in two stages:
//! a free-form pass over the common shapes, then a short list of explicit
//! fallback formats. A value no stage understands yields `None`; callers treat
//! that as an absent field rather than an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Date-times carrying an explicit offset.
const ZONED_FORMATS: &[&str] = &[
  "%Y-%m-%d %H:%M:%S%.f%:z",
  "%Y-%m-%d %H:%M:%S%.f %:z",
  "%Y-%m-%d %H:%M:%S%.f %z",
  // Hour-only offsets such as "+03".
  "%Y-%m-%d %H:%M:%S%#z",
  "%Y-%m-%dT%H:%M:%S%.f%z",
  "%a %b %d %H:%M:%S %z %Y",
];

/// Date-times without an offset; read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%d %H:%M",
  "%Y/%m/%d %H:%M:%S",
  "%Y.%m.%d %H:%M:%S",
  "%d.%m.%Y %H:%M:%S",
  "%d/%m/%Y %H:%M:%S",
  "%d-%b-%Y %H:%M:%S",
  "%a %b %d %H:%M:%S %Y",
];

const DATE_FORMATS: &[&str] = &[
  "%Y-%m-%d",
  "%Y/%m/%d",
  "%Y.%m.%d",
  "%Y. %m. %d.",
  "%d.%m.%Y",
  "%d/%m/%Y",
  "%d-%m-%Y",
  "%b %d %Y",
  "%d %b %Y",
  "%d-%B-%Y",
  "%B %d %Y",
];

enum Explicit {
  Date(&'static str),
  DateTime(&'static str),
}

/// Tried in order once the free-form pass gives up.
const EXPLICIT_FORMATS: &[Explicit] = &[
  Explicit::Date("%d-%b-%Y"),
  Explicit::DateTime("%Y-%m-%dT%H:%M:%SZ"),
];

/// Parses a WHOIS date value, returning `None` when no known shape fits.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  parse_free_form(value).or_else(|| parse_explicit(value))
}

fn parse_free_form(value: &str) -> Option<DateTime<Utc>> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
    return Some(dt.with_timezone(&Utc));
  }
  if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
    return Some(dt.with_timezone(&Utc));
  }
  for fmt in ZONED_FORMATS {
    if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
      return Some(dt.with_timezone(&Utc));
    }
  }

  let naive = strip_utc_designator(strip_zone_comment(value));
  for fmt in NAIVE_DATETIME_FORMATS {
    if let Ok(dt) = NaiveDateTime::parse_from_str(naive, fmt) {
      return Some(dt.and_utc());
    }
  }
  for fmt in DATE_FORMATS {
    if let Ok(d) = NaiveDate::parse_from_str(naive, fmt) {
      return midnight(d);
    }
  }
  parse_compact_date(naive)
}

fn parse_explicit(value: &str) -> Option<DateTime<Utc>> {
  EXPLICIT_FORMATS.iter().find_map(|format| match format {
    Explicit::Date(fmt) => {
      NaiveDate::parse_from_str(value, fmt).ok().and_then(midnight)
    }
    Explicit::DateTime(fmt) => NaiveDateTime::parse_from_str(value, fmt)
      .ok()
      .map(|dt| dt.and_utc()),
  })
}

/// `YYYYMMDD`, as printed by e.g. registro.br.
fn parse_compact_date(value: &str) -> Option<DateTime<Utc>> {
  if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  let year = value[..4].parse().ok()?;
  let month = value[4..6].parse().ok()?;
  let day = value[6..].parse().ok()?;
  NaiveDate::from_ymd_opt(year, month, day).and_then(midnight)
}

/// Drops a trailing parenthesised zone note: "(JST)", "(GMT+0:00)".
fn strip_zone_comment(value: &str) -> &str {
  value
    .strip_suffix(')')
    .and_then(|v| v.rfind('(').map(|i| v[..i].trim_end()))
    .unwrap_or(value)
}

fn strip_utc_designator(value: &str) -> &str {
  [" UTC", " GMT", "Z"]
    .iter()
    .find_map(|suffix| value.strip_suffix(suffix))
    .map_or(value, str::trim_end)
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
  date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
  }

  #[test]
  fn parses_rfc3339_variants() {
    assert_eq!(
      parse_timestamp("1995-08-14T04:00:00Z"),
      Some(utc(1995, 8, 14, 4, 0, 0))
    );
    assert_eq!(
      parse_timestamp("2023-01-15T10:30:00+01:00"),
      Some(utc(2023, 1, 15, 9, 30, 0))
    );
    assert_eq!(
      parse_timestamp(" 2006-03-09T23:22:37.544311Z "),
      parse_timestamp("2006-03-09T23:22:37.544311Z")
    );
  }

  #[test]
  fn parses_naive_date_times_as_utc() {
    assert_eq!(
      parse_timestamp("2004.09.30 13:33:47"),
      Some(utc(2004, 9, 30, 13, 33, 47))
    );
    assert_eq!(
      parse_timestamp("15.10.1997 08:48:00"),
      Some(utc(1997, 10, 15, 8, 48, 0))
    );
    assert_eq!(
      parse_timestamp("2001-01-01 00:00:00 UTC"),
      Some(utc(2001, 1, 1, 0, 0, 0))
    );
  }

  #[test]
  fn accepts_hour_only_offsets_and_zone_notes() {
    assert_eq!(
      parse_timestamp("2000-06-22 15:53:00+03"),
      Some(utc(2000, 6, 22, 12, 53, 0))
    );
    assert_eq!(
      parse_timestamp("2009-01-21 18:42:11 (GMT+0:00)"),
      Some(utc(2009, 1, 21, 18, 42, 11))
    );
    assert_eq!(
      parse_timestamp("2024/06/01 01:05:03 (JST)"),
      Some(utc(2024, 6, 1, 1, 5, 3))
    );
    assert_eq!(
      parse_timestamp("2001-01-01 00:00:00 (UTC)"),
      Some(utc(2001, 1, 1, 0, 0, 0))
    );
  }

  #[test]
  fn parses_date_only_shapes() {
    assert_eq!(parse_timestamp("2004-04-03"), Some(utc(2004, 4, 3, 0, 0, 0)));
    assert_eq!(parse_timestamp("2001/02/12"), Some(utc(2001, 2, 12, 0, 0, 0)));
    assert_eq!(parse_timestamp("19970331"), Some(utc(1997, 3, 31, 0, 0, 0)));
    assert_eq!(parse_timestamp("14-Aug-1995"), Some(utc(1995, 8, 14, 0, 0, 0)));
  }

  #[test]
  fn explicit_formats_cover_day_month_year_and_zulu() {
    assert_eq!(parse_explicit("14-Aug-1995"), Some(utc(1995, 8, 14, 0, 0, 0)));
    assert_eq!(
      parse_explicit("1995-08-14T04:00:00Z"),
      Some(utc(1995, 8, 14, 4, 0, 0))
    );
    assert_eq!(parse_explicit("not a date"), None);
  }

  #[test]
  fn rejects_unparseable_values() {
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("before Aug-1996"), None);
    assert_eq!(parse_timestamp("2023-13-45"), None);
    assert_eq!(parse_timestamp("20231345"), None);
  }
}
