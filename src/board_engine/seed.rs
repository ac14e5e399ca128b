//! Seed derivation.
//!
//! Everyone playing on the same calendar day in the reference zone
//! (`America/New_York`) gets the same seed. The seed is the 32-bit rolling
//! hash of the `YYYY-MM-DD` date key, computed over UTF-16 code units with
//! wrapping arithmetic (`hash = hash * 31 + unit`).

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;

use crate::board_engine::{errors::BoardError, models::SeedSource};

/// Zone whose calendar day defines "today's" puzzle.
pub const REFERENCE_TZ: Tz = New_York;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn hash_string_to_int(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

/// `YYYY-MM-DD` key hashed into the daily seed.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn date_seed(date: NaiveDate) -> i32 {
    hash_string_to_int(&date_key(date))
}

/// Calendar date of `instant` in the reference zone.
pub fn reference_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&REFERENCE_TZ).date_naive()
}

pub fn seed_for_instant(instant: DateTime<Utc>) -> i32 {
    date_seed(reference_date(instant))
}

pub fn today_seed() -> i32 {
    seed_for_instant(Utc::now())
}

pub fn resolve(source: SeedSource) -> i32 {
    match source {
        SeedSource::Explicit(seed) => seed,
        SeedSource::Date(date) => date_seed(date),
        SeedSource::Today => today_seed(),
    }
}

/// Parse a literal seed, as found in a shared link.
pub fn parse_seed(input: &str) -> Result<i32, BoardError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| BoardError::InvalidSeed { input: input.to_string() })
}

pub fn parse_date(input: &str) -> Result<NaiveDate, BoardError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| BoardError::InvalidDate { input: input.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn hash_golden_values() {
        assert_eq!(hash_string_to_int(""), 0);
        assert_eq!(hash_string_to_int("a"), 97);
        assert_eq!(hash_string_to_int("2024-01-01"), -613_341_632);
        assert_eq!(hash_string_to_int("2025-06-15"), 274_311_039);
        assert_eq!(hash_string_to_int("2026-10-19"), 1_162_559_499);
    }

    #[test]
    fn date_seed_hashes_the_key() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(date_key(date), "2024-01-01");
        assert_eq!(date_seed(date), -613_341_632);
    }

    #[test]
    fn day_rolls_over_in_new_york() {
        // 03:30 UTC on Jan 2 is still Jan 1 in New York (UTC-5)
        let late = Utc.with_ymd_and_hms(2024, 1, 2, 3, 30, 0).unwrap();
        assert_eq!(reference_date(late), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(seed_for_instant(late), -613_341_632);

        let next = Utc.with_ymd_and_hms(2024, 1, 2, 5, 0, 0).unwrap();
        assert_eq!(reference_date(next), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn parse_seed_accepts_i32_only() {
        assert_eq!(parse_seed("42"), Ok(42));
        assert_eq!(parse_seed(" -613341632 "), Ok(-613_341_632));
        assert_eq!(parse_seed("2147483647"), Ok(i32::MAX));
        for bad in ["", "abc", "4.5", "2147483648", "0x10"] {
            assert!(matches!(parse_seed(bad), Err(BoardError::InvalidSeed { .. })), "{bad:?}");
        }
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert_eq!(parse_date("2025-06-15"), Ok(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()));
        assert!(matches!(parse_date("06/15/2025"), Err(BoardError::InvalidDate { .. })));
    }
}
