//! Share codec - Raw counters to and from a share-link query string
//!
//! Link format: `?downed=…&kills=…&dmgDealt=…&dmgTaken=…&hours=…`. Zero fields
//! are omitted, so after a round trip a zero and a never-entered field look
//! the same. The format has no version marker and must stay stable.

mod text;

pub use text::share_text;

use crate::format::number_to_string;
use crate::locale::Language;
use crate::parse::parse_float_prefix;
use crate::types::{PartialInput, StatField, StatsInput};
use tracing::debug;

/// Encode the non-zero counters as a query string (without the leading `?`)
pub fn encode(input: &StatsInput) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for field in StatField::all() {
        let value = input.get(*field);
        if value != 0.0 && !value.is_nan() {
            serializer.append_pair(field.key(), &number_to_string(value));
        }
    }
    serializer.finish()
}

/// Decode a query string into whichever counters it carries
///
/// A leading `?` is ignored. For repeated keys the first occurrence wins.
/// Missing, unparseable, zero and non-finite values are all left absent.
pub fn decode(query: &str) -> PartialInput {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut partial = PartialInput::default();
    let mut seen: Vec<StatField> = Vec::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let Some(field) = StatField::from_key(&key) else {
            continue;
        };
        if seen.contains(&field) {
            continue;
        }
        seen.push(field);

        match parse_float_prefix(&value) {
            Some(n) if n != 0.0 && n.is_finite() => partial.set(field, Some(n)),
            _ => debug!(key = %key, value = %value, "dropping share field"),
        }
    }

    partial
}

/// Query part of a full share link; a bare query is returned as is
pub fn query_of(link: &str) -> &str {
    let without_fragment = link.split('#').next().unwrap_or(link);
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None => without_fragment,
    }
}

/// Decode the counters carried by a full share link
pub fn decode_link(link: &str) -> PartialInput {
    decode(query_of(link))
}

/// Language route a share link was created under, if it carries one
pub fn link_language(link: &str) -> Option<Language> {
    let path = link.split(['?', '#']).next().unwrap_or(link);
    Language::try_from_path(&path[path.rfind('/')?..])
}

/// Full share link: origin, language route, then the encoded counters
pub fn share_url(origin: &str, language: Language, input: &StatsInput) -> String {
    format!(
        "{}{}?{}",
        origin.trim_end_matches('/'),
        language.path(),
        encode(input)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_fixed_order() {
        let input = StatsInput::new(10.0, 100.0, 50_000.0, 10_000.0, 10.0);
        assert_eq!(
            encode(&input),
            "downed=10&kills=100&dmgDealt=50000&dmgTaken=10000&hours=10"
        );
    }

    #[test]
    fn test_encode_halfway_value_keeps_even_digit() {
        let input = StatsInput::new(0.0, 0.0, 0.0, 0.0, 1.8030166625976562);
        assert_eq!(encode(&input), "hours=1.8030166625976562");
    }

    #[test]
    fn test_encode_omits_zero() {
        let input = StatsInput::new(0.0, 5.0, 0.0, 0.0, 2.5);
        assert_eq!(encode(&input), "kills=5&hours=2.5");
        assert_eq!(encode(&StatsInput::default()), "");
    }

    #[test]
    fn test_encode_exponent_is_escaped() {
        let input = StatsInput::new(0.0, 1e21, 0.0, 0.0, 0.0);
        assert_eq!(encode(&input), "kills=1e%2B21");
        assert_eq!(decode(&encode(&input)).kills, Some(1e21));
    }

    #[test]
    fn test_decode_full() {
        let partial = decode("?downed=3&kills=12&dmgDealt=4500.5&dmgTaken=900&hours=1.5");
        assert_eq!(partial.downed, Some(3.0));
        assert_eq!(partial.kills, Some(12.0));
        assert_eq!(partial.dmg_dealt, Some(4500.5));
        assert_eq!(partial.dmg_taken, Some(900.0));
        assert_eq!(partial.hours, Some(1.5));
    }

    #[test]
    fn test_decode_absent_values() {
        let partial = decode("kills=abc&hours=0&downed=");
        assert!(partial.is_empty());
    }

    #[test]
    fn test_decode_first_key_wins() {
        let partial = decode("kills=7&kills=9");
        assert_eq!(partial.kills, Some(7.0));
    }

    #[test]
    fn test_decode_ignores_unknown_and_prefix_parses() {
        let partial = decode("lang=en&kills=12abc&hours=Infinity");
        assert_eq!(partial.kills, Some(12.0));
        assert_eq!(partial.hours, None);
    }

    #[test]
    fn test_round_trip_drops_zeros() {
        let input = StatsInput::new(0.0, 100.0, 1.25e6, 0.0, 37.75);
        let partial = decode(&encode(&input));
        assert_eq!(partial.downed, None);
        assert_eq!(partial.kills, Some(100.0));
        assert_eq!(partial.dmg_dealt, Some(1.25e6));
        assert_eq!(partial.dmg_taken, None);
        assert_eq!(partial.hours, Some(37.75));
        assert_eq!(partial.to_input(), input);
    }

    #[test]
    fn test_query_of() {
        assert_eq!(query_of("http://h/en?kills=1&hours=2#top"), "kills=1&hours=2");
        assert_eq!(query_of("?kills=1"), "kills=1");
        assert_eq!(query_of("kills=1"), "kills=1");
        assert_eq!(decode_link("http://h/ru?hours=3").hours, Some(3.0));
    }

    #[test]
    fn test_link_language() {
        assert_eq!(link_language("http://h/ua?kills=1"), Some(Language::Uk));
        assert_eq!(link_language("http://h/ru"), Some(Language::Ru));
        assert_eq!(link_language("http://h/?kills=1"), None);
        assert_eq!(link_language("kills=1"), None);
    }

    #[test]
    fn test_share_url() {
        let input = StatsInput::new(0.0, 5.0, 0.0, 0.0, 2.0);
        assert_eq!(
            share_url("http://h", Language::Uk, &input),
            "http://h/ua?kills=5&hours=2"
        );
        assert_eq!(
            share_url("http://h/", Language::En, &input),
            "http://h/en?kills=5&hours=2"
        );
    }
}
