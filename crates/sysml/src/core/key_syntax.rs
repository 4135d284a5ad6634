//! Chumsky grammar for the `<name>-<digits>` key form
//!
//! The grammar only splits the string. Whether `name` is a registered kind is
//! decided by the caller against the schema tables.

use chumsky::prelude::*;

/// Kind name: one or more ASCII letters or digits, no dash
fn kind_name<'src>(
) -> impl chumsky::Parser<'src, &'src str, String, extra::Err<Rich<'src, char>>> + Clone {
    any()
        .filter(|c: &char| c.is_ascii_alphanumeric())
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// Sequence number: one or more decimal digits
fn digits<'src>(
) -> impl chumsky::Parser<'src, &'src str, String, extra::Err<Rich<'src, char>>> + Clone {
    any()
        .filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// Full key grammar
fn key_parser<'src>(
) -> impl chumsky::Parser<'src, &'src str, (String, String), extra::Err<Rich<'src, char>>> + Clone
{
    kind_name()
        .then_ignore(just('-'))
        .then(digits())
        .then_ignore(end())
}

/// Split a key string into its kind name and sequence number
///
/// Returns `None` when the string is not of the form `<name>-<digits>` or
/// the number does not fit a `u32`.
pub fn split_key(input: &str) -> Option<(String, u32)> {
    let (name, digits) = key_parser().parse(input).into_result().ok()?;
    let seq = digits.parse::<u32>().ok()?;
    Some((name, seq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_valid_keys() {
        assert_eq!(split_key("block-1"), Some(("block".to_string(), 1)));
        assert_eq!(
            split_key("partProperty-42"),
            Some(("partProperty".to_string(), 42))
        );
        assert_eq!(split_key("x-007"), Some(("x".to_string(), 7)));
    }

    #[test]
    fn test_split_rejects_malformed() {
        assert_eq!(split_key("bogus!!"), None);
        assert_eq!(split_key("block"), None);
        assert_eq!(split_key("block-"), None);
        assert_eq!(split_key("-1"), None);
        assert_eq!(split_key("block-1-2"), None);
        assert_eq!(split_key("block--1"), None);
        assert_eq!(split_key("block-1a"), None);
        assert_eq!(split_key(" block-1"), None);
    }

    #[test]
    fn test_split_rejects_overflow() {
        assert_eq!(split_key("block-99999999999"), None);
    }
}
