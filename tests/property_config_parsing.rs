use std::collections::HashMap;

use envcfg::{ConfigLoader, Field, LogFormat, LogLevel, LogOutput};
use proptest::prelude::*;

/// Randomly upper-/lower-case each character and pad with whitespace.
fn spelling_of(word: &'static str) -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(any::<bool>(), word.len()),
        "[ \t\n]{0,3}",
        "[ \t\n]{0,3}",
    )
        .prop_map(move |(upper, leading, trailing)| {
            let body: String = word
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            format!("{leading}{body}{trailing}")
        })
}

fn level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

fn format() -> impl Strategy<Value = LogFormat> {
    prop::sample::select(LogFormat::ALL.to_vec())
}

proptest! {
    /// Property: any casing of a level, with surrounding whitespace,
    /// loads as the canonical level.
    #[test]
    fn prop_log_level_is_case_insensitive(
        (expected, raw) in level().prop_flat_map(|l| (Just(l), spelling_of(l.as_str())))
    ) {
        let env = HashMap::from([("LOG_LEVEL", raw)]);
        let config = ConfigLoader::load_from(&env).unwrap();
        prop_assert_eq!(config.log_level(), expected);
    }

    /// Property: same for formats.
    #[test]
    fn prop_log_format_is_case_insensitive(
        (expected, raw) in format().prop_flat_map(|f| (Just(f), spelling_of(f.as_str())))
    ) {
        let env = HashMap::from([("LOG_FORMAT", raw)]);
        let config = ConfigLoader::load_from(&env).unwrap();
        prop_assert_eq!(config.log_format(), expected);
    }

    /// Property: the stream names are case-insensitive too.
    #[test]
    fn prop_log_output_streams_are_case_insensitive(
        (expected, raw) in prop_oneof![
            spelling_of("stdout").prop_map(|raw| (LogOutput::Stdout, raw)),
            spelling_of("stderr").prop_map(|raw| (LogOutput::Stderr, raw)),
        ]
    ) {
        let env = HashMap::from([("LOG_OUTPUT", raw)]);
        let config = ConfigLoader::load_from(&env).unwrap();
        prop_assert_eq!(config.log_output(), &expected);
    }

    /// Property: words outside the level set are rejected with the raw value.
    #[test]
    fn prop_unknown_log_level_is_rejected(raw in "[a-z]{1,10}") {
        prop_assume!(raw.parse::<LogLevel>().is_err());

        let env = HashMap::from([("LOG_LEVEL", raw.clone())]);
        let err = ConfigLoader::load_from(&env).unwrap_err();
        prop_assert_eq!(err.len(), 1);
        prop_assert_eq!(err.errors()[0].field(), Field::LogLevel);
        prop_assert_eq!(err.errors()[0].value(), raw.as_str());
    }

    /// Property: any non-blank custom destination is kept, trimmed, with its case.
    #[test]
    fn prop_custom_log_output_is_verbatim(path in "/[A-Za-z0-9_./-]{1,30}") {
        let env = HashMap::from([("LOG_OUTPUT", format!(" {path} "))]);
        let config = ConfigLoader::load_from(&env).unwrap();
        prop_assert_eq!(config.log_output(), &LogOutput::File(path));
    }

    /// Property: loading twice from the same variables gives the same outcome.
    #[test]
    fn prop_load_is_idempotent(
        level in "[A-Za-z ]{0,8}",
        timeout in "[0-9]{0,3}(ms|s|m|h|x)?",
        address in ".{0,20}",
    ) {
        let env = HashMap::from([
            ("LOG_LEVEL", level),
            ("SERVER_SHUTDOWN_TIMEOUT", timeout),
            ("SERVER_ADDRESS", address),
        ]);
        prop_assert_eq!(ConfigLoader::load_from(&env), ConfigLoader::load_from(&env));
    }
}
