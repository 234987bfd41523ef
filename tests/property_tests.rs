//! Property-based tests for rust_kv_logger using proptest

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_kv_logger::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn any_configured_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![any_level(), Just(LogLevel::Off)]
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("JSON has no NaN or infinity", |f| f.is_finite())
            .prop_map(Value::from),
        ".*".prop_map(Value::from),
    ]
}

fn render(formatter: &dyn Formatter, level: LogLevel, args: &[Value]) -> Result<String> {
    let t = Utc
        .with_ymd_and_hms(2024, 1, 5, 15, 4, 5)
        .single()
        .expect("valid datetime");
    formatter.render(&LogEvent::new(level, t, args))
}

fn render_json(args: &[Value]) -> serde_json::Value {
    let line = render(&JsonFormatter::new(), LogLevel::Info, args).expect("finite values encode");
    serde_json::from_str(&line).expect("valid JSON")
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_configured_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering matches the numeric ranks
    #[test]
    fn test_log_level_ordering(level1 in any_configured_level(), level2 in any_configured_level()) {
        prop_assert_eq!(level1 <= level2, level1.rank() <= level2.rank());
        prop_assert_eq!(LogLevel::from_rank(level1.rank()), level1);
    }

    /// An event passes the filter exactly when its rank is at least the configured rank
    #[test]
    fn test_is_allowed_matches_rank(configured in any_configured_level(), candidate in any_level()) {
        prop_assert_eq!(
            LogLevel::is_allowed(configured, candidate),
            candidate.rank() >= configured.rank()
        );
    }

    /// Filtering through a real logger agrees with is_allowed
    #[test]
    fn test_logger_filters_by_level(configured in any_configured_level(), candidate in any_level()) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .level(configured)
            .formatter(TextFormatter::plain())
            .sink(sink.clone())
            .build();

        logger.log(candidate, &["probe".into()]);
        let expected = configured != LogLevel::Off && LogLevel::is_allowed(configured, candidate);
        prop_assert_eq!(!sink.is_empty(), expected);
    }

    /// Level names are case-insensitive
    #[test]
    fn test_log_level_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let name = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_string()
        };
        prop_assert_eq!(name.parse::<LogLevel>().unwrap(), level);
    }

    /// Strings that are not level names never parse
    #[test]
    fn test_log_level_invalid_parse(invalid_str in "[^TDIWEFONtdiwefon ]+") {
        prop_assert!(invalid_str.parse::<LogLevel>().is_err());
    }
}

// ============================================================================
// Value Rendering Tests
// ============================================================================

proptest! {
    /// Integer text is plain decimal
    #[test]
    fn test_signed_integer_text(n in any::<i64>()) {
        prop_assert_eq!(Value::from(n).to_string(), n.to_string());
    }

    #[test]
    fn test_unsigned_integer_text(n in any::<u64>()) {
        prop_assert_eq!(Value::from(n).to_string(), n.to_string());
    }

    /// Float text reads back as the same float
    #[test]
    fn test_float_text_round_trip(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let text = Value::from(f).to_string();
        prop_assert_eq!(text.parse::<f64>().unwrap(), f);
    }

    /// JSON keeps integers and floats as numbers
    #[test]
    fn test_json_numbers_native(n in any::<i64>(), u in any::<u64>(), f in -1.0e12f64..1.0e12) {
        let parsed = render_json(&["n".into(), n.into(), "u".into(), u.into(), "f".into(), f.into()]);
        prop_assert_eq!(parsed["n"].as_i64(), Some(n));
        prop_assert_eq!(parsed["u"].as_u64(), Some(u));
        let decoded = parsed["f"].as_f64().expect("float stays a number");
        prop_assert!((decoded - f).abs() <= f.abs() * 1e-15);
    }

    /// Text values survive JSON escaping
    #[test]
    fn test_json_strings_round_trip(text in ".*") {
        let parsed = render_json(&["s".into(), text.as_str().into()]);
        prop_assert_eq!(parsed["s"].as_str(), Some(text.as_str()));
    }

    /// A non-text key at pair index i shows up as undef[2i]
    #[test]
    fn test_non_text_keys_get_placeholder(keys in prop::collection::vec(any::<i64>(), 1..8)) {
        let args: Vec<Value> = keys
            .iter()
            .flat_map(|k| [Value::from(*k), Value::from("v")])
            .collect();
        let parsed = render_json(&args);
        for i in 0..keys.len() {
            let key = format!("undef[{}]", i * 2);
            prop_assert_eq!(parsed[key.as_str()].as_str(), Some("v"));
        }
    }
}

// ============================================================================
// Message Shape Tests
// ============================================================================

proptest! {
    /// Every rendered message ends with exactly one newline
    #[test]
    fn test_one_trailing_newline(
        level in any_level(),
        args in prop::collection::vec(any_value(), 0..6),
        pretty in any::<bool>(),
    ) {
        let text = render(&TextFormatter::new(), level, &args).unwrap();
        prop_assert!(text.ends_with('\n'));
        prop_assert!(!text.ends_with("\n\n"));
        prop_assert_eq!(text.matches('\n').count(), 1);

        let json = render(&JsonFormatter::new().with_pretty(pretty), level, &args).unwrap();
        prop_assert!(json.ends_with('\n'));
        prop_assert!(!json.ends_with("\n\n"));
        if !pretty {
            prop_assert_eq!(json.matches('\n').count(), 1);
        }
    }

    /// level and t are present no matter what the caller passes
    #[test]
    fn test_json_injected_fields(level in any_level(), args in prop::collection::vec(any_value(), 0..6)) {
        let line = render(&JsonFormatter::new(), level, &args).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        prop_assert_eq!(parsed["level"].as_str(), Some(level.to_str()));
        prop_assert_eq!(parsed["t"].as_str(), Some("2024-Jan-05 15:04:05.000"));
    }

    /// Logging never panics, whatever the arguments
    #[test]
    fn test_logging_no_panic(args in prop::collection::vec(any_value(), 0..8)) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .level(LogLevel::Trace)
            .formatter(JsonFormatter::new())
            .sink(sink.clone())
            .build();
        logger.info(&args);
        prop_assert_eq!(sink.lines().len(), 1);
    }
}
