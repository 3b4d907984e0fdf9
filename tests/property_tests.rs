//! Property-based tests for term_logger using proptest

use proptest::prelude::*;
use term_logger::core::layout::visible_width;
use term_logger::prelude::*;

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Level ordering mirrors the backing integer ordering
    #[test]
    fn test_level_ordering_matches_values(a in any::<i32>(), b in any::<i32>()) {
        let level_a = LogLevel(a);
        let level_b = LogLevel(b);
        prop_assert_eq!(level_a < level_b, a < b);
        prop_assert_eq!(level_a <= level_b, a <= b);
        prop_assert_eq!(level_a == level_b, a == b);
    }

    /// Parsing accepts the four names in any casing
    #[test]
    fn test_level_parse_case_insensitive(
        name in prop_oneof![
            Just("Debug"),
            Just("Info"),
            Just("Warn"),
            Just("Error"),
        ],
        uppercase in any::<bool>(),
    ) {
        let input = if uppercase { name.to_uppercase() } else { name.to_lowercase() };
        let parsed: LogLevel = input.parse().unwrap();
        prop_assert_eq!(parsed.name(), Some(name));
    }

    /// Anything that is not one of the four names is rejected
    #[test]
    fn test_level_parse_rejects_other_text(input in "[a-z0-9]{1,8}") {
        prop_assume!(!matches!(input.as_str(), "debug" | "info" | "warn" | "error"));
        prop_assert!(input.parse::<LogLevel>().is_err());
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// A floor of L2 rejects every L1 < L2 and accepts L2 itself
    #[test]
    fn test_floor_rejects_below_accepts_at(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a < b);
        let lower = LogLevel(a);
        let floor = LogLevel(b);

        let mut logger = TerminalLogger::new(Vec::new(), 40, false).with_min_level(floor);
        let id = EventId::from("e1");
        prop_assert!(!logger.should_log(lower, "moduleX", "a.jl", 1, &id, None, None));
        prop_assert!(logger.should_log(floor, "moduleX", "a.jl", 1, &id, None, None));
    }

    /// min_enabled_level is the minimum over the default and all overrides
    #[test]
    fn test_min_enabled_level_is_minimum(
        default in -2_000..2_000i32,
        overrides in proptest::collection::hash_map("[a-z]{1,6}", -2_000..2_000i32, 0..5),
    ) {
        let mut logger =
            TerminalLogger::new(Vec::new(), 40, false).with_min_level(LogLevel(default));
        for (module, level) in &overrides {
            logger.configure(Some(module), LogOptions::min_level(LogLevel(*level)));
        }

        let expected = overrides.values().copied().fold(default, i32::min);
        prop_assert_eq!(logger.min_enabled_level(), LogLevel(expected));
    }

    /// With max_repeats = cap, exactly min(cap, calls) events are accepted
    #[test]
    fn test_throttle_accepts_exactly_cap(cap in 1..20u64, calls in 1..40u64) {
        let mut logger = TerminalLogger::new(Vec::new(), 40, false);
        let id = EventId::from("throttled");

        let mut accepted = 0;
        for _ in 0..calls {
            if logger.should_log(LogLevel::ERROR, "moduleX", "a.jl", 1, &id, Some(cap), None) {
                accepted += 1;
            }
        }
        prop_assert_eq!(accepted, cap.min(calls));
    }
}

// ============================================================================
// Layout Tests
// ============================================================================

proptest! {
    /// Visible length ignores any styling wrap
    #[test]
    fn test_visible_width_color_invariant(
        text in "[a-zA-Z0-9 ./:-]{0,30}",
        style in prop_oneof![
            Just("\x1b[31m"),
            Just("\x1b[1m"),
            Just("\x1b[93m"),
            Just("\x1b[1;33m"),
        ],
    ) {
        let wrapped = format!("{}{}\x1b[0m", style, text);
        prop_assert_eq!(visible_width(&wrapped), visible_width(&text));
        prop_assert_eq!(visible_width(&text), text.chars().count());
    }
}

// ============================================================================
// Non-interactive Rendering Tests
// ============================================================================

proptest! {
    /// Emitted bytes carry exactly one trailing newline whether or not
    /// the message already ends in one
    #[test]
    fn test_plain_rendering_newline_idempotent(text in "[a-zA-Z0-9 ]{0,20}") {
        let render = |message: &str| {
            let mut logger = TerminalLogger::new(Vec::new(), 40, false);
            let event = LogEvent::new(LogLevel::INFO, "e1", message)
                .with_location("a.jl", 10, "moduleX");
            logger.handle_message(event).unwrap();
            logger.into_writer()
        };

        let bare = render(&text);
        let trailing = render(&format!("{}\n", text));
        prop_assert_eq!(&bare, &trailing);
        prop_assert!(bare.ends_with(b"\n"));
        prop_assert!(!bare.ends_with(b"\n\n"));
    }
}
