//! Property-based tests for rust_gated_logger using proptest

use proptest::prelude::*;
use rust_gated_logger::core::{is_enabled, MIN_TICK};
use rust_gated_logger::prelude::*;
use std::time::Duration;

const MICROS_PER_DAY: u64 = 86_400 * 1_000_000;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Verbose),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level(), lower in any::<bool>()) {
        let text = if lower { level.as_str().to_lowercase() } else { level.as_str().to_string() };
        let parsed: LogLevel = text.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering matches the numeric encoding
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1.as_u8();
        let val2 = level2.as_u8();

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// Bytes outside the level range are rejected rather than clamped
    #[test]
    fn test_log_level_from_byte(value in any::<u8>()) {
        match LogLevel::try_from(value) {
            Ok(level) => prop_assert_eq!(level.as_u8(), value),
            Err(err) => {
                prop_assert!(value > 5);
                let is_invalid_level = matches!(err, LoggerError::InvalidLevel { .. });
                prop_assert!(is_invalid_level);
            }
        }
    }
}

// ============================================================================
// Enablement Tests
// ============================================================================

proptest! {
    /// Without an override, enablement crosses from false to true exactly once
    #[test]
    fn test_enablement_is_a_step(threshold in any_level()) {
        let flags: Vec<bool> = LogLevel::ALL
            .iter()
            .map(|&level| is_enabled(level, None, threshold))
            .collect();

        let crossing = flags.iter().position(|&on| on).unwrap();
        prop_assert_eq!(LogLevel::ALL[crossing], threshold);
        prop_assert!(flags[..crossing].iter().all(|&on| !on));
        prop_assert!(flags[crossing..].iter().all(|&on| on));
    }

    /// An override only ever adds enabled levels
    #[test]
    fn test_override_never_disables(
        level in any_level(),
        threshold in any_level(),
        over in any_level(),
    ) {
        if is_enabled(level, None, threshold) {
            prop_assert!(is_enabled(level, Some(over), threshold));
        }
        prop_assert_eq!(
            is_enabled(level, Some(over), threshold),
            level > over || level >= threshold
        );
    }
}

// ============================================================================
// Timestamp Decomposition Tests
// ============================================================================

proptest! {
    /// Reassembling the fields yields the truncated microsecond count
    #[test]
    fn test_decompose_roundtrip(nanos in 0u64..=10_000 * MICROS_PER_DAY * 1_000) {
        let tp = TimePoint::from_nanos(nanos);
        let parts = TimestampBreakdown::decompose(tp);
        prop_assert_eq!(parts.total_micros(), nanos / 1_000);
    }

    /// Every field stays within its natural modulus
    #[test]
    fn test_decompose_field_bounds(micros in any::<u64>()) {
        let parts = TimestampBreakdown::from_micros(micros);
        prop_assert!(parts.hours <= 23);
        prop_assert!(parts.minutes <= 59);
        prop_assert!(parts.seconds <= 59);
        prop_assert!(parts.millis <= 999);
        prop_assert!(parts.micros <= 999);
        prop_assert_eq!(parts.days, micros / MICROS_PER_DAY);
    }

    /// Rendering is zero padded with fixed separators
    #[test]
    fn test_rendering_shape(micros in 0u64..10_000 * MICROS_PER_DAY) {
        let text = TimestampBreakdown::from_duration(Duration::from_micros(micros)).to_string();
        prop_assert_eq!(text.len(), 21);
        let seps: Vec<char> = text.chars().filter(|c| !c.is_ascii_digit()).collect();
        prop_assert_eq!(seps, vec![':', ':', ':', '.', '.']);
    }
}

// ============================================================================
// Cached Clock Tests
// ============================================================================

proptest! {
    /// Advance calls step by exactly one tick and refreshes never go backwards
    #[test]
    fn test_cached_clock_monotonic(refreshes in prop::collection::vec(any::<bool>(), 1..500)) {
        let mut prev = CachedSteadyClock::now(false);
        for refresh in refreshes {
            let next = CachedSteadyClock::now(refresh);
            if refresh {
                prop_assert!(next >= prev);
            } else {
                prop_assert_eq!(next - prev, MIN_TICK);
            }
            prev = next;
        }
    }
}
