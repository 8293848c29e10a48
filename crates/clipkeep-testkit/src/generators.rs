//! Proptest strategies for clipboard sample sequences.
//!
//! The strategies deliberately draw from a small alphabet so adjacent
//! repeats, non-adjacent repeats, empties, and whitespace padding all show
//! up often enough to exercise the detector's suppression rules.

use proptest::prelude::*;

/// One clipboard sample: short text, padded text, or nothing useful.
pub fn sample_text() -> impl Strategy<Value = String> {
    prop_oneof![
        // Small alphabet makes repeats likely.
        3 => prop_oneof![Just("x"), Just("y"), Just("z")].prop_map(str::to_owned),
        // Same alphabet with whitespace padding: trims to the same texts.
        2 => (prop_oneof![Just("x"), Just("y"), Just("z")], " {0,3}", " {0,3}")
            .prop_map(|(core, lead, trail)| format!("{lead}{core}{trail}")),
        // Longer free-form text.
        2 => "[a-p]{1,12}",
        // Empty and all-whitespace samples.
        1 => Just(String::new()),
        1 => " {1,4}",
    ]
}

/// A sequence of clipboard samples, one per tick.
pub fn sample_sequence(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(sample_text(), 0..=max_len)
}

/// A sample plus the path it takes into the engine: `true` for a
/// foreground save, `false` for a watcher tick. Interleaving both paths
/// is what shakes out double-insert bugs between them.
pub fn tagged_sequence(max_len: usize) -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec((sample_text(), any::<bool>()), 0..=max_len)
}
