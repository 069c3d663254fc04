//! Integration tests for nebula-convert
//!
//! These tests exercise the public API the way a caller would

mod integration {
    mod coercion_matrix;
    mod composites;
    mod custom_converters;
    mod json_round_trip;
    mod runtime_targets;
}
