//! Tests for the weekly breach notification sweep.

mod breach_sweep;
