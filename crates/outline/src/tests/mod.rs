//! Crate-level tests across the whole pipeline.

mod outline_scenarios;
