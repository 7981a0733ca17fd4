//! Document integration tests
//!
//! Exercises the pure document operations together, the way a run composes them.

mod properties;
mod scenarios;
