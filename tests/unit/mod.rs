//! Unit test harness for bounded-arith.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod properties;
