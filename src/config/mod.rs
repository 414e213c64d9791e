//! Configuration module for bounded-arith.
//!
//! Describes the arithmetic domain in TOML (with `std` feature) or as
//! pre-parsed data.

mod arith;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use arith::ArithConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
