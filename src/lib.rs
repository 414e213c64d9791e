//! # bounded-arith
//!
//! Bounded integer arithmetic with range-checked operands and clamped results.
//!
//! ## Features
//!
//! - **Fail fast**: operands outside the domain are rejected before any arithmetic
//! - **Clamped results**: sums are capped at the upper bound, differences floored at the lower
//! - **Typed errors**: classify failures by [`ErrorKind`], not by message text
//! - **no_std compatible**: core library works without standard library
//! - **Configuration-driven**: describe custom bounds in TOML files
//!
//! ## Quick Start
//!
//! ```rust
//! use bounded_arith::{add, sub, ErrorKind};
//!
//! assert_eq!(add(50, 50)?, 100);
//! assert_eq!(add(70, 80)?, 100);
//! assert_eq!(sub(70, 80)?, 0);
//! assert_eq!(add(-10, 110).unwrap_err().kind(), ErrorKind::Range);
//! # Ok::<(), bounded_arith::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod arith;
pub mod bounds;
pub mod config;
pub mod error;
pub mod value;

// Re-exports for ergonomic API
pub use arith::{add, subtract, subtract as sub, BoundedArithmetic};
pub use bounds::Bounds;
pub use config::{validate_config, ArithConfig};
pub use error::{ConfigError, Error, ErrorKind, HttpError, RangeError, Result};
pub use value::Percent;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
