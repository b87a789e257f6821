//! # centum-integers
//!
//! Arbitrary precision integer and exact rational arithmetic.
//!
//! This crate provides:
//! - Arbitrary precision signed integers (`Integer`) stored as base-100
//!   digit slots
//! - Exact rationals (`Rational`) built from a pair of integers
//!
//! ## Representation Notes
//!
//! - Every value is canonical: zero is the empty slot sequence with a
//!   non-negative sign, and no other value carries a high-order zero slot
//! - Multiplication is schoolbook, `O(len(a) * len(b))`
//! - Rationals are not reduced to lowest terms; equality compares by
//!   cross-multiplication

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
mod magnitude;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::{ArithmeticError, Result};
pub use integer::Integer;
pub use rational::Rational;

/// A single base-100 digit slot.
pub type Digit = u8;

/// Numeric base of each digit slot.
pub const BASE: u16 = 100;
