//! # Centum
//!
//! Arbitrary precision integers and exact fractions for places where
//! machine integers overflow: combinatorics, exact fraction bookkeeping,
//! arithmetic prototyping.
//!
//! ## Features
//!
//! - **Canonical Integers**: base-100 digit slots, one representation per value
//! - **Exact Rationals**: sign-normalized fractions with cross-multiplication equality
//! - **Recoverable Errors**: invalid digits and zero denominators are returned, never fatal
//!
//! ## Quick Start
//!
//! ```rust
//! use centum::prelude::*;
//!
//! let a = Integer::from_digits(true, vec![45, 23, 1])?;
//! assert_eq!(a.to_string(), "-12345");
//!
//! let half = Rational::from_i64(1, 2)?;
//! assert_eq!(half, Rational::from_i64(2, 4)?);
//! # Ok::<(), ArithmeticError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use centum_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use centum_integers::{ArithmeticError, Integer, Rational};
}
