//! # realpoly
//!
//! Single-variable polynomials with real (`f64`) coefficients.
//!
//! This crate provides:
//! - A growable dense coefficient store indexed by exponent
//! - In-place coefficient mutation (`add_to_coef`, `assign_coef`)
//! - Horner evaluation
//! - Addition and convolution multiplication
//! - Algebraic display such as `4.0x^2 + 2.0`
//!
//! ## Example
//!
//! ```
//! use realpoly::Polynomial;
//!
//! let mut p = Polynomial::constant(2.0);
//! p.assign_coef(4.0, 2)?;
//! assert_eq!(p.to_string(), "4.0x^2 + 2.0");
//! assert_eq!(p.eval(1.0), 6.0);
//! # Ok::<(), realpoly::PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ops;
pub mod polynomial;


pub use error::{PolyError, Result};
pub use polynomial::{Polynomial, GROWTH_SLACK};
