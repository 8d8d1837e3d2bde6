//! Dense univariate polynomials over `f64`.
//!
//! Coefficients are stored in ascending exponent order. Storage only
//! grows: writing past the last slot resizes it to
//! `exponent + GROWTH_SLACK` and zero-fills the new slots, while reads
//! past the last slot yield 0.

use std::fmt;

use crate::error::{PolyError, Result};

/// Growth resizes storage to `exponent + GROWTH_SLACK` slots.
pub const GROWTH_SLACK: usize = 5;

/// Largest coefficient vector a `Vec<f64>` can address.
const MAX_LEN: usize = isize::MAX.unsigned_abs() / std::mem::size_of::<f64>();

/// A dense univariate polynomial with real coefficients.
///
/// Index `i` of the coefficient vector holds the coefficient of `x^i`.
/// The vector always has at least one slot. Trailing zero slots are
/// allowed and are never trimmed; they are treated as absent terms
/// wherever the degree matters.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending exponent order.
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self { coeffs: vec![0.0] }
    }

    /// Creates the constant polynomial `a0`.
    #[must_use]
    pub fn constant(a0: f64) -> Self {
        Self { coeffs: vec![a0] }
    }

    /// Creates a polynomial from coefficients in ascending exponent order.
    ///
    /// The coefficients are stored as given; an empty vector yields the
    /// zero polynomial.
    #[must_use]
    pub fn from_coeffs(mut coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            coeffs.push(0.0);
        }
        Self { coeffs }
    }

    /// Returns the number of stored coefficient slots, padding included.
    #[must_use]
    pub fn stored_len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns the stored coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the highest exponent with a non-zero coefficient, or 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|&c| c != 0.0).unwrap_or(0)
    }

    /// Returns true if every stored coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// Adds `amount` to the coefficient of `x^exponent`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NegativeExponent`] if `exponent < 0` and
    /// [`PolyError::ExponentOutOfRange`] if the slot cannot be allocated.
    /// The polynomial is left untouched on error.
    pub fn add_to_coef(&mut self, amount: f64, exponent: i64) -> Result<()> {
        *self.slot_mut(exponent)? += amount;
        Ok(())
    }

    /// Overwrites the coefficient of `x^exponent` with `coefficient`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Polynomial::add_to_coef`].
    pub fn assign_coef(&mut self, coefficient: f64, exponent: i64) -> Result<()> {
        *self.slot_mut(exponent)? = coefficient;
        Ok(())
    }

    /// Returns the coefficient of `x^exponent`.
    ///
    /// Exponents past the stored slots read as 0 and never grow storage.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NegativeExponent`] if `exponent < 0`.
    pub fn coefficient(&self, exponent: i64) -> Result<f64> {
        if exponent < 0 {
            tracing::debug!(exponent, "rejected negative exponent on read");
            return Err(PolyError::NegativeExponent { exponent });
        }
        Ok(usize::try_from(exponent).map_or(0.0, |i| self.coeff_at(i)))
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    ///
    /// Every stored slot is visited from the highest index down, so the
    /// result is reproducible for a given coefficient vector.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .rev()
            .fold(0.0, |result, &c| c + x * result)
    }

    /// Adds two polynomials.
    ///
    /// The result has `max(len(self), len(other))` slots.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len)
            .map(|i| self.coeff_at(i) + other.coeff_at(i))
            .collect();

        Self { coeffs }
    }

    /// Multiplies two polynomials by schoolbook convolution: O(n·m).
    ///
    /// The result has `len(self) + len(other)` slots.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut product = vec![0.0; self.coeffs.len() + other.coeffs.len()];

        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                product[i + j] += a * b;
            }
        }

        Self { coeffs: product }
    }

    fn coeff_at(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// Returns the slot for `exponent`, growing storage if needed.
    fn slot_mut(&mut self, exponent: i64) -> Result<&mut f64> {
        let index = usize::try_from(exponent).map_err(|_| {
            tracing::debug!(exponent, "rejected exponent on write");
            if exponent < 0 {
                PolyError::NegativeExponent { exponent }
            } else {
                PolyError::ExponentOutOfRange { exponent }
            }
        })?;

        if index >= self.coeffs.len() {
            let new_len = index
                .checked_add(GROWTH_SLACK)
                .filter(|&len| len <= MAX_LEN)
                .ok_or(PolyError::ExponentOutOfRange { exponent })?;

            tracing::trace!(
                old_len = self.coeffs.len(),
                new_len,
                exponent,
                "growing coefficient storage"
            );
            self.coeffs
                .try_reserve_exact(new_len - self.coeffs.len())
                .map_err(|_| {
                    tracing::debug!(exponent, new_len, "coefficient storage allocation failed");
                    PolyError::ExponentOutOfRange { exponent }
                })?;
            self.coeffs.resize(new_len, 0.0);
        }

        Ok(&mut self.coeffs[index])
    }
}

impl fmt::Display for Polynomial {
    /// Renders terms from the highest exponent down, joined by `" + "`.
    ///
    /// Coefficients use the `{:?}` rendering of `f64` (`3.0`, `-2.5`).
    /// Zero terms are skipped and a coefficient of 1 is hidden only on
    /// exponents above 1. Signs are not folded into the separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let highest = self.degree();
        if highest == 0 {
            return write!(f, "{:?}", self.coeffs[0]);
        }

        let mut first = true;
        for i in (0..=highest).rev() {
            let c = self.coeffs[i];
            if c == 0.0 {
                continue;
            }

            if !first {
                f.write_str(" + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{c:?}")?,
                1 => write!(f, "{c:?}x")?,
                _ if c == 1.0 => write!(f, "x^{i}")?,
                _ => write!(f, "{c:?}x^{i}")?,
            }
        }

        Ok(())
    }
}
