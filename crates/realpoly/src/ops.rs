//! Standard operator and identity traits for polynomials.
//!
//! The operators delegate to [`Polynomial::add`] and
//! [`Polynomial::multiply`], so they never mutate their operands.

use std::ops::{Add, Mul};

use num_traits::{One, Zero};

use crate::polynomial::Polynomial;

impl Default for Polynomial {
    fn default() -> Self {
        Self::new()
    }
}

impl From<f64> for Polynomial {
    fn from(a0: f64) -> Self {
        Self::constant(a0)
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coeffs: Vec<f64>) -> Self {
        Self::from_coeffs(coeffs)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        Polynomial::add(&self, &rhs)
    }
}

impl<'a> Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &'a Polynomial) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        self.multiply(&rhs)
    }
}

impl<'a> Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &'a Polynomial) -> Polynomial {
        self.multiply(rhs)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self::constant(1.0)
    }

    // Padding slots must not make `[1.0, 0.0]` compare unequal to one.
    fn is_one(&self) -> bool
    where
        Self: PartialEq,
    {
        self.degree() == 0 && self.coeffs()[0] == 1.0
    }
}
