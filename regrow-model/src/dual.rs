//! Forward-mode automatic differentiation with dual numbers.
//!
//! A [`Dual<N>`] carries a value together with its partial derivatives with
//! respect to `N` independent variables. Arithmetic propagates derivatives
//! by the usual product, quotient, and chain rules, so evaluating a closed
//! form once with seeded variables yields its exact gradient.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// The scalar interface the production function is written against.
///
/// Implemented for `f64` (plain evaluation) and [`Dual<N>`] (evaluation
/// with derivatives), so the closed form is defined exactly once.
pub trait Scalar:
    Copy + Add<Output = Self> + Mul<Output = Self> + Mul<f64, Output = Self>
{
    /// Raises `self` to a constant real power.
    fn powf(self, exp: f64) -> Self;
}

impl Scalar for f64 {
    fn powf(self, exp: f64) -> Self {
        f64::powf(self, exp)
    }
}

/// A dual number: a value and its `N` partial derivatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<const N: usize> {
    pub value: f64,
    pub deriv: [f64; N],
}

impl<const N: usize> Dual<N> {
    /// A constant, with zero derivative in every direction.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self {
            value,
            deriv: [0.0; N],
        }
    }

    /// The `index`-th independent variable, with unit derivative in its
    /// own direction.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn variable(value: f64, index: usize) -> Self {
        let mut deriv = [0.0; N];
        deriv[index] = 1.0;
        Self { value, deriv }
    }
}

impl<const N: usize> Add for Dual<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut deriv = self.deriv;
        for (d, r) in deriv.iter_mut().zip(&rhs.deriv) {
            *d += r;
        }
        Self {
            value: self.value + rhs.value,
            deriv,
        }
    }
}

impl<const N: usize> Sub for Dual<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut deriv = self.deriv;
        for (d, r) in deriv.iter_mut().zip(&rhs.deriv) {
            *d -= r;
        }
        Self {
            value: self.value - rhs.value,
            deriv,
        }
    }
}

impl<const N: usize> Mul for Dual<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut deriv = [0.0; N];
        for i in 0..N {
            deriv[i] = self.deriv[i] * rhs.value + rhs.deriv[i] * self.value;
        }
        Self {
            value: self.value * rhs.value,
            deriv,
        }
    }
}

impl<const N: usize> Div for Dual<N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let mut deriv = [0.0; N];
        for i in 0..N {
            deriv[i] =
                (self.deriv[i] * rhs.value - self.value * rhs.deriv[i]) / (rhs.value * rhs.value);
        }
        Self {
            value: self.value / rhs.value,
            deriv,
        }
    }
}

impl<const N: usize> Neg for Dual<N> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut deriv = self.deriv;
        for d in &mut deriv {
            *d = -*d;
        }
        Self {
            value: -self.value,
            deriv,
        }
    }
}

impl<const N: usize> Add<f64> for Dual<N> {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self {
            value: self.value + rhs,
            ..self
        }
    }
}

impl<const N: usize> Sub<f64> for Dual<N> {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self {
            value: self.value - rhs,
            ..self
        }
    }
}

impl<const N: usize> Mul<f64> for Dual<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        let mut deriv = self.deriv;
        for d in &mut deriv {
            *d *= rhs;
        }
        Self {
            value: self.value * rhs,
            deriv,
        }
    }
}

impl<const N: usize> Div<f64> for Dual<N> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        let mut deriv = self.deriv;
        for d in &mut deriv {
            *d /= rhs;
        }
        Self {
            value: self.value / rhs,
            deriv,
        }
    }
}

impl<const N: usize> Scalar for Dual<N> {
    // d/dx x^p = p * x^(p-1), chained through the inner derivative.
    fn powf(self, exp: f64) -> Self {
        let scale = exp * self.value.powf(exp - 1.0);
        let mut deriv = self.deriv;
        for d in &mut deriv {
            *d *= scale;
        }
        Self {
            value: self.value.powf(exp),
            deriv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn variables_seed_unit_derivatives() {
        let x = Dual::<2>::variable(3.0, 0);
        let y = Dual::<2>::variable(4.0, 1);

        assert_relative_eq!(x.value, 3.0);
        assert_eq!(x.deriv, [1.0, 0.0]);
        assert_eq!(y.deriv, [0.0, 1.0]);
        assert_eq!(Dual::<2>::constant(7.0).deriv, [0.0, 0.0]);
    }

    #[test]
    fn product_rule() {
        let x = Dual::<2>::variable(2.0, 0);
        let y = Dual::<2>::variable(3.0, 1);

        let p = x * y;

        assert_relative_eq!(p.value, 6.0);
        assert_relative_eq!(p.deriv[0], 3.0);
        assert_relative_eq!(p.deriv[1], 2.0);
    }

    #[test]
    fn quotient_rule() {
        let x = Dual::<2>::variable(1.0, 0);
        let y = Dual::<2>::variable(2.0, 1);

        let q = x / y;

        assert_relative_eq!(q.value, 0.5);
        assert_relative_eq!(q.deriv[0], 0.5);
        assert_relative_eq!(q.deriv[1], -0.25);
    }

    #[test]
    fn power_rule() {
        let x = Dual::<1>::variable(1.7, 0);

        let p = x.powf(2.5);

        assert_relative_eq!(p.value, 1.7_f64.powf(2.5));
        assert_relative_eq!(p.deriv[0], 2.5 * 1.7_f64.powf(1.5));
    }

    #[test]
    fn scalar_ops_leave_derivatives_consistent() {
        let x = Dual::<1>::variable(5.0, 0);

        assert_relative_eq!((x * 3.0).deriv[0], 3.0);
        assert_relative_eq!((x / 2.0).deriv[0], 0.5);
        assert_relative_eq!((x + 1.0).deriv[0], 1.0);
        assert_relative_eq!((x - 1.0).deriv[0], 1.0);
        assert_relative_eq!((-x).deriv[0], -1.0);
    }

    #[test]
    fn composite_expression_matches_hand_derivative() {
        // f(x) = (x^2 + x) / x has f'(x) = 1 for x > 0.
        let x = Dual::<1>::variable(4.0, 0);

        let f = (x * x + x) / x;

        assert_relative_eq!(f.value, 5.0);
        assert_relative_eq!(f.deriv[0], 1.0, epsilon = 1e-14);
    }
}
