// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_traits::{One, ToPrimitive, Zero};
use rug::Rational;

use crate::numeric::scalar::Scalar;

/// Arbitrary-precision rational coordinate.
///
/// Slicing a part built on this type is exact: crossings land on the true
/// rational interpolants and the orientation probe never rounds.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd)]
pub struct ExactRational(pub Rational);

impl Scalar for ExactRational {
    fn from_num_den(num: i32, den: i32) -> Self {
        ExactRational(Rational::from((num, den)))
    }
}

impl<'a, 'b> Add<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn add(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result += &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Sub<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn sub(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Mul<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn mul(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Div<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn div(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result /= &rhs.0;
        ExactRational(result)
    }
}

impl Add for ExactRational {
    type Output = ExactRational;
    fn add(self, rhs: ExactRational) -> ExactRational {
        ExactRational(self.0 + rhs.0)
    }
}

impl Sub for ExactRational {
    type Output = ExactRational;
    fn sub(self, rhs: ExactRational) -> ExactRational {
        ExactRational(self.0 - rhs.0)
    }
}

impl Mul for ExactRational {
    type Output = ExactRational;
    fn mul(self, rhs: ExactRational) -> ExactRational {
        ExactRational(self.0 * rhs.0)
    }
}

impl Div for ExactRational {
    type Output = ExactRational;
    fn div(self, rhs: ExactRational) -> ExactRational {
        ExactRational(self.0 / rhs.0)
    }
}

impl Neg for ExactRational {
    type Output = ExactRational;
    fn neg(self) -> ExactRational {
        ExactRational(-self.0)
    }
}

impl<'a> Neg for &'a ExactRational {
    type Output = ExactRational;
    fn neg(self) -> ExactRational {
        ExactRational(-self.0.clone())
    }
}

impl Zero for ExactRational {
    fn zero() -> Self {
        ExactRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for ExactRational {
    fn one() -> Self {
        ExactRational(Rational::from(1))
    }
}

impl ToPrimitive for ExactRational {
    fn to_i64(&self) -> Option<i64> {
        self.0.clone().trunc().numer().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.0.clone().trunc().numer().to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl From<i32> for ExactRational {
    fn from(value: i32) -> Self {
        ExactRational(Rational::from(value))
    }
}

impl From<f64> for ExactRational {
    // Non-finite input has no rational value; it collapses to zero.
    fn from(value: f64) -> Self {
        Rational::from_f64(value)
            .map(ExactRational)
            .unwrap_or_else(ExactRational::zero)
    }
}

impl From<Rational> for ExactRational {
    fn from(value: Rational) -> Self {
        ExactRational(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_ref_arithmetic_is_exact() {
        let third = ExactRational::from_num_den(1, 3);
        let sum = &(&third + &third) + &third;
        assert_eq!(sum, ExactRational::one());
        assert!((&sum - &ExactRational::one()).is_zero());
    }

    #[test]
    fn conversions() {
        assert_eq!(ExactRational::from(0.5).0, Rational::from((1, 2)));
        assert_eq!(ExactRational::from_num_den(7, 2).to_i64(), Some(3));
        assert_eq!(ExactRational::from(f64::NAN), ExactRational::zero());
    }
}
