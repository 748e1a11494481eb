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

use num_traits::{One, ToPrimitive, Zero};

use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Default on-plane tolerance, in the solid's coordinate units.
pub const EPS: f64 = 1e-6;

/// Coordinate type of a [`Part`](crate::mesh::Part).
///
/// Owned arithmetic is required here; the by-reference operators every
/// geometric routine needs (`&a - &b`) are spelled out at each impl site,
/// the same way `impl_part!` does it.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
    + ToPrimitive
    + From<i32>
    + From<f64>
    + Send
    + Sync
    + 'static
{
    fn from_num_den(num: i32, den: i32) -> Self;

    fn tolerance() -> Self {
        Self::from(EPS)
    }

    fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }

    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl Scalar for f64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_sign_and_abs() {
        assert!(Scalar::is_negative(&-2.5_f64));
        assert!(!Scalar::is_positive(&0.0_f64));
        assert_eq!(Scalar::abs(&-2.5_f64), 2.5);
        assert_eq!(<f64 as Scalar>::from_num_den(1, 4), 0.25);
        assert_eq!(<f64 as Scalar>::tolerance(), EPS);
    }
}
