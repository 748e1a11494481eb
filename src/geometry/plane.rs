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

use std::ops::Sub;

use crate::{geometry::point::Point3, numeric::scalar::Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Above,
    On,
    Below,
}

/// The horizontal plane `z = height`, with the tolerance that decides when a
/// point counts as lying on it.
#[derive(Clone, Debug)]
pub struct SlicePlane<T: Scalar> {
    pub height: T,
    pub tolerance: T,
}

impl<T: Scalar> SlicePlane<T>
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    pub fn new(height: T, tolerance: T) -> Self {
        SlicePlane { height, tolerance }
    }

    /// `p.z - height`.
    pub fn signed_distance(&self, p: &Point3<T>) -> T {
        p.z() - &self.height
    }

    pub fn is_on_distance(&self, distance: &T) -> bool {
        distance.abs() < self.tolerance
    }

    pub fn side(&self, p: &Point3<T>) -> Side {
        let d = self.signed_distance(p);
        if self.is_on_distance(&d) {
            Side::On
        } else if d.is_positive() {
            Side::Above
        } else {
            Side::Below
        }
    }

    pub fn is_on(&self, p: &Point3<T>) -> bool {
        self.side(p) == Side::On
    }

    pub fn is_above(&self, p: &Point3<T>) -> bool {
        self.side(p) == Side::Above
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;

    #[test]
    fn classification_respects_tolerance() {
        let plane = SlicePlane::new(1.0_f64, 1e-6);
        assert_eq!(plane.side(&Point::from_vals([0.0, 0.0, 1.0 + 1e-9])), Side::On);
        assert_eq!(plane.side(&Point::from_vals([0.0, 0.0, 1.1])), Side::Above);
        assert_eq!(plane.side(&Point::from_vals([0.0, 0.0, 0.9])), Side::Below);
        assert!(plane.is_above(&Point::from_vals([5.0, 5.0, 2.0])));
    }
}
