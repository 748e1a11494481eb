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

use crate::{geometry::point::Point, numeric::scalar::Scalar};

/// An axis‐aligned bounding box in N dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Aabb<T: Scalar, const N: usize> {
    pub min: Point<T, N>,
    pub max: Point<T, N>,
}

impl<T: Scalar, const N: usize> Aabb<T, N> {
    pub fn new(min: Point<T, N>, max: Point<T, N>) -> Self {
        Aabb { min, max }
    }

    /// Smallest box containing every point; `None` for an empty input.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<T, N>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Aabb::new(first.clone(), first.clone());
        for p in iter {
            aabb.expand(p);
        }
        Some(aabb)
    }

    pub fn expand(&mut self, p: &Point<T, N>) {
        for i in 0..N {
            if p[i] < self.min[i] {
                self.min[i] = p[i].clone();
            }
            if p[i] > self.max[i] {
                self.max[i] = p[i].clone();
            }
        }
    }

    /// Length along axis `i`.
    pub fn extent(&self, i: usize) -> T
    where
        for<'a> &'a T: Sub<&'a T, Output = T>,
    {
        &self.max[i] - &self.min[i]
    }

    /// Whether `value` lies strictly between the faces of axis `i`, at least
    /// `tolerance` away from both.
    pub fn strictly_contains_on_axis(&self, i: usize, value: &T, tolerance: &T) -> bool
    where
        for<'a> &'a T: Sub<&'a T, Output = T>,
    {
        let above_min = value - &self.min[i];
        let below_max = &self.max[i] - value;
        above_min >= *tolerance && below_max >= *tolerance
    }
}
