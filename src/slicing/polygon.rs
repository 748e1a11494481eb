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

use std::ops::{Add, Mul, Sub};

use crate::{error::WalkError, geometry::point::Point2, numeric::scalar::Scalar};

/// A closed 2D loop stored open: the last point connects back to the first
/// and is not repeated.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<T: Scalar> {
    pub points: Vec<Point2<T>>,
}

impl<T: Scalar> Default for Polygon<T> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

impl<T: Scalar> Polygon<T> {
    pub fn new(points: Vec<Point2<T>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point2<T>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2<T>> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Exchanges x and y of every point. This mirrors the loop, so the
    /// winding flips.
    pub fn swap_axes(&mut self) {
        for p in &mut self.points {
            p.coords.swap(0, 1);
        }
    }

    pub fn to_f64_points(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| p.to_f64()).collect()
    }
}

impl<T: Scalar> Polygon<T>
where
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    /// Shoelace area; positive for counter-clockwise loops.
    pub fn signed_area(&self) -> T {
        let n = self.points.len();
        if n < 3 {
            return T::zero();
        }
        let mut twice = T::zero();
        for i in 0..n {
            let p = &self.points[i];
            let q = &self.points[(i + 1) % n];
            let cross = &(p.x() * q.y()) - &(q.x() * p.y());
            twice = &twice + &cross;
        }
        twice / T::from(2_i32)
    }

    pub fn translated(&self, dx: &T, dy: &T) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| Point2::new([p.x() + dx, p.y() + dy]))
                .collect(),
        }
    }
}

/// Everything one slice call found.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceReport<T: Scalar> {
    pub loops: Vec<Polygon<T>>,
    /// Why the last walk stopped early, if it did. The loop it was building
    /// is still in `loops`.
    pub failure: Option<WalkError>,
    pub faces_visited: usize,
}

impl<T: Scalar> Default for SliceReport<T> {
    fn default() -> Self {
        Self {
            loops: Vec::new(),
            failure: None,
            faces_visited: 0,
        }
    }
}

impl<T: Scalar> SliceReport<T> {
    pub fn is_clean(&self) -> bool {
        self.failure.is_none()
    }

    /// The first loop, or an empty polygon.
    pub fn into_first(self) -> Polygon<T> {
        self.loops.into_iter().next().unwrap_or_default()
    }
}
