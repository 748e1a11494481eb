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
    array::{self, from_fn},
    ops::{Add, Div, Index, IndexMut, Mul, Sub},
};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

#[derive(Clone, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Point {
            coords: array::from_fn(|_| T::zero()),
        }
    }
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Point { coords }
    }

    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Point {
            coords: vals.map(|v| v.into()),
        }
    }

    /// Lossy view for callers that hand coordinates to f64-only libraries.
    pub fn to_f64(&self) -> [f64; N] {
        from_fn(|i| self.coords[i].to_f64().unwrap_or(f64::NAN))
    }
}

impl<T: Scalar, const N: usize> Point<T, N>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    pub fn vector_to(&self, other: &Self) -> Vector<T, N> {
        Vector(Point {
            coords: from_fn(|i| &other.coords[i] - &self.coords[i]),
        })
    }

    /// `self + t * (other - self)`.
    pub fn lerp(&self, other: &Self, t: &T) -> Self {
        Point {
            coords: from_fn(|i| {
                let delta = &other.coords[i] - &self.coords[i];
                &self.coords[i] + &(&delta * t)
            }),
        }
    }

    pub fn distance_squared_to(&self, other: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            let d = &self.coords[i] - &other.coords[i];
            acc = &acc + &(&d * &d);
        }
        acc
    }
}

impl<T: Scalar> Point<T, 2> {
    pub fn x(&self) -> &T {
        &self.coords[0]
    }

    pub fn y(&self) -> &T {
        &self.coords[1]
    }
}

impl<T: Scalar> Point<T, 3> {
    pub fn x(&self) -> &T {
        &self.coords[0]
    }

    pub fn y(&self) -> &T {
        &self.coords[1]
    }

    pub fn z(&self) -> &T {
        &self.coords[2]
    }

    /// Drops the z coordinate.
    pub fn xy(&self) -> Point<T, 2> {
        Point {
            coords: [self.coords[0].clone(), self.coords[1].clone()],
        }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_and_vector_to() {
        let a = Point3::<f64>::from_vals([0.0, 0.0, 0.0]);
        let b = Point3::<f64>::from_vals([2.0, 4.0, -2.0]);
        assert_eq!(a.lerp(&b, &0.5), Point3::from_vals([1.0, 2.0, -1.0]));
        assert_eq!(a.vector_to(&b).0, b);
        assert_eq!(a.distance_squared_to(&b), 24.0);
        assert_eq!(b.xy(), Point2::from_vals([2.0, 4.0]));
    }
}
