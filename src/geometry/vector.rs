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

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::{geometry::point::Point, numeric::scalar::Scalar};

pub trait VectorOps<T, const N: usize>: Sized {
    fn dot(&self, other: &Self) -> T;
}

pub trait Cross3<T> {
    fn cross(&self, other: &Self) -> Self;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize>(pub Point<T, N>);

pub type Vector3<T> = Vector<T, 3>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Vector(Point::new(coords))
    }

    pub fn from_vals<V: Into<T>>(vals: [V; N]) -> Self {
        Vector(Point::from_vals(vals))
    }

    pub fn zero() -> Self {
        Vector(Point::default())
    }
}

impl<T: Scalar, const N: usize> VectorOps<T, N> for Vector<T, N>
where
    for<'a> &'a T: Add<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    fn dot(&self, other: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            acc = &acc + &(&self[i] * &other[i]);
        }
        acc
    }
}

impl<T: Scalar> Cross3<T> for Vector<T, 3>
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    fn cross(&self, other: &Self) -> Self {
        Vector::new([
            &(&self[1] * &other[2]) - &(&self[2] * &other[1]),
            &(&self[2] * &other[0]) - &(&self[0] * &other[2]),
            &(&self[0] * &other[1]) - &(&self[1] * &other[0]),
        ])
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0.coords[i]
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for Vector<T, N> {
    fn from(p: Point<T, N>) -> Self {
        Vector(p)
    }
}
