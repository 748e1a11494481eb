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
    array,
    ops::{Add, Div, Index, IndexMut, Mul, Sub},
};

use crate::{
    geometry::point::{Point, Point3},
    numeric::scalar::Scalar,
};

/// Generic row-major matrix R x C
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Scalar, const R: usize, const C: usize>(pub [[T; C]; R]);

/// Homogeneous 3D transform acting on column vectors `[x, y, z, 1]`.
pub type Matrix4<T> = Matrix<T, 4, 4>;

// ---------- Basics ----------
impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    #[inline]
    pub fn identity() -> Self {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| if i == j { T::one() } else { T::zero() })
        }))
    }
}

// ---------- Indexing ----------
impl<T: Scalar, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}
impl<T: Scalar, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

// ---------- Product ----------
impl<'a, 'b, T, const R: usize, const K: usize, const C: usize> Mul<&'b Matrix<T, K, C>>
    for &'a Matrix<T, R, K>
where
    T: Scalar,
    for<'x> &'x T: Add<&'x T, Output = T> + Mul<&'x T, Output = T>,
{
    type Output = Matrix<T, R, C>;
    #[inline]
    fn mul(self, rhs: &'b Matrix<T, K, C>) -> Self::Output {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| {
                let mut acc = T::zero();
                for k in 0..K {
                    acc = &acc + &(&self[i][k] * &rhs[k][j]);
                }
                acc
            })
        }))
    }
}

// ---------- Affine helpers ----------
//
// `translate`, `rotate` and `scale` post-multiply, so the operation appended
// last is the first one applied to a point.
impl<T: Scalar> Matrix<T, 4, 4>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    pub fn translation(x: T, y: T, z: T) -> Self {
        let mut m = Self::identity();
        m[0][3] = x;
        m[1][3] = y;
        m[2][3] = z;
        m
    }

    pub fn scaling(x: T, y: T, z: T) -> Self {
        let mut m = Self::identity();
        m[0][0] = x;
        m[1][1] = y;
        m[2][2] = z;
        m
    }

    /// Right-handed rotation of `angle_degrees` about `axis`.
    ///
    /// Trigonometry is evaluated in f64 and converted into `T`. A zero axis
    /// yields the identity.
    pub fn rotation(angle_degrees: f64, axis: [f64; 3]) -> Self {
        let len = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
        if len == 0.0 || !len.is_finite() {
            return Self::identity();
        }
        let [x, y, z] = axis.map(|a| a / len);
        let (s, c) = angle_degrees.to_radians().sin_cos();
        let t = 1.0 - c;

        let rows = [
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y, 0.0],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x, 0.0],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        Matrix(rows.map(|row| row.map(|v| T::from(v))))
    }

    pub fn translate(&mut self, x: T, y: T, z: T) {
        *self = &*self * &Self::translation(x, y, z);
    }

    pub fn scale(&mut self, x: T, y: T, z: T) {
        *self = &*self * &Self::scaling(x, y, z);
    }

    pub fn rotate(&mut self, angle_degrees: f64, axis: [f64; 3]) {
        *self = &*self * &Self::rotation(angle_degrees, axis);
    }

    /// Maps a point through the transform, dividing by `w` when the bottom
    /// row is projective.
    pub fn map_point(&self, p: &Point3<T>) -> Point3<T> {
        let row = |r: usize| -> T {
            let m = &self.0[r];
            let xy = &(&m[0] * &p[0]) + &(&m[1] * &p[1]);
            let xyz = &xy + &(&m[2] * &p[2]);
            &xyz + &m[3]
        };

        let mapped = Point::new([row(0), row(1), row(2)]);
        let w = row(3);
        if w == T::one() || w.is_zero() {
            return mapped;
        }
        Point::new(mapped.coords.map(|c| &c / &w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_multiplied_operations_apply_last_first() {
        // translate then scale: the scale hits the point first.
        let mut m = Matrix4::<f64>::identity();
        m.translate(1.0, 0.0, 0.0);
        m.scale(2.0, 2.0, 2.0);
        let p = m.map_point(&Point::from_vals([1.0, 1.0, 1.0]));
        assert_eq!(p, Point::from_vals([3.0, 2.0, 2.0]));
    }

    #[test]
    fn quarter_turn_about_z() {
        let m = Matrix4::<f64>::rotation(90.0, [0.0, 0.0, 1.0]);
        let p = m.map_point(&Point::from_vals([1.0, 0.0, 5.0]));
        assert!(p[0].abs() < 1e-12);
        assert!((p[1] - 1.0).abs() < 1e-12);
        assert!((p[2] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn projective_row_divides() {
        let mut m = Matrix4::<f64>::identity();
        m[3][3] = 2.0;
        let p = m.map_point(&Point::from_vals([2.0, 4.0, 6.0]));
        assert_eq!(p, Point::from_vals([1.0, 2.0, 3.0]));
    }
}
