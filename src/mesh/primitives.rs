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

use std::f64::consts::TAU;

use crate::{error::BuildResult, geometry::point::Point3, impl_part};

/// Corner `i` of a box takes the `max` coordinate on axis `k` when bit `k` of `i` is set.
const CUBOID_TRIANGLES: [[usize; 3]; 12] = [
    [0, 2, 3],
    [0, 3, 1], // z-
    [4, 5, 7],
    [4, 7, 6], // z+
    [0, 1, 5],
    [0, 5, 4], // y-
    [2, 6, 7],
    [2, 7, 3], // y+
    [0, 4, 6],
    [0, 6, 2], // x-
    [1, 3, 7],
    [1, 7, 5], // x+
];

impl_part! {
    /// Axis-aligned box spanning `min..max`, wound outward.
    pub fn cuboid(min: &Point3<T>, max: &Point3<T>) -> BuildResult<Self> {
        let pick = |i: usize, axis: usize| {
            if i & (1 << axis) != 0 { max[axis].clone() } else { min[axis].clone() }
        };
        let positions: Vec<Point3<T>> = (0..8)
            .map(|i| Point3::new([pick(i, 0), pick(i, 1), pick(i, 2)]))
            .collect();
        Self::build(&positions, &CUBOID_TRIANGLES)
    }

    /// Regular `sides`-gon prism standing on `z = 0`, circumradius `radius`,
    /// height `length`. Fewer than three sides are raised to three.
    pub fn prism(radius: f64, length: f64, sides: usize) -> BuildResult<Self> {
        let n = sides.max(3);
        let mut positions = Vec::with_capacity(2 * n);
        for z in [0.0, length] {
            for i in 0..n {
                let angle = TAU * i as f64 / n as f64;
                positions.push(Point3::<T>::from_vals([
                    radius * angle.cos(),
                    radius * angle.sin(),
                    z,
                ]));
            }
        }

        let mut triangles = Vec::with_capacity(4 * n - 4);
        for i in 1..n - 1 {
            triangles.push([0, i + 1, i]);
            triangles.push([n, n + i, n + i + 1]);
        }
        for i in 0..n {
            let j = (i + 1) % n;
            triangles.push([i, j, n + j]);
            triangles.push([i, n + j, n + i]);
        }
        Self::build(&positions, &triangles)
    }
}

#[cfg(test)]
mod tests {
    use crate::{geometry::point::Point, mesh::basic_types::Part};

    #[test]
    fn cuboid_is_closed() {
        let part = Part::<f64>::cuboid(
            &Point::from_vals([0.0, 0.0, 0.0]),
            &Point::from_vals([2.0, 1.0, 3.0]),
        )
        .unwrap();
        assert_eq!(part.vertex_count(), 8);
        assert_eq!(part.face_count(), 12);
        assert_eq!(part.physical_edge_count(), 18);
        assert!(part.is_closed());
        assert_eq!(part.z_extent(), Some((0.0, 3.0)));
    }

    #[test]
    fn prism_is_closed() {
        let part = Part::<f64>::prism(1.0, 2.0, 6).unwrap();
        assert_eq!(part.vertex_count(), 12);
        assert_eq!(part.face_count(), 20);
        assert!(part.is_closed());
        // Euler: V - E + F = 2.
        assert_eq!(12 + 20, part.physical_edge_count() + 2);
    }
}
