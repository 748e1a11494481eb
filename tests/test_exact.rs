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

#![cfg(feature = "exact")]

use contour_slicer::geometry::{Point2, Point3};
use contour_slicer::mesh::Part;
use contour_slicer::numeric::{ExactRational, Scalar};

fn q(num: i32, den: i32) -> ExactRational {
    ExactRational::from_num_den(num, den)
}

#[test]
fn test_exact_tetrahedron_section() {
    let positions: Vec<Point3<ExactRational>> = [
        [0_i32, 0, 0],
        [1, 0, 0],
        [0, 1, 0],
        [0, 0, 1],
    ]
    .into_iter()
    .map(|c| Point3::new(c.map(ExactRational::from)))
    .collect();
    let part = Part::build(&positions, &[[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]]).unwrap();

    let poly = part.slice_at(q(1, 3));
    assert_eq!(
        poly.points,
        vec![
            Point2::new([q(0, 1), q(0, 1)]),
            Point2::new([q(2, 3), q(0, 1)]),
            Point2::new([q(0, 1), q(2, 3)]),
        ]
    );
    assert_eq!(poly.signed_area(), q(2, 9));
}

#[test]
fn test_exact_cube_through_rational_height() {
    let part = Part::cuboid(
        &Point3::new([q(0, 1), q(0, 1), q(0, 1)]),
        &Point3::new([q(1, 1), q(1, 1), q(3, 1)]),
    )
    .unwrap();
    let poly = part.slice_at(q(1, 7));
    assert_eq!(poly.len(), 8);
    assert_eq!(poly.signed_area(), q(1, 1));
    assert!(poly.points.iter().all(|p| p[0] >= q(0, 1) && p[0] <= q(1, 1)));
}
