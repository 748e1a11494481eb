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

use approx::assert_abs_diff_eq;

use contour_slicer::geometry::{Aabb, Matrix4, Point3, SlicePlane, Side};

fn assert_point_eq(p: &Point3<f64>, expected: [f64; 3]) {
    for (a, b) in p.to_f64().iter().zip(expected) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }
}

#[test]
fn test_rotation_about_zero_axis_is_identity() {
    assert_eq!(
        Matrix4::<f64>::rotation(45.0, [0.0, 0.0, 0.0]),
        Matrix4::<f64>::identity()
    );
}

#[test]
fn test_chained_transform_order() {
    // Appended last, applied first: rotate (1,0,0) to (0,1,0), then shift.
    let mut m = Matrix4::<f64>::identity();
    m.translate(10.0, 0.0, 0.0);
    m.rotate(90.0, [0.0, 0.0, 2.0]);
    assert_point_eq(&m.map_point(&Point3::from_vals([1.0, 0.0, 0.0])), [10.0, 1.0, 0.0]);
}

#[test]
fn test_plane_and_bounds_classification() {
    let pts = [
        Point3::from_vals([0.0, 0.0, -1.0]),
        Point3::from_vals([2.0, 1.0, 1.0]),
    ];
    let aabb = Aabb::from_points(&pts).unwrap();
    assert!(aabb.strictly_contains_on_axis(2, &0.0, &1e-6));
    assert!(!aabb.strictly_contains_on_axis(2, &(1.0 - 1e-9), &1e-6));

    let plane = SlicePlane::new(1.0, 1e-6);
    assert_eq!(plane.side(&pts[1]), Side::On);
    assert_eq!(plane.side(&pts[0]), Side::Below);
}
