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

use std::ops::{Add, Div, Mul, Sub};

use smallvec::SmallVec;

use crate::{
    geometry::{plane::SlicePlane, point::Point3},
    mesh::basic_types::Part,
    numeric::scalar::Scalar,
    slicing::state::Marks,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossingKind {
    /// The plane passes through this vertex.
    OnVertex(usize),
    /// The plane cuts the interior of the edge.
    OnEdge,
}

/// Where the slicing plane meets one directed edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Crossing<T: Scalar> {
    pub kind: CrossingKind,
    pub edge: usize,
    pub point: Point3<T>,
}

impl<T: Scalar> Crossing<T> {
    pub fn vertex(&self) -> Option<usize> {
        match self.kind {
            CrossingKind::OnVertex(v) => Some(v),
            CrossingKind::OnEdge => None,
        }
    }

    pub fn is_on_vertex(&self) -> bool {
        self.vertex().is_some()
    }
}

pub type Crossings<T> = SmallVec<[Crossing<T>; 3]>;

fn on_vertex<T: Scalar>(part: &Part<T>, edge: usize, v: usize) -> Crossing<T> {
    Crossing {
        kind: CrossingKind::OnVertex(v),
        edge,
        point: part.position(v).clone(),
    }
}

/// Intersects edge `edge` with `plane`.
///
/// A vertex is reported at most once per slice: the first edge to meet an
/// on-plane vertex claims it in `used`, and later edges through a claimed
/// vertex only report their other endpoint, and only if that one is on the
/// plane too.
pub(crate) fn intersect_edge<T: Scalar>(
    part: &Part<T>,
    edge: usize,
    plane: &SlicePlane<T>,
    used: &mut Marks,
) -> Option<Crossing<T>>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let [a, b] = part.edge(edge).vertices;
    let pa = part.position(a);
    let pb = part.position(b);

    let d0 = plane.signed_distance(pa);
    let d1 = &plane.height - pb.z();
    let a_on = plane.is_on_distance(&d0);
    let b_on = plane.is_on_distance(&d1);

    if used.is_set(a) {
        return (b_on && used.set(b)).then(|| on_vertex(part, edge, b));
    }
    if used.is_set(b) {
        return (a_on && used.set(a)).then(|| on_vertex(part, edge, a));
    }
    if a_on {
        used.set(a);
        return Some(on_vertex(part, edge, a));
    }
    if b_on {
        used.set(b);
        return Some(on_vertex(part, edge, b));
    }

    if !(&d0 * &d1).is_positive() {
        return None;
    }
    let t = &d1 / &(&d0 + &d1);
    let mut point = pb.lerp(pa, &t);
    point[2] = plane.height.clone();
    Some(Crossing {
        kind: CrossingKind::OnEdge,
        edge,
        point,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;

    fn strut() -> Part<f64> {
        Part::<f64>::cuboid(
            &Point::from_vals([0.0, 0.0, 0.0]),
            &Point::from_vals([1.0, 1.0, 2.0]),
        )
        .unwrap()
    }

    #[test]
    fn interior_crossing_is_interpolated() {
        let part = strut();
        let mut used = Marks::new(part.vertex_count());
        let plane = SlicePlane::<f64>::new(0.5, 1e-6);
        let e = part.find_edge(1, 5).unwrap();
        let c = intersect_edge::<f64>(&part, e, &plane, &mut used).unwrap();
        assert_eq!(c.kind, CrossingKind::OnEdge);
        assert_eq!(c.point, Point::from_vals([1.0, 0.0, 0.5]));
        assert_eq!(used.count(), 0);
    }

    #[test]
    fn edge_within_one_side_misses() {
        let part = strut();
        let mut used = Marks::new(part.vertex_count());
        let plane = SlicePlane::<f64>::new(0.5, 1e-6);
        let e = part.find_edge(0, 1).unwrap();
        assert!(intersect_edge::<f64>(&part, e, &plane, &mut used).is_none());
    }

    #[test]
    fn on_plane_vertex_is_claimed_once() {
        let part = strut();
        let mut used = Marks::new(part.vertex_count());
        let plane = SlicePlane::<f64>::new(0.0, 1e-6);

        // 0 -> 1 lies in the plane: the first call claims 0, a second pass
        // over the same edge reports 1, a third finds nothing left.
        let e = part.find_edge(0, 1).unwrap();
        let first = intersect_edge::<f64>(&part, e, &plane, &mut used).unwrap();
        assert_eq!(first.vertex(), Some(0));
        let second = intersect_edge::<f64>(&part, e, &plane, &mut used).unwrap();
        assert_eq!(second.vertex(), Some(1));
        assert!(intersect_edge::<f64>(&part, e, &plane, &mut used).is_none());

        // 0 -> 4 only touches the plane at the claimed vertex.
        let up = part.find_edge(0, 4).unwrap();
        assert!(intersect_edge::<f64>(&part, up, &plane, &mut used).is_none());
    }
}
