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

use std::ops::{Add, Div, Mul, Neg, Sub};

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    error::WalkError,
    geometry::{
        plane::SlicePlane,
        point::{Point2, Point3},
        vector::{Cross3, Vector3, VectorOps},
    },
    mesh::basic_types::Part,
    numeric::scalar::Scalar,
    slicing::{
        intersector::{Crossing, CrossingKind, Crossings, intersect_edge},
        state::SliceState,
    },
};

/// Stitches per-face crossings into one loop by following face adjacency.
pub(crate) struct ContourWalker<'p, T: Scalar> {
    part: &'p Part<T>,
    plane: SlicePlane<T>,
    state: SliceState<T>,
}

impl<'p, T: Scalar> ContourWalker<'p, T>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>
        + Neg<Output = T>,
{
    pub fn new(part: &'p Part<T>, plane: SlicePlane<T>) -> Self {
        Self {
            part,
            state: SliceState::new(part),
            plane,
        }
    }

    pub fn faces_visited(&self) -> usize {
        self.state.visited_faces.count()
    }

    pub fn has_path(&self) -> bool {
        !self.state.path.is_empty()
    }

    pub fn take_path(&mut self) -> Vec<Point2<T>> {
        self.state.take_path()
    }

    /// Walks as far as adjacency allows, starting at face `seed`. Points are
    /// appended to the path; a seed that yields nothing leaves it unchanged.
    pub fn walk_from(&mut self, seed: usize) -> Result<(), WalkError> {
        let mut step = match self.visit(seed) {
            Some(crossings) if !crossings.is_empty() => Some((seed, crossings)),
            _ => None,
        };
        while let Some((face, crossings)) = step {
            self.absorb(face, crossings)?;
            step = self.advance();
        }
        Ok(())
    }

    /// Crossings on the not-yet-visited edges of `face`; `None` if the face
    /// itself was visited before.
    fn visit(&mut self, face: usize) -> Option<Crossings<T>> {
        if !self.state.visited_faces.set(face) {
            return None;
        }
        let part = self.part;
        let mut crossings = Crossings::new();
        for &e in &part.face(face).edges {
            if !self.state.visited_edges.set(part.edge(e).physical) {
                continue;
            }
            if let Some(c) = intersect_edge(part, e, &self.plane, &mut self.state.used_vertices) {
                crossings.push(c);
            }
        }
        Some(crossings)
    }

    fn absorb(&mut self, face: usize, crossings: Crossings<T>) -> Result<(), WalkError> {
        if self.state.started {
            if crossings.len() != 1 {
                return Err(WalkError::TooManyCrossings {
                    face,
                    count: crossings.len(),
                });
            }
            if let Some(c) = crossings.into_iter().next() {
                self.emit(&c);
                self.state.current = Some(c);
            }
            return Ok(());
        }

        let resolved = match crossings.len() {
            1 => {
                let Some(c) = crossings.into_iter().next() else {
                    return Ok(());
                };
                match self.state.pending.take() {
                    Some(stashed) => self.open_segment(c, stashed),
                    None if c.is_on_vertex() => {
                        self.state.current = Some(c.clone());
                        self.state.pending = Some(c);
                        true
                    }
                    None => return Err(WalkError::DetachedEdgeCrossing { face }),
                }
            }
            2 => {
                let mut it = crossings.into_iter();
                match (it.next(), it.next()) {
                    (Some(c1), Some(c2)) => self.open_segment(c1, c2),
                    _ => false,
                }
            }
            3 => [(0, 1), (1, 2), (2, 0)]
                .into_iter()
                .any(|(i, j)| self.open_segment(crossings[i].clone(), crossings[j].clone())),
            _ => return Ok(()),
        };

        if resolved {
            Ok(())
        } else {
            Err(WalkError::UnresolvedSegment { face })
        }
    }

    /// Emits the first segment of the loop, oriented by its owning face.
    fn open_segment(&mut self, c1: Crossing<T>, c2: Crossing<T>) -> bool {
        let Some(owner) = self.owning_face(&c1, &c2) else {
            debug!(first = ?c1.point, second = ?c2.point, "no face owns crossing pair");
            return false;
        };
        let Some(forward) = self.orientation(owner, &c1, &c2) else {
            debug!(face = owner, "cannot orient crossing pair");
            return false;
        };

        let (first, second) = if forward { (c1, c2) } else { (c2, c1) };
        self.emit(&first);
        self.emit(&second);
        self.state.current = Some(second);
        self.state.pending = None;
        self.state.started = true;
        true
    }

    fn owning_face(&mut self, c1: &Crossing<T>, c2: &Crossing<T>) -> Option<usize> {
        let part = self.part;
        match (c1.vertex(), c2.vertex()) {
            (Some(a), Some(b)) => {
                let found = part.faces_around(a).iter().copied().find(|&f| {
                    part.face(f)
                        .third_vertex(a, b)
                        .is_some_and(|t| !self.plane.is_on(part.position(t)))
                });
                if found.is_none() {
                    self.state.used_vertices.clear(a);
                    self.state.used_vertices.clear(b);
                }
                found
            }
            (Some(v), None) => {
                let f = part.edge(c2.edge).face;
                part.face(f).contains(v).then_some(f)
            }
            (None, Some(v)) => {
                let f = part.edge(c1.edge).face;
                part.face(f).contains(v).then_some(f)
            }
            (None, None) => {
                let f = part.edge(c1.edge).face;
                (part.edge(c2.edge).face == f).then_some(f)
            }
        }
    }

    /// `Some(true)` if the segment runs `c1 -> c2` with the solid on its
    /// left when seen from above.
    fn orientation(&self, face: usize, c1: &Crossing<T>, c2: &Crossing<T>) -> Option<bool> {
        let part = self.part;
        let on_segment = [c1.vertex(), c2.vertex()];
        let vertices = part.face(face).vertices;

        let above: SmallVec<[usize; 3]> = vertices
            .iter()
            .copied()
            .filter(|&v| self.plane.is_above(part.position(v)))
            .collect();
        let below: SmallVec<[usize; 3]> = vertices
            .iter()
            .copied()
            .filter(|&v| !self.plane.is_above(part.position(v)) && !on_segment.contains(&Some(v)))
            .collect();

        let probe = match (above.as_slice(), below.as_slice()) {
            ([up], _) => triangle_normal(&c1.point, &c2.point, part.position(*up)),
            (_, [down]) => triangle_normal(&c2.point, &c1.point, part.position(*down)),
            _ => return None,
        };
        Some(probe.dot(&part.face(face).normal).is_positive())
    }

    /// Next face to absorb, or `None` when the loop cannot be extended.
    fn advance(&mut self) -> Option<(usize, Crossings<T>)> {
        let part = self.part;
        let (kind, edge) = {
            let current = self.state.current.as_ref()?;
            (current.kind, current.edge)
        };
        match kind {
            CrossingKind::OnVertex(v) => part.faces_around(v).iter().find_map(|&f| {
                self.visit(f)
                    .filter(|crossings| !crossings.is_empty())
                    .map(|crossings| (f, crossings))
            }),
            CrossingKind::OnEdge => {
                let f = part.opposite_face(edge)?;
                let crossings = self.visit(f)?;
                (!crossings.is_empty()).then_some((f, crossings))
            }
        }
    }

    fn emit(&mut self, c: &Crossing<T>) {
        trace!(point = ?c.point, "contour point");
        self.state.path.push(c.point.xy());
    }
}

fn triangle_normal<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> Vector3<T>
where
    for<'x> &'x T: Add<&'x T, Output = T>
        + Sub<&'x T, Output = T>
        + Mul<&'x T, Output = T>
        + Div<&'x T, Output = T>,
{
    a.vector_to(b).cross(&a.vector_to(c))
}
