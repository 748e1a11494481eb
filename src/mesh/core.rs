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

use ahash::AHashMap;
use tracing::debug;

use crate::{
    error::{BuildResult, ConstructionError},
    geometry::{
        Aabb,
        matrix::Matrix4,
        point::Point3,
        vector::{Cross3, Vector3},
    },
    impl_part,
    mesh::{
        basic_types::{Face, Part, Vertex},
        half_edge::{Edge, edge_key},
    },
    numeric::scalar::Scalar,
};

impl<T: Scalar> Part<T> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of geometric edges; twins count once.
    pub fn physical_edge_count(&self) -> usize {
        self.physical_edge_count
    }

    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face<T>] {
        &self.faces
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex(&self, v: usize) -> &Vertex<T> {
        &self.vertices[v]
    }

    pub fn face(&self, f: usize) -> &Face<T> {
        &self.faces[f]
    }

    pub fn edge(&self, e: usize) -> &Edge {
        &self.edges[e]
    }

    pub fn position(&self, v: usize) -> &Point3<T> {
        &self.vertices[v].position
    }

    pub fn face_positions(&self, f: usize) -> [&Point3<T>; 3] {
        let [a, b, c] = self.faces[f].vertices;
        [self.position(a), self.position(b), self.position(c)]
    }

    pub fn faces_around(&self, v: usize) -> &[usize] {
        &self.vertices[v].faces
    }

    pub fn opposite_face(&self, e: usize) -> Option<usize> {
        self.edges[e].opposite_face
    }

    /// Directed edge `from -> to`, if some face owns it.
    pub fn find_edge(&self, from: usize, to: usize) -> Option<usize> {
        let slot = self.edge_map.get(&edge_key(from, to))?;
        if from < to { slot.forward } else { slot.backward }
    }

    /// Edges without a twin. Zero for a closed solid.
    pub fn boundary_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_boundary()).count()
    }

    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }

    pub fn bounds(&self) -> Option<Aabb<T, 3>> {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }

    /// `(min z, max z)` over all vertices.
    pub fn z_extent(&self) -> Option<(T, T)> {
        let aabb = self.bounds()?;
        Some((aabb.min[2].clone(), aabb.max[2].clone()))
    }
}

impl_part! {
    /// Builds a part from vertex positions and index triangles.
    ///
    /// Triangles with an out-of-range or repeated index are skipped. A
    /// directed edge claimed by two faces fails the whole build.
    pub fn build(positions: &[Point3<T>], triangles: &[[usize; 3]]) -> BuildResult<Self> {
        let mut part = Part {
            vertices: positions.iter().cloned().map(Vertex::new).collect(),
            edges: Vec::with_capacity(triangles.len() * 3),
            faces: Vec::with_capacity(triangles.len()),
            edge_map: AHashMap::with_capacity(triangles.len() * 3 / 2),
            physical_edge_count: 0,
        };

        let mut skipped = 0usize;
        for (t, &tri) in triangles.iter().enumerate() {
            let [a, b, c] = tri;
            let out_of_range = tri.iter().any(|&v| v >= positions.len());
            if out_of_range || a == b || b == c || c == a {
                debug!(triangle = t, ?tri, "skipping degenerate triangle");
                skipped += 1;
                continue;
            }
            part.add_face(tri)?;
        }

        part.update_normals();
        debug!(
            vertices = part.vertex_count(),
            faces = part.face_count(),
            physical_edges = part.physical_edge_count,
            skipped,
            "built part"
        );
        Ok(part)
    }

    fn add_face(&mut self, vertices: [usize; 3]) -> BuildResult<usize> {
        let face_idx = self.faces.len();
        let mut edges = [usize::MAX; 3];

        for i in 0..3 {
            let from = vertices[i];
            let to = vertices[(i + 1) % 3];
            let slot = self.edge_map.entry(edge_key(from, to)).or_default();
            let (own, reverse) = if from < to {
                (&mut slot.forward, slot.backward)
            } else {
                (&mut slot.backward, slot.forward)
            };

            if let Some(existing) = *own {
                return Err(ConstructionError::DuplicateDirectedEdge {
                    from,
                    to,
                    face: face_idx,
                    owner: self.edges[existing].face,
                });
            }

            let edge_idx = self.edges.len();
            *own = Some(edge_idx);

            let edge = match reverse {
                Some(twin) => {
                    let mut e = Edge::new(from, to, face_idx, self.edges[twin].physical);
                    e.twin = Some(twin);
                    e.opposite_face = Some(self.edges[twin].face);
                    self.edges[twin].twin = Some(edge_idx);
                    self.edges[twin].opposite_face = Some(face_idx);
                    e
                }
                None => {
                    self.physical_edge_count += 1;
                    Edge::new(from, to, face_idx, self.physical_edge_count - 1)
                }
            };
            self.edges.push(edge);
            edges[i] = edge_idx;
        }

        self.faces.push(Face {
            vertices,
            edges,
            normal: Vector3::zero(),
        });
        for &v in &vertices {
            self.vertices[v].faces.push(face_idx);
        }
        Ok(face_idx)
    }

    /// `(v1 - v0) x (v2 - v0)` from the current positions.
    pub fn face_normal(&self, f: usize) -> Vector3<T> {
        let [a, b, c] = self.face_positions(f);
        a.vector_to(b).cross(&a.vector_to(c))
    }

    pub fn update_normals(&mut self) {
        for f in 0..self.faces.len() {
            self.faces[f].normal = self.face_normal(f);
        }
    }

    /// Maps every vertex through `m` and recomputes the face normals.
    pub fn transform(&mut self, m: &Matrix4<T>) {
        for v in &mut self.vertices {
            v.position = m.map_point(&v.position);
        }
        self.update_normals();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;

    fn tetrahedron() -> Part<f64> {
        let positions = [
            Point::from_vals([0.0, 0.0, 0.0]),
            Point::from_vals([1.0, 0.0, 0.0]),
            Point::from_vals([0.0, 1.0, 0.0]),
            Point::from_vals([0.0, 0.0, 1.0]),
        ];
        Part::<f64>::build(&positions, &[[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]]).unwrap()
    }

    #[test]
    fn twins_share_physical_edge() {
        let part = tetrahedron();
        assert_eq!(part.edge_count(), 12);
        assert_eq!(part.physical_edge_count(), 6);
        assert!(part.is_closed());

        for (i, e) in part.edges.iter().enumerate() {
            let twin = e.twin.unwrap();
            assert_eq!(part.edges[twin].twin, Some(i));
            assert_eq!(part.edges[twin].physical, e.physical);
            assert_eq!(e.opposite_face, Some(part.edges[twin].face));
        }
        assert_eq!(part.find_edge(1, 3), Some(part.faces[1].edges[1]));
    }

    #[test]
    fn normals_follow_winding() {
        let part = tetrahedron();
        // Face 0 lies in z = 0 and is wound to face down.
        assert_eq!(part.faces[0].normal, Vector3::from_vals([0.0, 0.0, -1.0]));
        assert_eq!(part.faces_around(0), &[0, 1, 3]);
    }
}
