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

use crate::{
    geometry::{point::Point3, vector::Vector3},
    mesh::half_edge::Edge,
    numeric::scalar::Scalar,
};

#[derive(Clone, Debug)]
pub struct Vertex<T: Scalar> {
    pub position: Point3<T>,
    pub faces: Vec<usize>, // incident faces, in insertion order
}

impl<T: Scalar> Vertex<T> {
    pub fn new(position: Point3<T>) -> Self {
        Self {
            position,
            faces: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Face<T: Scalar> {
    pub vertices: [usize; 3],
    /// Directed edges v0->v1, v1->v2, v2->v0.
    pub edges: [usize; 3],
    /// `(v1 - v0) x (v2 - v0)`, not normalised.
    pub normal: Vector3<T>,
}

impl<T: Scalar> Face<T> {
    pub fn contains(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    /// The vertex that is neither `a` nor `b`, if both belong to this face.
    pub fn third_vertex(&self, a: usize, b: usize) -> Option<usize> {
        if !self.contains(a) || !self.contains(b) || a == b {
            return None;
        }
        self.vertices.iter().copied().find(|&v| v != a && v != b)
    }
}

/// Slots for the two directions of one unordered vertex pair. `forward` runs
/// from the smaller vertex index to the larger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeSlot {
    pub forward: Option<usize>,
    pub backward: Option<usize>,
}

/// A closed triangulated solid. Topology is fixed once built; only vertex
/// positions (and with them the face normals) change afterwards.
#[derive(Clone, Debug)]
pub struct Part<T: Scalar> {
    pub(crate) vertices: Vec<Vertex<T>>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) faces: Vec<Face<T>>,

    pub(crate) edge_map: AHashMap<(usize, usize), EdgeSlot>,
    pub(crate) physical_edge_count: usize,
}
