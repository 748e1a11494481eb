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

/// A directed edge owned by exactly one face.
///
/// The two directions of a shared mesh edge are twins and carry the same
/// `physical` id, so a slice can mark the geometric edge visited once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub vertices: [usize; 2], // from, to
    pub face: usize,
    pub opposite_face: Option<usize>, // None on a boundary
    pub twin: Option<usize>,
    pub physical: usize,
}

impl Edge {
    pub fn new(from: usize, to: usize, face: usize, physical: usize) -> Self {
        Self {
            vertices: [from, to],
            face,
            opposite_face: None,
            twin: None,
            physical,
        }
    }

    pub fn from(&self) -> usize {
        self.vertices[0]
    }

    pub fn to(&self) -> usize {
        self.vertices[1]
    }

    pub fn is_boundary(&self) -> bool {
        self.twin.is_none()
    }

    /// Unordered key shared by both directions.
    pub fn key(&self) -> (usize, usize) {
        edge_key(self.vertices[0], self.vertices[1])
    }
}

pub fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}
