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

use crate::{
    geometry::point::Point2,
    mesh::basic_types::Part,
    numeric::scalar::Scalar,
    slicing::intersector::Crossing,
};

/// One flag per arena slot.
#[derive(Clone, Debug, Default)]
pub(crate) struct Marks {
    bits: Vec<bool>,
    count: usize,
}

impl Marks {
    pub fn new(len: usize) -> Self {
        Self {
            bits: vec![false; len],
            count: 0,
        }
    }

    pub fn is_set(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// Returns `true` if `i` was not set before.
    pub fn set(&mut self, i: usize) -> bool {
        let fresh = !self.bits[i];
        if fresh {
            self.bits[i] = true;
            self.count += 1;
        }
        fresh
    }

    pub fn clear(&mut self, i: usize) {
        if self.bits[i] {
            self.bits[i] = false;
            self.count -= 1;
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Everything a slice call mutates. Lives for one call, never on the part.
#[derive(Clone, Debug)]
pub(crate) struct SliceState<T: Scalar> {
    pub visited_faces: Marks,
    pub used_vertices: Marks,
    pub visited_edges: Marks, // by physical id
    pub started: bool,
    pub pending: Option<Crossing<T>>,
    pub current: Option<Crossing<T>>,
    pub path: Vec<Point2<T>>,
}

impl<T: Scalar> SliceState<T> {
    pub fn new(part: &Part<T>) -> Self {
        Self {
            visited_faces: Marks::new(part.face_count()),
            used_vertices: Marks::new(part.vertex_count()),
            visited_edges: Marks::new(part.physical_edge_count()),
            started: false,
            pending: None,
            current: None,
            path: Vec::new(),
        }
    }

    /// Hands out the finished loop and readies the state for the next one.
    /// Visitation marks are kept.
    pub fn take_path(&mut self) -> Vec<Point2<T>> {
        self.started = false;
        self.pending = None;
        self.current = None;
        std::mem::take(&mut self.path)
    }
}
