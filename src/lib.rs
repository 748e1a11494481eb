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

//! Planar slicing of closed triangulated solids.
//!
//! A [`Part`] is built once from positions and index triangles, optionally
//! moved with [`Part::transform`], then cut by horizontal planes. Each cut
//! walks face adjacency from crossing to crossing and yields one
//! counter-clockwise [`Polygon`] per connected section.

pub mod config;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod numeric;
pub mod slicing;

pub use config::{LoopMode, SliceConfig};
pub use error::{ConstructionError, WalkError};
pub use geometry::{Matrix4, Point2, Point3};
pub use mesh::Part;
pub use slicing::{Polygon, SliceReport};
