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

//! Error types for part construction and contour walking.

use thiserror::Error;

/// Fatal defects found while building a [`Part`](crate::mesh::Part).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// Two faces traverse the same edge in the same direction: the input is
    /// non-manifold or inconsistently wound.
    #[error("directed edge ({from}, {to}) of face {face} is already owned by face {owner}")]
    DuplicateDirectedEdge {
        from: usize,
        to: usize,
        face: usize,
        owner: usize,
    },
}

/// Topology inconsistencies met while walking a contour.
///
/// These never abort a slice call; the partial polygon is kept and the error
/// travels in [`SliceReport::failure`](crate::slicing::SliceReport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    #[error("face {face} produced {count} new crossings after the contour had started")]
    TooManyCrossings { face: usize, count: usize },

    #[error("face {face} produced a lone edge crossing before the contour started")]
    DetachedEdgeCrossing { face: usize },

    #[error("no face owns a segment between the crossings met at face {face}")]
    UnresolvedSegment { face: usize },
}

pub type BuildResult<T> = std::result::Result<T, ConstructionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConstructionError::DuplicateDirectedEdge {
            from: 0,
            to: 1,
            face: 3,
            owner: 0,
        };
        assert_eq!(
            format!("{err}"),
            "directed edge (0, 1) of face 3 is already owned by face 0"
        );

        let err = WalkError::TooManyCrossings { face: 7, count: 2 };
        assert!(format!("{err}").contains("face 7"));
    }
}
