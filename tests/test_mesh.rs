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

use contour_slicer::geometry::{Matrix4, Point3, Vector3};
use contour_slicer::mesh::Part;
use contour_slicer::ConstructionError;

fn tetrahedron_positions() -> [Point3<f64>; 4] {
    [
        Point3::from_vals([0.0, 0.0, 0.0]),
        Point3::from_vals([1.0, 0.0, 0.0]),
        Point3::from_vals([0.0, 1.0, 0.0]),
        Point3::from_vals([0.0, 0.0, 1.0]),
    ]
}

const TETRAHEDRON: [[usize; 3]; 4] = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]];

#[test]
fn test_build_links_opposite_faces() {
    let part = Part::<f64>::build(&tetrahedron_positions(), &TETRAHEDRON).unwrap();
    assert_eq!(part.vertex_count(), 4);
    assert_eq!(part.face_count(), 4);
    assert!(part.is_closed());

    // Edge 1 -> 3 of face 1 borders face 2, which owns 3 -> 1.
    let e = part.find_edge(1, 3).unwrap();
    assert_eq!(part.edge(e).face, 1);
    assert_eq!(part.opposite_face(e), Some(2));
    let twin = part.edge(e).twin.unwrap();
    assert_eq!(part.edge(twin).vertices, [3, 1]);
    assert_eq!(part.edge(twin).physical, part.edge(e).physical);

    for v in 0..4 {
        assert_eq!(part.faces_around(v).len(), 3);
        for &f in part.faces_around(v) {
            assert!(part.face(f).contains(v));
        }
    }
}

#[test]
fn test_open_surface_has_boundary() {
    let part = Part::<f64>::build(&tetrahedron_positions(), &TETRAHEDRON[..2]).unwrap();
    assert_eq!(part.face_count(), 2);
    assert!(!part.is_closed());
    assert_eq!(part.boundary_edge_count(), 4);
    assert_eq!(part.physical_edge_count(), 5);
}

#[test]
fn test_rejects_repeated_directed_edge() {
    let err = Part::<f64>::build(&tetrahedron_positions(), &[[0, 1, 2], [0, 1, 3]]).unwrap_err();
    assert_eq!(
        err,
        ConstructionError::DuplicateDirectedEdge {
            from: 0,
            to: 1,
            face: 1,
            owner: 0,
        }
    );
}

#[test]
fn test_skips_degenerate_triangles() {
    let mut triangles = TETRAHEDRON.to_vec();
    triangles.insert(1, [0, 0, 1]);
    triangles.push([0, 1, 9]);
    triangles.push([3, 2, 3]);

    let part = Part::<f64>::build(&tetrahedron_positions(), &triangles).unwrap();
    assert_eq!(part.face_count(), 4);
    assert!(part.is_closed());
    assert_eq!(part.slice_at(0.5).len(), 3);
}

#[test]
fn test_transform_moves_vertices_and_normals() {
    let mut part = Part::<f64>::build(&tetrahedron_positions(), &TETRAHEDRON).unwrap();
    assert_eq!(part.z_extent(), Some((0.0, 1.0)));

    part.transform(&Matrix4::<f64>::translation(0.0, 0.0, 5.0));
    assert_eq!(part.z_extent(), Some((5.0, 6.0)));
    assert_eq!(part.face(0).normal, Vector3::from_vals([0.0, 0.0, -1.0]));

    part.transform(&Matrix4::<f64>::scaling(2.0, 2.0, 2.0));
    assert_eq!(part.z_extent(), Some((10.0, 12.0)));
    assert_eq!(part.face(0).normal, Vector3::from_vals([0.0, 0.0, -4.0]));
    assert_eq!(part.position(1), &Point3::from_vals([2.0, 0.0, 10.0]));
}

#[test]
fn test_empty_part() {
    let part = Part::<f64>::build(&[], &[]).unwrap();
    assert!(part.bounds().is_none());
    assert!(part.slice_at(0.0).is_empty());
    assert!(part.layer_heights(0.0, 1.0).is_empty());
}

#[test]
fn test_topology_is_read_through_views() {
    let part = Part::<f64>::build(&tetrahedron_positions(), &TETRAHEDRON).unwrap();
    assert_eq!(part.vertices().len(), part.vertex_count());
    assert_eq!(part.faces().len(), part.face_count());
    assert_eq!(part.edges().len(), part.edge_count());
    for (f, face) in part.faces().iter().enumerate() {
        for &e in &face.edges {
            assert_eq!(part.edges()[e].face, f);
        }
    }
    for (v, vertex) in part.vertices().iter().enumerate() {
        assert_eq!(vertex.faces, part.faces_around(v));
    }
}
