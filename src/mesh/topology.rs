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

use smallvec::SmallVec;

use crate::geometry::{Vector3, VectorOps};
use crate::mesh::basic_types::Mesh;
use crate::numeric::scalar::Scalar;

impl<T: Scalar> Mesh<T> {
    /// The two vertex ids delimiting the undirected edge `he` spans:
    /// the half-edge's stored vertex and its successor's. Unnormalized;
    /// opposite pairing sorts the pair into its key.
    #[inline]
    pub fn edge_endpoints(&self, he: usize) -> (usize, usize) {
        let next = self.half_edges[he].next;
        (self.half_edges[he].vertex, self.half_edges[next].vertex)
    }

    /// Returns the indices of the half-edges bounding face `f`, starting
    /// at its base half-edge and following `next`.
    pub fn face_half_edges(&self, f: usize) -> SmallVec<[usize; 3]> {
        let start = self.faces[f].half_edge;
        let mut result = SmallVec::new();
        let mut h = start;
        loop {
            result.push(h);
            h = self.half_edges[h].next;
            if h == start {
                break;
            }
        }
        result
    }

    /// The three vertex ids of face `f` in `next`-chain order from its
    /// base half-edge, which is the order the triangle came in with.
    #[inline]
    pub fn face_vertices(&self, f: usize) -> [usize; 3] {
        let he0 = self.faces[f].half_edge;
        let he1 = self.half_edges[he0].next;
        let he2 = self.half_edges[he1].next;
        debug_assert_eq!(self.half_edges[he2].next, he0);
        [
            self.half_edges[he0].vertex,
            self.half_edges[he1].vertex,
            self.half_edges[he2].vertex,
        ]
    }

    /// Unnormalized face normal `(v1 - v0) x (v2 - v0)`. Magnitude is
    /// twice the face area, which is what the vertex-normal accumulator
    /// wants for area weighting.
    pub fn face_normal(&self, f: usize) -> Vector3<T> {
        let [v0, v1, v2] = self.face_vertices(f);
        let p0 = &self.vertices[v0].position;
        let p1 = &self.vertices[v1].position;
        let p2 = &self.vertices[v2].position;
        (p1 - p0).cross(&(p2 - p0))
    }

    /// Ordered one-ring ("star") of vertex `v`.
    ///
    /// Starts at the representative half-edge, appends the far endpoint of
    /// the spanned edge, and advances across the opposite into the
    /// adjacent face. A closed ring terminates back at the start with one
    /// entry per incident face; an open ring stops at the first missing
    /// opposite, returning the partial list collected so far. The walk is
    /// one-directional, so boundary vertices do not get the edges on the
    /// other side of the gap.
    ///
    /// A vertex id with no representative (isolated or out of range)
    /// yields an empty list.
    pub fn star(&self, v: usize) -> Vec<usize> {
        let Some(h0) = self.vertices.get(v).and_then(|vertex| vertex.half_edge) else {
            return Vec::new();
        };

        let mut ring = Vec::new();
        let mut h = h0;
        loop {
            let (_, far) = self.edge_endpoints(h);
            ring.push(far);

            match self.half_edges[h].opposite {
                Some(opposite) => {
                    h = self.half_edges[opposite].next;
                    if h == h0 {
                        break;
                    }
                }
                None => break,
            }
        }
        ring
    }

    #[inline]
    pub fn is_boundary_half_edge(&self, he: usize) -> bool {
        self.half_edges[he].opposite.is_none()
    }

    /// True if `v` sits on a mesh boundary. Representatives prefer
    /// boundary half-edges, so checking the representative suffices.
    pub fn is_boundary_vertex(&self, v: usize) -> bool {
        self.vertices
            .get(v)
            .and_then(|vertex| vertex.half_edge)
            .is_some_and(|he| self.half_edges[he].opposite.is_none())
    }

    /// All vertex ids lying on a boundary.
    pub fn boundary_vertices(&self) -> Vec<usize> {
        (0..self.vertices.len())
            .filter(|&v| self.is_boundary_vertex(v))
            .collect()
    }

    /// Checks the structural invariants: three half-edges per face,
    /// `next` cycles of period 3 staying inside the owning face, stored
    /// vertex ids in range, and symmetric opposite pairing over matching
    /// edge keys.
    pub fn validate(&self) -> bool {
        if self.half_edges.len() != 3 * self.faces.len() {
            return false;
        }

        for (f, face) in self.faces.iter().enumerate() {
            let he0 = face.half_edge;
            let mut h = he0;
            for _ in 0..3 {
                let Some(edge) = self.half_edges.get(h) else {
                    return false;
                };
                if edge.face != f {
                    return false;
                }
                h = edge.next;
            }
            if h != he0 {
                return false;
            }
        }

        for (he, edge) in self.half_edges.iter().enumerate() {
            if edge.vertex >= self.vertices.len() {
                return false;
            }
            if let Some(opposite) = edge.opposite {
                let Some(other) = self.half_edges.get(opposite) else {
                    return false;
                };
                if other.opposite != Some(he) {
                    return false;
                }

                let (a, b) = self.edge_endpoints(he);
                let (c, d) = self.edge_endpoints(opposite);
                if (a.min(b), a.max(b)) != (c.min(d), c.max(d)) {
                    return false;
                }
            }
        }

        true
    }
}
