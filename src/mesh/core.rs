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

use crate::error::{BuildDiagnostic, BuildReport};
use crate::geometry::Point4;
use crate::mesh::{
    basic_types::{CoordLayout, Mesh},
    face::Face,
    half_edge::HalfEdge,
    vertex::Vertex,
};
use crate::numeric::scalar::Scalar;

impl<T: Scalar> Mesh<T> {
    /// Rebuilds the whole structure from a flat coordinate array and a flat
    /// triangle index array.
    ///
    /// Coordinates are consumed in `layout`-sized groups, one vertex per
    /// group in input order; the vertex id is the group ordinal. Indices
    /// are consumed in triples; each valid triple becomes one face with
    /// three half-edges linked cyclically in input order. A triple that
    /// references a vertex id outside the table is skipped and reported,
    /// the rest of the input still builds. Empty input yields an empty,
    /// not-ready mesh.
    ///
    /// After the tables are populated, opposites are paired, representative
    /// half-edges are chosen, and face normals are accumulated into the
    /// vertices, in that order.
    pub fn build(&mut self, coords: &[T], layout: CoordLayout, triangles: &[usize]) -> BuildReport {
        let mut report = BuildReport::default();

        self.vertices.clear();
        self.half_edges.clear();
        self.faces.clear();

        let stride = layout.stride();
        let vertex_count = coords.len() / stride;
        let leftover = coords.len() % stride;
        if leftover != 0 {
            log::warn!("{leftover} trailing coordinate value(s) ignored");
            report.diagnostics.push(BuildDiagnostic::TrailingCoordinates {
                count: leftover,
                group: stride,
            });
        }

        self.vertices.reserve(vertex_count);
        for i in 0..vertex_count {
            let base = i * stride;
            let position = match layout {
                CoordLayout::Xyz => {
                    Point4::from_xyz(coords[base], coords[base + 1], coords[base + 2])
                }
                CoordLayout::Xyzw => Point4::new(
                    coords[base],
                    coords[base + 1],
                    coords[base + 2],
                    coords[base + 3],
                ),
            };
            let mut vertex = Vertex::new(position);
            vertex.scalar = T::from_index(i) / T::from_index(vertex_count);
            self.vertices.push(vertex);
        }

        let triangle_count = triangles.len() / 3;
        if triangles.len() % 3 != 0 {
            let count = triangles.len() % 3;
            log::warn!("{count} trailing triangle index value(s) ignored");
            report
                .diagnostics
                .push(BuildDiagnostic::TrailingIndices { count });
        }

        self.half_edges.reserve(triangle_count * 3);
        self.faces.reserve(triangle_count);
        for t in 0..triangle_count {
            let tri = [triangles[3 * t], triangles[3 * t + 1], triangles[3 * t + 2]];

            if let Some(&bad) = tri.iter().find(|&&v| v >= self.vertices.len()) {
                log::warn!(
                    "triangle {t} references vertex {bad} outside the vertex table; skipped"
                );
                report
                    .diagnostics
                    .push(BuildDiagnostic::VertexIndexOutOfRange {
                        triangle: t,
                        vertex: bad,
                        vertex_count: self.vertices.len(),
                    });
                continue;
            }

            let he0 = self.half_edges.len();
            let face_idx = self.faces.len();
            for (k, &v) in tri.iter().enumerate() {
                let mut he = HalfEdge::new(v);
                he.face = face_idx;
                he.next = he0 + (k + 1) % 3;
                self.half_edges.push(he);
            }
            self.faces.push(Face::new(he0));
        }

        self.pair_opposites();
        self.assign_representatives();
        self.accumulate_normals();

        report
    }

    /// Pairs opposite half-edges in one linear pass.
    ///
    /// The pending map holds, per normalized edge key, the first half-edge
    /// seen with that key and not yet paired. A second sighting links both
    /// as mutual opposites and retires the key; keys still pending at the
    /// end are boundary edges and keep `opposite == None`.
    ///
    /// If more than two half-edges share a key (non-manifold edge), only
    /// the first two pair; the third re-seeds the pending slot and pairs
    /// with whichever duplicate comes next. Accepted approximation for
    /// non-manifold input.
    fn pair_opposites(&mut self) {
        let mut pending: AHashMap<(usize, usize), usize> =
            AHashMap::with_capacity(self.half_edges.len());

        for he in 0..self.half_edges.len() {
            let (a, b) = self.edge_endpoints(he);
            let key = if a < b { (a, b) } else { (b, a) };

            match pending.remove(&key) {
                Some(other) => {
                    self.half_edges[other].opposite = Some(he);
                    self.half_edges[he].opposite = Some(other);
                }
                None => {
                    pending.insert(key, he);
                }
            }
        }
    }

    /// Chooses each vertex's representative half-edge in table order.
    ///
    /// A half-edge claims the slot of its stored vertex when the slot is
    /// empty or when the half-edge has no opposite. Star traversal starts
    /// at the representative, so boundary edges win the slot and boundary
    /// stars terminate instead of looping.
    fn assign_representatives(&mut self) {
        for he in 0..self.half_edges.len() {
            let v = self.half_edges[he].vertex;
            if self.vertices[v].half_edge.is_none() || self.half_edges[he].opposite.is_none() {
                self.vertices[v].half_edge = Some(he);
            }
        }
    }

    /// Adds every face's unnormalized normal into its three vertices.
    ///
    /// The cross product is not divided by area or angle, so larger faces
    /// weigh more in the averaged direction. Nothing normalizes here; that
    /// is the exporting consumer's call.
    fn accumulate_normals(&mut self) {
        for f in 0..self.faces.len() {
            let n = self.face_normal(f);
            let [v0, v1, v2] = self.face_vertices(f);
            self.vertices[v0].normal += n;
            self.vertices[v1].normal += n;
            self.vertices[v2].normal += n;
        }
    }
}
