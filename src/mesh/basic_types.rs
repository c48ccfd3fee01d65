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

use crate::mesh::{face::Face, half_edge::HalfEdge, vertex::Vertex};
use crate::numeric::scalar::Scalar;

/// How the flat coordinate array is grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordLayout {
    /// Groups of `x, y, z`; stored `w` defaults to 1.
    Xyz,
    /// Groups of `x, y, z, w`; `w` is stored as supplied.
    Xyzw,
}

impl CoordLayout {
    pub fn stride(self) -> usize {
        match self {
            CoordLayout::Xyz => 3,
            CoordLayout::Xyzw => 4,
        }
    }
}

/// Half-edge mesh over three index-linked tables.
///
/// All cross-references between vertices, half-edges, and faces are plain
/// indices into these `Vec`s; the mesh owns every element and nothing else
/// holds ownership, so a rebuild can drop and repopulate the tables
/// wholesale. There is no incremental mutation API: [`build`] replaces the
/// entire structure.
///
/// [`build`]: Mesh::build
#[derive(Debug, Clone, Default)]
pub struct Mesh<T: Scalar> {
    pub vertices: Vec<Vertex<T>>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,
}

impl<T: Scalar> Mesh<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// A mesh is ready for queries and export once it holds at least one
    /// vertex, one half-edge, and one face. A freshly created or
    /// empty-input mesh is not ready; callers poll this before drawing.
    pub fn is_ready(&self) -> bool {
        !self.vertices.is_empty() && !self.half_edges.is_empty() && !self.faces.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
