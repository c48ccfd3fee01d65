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

/// One directed traversal of an edge, owned by exactly one face.
///
/// The undirected edge a half-edge spans is delimited by `vertex` and the
/// `vertex` of its `next`; opposite pairing keys on that pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    /// The vertex id this half-edge stores (its endpoint in the face loop).
    pub vertex: usize,
    /// Next half-edge around the same face. Cyclic with period 3.
    pub next: usize,
    /// Owning face.
    pub face: usize,
    /// Half-edge spanning the same undirected edge in the other direction.
    /// `None` on boundary and unpaired non-manifold edges.
    pub opposite: Option<usize>,
}

impl HalfEdge {
    /// A half-edge with links not yet wired; the builder fills `next` and
    /// `face` before the table is visible to queries.
    pub fn new(vertex: usize) -> Self {
        Self {
            vertex,
            next: usize::MAX,
            face: usize::MAX,
            opposite: None,
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.opposite.is_none()
    }
}
