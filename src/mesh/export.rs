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

use crate::mesh::basic_types::Mesh;
use crate::numeric::scalar::Scalar;

/// Flat parallel buffers ready for upload to a rendering backend.
///
/// Normals are the raw accumulated sums; the renderer must not assume they
/// are unit length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderBuffers<T> {
    /// 4 components per vertex, vertex-table order.
    pub positions: Vec<T>,
    /// 1 value per vertex.
    pub scalars: Vec<T>,
    /// 4 components per vertex, unnormalized.
    pub normals: Vec<T>,
    /// One stored vertex id per half-edge in table order, which is
    /// face-by-face order: exactly `3 * face_count` entries.
    pub indices: Vec<u32>,
}

impl<T: Scalar> Mesh<T> {
    /// Exports the vertex and index buffers. On an empty (not ready) mesh
    /// every buffer comes back empty; this never fails.
    pub fn render_buffers(&self) -> RenderBuffers<T> {
        let mut buffers = RenderBuffers {
            positions: Vec::with_capacity(self.vertices.len() * 4),
            scalars: Vec::with_capacity(self.vertices.len()),
            normals: Vec::with_capacity(self.vertices.len() * 4),
            indices: Vec::with_capacity(self.half_edges.len()),
        };

        for vertex in &self.vertices {
            buffers.positions.extend_from_slice(&vertex.position.to_array());
            buffers.scalars.push(vertex.scalar);
            buffers.normals.extend_from_slice(&vertex.normal.to_array());
        }

        for edge in &self.half_edges {
            buffers.indices.push(edge.vertex as u32);
        }

        buffers
    }
}
