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

use thiserror::Error;

/// A recoverable irregularity found while building a mesh.
///
/// Diagnostics are collected into a [`BuildReport`] instead of being raised:
/// `build` never fails on malformed geometry, it skips the offending piece
/// and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildDiagnostic {
    /// A triangle referenced a vertex id outside the vertex table.
    /// The whole triangle is skipped.
    #[error(
        "triangle {triangle} references vertex {vertex}, but only {vertex_count} vertices exist"
    )]
    VertexIndexOutOfRange {
        /// Ordinal of the triangle in the input index list.
        triangle: usize,
        /// The out-of-range vertex id.
        vertex: usize,
        /// Size of the vertex table at build time.
        vertex_count: usize,
    },

    /// The coordinate array length is not a multiple of the group size;
    /// the trailing values are ignored.
    #[error("{count} trailing coordinate value(s) do not fill a {group}-component group")]
    TrailingCoordinates {
        /// Number of leftover values.
        count: usize,
        /// Expected group size (3 or 4).
        group: usize,
    },

    /// The triangle index array length is not a multiple of 3; the trailing
    /// indices are ignored.
    #[error("{count} trailing index value(s) do not fill a triangle")]
    TrailingIndices {
        /// Number of leftover indices.
        count: usize,
    },
}

/// Outcome of a [`build`](crate::mesh::Mesh::build) call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Every irregularity encountered, in input order.
    pub diagnostics: Vec<BuildDiagnostic>,
}

impl BuildReport {
    /// True if the input was consumed without a single diagnostic.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of triangles that were dropped from the input.
    pub fn skipped_triangles(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, BuildDiagnostic::VertexIndexOutOfRange { .. }))
            .count()
    }
}
