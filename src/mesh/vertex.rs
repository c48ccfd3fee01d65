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

use crate::geometry::{Point4, Vector4};
use crate::numeric::scalar::Scalar;

/// A vertex of the mesh. Its id is its index in the vertex table.
#[derive(Debug, Clone)]
pub struct Vertex<T: Scalar> {
    /// Homogeneous position, `w` normally 1.
    pub position: Point4<T>,
    /// Accumulated face normals, `w` fixed to 0. Unnormalized; consumers
    /// normalize if they need unit normals.
    pub normal: Vector4<T>,
    /// Auxiliary attribute for per-vertex coloring, `id / vertex_count`.
    pub scalar: T,
    /// Representative incident half-edge, `None` until assigned.
    /// A boundary half-edge is preferred when the vertex has one.
    pub half_edge: Option<usize>,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(position: Point4<T>) -> Self {
        Self {
            position,
            normal: Vector4::zero(),
            scalar: T::zero(),
            half_edge: None,
        }
    }
}
