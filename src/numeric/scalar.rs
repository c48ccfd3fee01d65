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

use std::fmt::Debug;

use num_traits::{Float, FromPrimitive};

/// Floating-point kernel a mesh is built over.
///
/// Render buffers are uploaded as floats, so the structure only needs the
/// native float types; `f32` keeps GPU-facing data compact, `f64` is for
/// callers that do further geometry processing before export.
pub trait Scalar: Float + FromPrimitive + Debug + Default + Send + Sync + 'static {
    /// Lossy conversion from a table index, used for index-derived
    /// attributes. Falls back to zero if the index is not representable.
    fn from_index(i: usize) -> Self {
        Self::from_usize(i).unwrap_or_else(Self::zero)
    }
}

impl Scalar for f32 {}
impl Scalar for f64 {}
