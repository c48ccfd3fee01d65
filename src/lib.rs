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

//! Half-edge connectivity core for triangle render meshes.
//!
//! `hemesh` ingests raw polygon soup (flat vertex coordinates plus flat
//! triangle index lists), builds a half-edge representation with paired
//! opposites, accumulates area-weighted vertex normals, and exports flat
//! vertex/index buffers for an external renderer. Construction is best
//! effort: malformed triangles are skipped and reported as diagnostics,
//! never raised as errors.
//!
//! The structure is single-threaded and rebuilt wholesale; `build` takes
//! `&mut self` and every query takes `&self`, so exclusive-rebuild versus
//! shared-read access is enforced by the borrow checker.

pub mod error;
pub mod geometry;
pub mod mesh;
pub mod numeric;
