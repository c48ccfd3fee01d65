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

use std::ops::Sub;

use crate::geometry::vector::Vector3;
use crate::numeric::scalar::Scalar;

/// Homogeneous vertex position. `w` is 1 for ordinary positions; the
/// builder stores whatever `w` the input supplies when coordinates come in
/// 4-component groups.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point4<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Point4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Position from spatial coordinates, `w` defaulted to 1.
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        Self {
            x,
            y,
            z,
            w: T::one(),
        }
    }

    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn to_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

/// Point difference is a spatial direction; `w` drops out.
impl<T: Scalar> Sub for &Point4<T> {
    type Output = Vector3<T>;

    fn sub(self, rhs: &Point4<T>) -> Vector3<T> {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
