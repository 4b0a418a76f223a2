// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for floor detection and block generation

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A maximal horizontal run of floor pixels on one row.
///
/// The column interval is half-open: `[x_start, x_end)`, `x_start < x_end`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    pub x_start: u32,
    pub x_end: u32,
}

impl Span {
    pub fn new(x_start: u32, x_end: u32) -> Self {
        Self { x_start, x_end }
    }

    /// Number of columns covered.
    pub fn columns(&self) -> u32 {
        self.x_end - self.x_start
    }
}

/// A finalized rectangle of floor pixels with constant column span.
///
/// Columns are half-open `[x_start, x_end)`; rows are inclusive
/// `[y_start, y_end]` — `y_end` is the last row the rectangle grew onto.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FloorRect {
    pub x_start: u32,
    pub y_start: u32,
    pub x_end: u32,
    pub y_end: u32,
}

impl FloorRect {
    pub fn new(x_start: u32, y_start: u32, x_end: u32, y_end: u32) -> Self {
        Self {
            x_start,
            y_start,
            x_end,
            y_end,
        }
    }

    /// Number of columns covered.
    pub fn columns(&self) -> u32 {
        self.x_end - self.x_start
    }

    /// Number of rows covered (the row span is inclusive).
    pub fn rows(&self) -> u32 {
        self.y_end - self.y_start + 1
    }
}

/// An axis-aligned 3D solid positioned by its center point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BlockBox {
    pub center_x: f64,
    pub center_y: f64,
    pub center_z: f64,
    /// Extent along X, in the same units as `center_x`.
    pub length: f64,
    /// Extent along Y.
    pub width: f64,
    /// Extent along Z: the extrusion thickness, already in final units.
    pub height: f64,
}

impl BlockBox {
    pub fn center(&self) -> Point3<f64> {
        Point3::new(self.center_x, self.center_y, self.center_z)
    }

    /// Scale the planar fields by a world-units-per-pixel factor.
    ///
    /// `center_x`, `center_y`, `center_z`, `length` and `width` are pixel
    /// derived and get multiplied; `height` is left untouched because the
    /// thickness arrives in final units, never in pixels.
    pub fn scale(&mut self, pixel_size: f64) {
        self.center_x *= pixel_size;
        self.center_y *= pixel_size;
        self.center_z *= pixel_size;
        self.length *= pixel_size;
        self.width *= pixel_size;
    }
}
