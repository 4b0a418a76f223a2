// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor detection and block extrusion for 2D layout images
//!
//! This crate provides the geometry core of the layout-to-level pipeline:
//! 1. Classifying layout raster pixels into floor and background
//! 2. Extracting maximal constant-width floor rectangles row by row
//! 3. Extruding each rectangle into a positioned axis-aligned block
//!
//! The crate does no I/O. Decoding images, reading layer configuration and
//! serializing level geometry belong to the callers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vmf_lite_core::{layout_to_blocks, RasterGrid};
//!
//! let grid = RasterGrid::from_raw(width, height, 3, samples)?;
//! let blocks = layout_to_blocks(&grid, 0.0, 16.0)?;
//! ```

pub mod build;
pub mod error;
pub mod extract;
pub mod raster;
pub mod types;

// Re-export commonly used types and functions
pub use build::build_blocks;
pub use error::{Error, Result};
pub use extract::extract_rects;
pub use raster::{is_floor, FloorMask, RasterGrid};
pub use types::{BlockBox, FloorRect, Span};

/// Run the full grid-to-blocks pipeline for one layer.
///
/// Classifies the raster, extracts floor rectangles and extrudes them at
/// the given base elevation with the given thickness. Each call owns its
/// working state exclusively; distinct layers can run independently.
pub fn layout_to_blocks(
    grid: &RasterGrid,
    base_elevation: f64,
    thickness: f64,
) -> Result<Vec<BlockBox>> {
    let mask = FloorMask::classify(grid);
    let rects = extract_rects(&mask)?;
    build_blocks(&rects, base_elevation, thickness)
}
