// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Block construction from floor rectangles

use crate::error::{Error, Result};
use crate::types::{BlockBox, FloorRect};

/// Convert finalized rectangles into positioned solids.
///
/// Pure and order-preserving: one block per rectangle. `base_elevation`
/// and `thickness` are world units; the planar fields stay in pixel units
/// until the caller applies its pixel scale.
///
/// # Errors
///
/// Rejects a non-positive (or NaN) thickness and a negative or non-finite
/// base elevation. A failing call produces no blocks at all.
pub fn build_blocks(
    rects: &[FloorRect],
    base_elevation: f64,
    thickness: f64,
) -> Result<Vec<BlockBox>> {
    if !(thickness > 0.0) {
        return Err(Error::InvalidThickness(thickness));
    }
    if !base_elevation.is_finite() || base_elevation < 0.0 {
        return Err(Error::InvalidElevation(base_elevation));
    }

    Ok(rects
        .iter()
        .map(|rect| block_from_rect(rect, base_elevation, thickness))
        .collect())
}

/// Box arithmetic for one rectangle.
///
/// The column span is half-open while the row span is inclusive of its
/// last row, hence the `+ 1` on `width` and the half-pixel shift on
/// `center_y`. The asymmetry is part of the output contract; do not
/// normalize it away.
fn block_from_rect(rect: &FloorRect, base_elevation: f64, thickness: f64) -> BlockBox {
    BlockBox {
        center_x: (f64::from(rect.x_start) + f64::from(rect.x_end)) / 2.0,
        center_y: (f64::from(rect.y_start) + f64::from(rect.y_end)) / 2.0 + 0.5,
        center_z: base_elevation + thickness / 2.0,
        length: f64::from(rect.x_end - rect.x_start),
        width: f64::from(rect.y_end - rect.y_start + 1),
        height: thickness,
    }
}
