// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned brush solids with Hammer plane windings

use crate::keyvalues::{fmt_coord, KvNode};
use nalgebra::{Point3, Vector3};
use vmf_lite_core::BlockBox;

/// Allocates document-unique element ids, starting at 1.
#[derive(Debug)]
pub struct IdGen {
    next: u32,
}

impl IdGen {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}

/// Texture axes for one face orientation.
struct TexAxes {
    uaxis: &'static str,
    vaxis: &'static str,
}

static TEX_HORIZONTAL: TexAxes = TexAxes {
    uaxis: "[1 0 0 0] 0.25",
    vaxis: "[0 -1 0 0] 0.25",
};
static TEX_FACING_X: TexAxes = TexAxes {
    uaxis: "[0 1 0 0] 0.25",
    vaxis: "[0 0 -1 0] 0.25",
};
static TEX_FACING_Y: TexAxes = TexAxes {
    uaxis: "[1 0 0 0] 0.25",
    vaxis: "[0 0 -1 0] 0.25",
};

/// Build the six faces of a block as a `solid` node.
///
/// Plane points are listed clockwise as seen from outside the solid — the
/// winding Hammer expects for outward-facing brushes.
pub fn solid_from_block(block: &BlockBox, material: &str, ids: &mut IdGen) -> KvNode {
    let half = Vector3::new(block.length / 2.0, block.width / 2.0, block.height / 2.0);
    let min = block.center() - half;
    let max = block.center() + half;

    let faces: [([Point3<f64>; 3], &TexAxes); 6] = [
        // top
        (
            [
                Point3::new(min.x, max.y, max.z),
                Point3::new(max.x, max.y, max.z),
                Point3::new(max.x, min.y, max.z),
            ],
            &TEX_HORIZONTAL,
        ),
        // bottom
        (
            [
                Point3::new(min.x, min.y, min.z),
                Point3::new(max.x, min.y, min.z),
                Point3::new(max.x, max.y, min.z),
            ],
            &TEX_HORIZONTAL,
        ),
        // west
        (
            [
                Point3::new(min.x, max.y, max.z),
                Point3::new(min.x, min.y, max.z),
                Point3::new(min.x, min.y, min.z),
            ],
            &TEX_FACING_X,
        ),
        // east
        (
            [
                Point3::new(max.x, max.y, min.z),
                Point3::new(max.x, min.y, min.z),
                Point3::new(max.x, min.y, max.z),
            ],
            &TEX_FACING_X,
        ),
        // north
        (
            [
                Point3::new(max.x, max.y, max.z),
                Point3::new(min.x, max.y, max.z),
                Point3::new(min.x, max.y, min.z),
            ],
            &TEX_FACING_Y,
        ),
        // south
        (
            [
                Point3::new(max.x, min.y, min.z),
                Point3::new(min.x, min.y, min.z),
                Point3::new(min.x, min.y, max.z),
            ],
            &TEX_FACING_Y,
        ),
    ];

    let mut solid = KvNode::new("solid").prop("id", ids.next_id().to_string());
    for (plane, tex) in &faces {
        solid.push_child(side_node(plane, tex, material, ids));
    }

    solid
}

fn side_node(plane: &[Point3<f64>; 3], tex: &TexAxes, material: &str, ids: &mut IdGen) -> KvNode {
    KvNode::new("side")
        .prop("id", ids.next_id().to_string())
        .prop("plane", fmt_plane(plane))
        .prop("material", material)
        .prop("uaxis", tex.uaxis)
        .prop("vaxis", tex.vaxis)
        .prop("rotation", "0")
        .prop("lightmapscale", "16")
        .prop("smoothing_groups", "0")
}

fn fmt_plane(plane: &[Point3<f64>; 3]) -> String {
    plane
        .iter()
        .map(|p| {
            format!(
                "({} {} {})",
                fmt_coord(p.x),
                fmt_coord(p.y),
                fmt_coord(p.z)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_block() -> BlockBox {
        BlockBox {
            center_x: 0.0,
            center_y: 0.0,
            center_z: 0.0,
            length: 2.0,
            width: 2.0,
            height: 2.0,
        }
    }

    #[test]
    fn test_id_allocation() {
        let mut ids = IdGen::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn test_solid_has_six_sides() {
        let mut ids = IdGen::new();
        let solid = solid_from_block(&unit_block(), "TOOLS/TOOLSNODRAW", &mut ids);

        let mut out = Vec::new();
        solid.write_to(&mut out, 0).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("side").count(), 6);
        assert_eq!(text.matches("TOOLS/TOOLSNODRAW").count(), 6);
        // 1 solid id + 6 side ids
        assert!(text.contains("\"id\" \"7\""));
    }

    #[test]
    fn test_top_plane_winding() {
        let mut ids = IdGen::new();
        let solid = solid_from_block(&unit_block(), "X", &mut ids);

        let mut out = Vec::new();
        solid.write_to(&mut out, 0).unwrap();
        let text = String::from_utf8(out).unwrap();

        // Clockwise from above across the z = +1 cap.
        assert!(text.contains("\"plane\" \"(-1 1 1) (1 1 1) (1 -1 1)\""));
        // Bottom cap mirrors it on z = -1.
        assert!(text.contains("\"plane\" \"(-1 -1 -1) (1 -1 -1) (1 1 -1)\""));
    }
}
