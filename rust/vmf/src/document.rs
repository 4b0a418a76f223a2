// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! VMF document assembly and serialization

use crate::error::Result;
use crate::keyvalues::KvNode;
use crate::solid::{solid_from_block, IdGen};
use std::io::Write;
use vmf_lite_core::BlockBox;

/// Default skybox applied when the caller does not pick one.
pub const DEFAULT_SKYNAME: &str = "sky_day01_01";

/// Default brush material.
pub const DEFAULT_MATERIAL: &str = "tools/toolsnodraw";

/// A map document under construction: a worldspawn full of brush solids.
///
/// Ids are unique across the whole document; the world takes the first
/// one, each added solid and its sides take the following.
#[derive(Debug)]
pub struct VmfDocument {
    skyname: String,
    world_id: u32,
    solids: Vec<KvNode>,
    ids: IdGen,
}

impl VmfDocument {
    pub fn new(skyname: impl Into<String>) -> Self {
        let mut ids = IdGen::new();
        let world_id = ids.next_id();
        Self {
            skyname: skyname.into(),
            world_id,
            solids: Vec::new(),
            ids,
        }
    }

    /// Add one block as a six-sided brush.
    pub fn add_block(&mut self, block: &BlockBox, material: &str) {
        self.solids
            .push(solid_from_block(block, material, &mut self.ids));
    }

    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    /// Serialize the document: versioninfo and viewsettings preamble, the
    /// world with its solids, then the cameras and cordon epilogue.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        let versioninfo = KvNode::new("versioninfo")
            .prop("editorversion", "400")
            .prop("editorbuild", "8864")
            .prop("mapversion", "1")
            .prop("formatversion", "100")
            .prop("prefab", "0");
        versioninfo.write_to(w, 0)?;

        KvNode::new("visgroups").write_to(w, 0)?;

        let viewsettings = KvNode::new("viewsettings")
            .prop("bSnapToGrid", "1")
            .prop("bShowGrid", "1")
            .prop("bShowLogicalGrid", "0")
            .prop("nGridSpacing", "64")
            .prop("bShow3DGrid", "0");
        viewsettings.write_to(w, 0)?;

        let mut world = KvNode::new("world")
            .prop("id", self.world_id.to_string())
            .prop("mapversion", "1")
            .prop("classname", "worldspawn")
            .prop("detailmaterial", "detail/detailsprites")
            .prop("detailvbsp", "detail.vbsp")
            .prop("maxpropscreenwidth", "-1")
            .prop("skyname", self.skyname.as_str());
        for solid in &self.solids {
            world.push_child(solid.clone());
        }
        world.write_to(w, 0)?;

        let cameras = KvNode::new("cameras").prop("activecamera", "-1");
        cameras.write_to(w, 0)?;

        let cordon = KvNode::new("cordon")
            .prop("mins", "(-1024 -1024 -1024)")
            .prop("maxs", "(1024 1024 1024)")
            .prop("active", "0");
        cordon.write_to(w, 0)?;

        Ok(())
    }
}

impl Default for VmfDocument {
    fn default() -> Self {
        Self::new(DEFAULT_SKYNAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_at(center_x: f64) -> BlockBox {
        BlockBox {
            center_x,
            center_y: 0.0,
            center_z: 4.0,
            length: 2.0,
            width: 2.0,
            height: 8.0,
        }
    }

    #[test]
    fn test_empty_document_structure() {
        let doc = VmfDocument::default();

        let mut out = Vec::new();
        doc.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("versioninfo\n{\n"));
        assert!(text.contains("\"classname\" \"worldspawn\""));
        assert!(text.contains("\"skyname\" \"sky_day01_01\""));
        assert!(text.contains("cordon\n{\n"));
        assert!(!text.contains("solid\n"));
    }

    #[test]
    fn test_solids_land_in_world() {
        let mut doc = VmfDocument::new("sky_night_01");
        doc.add_block(&block_at(0.0), DEFAULT_MATERIAL);
        doc.add_block(&block_at(16.0), DEFAULT_MATERIAL);

        assert_eq!(doc.solid_count(), 2);

        let mut out = Vec::new();
        doc.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("\tsolid\n").count(), 2);
        assert_eq!(text.matches("tools/toolsnodraw").count(), 12);
        assert!(text.contains("\"skyname\" \"sky_night_01\""));
    }

    #[test]
    fn test_document_ids_unique() {
        let mut doc = VmfDocument::default();
        doc.add_block(&block_at(0.0), DEFAULT_MATERIAL);
        doc.add_block(&block_at(16.0), DEFAULT_MATERIAL);

        let mut out = Vec::new();
        doc.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut seen = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix("\"id\" \"") {
                let id: u32 = rest.trim_end_matches('"').parse().unwrap();
                assert!(!seen.contains(&id), "duplicate id {id}");
                seen.push(id);
            }
        }
        // world + 2 * (solid + 6 sides)
        assert_eq!(seen.len(), 15);
    }
}
