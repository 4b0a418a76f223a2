// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layer configuration: layout images tagged with base elevations

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// One layout image and the elevation its floor sits on.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub image: PathBuf,
    pub elevation: f64,
}

/// Load the layer list for an input path.
///
/// A `.json` input holds an object mapping image paths to base elevations,
/// `{"ground.png": 0, "upper.png": 128}`. Any other input is a single
/// implicit layer at elevation zero. Keys iterate in sorted order so
/// repeated runs emit identical documents.
pub fn load_layers(input: &Path) -> Result<Vec<Layer>> {
    if input.extension().and_then(OsStr::to_str) != Some("json") {
        return Ok(vec![Layer {
            image: input.to_path_buf(),
            elevation: 0.0,
        }]);
    }

    let text = fs::read_to_string(input).map_err(|source| Error::ReadInput {
        path: input.display().to_string(),
        source,
    })?;
    let map: BTreeMap<String, f64> =
        serde_json::from_str(&text).map_err(|source| Error::LayerConfig {
            path: input.display().to_string(),
            source,
        })?;

    Ok(map
        .into_iter()
        .map(|(image, elevation)| Layer {
            image: PathBuf::from(image),
            elevation,
        })
        .collect())
}
