// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Valve Map Format document model and writer
//!
//! Turns an ordered sequence of axis-aligned blocks into a `.vmf` text
//! document Hammer can open: a KeyValues tree with a worldspawn holding
//! one six-sided brush solid per block.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vmf_lite_vmf::{VmfDocument, DEFAULT_MATERIAL};
//!
//! let mut doc = VmfDocument::new("sky_day01_01");
//! for block in &blocks {
//!     doc.add_block(block, DEFAULT_MATERIAL);
//! }
//! doc.write_to(&mut file)?;
//! ```

pub mod document;
pub mod error;
pub mod keyvalues;
pub mod solid;

// Re-export commonly used types and functions
pub use document::{VmfDocument, DEFAULT_MATERIAL, DEFAULT_SKYNAME};
pub use error::{Error, Result};
pub use keyvalues::KvNode;
pub use solid::{solid_from_block, IdGen};
