// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! layout-to-vmf: convert 2D layout images into VMF level geometry
//!
//! Bright pixels in the layout mark floor; dark pixels mark empty space.
//! Each image becomes one elevation layer of axis-aligned floor brushes,
//! written into a single VMF the Hammer editor can open.
//!
//! Usage:
//!   layout-to-vmf <image-or-config.json> [options]

use image::ImageReader;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use tracing::info;
use vmf_lite_core::{layout_to_blocks, BlockBox, RasterGrid};
use vmf_lite_vmf::VmfDocument;

mod args;
mod error;
mod layers;

use args::CliArgs;
use error::{Error, Result};
use layers::Layer;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let argv: Vec<String> = env::args().skip(1).collect();
    if argv.is_empty() || argv[0] == "--help" || argv[0] == "-h" {
        args::print_usage();
        return;
    }

    let options = match args::parse(&argv) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!();
            args::print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = run(&options) {
        tracing::error!("{err}");
        process::exit(1);
    }
}

fn run(options: &CliArgs) -> Result<()> {
    let layer_list = layers::load_layers(&options.input)?;
    info!("[1/3] Processing {} layer(s)", layer_list.len());

    // Blocks accumulate across layers in layer order; nothing is shared
    // between layer runs.
    let mut blocks: Vec<BlockBox> = Vec::new();
    for layer in &layer_list {
        let layer_blocks = process_layer(layer, options)?;
        info!(
            "  {} at elevation {}: {} block(s)",
            layer.image.display(),
            layer.elevation,
            layer_blocks.len()
        );
        blocks.extend(layer_blocks);
    }

    info!("[2/3] Building map document ({} blocks)", blocks.len());
    let mut doc = VmfDocument::new(&options.skyname);
    for block in &blocks {
        doc.add_block(block, &options.material);
    }

    info!("[3/3] Writing {}", options.output.display());
    let file = File::create(&options.output).map_err(|source| Error::WriteOutput {
        path: options.output.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    doc.write_to(&mut writer)?;
    writer.flush().map_err(|source| Error::WriteOutput {
        path: options.output.display().to_string(),
        source,
    })?;

    info!("Done");
    Ok(())
}

/// Run one layer through the detection pipeline and scale it into world
/// units.
fn process_layer(layer: &Layer, options: &CliArgs) -> Result<Vec<BlockBox>> {
    let path = layer.image.display().to_string();

    let decoded = ImageReader::open(&layer.image)
        .map_err(|source| Error::ReadInput {
            path: path.clone(),
            source,
        })?
        .decode()
        .map_err(|source| Error::DecodeImage {
            path: path.clone(),
            source,
        })?;

    // Classification treats every channel alike, so an opaque alpha channel
    // would mark every pixel as floor. Feed 3-channel RGB.
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    info!("  {} ({}x{} px)", path, width, height);

    let grid = RasterGrid::from_raw(width, height, 3, rgb.into_raw())?;
    let mut blocks = layout_to_blocks(&grid, layer.elevation, options.thickness)?;

    // Pixel-to-world scaling covers centers and planar extents; the
    // thickness already arrives in world units.
    for block in &mut blocks {
        block.scale(options.pixel_size);
    }

    Ok(blocks)
}
