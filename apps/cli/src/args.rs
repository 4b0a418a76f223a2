// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line options

use std::path::PathBuf;
use vmf_lite_vmf::{DEFAULT_MATERIAL, DEFAULT_SKYNAME};

/// Parsed command-line options with their defaults filled in.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Layout image, or a JSON file mapping images to base elevations.
    pub input: PathBuf,
    pub output: PathBuf,
    /// World units per layout pixel.
    pub pixel_size: f64,
    /// Floor thickness in world units.
    pub thickness: f64,
    pub material: String,
    pub skyname: String,
}

pub fn print_usage() {
    println!("layout-to-vmf - generate VMF level geometry from 2D layout images");
    println!();
    println!("Usage:");
    println!("  layout-to-vmf <input> [options]");
    println!();
    println!("  <input>               Layout image, or a JSON file mapping images");
    println!("                        to base elevations");
    println!();
    println!("Options:");
    println!("  -o, --output <path>       Output VMF file (default map.vmf)");
    println!("  -s, --pixel-size <units>  World units per pixel (default 64)");
    println!("  -t, --thickness <units>   Floor thickness in world units (default 16)");
    println!("  -m, --material <name>     Brush material (default tools/toolsnodraw)");
    println!("      --skyname <name>      Skybox name (default sky_day01_01)");
}

/// Parse the argument list (program name already stripped).
pub fn parse(argv: &[String]) -> std::result::Result<CliArgs, String> {
    let mut args = CliArgs {
        input: PathBuf::from(&argv[0]),
        output: PathBuf::from("map.vmf"),
        pixel_size: 64.0,
        thickness: 16.0,
        material: DEFAULT_MATERIAL.to_string(),
        skyname: DEFAULT_SKYNAME.to_string(),
    };

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--output" | "-o" => {
                i += 1;
                args.output = PathBuf::from(value(argv, i, "--output")?);
            }
            "--pixel-size" | "-s" => {
                i += 1;
                args.pixel_size = number(argv, i, "--pixel-size")?;
            }
            "--thickness" | "-t" => {
                i += 1;
                args.thickness = number(argv, i, "--thickness")?;
            }
            "--material" | "-m" => {
                i += 1;
                args.material = value(argv, i, "--material")?.to_string();
            }
            "--skyname" => {
                i += 1;
                args.skyname = value(argv, i, "--skyname")?.to_string();
            }
            other => return Err(format!("Unknown option: {other}")),
        }
        i += 1;
    }

    Ok(args)
}

fn value<'a>(argv: &'a [String], i: usize, flag: &str) -> std::result::Result<&'a str, String> {
    argv.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {flag}"))
}

fn number(argv: &[String], i: usize, flag: &str) -> std::result::Result<f64, String> {
    value(argv, i, flag)?
        .parse()
        .map_err(|_| format!("Invalid value for {flag}: {}", argv[i]))
}
