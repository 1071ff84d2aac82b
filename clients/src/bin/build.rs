//! `triglut-build` — Generates the Q9.7 trig lookup table and writes it as a
//! COE memory-initialization file.
//!
//! **Outputs:**
//! - `<out>/triglut.coe` — 1024 × 64-bit records `[sin, cos, tan, cot]`
//! - `<out>/{sin,cos,tan,cot}.coe` — one 16-bit column each (with `--split`)
//! - `<out>/triglut.json` — JSON sidecar (with `--json`)
//!
//! **Usage:**
//! ```
//! triglut-build [--out <path>] [--split] [--json]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use triglut::fixed::to_unsigned_hex;
use triglut::serializer::{coe, json};
use triglut::{TrigTable, CARDINAL_ANGLES};

/// Build the TrigLUT memory-initialization artifacts.
#[derive(Parser)]
#[command(name = "triglut-build", about = "Build the Q9.7 trig lookup table COE file")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Also write one COE file per function (sin.coe, cos.coe, tan.coe, cot.coe).
    #[arg(long)]
    split: bool,

    /// Also write a JSON sidecar (triglut.json).
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    println!("Generating trig lookup table...");
    let table = TrigTable::full();

    println!("Writing combined COE file...");
    let coe_path = out.join("triglut.coe");
    coe::write_coe(&coe_path, &coe::to_coe(table))
        .with_context(|| format!("Failed to write {}", coe_path.display()))?;
    println!("  Written: {}", coe_path.display());

    if args.split {
        for (name, column) in table.columns() {
            let path = out.join(format!("{name}.coe"));
            coe::write_coe(&path, &coe::to_single_coe(column, name))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("  Written: {}", path.display());
        }
    }

    if args.json {
        let json_path = out.join("triglut.json");
        let json_str = serde_json::to_string_pretty(&json::to_json(table))
            .context("Failed to serialize table to JSON")?;
        fs::write(&json_path, &json_str)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        println!("  Written: {}", json_path.display());
    }

    println!("Table: {} entries", table.len());
    println!("  Width: 64 bits (sin[15:0], cos[15:0], tan[15:0], cot[15:0])");
    println!("  Format: Q9.7 (16-bit signed fixed point, 7 fractional bits)");

    println!();
    println!("Cardinal angles:");
    for (index, label) in CARDINAL_ANGLES {
        let Some(e) = table.entry(index) else {
            continue;
        };
        println!(
            "  {label:5}: sin={:6} ({}), cos={:6} ({})",
            e.sin,
            to_unsigned_hex(e.sin),
            e.cos,
            to_unsigned_hex(e.cos)
        );
        println!(
            "         tan={:6} ({}), cot={:6} ({})",
            e.tan,
            to_unsigned_hex(e.tan),
            e.cot,
            to_unsigned_hex(e.cot)
        );
    }

    println!("Build complete.");
    Ok(())
}
