//! Cubegen CLI - Equirectangular panorama to cubemap converter.
//!
//! Converts a 2:1 spherical panorama into six square cube map faces using
//! inverse texture mapping with bilinear resampling.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use cubegen::cubemap::render_cubemap_with_progress;
use cubegen::export::{PngExportOptions, export_cubemap_png};
use cubegen::source::load_equirect;

/// Equirectangular panorama to cubemap converter.
#[derive(Parser)]
#[command(name = "cubegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a panorama into six cube map face images.
    Convert {
        /// Path of the input equirectangular image.
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the face images.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files. Defaults to the input file stem.
        #[arg(short, long)]
        name: Option<String>,

        /// Source width in pixels; the input is resized to width x width/2.
        /// Face edge length is width/4.
        #[arg(short, long, default_value = "2048")]
        width: u32,
    },

    /// Display information about a conversion configuration.
    Info {
        /// Source width in pixels.
        #[arg(short, long, default_value = "2048")]
        width: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            name,
            width,
        } => {
            run_convert(input, output, name, width);
        }
        Commands::Info { width } => {
            run_info(width);
        }
    }
}

fn run_convert(input: PathBuf, output: PathBuf, name: Option<String>, width: u32) {
    // Validate parameters
    if width < 16 || width > 8192 {
        eprintln!("Error: Width must be between 16 and 8192");
        std::process::exit(1);
    }

    if width % 4 != 0 {
        eprintln!("Error: Width must be a multiple of 4");
        std::process::exit(1);
    }

    let name = name.unwrap_or_else(|| {
        input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cubemap".to_string())
    });

    let edge = width / 4;

    println!("Cubegen - Equirectangular to Cubemap Converter");
    println!("==============================================");
    println!("Input: {}", input.display());
    println!("Source resolution: {}x{}", width, width / 2);
    println!("Face edge: {}x{}", edge, edge);
    println!("Output: {}", output.display());

    let start = Instant::now();

    println!("\nLoading source image...");
    let source = load_equirect(&input, width).unwrap_or_else(|e| {
        eprintln!("Error loading source image: {}", e);
        std::process::exit(1);
    });

    println!("Rendering cube map faces...");
    let cubemap = render_cubemap_with_progress(&source, edge, |face, i, total| {
        println!("  [{}/{}] {} face done", i + 1, total, face.short_name());
    });

    let render_time = start.elapsed();
    println!("Rendering completed in {:.2?}", render_time);

    println!("\nExporting face images...");
    let export_start = Instant::now();

    let options = PngExportOptions::default();
    export_cubemap_png(&cubemap, &output, &name, &options).unwrap_or_else(|e| {
        eprintln!("Error exporting PNG: {}", e);
        std::process::exit(1);
    });
    println!("  Exported 6 PNG files: {}_*.png", name);

    let export_time = export_start.elapsed();
    let total_time = start.elapsed();

    println!("Export completed in {:.2?}", export_time);
    println!("\nTotal time: {:.2?}", total_time);
    println!("Done!");
}

fn run_info(width: u32) {
    let height = width / 2;
    let edge = width / 4;
    let pixels_per_face = (edge as u64) * (edge as u64);
    let total_pixels = pixels_per_face * 6;

    let bytes_source = (width as u64) * (height as u64) * 3;
    let bytes_faces = total_pixels * 3;

    println!("Cubegen - Conversion Configuration Info");
    println!("=======================================");
    println!();
    println!("Source resolution: {}x{} (resized on load)", width, height);
    println!("Face edge: {}x{}", edge, edge);
    println!("Total faces: 6");
    println!();
    println!("Pixel counts:");
    println!("  Per face:  {:>12} pixels", pixels_per_face);
    println!("  Total:     {:>12} pixels", total_pixels);
    println!();
    println!("Memory usage (in-memory, RGB8):");
    println!(
        "  Source:    {:>12} bytes ({:.2} MB)",
        bytes_source,
        bytes_source as f64 / 1024.0 / 1024.0
    );
    println!(
        "  Cube map:  {:>12} bytes ({:.2} MB)",
        bytes_faces,
        bytes_faces as f64 / 1024.0 / 1024.0
    );
    println!();

    // Texture compatibility notes
    if is_power_of_two(edge) {
        println!("Face edge is a power of 2: OK for GPU texture use");
    } else {
        println!("Face edge is not a power of 2: some engines may reject it as a texture");
    }
}

fn is_power_of_two(n: u32) -> bool {
    n > 0 && (n & (n - 1)) == 0
}
