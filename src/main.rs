extern crate clap;
extern crate cyclebrot;
extern crate env_logger;
extern crate failure;
extern crate image;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use image::bmp::BMPEncoder;
use image::ColorType;
use num::Complex;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use cyclebrot::config;
use cyclebrot::{BruteRenderer, Palette, Rgb};

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("cyclebrot")
        .version("0.1.0")
        .about("Mandelbrot renderer that colors the interior by orbit period")
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of worker threads (default: all hardware threads)"),
        )
        .get_matches()
}

/// Flattens the pixel grid to raw bytes and writes it as a BMP.
fn write_image(
    outfile: &str,
    pixels: &[Rgb],
    bounds: (usize, usize),
) -> Result<(), failure::Error> {
    let mut raw: Vec<u8> = Vec::with_capacity(pixels.len() * 3);
    for pixel in pixels {
        raw.push(pixel.r);
        raw.push(pixel.g);
        raw.push(pixel.b);
    }
    let mut output = File::create(Path::new(outfile))?;
    let mut encoder = BMPEncoder::new(&mut output);
    encoder.encode(&raw, bounds.0 as u32, bounds.1 as u32, ColorType::RGB(8))?;
    Ok(())
}

fn run() -> Result<(), failure::Error> {
    let matches = args();
    let threads = match matches.value_of(THREADS) {
        Some(s) => usize::from_str(s)?,
        None => num_cpus::get(),
    };
    info!("parallel on {} threads", threads);

    // The palette is frozen, and its export written, before any
    // worker starts.
    let palette = Palette::new();
    palette.export_to_path(config::COLOR_OUTPUT)?;
    info!("palette exported to {}", config::COLOR_OUTPUT);

    let renderer = BruteRenderer::new(
        config::WIDTH,
        config::HEIGHT,
        Complex::new(config::XMIN, config::YMIN),
        Complex::new(config::XMAX, config::YMAX),
        palette,
        if config::AA {
            Some(config::AA_SAMPLES)
        } else {
            None
        },
    )
    .map_err(failure::err_msg)?;

    let pixels = renderer.render(threads, true).map_err(failure::err_msg)?;
    println!("\x1b[1K\rfinished");

    write_image(config::RENDER_OUTPUT, &pixels, (config::WIDTH, config::HEIGHT))?;
    info!("image written to {}", config::RENDER_OUTPUT);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
