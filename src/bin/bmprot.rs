//! Command-line glue: rotate an input BMP both ways and smooth it.
//!
//! Produces three files next to the input (or under `--out-dir`):
//! `<stem>_right.bmp`, `<stem>_left.bmp`, `<stem>_blur.bmp`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{value_parser, Arg, Command};
use log::{error, info};

use zenbmp::{
    gaussian_blur, load, rotate_clockwise, rotate_counterclockwise, save, BmpError, Image,
};

fn create_cmd_args() -> Command {
    Command::new("bmprot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rotate an uncompressed BMP 90 degrees both ways and apply Gaussian smoothing")
        .arg(
            Arg::new("in")
                .help("Input BMP file")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("sigma")
                .long("sigma")
                .help("Gaussian smoothing strength")
                .value_parser(value_parser!(f64))
                .default_value("7.0"),
        )
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .help("Directory for output files (defaults to the input's directory)")
                .value_parser(value_parser!(PathBuf)),
        )
}

fn out_path(input: &Path, out_dir: Option<&PathBuf>, tag: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("output"));
    let mut name = stem.to_os_string();
    name.push(format!("_{tag}.bmp"));
    match out_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

fn run(input: &Path, out_dir: Option<&PathBuf>, sigma: f64) -> Result<(), BmpError> {
    let image: Image = load(input)?;
    info!(
        "loaded {} ({}x{}, {} bpp)",
        input.display(),
        image.width(),
        image.height(),
        image.header().bits_per_pixel
    );

    let rotated = rotate_clockwise(&image)?;
    let path = out_path(input, out_dir, "right");
    save(&path, &rotated)?;
    info!("rotated 90 degrees clockwise -> {}", path.display());

    let rotated = rotate_counterclockwise(&image)?;
    let path = out_path(input, out_dir, "left");
    save(&path, &rotated)?;
    info!("rotated 90 degrees counterclockwise -> {}", path.display());

    let mut smoothed = image;
    gaussian_blur(&mut smoothed, sigma)?;
    let path = out_path(input, out_dir, "blur");
    save(&path, &smoothed)?;
    info!("gaussian smoothing (sigma {sigma}) -> {}", path.display());

    Ok(())
}

fn main() {
    let matches = create_cmd_args().get_matches();

    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .expect("logger setup");

    let input = matches.get_one::<PathBuf>("in").expect("required arg");
    let out_dir = matches.get_one::<PathBuf>("out-dir");
    let sigma = *matches.get_one::<f64>("sigma").expect("defaulted arg");

    if let Err(err) = run(input, out_dir, sigma) {
        error!("{err}");
        exit(1);
    }
}
