//! # zenbmp
//!
//! Uncompressed BMP codec with 90° rotation and Gaussian smoothing.
//!
//! The decoder keeps the file's padded, row-major pixel layout: rows are
//! stored bottom-up, each padded to a 4-byte boundary, exactly as they
//! appear on disk. The transforms do their index arithmetic directly on
//! that layout, so stride handling lives in one place ([`PixelBuffer`])
//! and every operation goes through it.
//!
//! ## Supported input
//!
//! Uncompressed BMP with a 54-byte header (BITMAPFILEHEADER +
//! BITMAPINFOHEADER), positive height (bottom-up rows), and a whole
//! number of bytes per pixel. Any gap between the header and the pixel
//! data (header extensions, color table) is skipped on decode and
//! zero-filled on encode.
//!
//! ## Non-Goals
//!
//! - RLE or bitfield compression
//! - Color-table / indexed-pixel expansion
//! - Sub-byte bit depths
//! - Other image formats
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{gaussian_blur, load, rotate_clockwise, save};
//!
//! let image = load("input.bmp")?;
//!
//! let rotated = rotate_clockwise(&image)?;
//! save("rotated.bmp", &rotated)?;
//!
//! let mut smoothed = image;
//! gaussian_blur(&mut smoothed, 2.0)?;
//! save("smoothed.bmp", &smoothed)?;
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod blur;
mod decode;
mod encode;
mod error;
#[cfg(feature = "std")]
mod file;
mod header;
mod image;
mod limits;
mod rotate;

// Re-exports
pub use blur::{gaussian_blur, gaussian_kernel};
pub use decode::{decode, DecodeRequest};
pub use encode::encode;
pub use error::BmpError;
#[cfg(feature = "std")]
pub use file::{load, save};
pub use header::{BmpHeader, HEADER_SIZE, SIGNATURE};
pub use image::{Image, PixelBuffer};
pub use limits::Limits;
pub use rotate::{rotate_clockwise, rotate_counterclockwise};
