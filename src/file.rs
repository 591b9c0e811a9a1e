//! Whole-file load/save on top of the slice codec.

use std::path::Path;

use crate::decode::decode;
use crate::encode::encode;
use crate::error::BmpError;
use crate::image::Image;

/// Read and decode a BMP file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Image, BmpError> {
    let data = std::fs::read(path)?;
    decode(&data)
}

/// Encode and write an image, creating or truncating the destination.
pub fn save<P: AsRef<Path>>(path: P, image: &Image) -> Result<(), BmpError> {
    std::fs::write(path, encode(image))?;
    Ok(())
}
