//! BMP encoding: verbatim header, zero-filled gap, padded rows.

use alloc::vec::Vec;

use crate::header::HEADER_SIZE;
use crate::image::Image;

/// Encode an image back to BMP bytes.
///
/// The header is written field-for-field as stored. The gap between the
/// 54-byte header and `data_offset` is written as zeros — color-table or
/// header-extension bytes from the source file are not round-tripped.
/// Rows go out at the buffer's own stride, bottom-up, padding included.
pub fn encode(image: &Image) -> Vec<u8> {
    let header = image.header();
    let gap = (header.data_offset as usize).saturating_sub(HEADER_SIZE);
    let pixel_bytes = image.pixels().as_bytes().len();

    let mut out = Vec::with_capacity(HEADER_SIZE + gap + pixel_bytes);
    out.extend_from_slice(&header.to_bytes());
    out.extend(core::iter::repeat_n(0u8, gap));
    for y in 0..image.height() {
        out.extend_from_slice(image.pixels().row(y));
    }
    out
}
