//! 90° rotations via index remapping into a freshly sized buffer.

use alloc::vec;

use crate::error::BmpError;
use crate::header::{checked_u32, HEADER_SIZE};
use crate::image::Image;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Rotation {
    Clockwise,
    Counterclockwise,
}

/// Rotate 90° clockwise, returning a new image.
///
/// Old pixel (x, y) lands at (y, new_height - 1 - x). Width and height
/// swap; `file_size` and `data_size` are recomputed for the new stride
/// and every other header field is carried over unchanged.
pub fn rotate_clockwise(image: &Image) -> Result<Image, BmpError> {
    rotate(image, Rotation::Clockwise)
}

/// Rotate 90° counter-clockwise, returning a new image.
///
/// Old pixel (x, y) lands at (new_width - 1 - y, x); header handling as
/// for [`rotate_clockwise`].
pub fn rotate_counterclockwise(image: &Image) -> Result<Image, BmpError> {
    rotate(image, Rotation::Counterclockwise)
}

fn rotate(image: &Image, direction: Rotation) -> Result<Image, BmpError> {
    let old_width = image.width();
    let old_height = image.height();
    let bpp = image.pixels().bytes_per_pixel();
    let old_stride = image.pixels().stride();

    let mut header = *image.header();
    header.width = image.header().height;
    header.height = image.header().width;

    let new_stride = header.row_stride()?;
    let data_size = header.pixel_data_len()?;
    header.data_size = checked_u32(data_size, &header)?;
    header.file_size = checked_u32(
        HEADER_SIZE
            .checked_add(data_size)
            .ok_or(BmpError::DimensionsTooLarge {
                width: header.width,
                height: header.height,
            })?,
        &header,
    )?;

    let (new_width, new_height) = (old_height, old_width);
    let src = image.pixels().as_bytes();
    let mut dst = vec![0u8; data_size];

    // The remap is a bijection over the pixel grid: every destination
    // pixel is written exactly once; destination padding stays zero.
    for y in 0..old_height {
        for x in 0..old_width {
            let (new_x, new_y) = match direction {
                Rotation::Clockwise => (y, new_height - 1 - x),
                Rotation::Counterclockwise => (new_width - 1 - y, x),
            };
            let from = y * old_stride + x * bpp;
            let to = new_y * new_stride + new_x * bpp;
            dst[to..to + bpp].copy_from_slice(&src[from..from + bpp]);
        }
    }

    Image::new(header, dst)
}
