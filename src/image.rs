//! Owned image model: a header plus its derived padded pixel buffer.

use alloc::vec::Vec;

use crate::error::BmpError;
use crate::header::BmpHeader;

/// Padded, row-major pixel bytes with stride-aware addressing.
///
/// Row `y` occupies `[y*stride, y*stride + width*bpp)`; the trailing
/// `stride - width*bpp` bytes per row are 4-byte alignment padding and
/// are never interpreted as pixel data. Rows are stored in file order,
/// visual bottom row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    stride: usize,
    bytes_per_pixel: usize,
}

impl PixelBuffer {
    /// Wrap an exactly-sized byte region. Callers have already derived
    /// `data.len()` as `stride * height` from a validated header.
    pub(crate) fn from_vec(data: Vec<u8>, stride: usize, bytes_per_pixel: usize) -> Self {
        debug_assert!(stride % 4 == 0);
        debug_assert!(data.len() % stride == 0);
        Self {
            data,
            stride,
            bytes_per_pixel,
        }
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Whole bytes per pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    /// The full padded region, rows bottom-up.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// One padded row (`stride` bytes).
    pub fn row(&self, y: usize) -> &[u8] {
        &self.data[y * self.stride..(y + 1) * self.stride]
    }

    /// Byte offset of pixel (x, y).
    pub fn pixel_offset(&self, x: usize, y: usize) -> usize {
        y * self.stride + x * self.bytes_per_pixel
    }

    /// The channel bytes of pixel (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let offset = self.pixel_offset(x, y);
        &self.data[offset..offset + self.bytes_per_pixel]
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [u8] {
        let offset = self.pixel_offset(x, y);
        &mut self.data[offset..offset + self.bytes_per_pixel]
    }
}

/// A decoded BMP: header plus pixel buffer.
///
/// The buffer length is always derived from the header's
/// width/height/bits-per-pixel at construction; the two cannot diverge.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    header: BmpHeader,
    pixels: PixelBuffer,
}

impl Image {
    /// Build an image from a validated header and an exactly-sized
    /// pixel region (padded rows, bottom-up).
    pub fn new(header: BmpHeader, data: Vec<u8>) -> Result<Self, BmpError> {
        header.validate()?;
        let expected = header.pixel_data_len()?;
        if data.len() != expected {
            return Err(BmpError::InvalidData(alloc::format!(
                "pixel region is {} bytes, header implies {expected}",
                data.len()
            )));
        }
        let stride = header.row_stride()?;
        Ok(Self {
            header,
            pixels: PixelBuffer::from_vec(data, stride, header.bytes_per_pixel()),
        })
    }

    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    /// Image width in pixels (validated positive at construction).
    pub fn width(&self) -> usize {
        self.header.width as usize
    }

    /// Image height in pixels (validated positive at construction).
    pub fn height(&self) -> usize {
        self.header.height as usize
    }

    /// Swap in a same-geometry pixel buffer, leaving the header alone.
    pub(crate) fn replace_pixel_data(&mut self, data: Vec<u8>) {
        debug_assert_eq!(data.len(), self.pixels.as_bytes().len());
        self.pixels = PixelBuffer::from_vec(data, self.pixels.stride, self.pixels.bytes_per_pixel);
    }
}
