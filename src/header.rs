//! Binary codec for the fixed 54-byte BMP header.
//!
//! On-disk layout is BITMAPFILEHEADER + BITMAPINFOHEADER, pack-1, all
//! multi-byte fields little-endian. Fields are sliced in and out at
//! explicit byte offsets so the in-memory struct layout never leaks
//! into the file format.

use alloc::format;

use crate::error::BmpError;

/// Serialized header size in bytes.
pub const HEADER_SIZE: usize = 54;

/// `b"BM"` as a little-endian u16.
pub const SIGNATURE: u16 = 0x4D42;

/// BMP file header.
///
/// Byte offsets within the 54-byte region:
///
/// | offset | size | field            |
/// |-------:|-----:|------------------|
/// |      0 |    2 | signature        |
/// |      2 |    4 | file_size        |
/// |      6 |    4 | reserved         |
/// |     10 |    4 | data_offset      |
/// |     14 |    4 | header_size      |
/// |     18 |    4 | width            |
/// |     22 |    4 | height           |
/// |     26 |    2 | planes           |
/// |     28 |    2 | bits_per_pixel   |
/// |     30 |    4 | compression      |
/// |     34 |    4 | data_size        |
/// |     38 |    4 | h_resolution     |
/// |     42 |    4 | v_resolution     |
/// |     46 |    4 | colors           |
/// |     50 |    4 | important_colors |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved: u32,
    /// Offset of the pixel data from the start of the file.
    pub data_offset: u32,
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Size of the padded pixel region in bytes.
    pub data_size: u32,
    pub h_resolution: i32,
    pub v_resolution: i32,
    pub colors: u32,
    pub important_colors: u32,
}

impl BmpHeader {
    /// Build a header for a new bottom-up image with pixel data starting
    /// right after the header (no gap, no color table).
    ///
    /// `file_size` and `data_size` are derived from the padded stride;
    /// resolution defaults to 2835 pixels/metre (72 DPI).
    pub fn with_dimensions(width: i32, height: i32, bits_per_pixel: u16) -> Result<Self, BmpError> {
        let mut header = BmpHeader {
            signature: SIGNATURE,
            file_size: 0,
            reserved: 0,
            data_offset: HEADER_SIZE as u32,
            header_size: 40,
            width,
            height,
            planes: 1,
            bits_per_pixel,
            compression: 0,
            data_size: 0,
            h_resolution: 2835,
            v_resolution: 2835,
            colors: 0,
            important_colors: 0,
        };
        header.validate()?;
        let data_size = header.pixel_data_len()?;
        header.data_size = checked_u32(data_size, &header)?;
        header.file_size = checked_u32(
            data_size
                .checked_add(HEADER_SIZE)
                .ok_or(BmpError::DimensionsTooLarge { width, height })?,
            &header,
        )?;
        Ok(header)
    }

    /// Parse the first 54 bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        if data.len() < HEADER_SIZE {
            return Err(BmpError::UnexpectedEof);
        }
        let signature = read_u16(data, 0);
        if signature != SIGNATURE {
            return Err(BmpError::UnrecognizedFormat);
        }
        Ok(BmpHeader {
            signature,
            file_size: read_u32(data, 2),
            reserved: read_u32(data, 6),
            data_offset: read_u32(data, 10),
            header_size: read_u32(data, 14),
            width: read_i32(data, 18),
            height: read_i32(data, 22),
            planes: read_u16(data, 26),
            bits_per_pixel: read_u16(data, 28),
            compression: read_u32(data, 30),
            data_size: read_u32(data, 34),
            h_resolution: read_i32(data, 38),
            v_resolution: read_i32(data, 42),
            colors: read_u32(data, 46),
            important_colors: read_u32(data, 50),
        })
    }

    /// Serialize to the fixed 54-byte layout, fields verbatim.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..2].copy_from_slice(&self.signature.to_le_bytes());
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..10].copy_from_slice(&self.reserved.to_le_bytes());
        out[10..14].copy_from_slice(&self.data_offset.to_le_bytes());
        out[14..18].copy_from_slice(&self.header_size.to_le_bytes());
        out[18..22].copy_from_slice(&self.width.to_le_bytes());
        out[22..26].copy_from_slice(&self.height.to_le_bytes());
        out[26..28].copy_from_slice(&self.planes.to_le_bytes());
        out[28..30].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        out[30..34].copy_from_slice(&self.compression.to_le_bytes());
        out[34..38].copy_from_slice(&self.data_size.to_le_bytes());
        out[38..42].copy_from_slice(&self.h_resolution.to_le_bytes());
        out[42..46].copy_from_slice(&self.v_resolution.to_le_bytes());
        out[46..50].copy_from_slice(&self.colors.to_le_bytes());
        out[50..54].copy_from_slice(&self.important_colors.to_le_bytes());
        out
    }

    /// Reject headers outside the supported uncompressed, bottom-up,
    /// whole-bytes-per-pixel subset.
    pub fn validate(&self) -> Result<(), BmpError> {
        if self.width <= 0 {
            return Err(BmpError::InvalidHeader(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if self.height <= 0 {
            // Negative height means a top-down pixel order.
            return Err(BmpError::InvalidHeader(format!(
                "height must be positive (bottom-up), got {}",
                self.height
            )));
        }
        if self.bits_per_pixel == 0 || self.bits_per_pixel % 8 != 0 {
            return Err(BmpError::UnsupportedVariant(format!(
                "{} bits per pixel",
                self.bits_per_pixel
            )));
        }
        if self.compression != 0 {
            return Err(BmpError::UnsupportedVariant(format!(
                "compression type {}",
                self.compression
            )));
        }
        if (self.data_offset as usize) < HEADER_SIZE {
            return Err(BmpError::InvalidHeader(format!(
                "pixel data offset {} overlaps the header",
                self.data_offset
            )));
        }
        Ok(())
    }

    /// Whole bytes per pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.bits_per_pixel) / 8
    }

    /// Bytes from the start of one pixel row to the next:
    /// `width * bytes_per_pixel` rounded up to a 4-byte boundary.
    pub fn row_stride(&self) -> Result<usize, BmpError> {
        if self.width <= 0 {
            return Err(BmpError::InvalidHeader(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        (self.width as usize)
            .checked_mul(self.bytes_per_pixel())
            .and_then(|row| row.checked_add(3))
            .map(|row| row & !3)
            .ok_or(BmpError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// Length of the padded pixel region, `row_stride * height`.
    pub fn pixel_data_len(&self) -> Result<usize, BmpError> {
        if self.height <= 0 {
            return Err(BmpError::InvalidHeader(format!(
                "height must be positive (bottom-up), got {}",
                self.height
            )));
        }
        self.row_stride()?
            .checked_mul(self.height as usize)
            .ok_or(BmpError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}

pub(crate) fn checked_u32(value: usize, header: &BmpHeader) -> Result<u32, BmpError> {
    u32::try_from(value).map_err(|_| BmpError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    })
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_i32(data: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
