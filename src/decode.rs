//! BMP decoding: header parse, gap skip, padded pixel region read.

use alloc::vec::Vec;

use crate::error::BmpError;
use crate::header::BmpHeader;
use crate::image::Image;
use crate::limits::Limits;

/// Decode a BMP byte buffer with no resource limits.
pub fn decode(data: &[u8]) -> Result<Image, BmpError> {
    DecodeRequest::new(data).decode()
}

/// Builder for BMP decoding.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Apply resource limits, checked after the header is parsed and
    /// before the pixel buffer is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self) -> Result<Image, BmpError> {
        let header = BmpHeader::parse(self.data)?;
        header.validate()?;

        let pixel_data_len = header.pixel_data_len()?;
        if let Some(limits) = self.limits {
            limits.check_dimensions(header.width as usize, header.height as usize)?;
            limits.check_memory(pixel_data_len)?;
        }

        // Anything between the 54-byte header and data_offset (header
        // extensions, color table) is opaque here and not kept.
        let start = header.data_offset as usize;
        let end = start
            .checked_add(pixel_data_len)
            .ok_or(BmpError::UnexpectedEof)?;
        let region: Vec<u8> = self
            .data
            .get(start..end)
            .ok_or(BmpError::UnexpectedEof)?
            .to_vec();

        Image::new(header, region)
    }
}
