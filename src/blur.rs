//! Gaussian smoothing over the padded pixel buffer.
//!
//! The pass convolves along the horizontal axis only, with edge
//! replication: sample positions past a row end reuse the nearest valid
//! column. Out-of-range positions are never read from padding bytes.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::BmpError;
use crate::image::Image;

/// Build the normalized 1-D Gaussian kernel for `sigma`.
///
/// The kernel holds `trunc(6*sigma) + 1` samples centered at the integer
/// index `(len - 1) / 2`, so even lengths sit asymmetrically around the
/// peak. Weights are `exp(-(i-center)^2 / (2*sigma^2))`, normalized to
/// sum to 1.0.
pub fn gaussian_kernel(sigma: f64) -> Result<Vec<f64>, BmpError> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(BmpError::InvalidSigma(sigma));
    }
    let len = ((6.0 * sigma) as usize)
        .checked_add(1)
        .ok_or(BmpError::InvalidSigma(sigma))?;
    let center = (len - 1) / 2;

    let mut kernel = Vec::with_capacity(len);
    for i in 0..len {
        let x = i as f64 - center as f64;
        kernel.push((-(x * x) / (2.0 * sigma * sigma)).exp());
    }
    let sum: f64 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    Ok(kernel)
}

/// Smooth the image horizontally with an edge-clamped Gaussian kernel.
///
/// Replaces the pixel buffer in place; the header is untouched. Samples
/// are read from the original buffer only and written to a fresh one,
/// so later pixels never see already-smoothed neighbors.
pub fn gaussian_blur(image: &mut Image, sigma: f64) -> Result<(), BmpError> {
    let kernel = gaussian_kernel(sigma)?;
    let center = (kernel.len() - 1) / 2;

    let width = image.width();
    let height = image.height();
    let bpp = image.pixels().bytes_per_pixel();
    let stride = image.pixels().stride();
    let src = image.pixels().as_bytes();

    let mut out = vec![0u8; src.len()];
    let mut channels = vec![0.0f64; bpp];

    for y in 0..height {
        let row = y * stride;
        for x in 0..width {
            channels.fill(0.0);
            for (i, weight) in kernel.iter().enumerate() {
                let pos_x = (x as isize + i as isize - center as isize)
                    .clamp(0, width as isize - 1) as usize;
                let sample = row + pos_x * bpp;
                for (channel, value) in channels.iter_mut().enumerate() {
                    *value += f64::from(src[sample + channel]) * weight;
                }
            }
            let offset = row + x * bpp;
            for (channel, value) in channels.iter().enumerate() {
                // Truncating cast: a normalized kernel over u8 samples
                // keeps the sum inside [0, 255].
                out[offset + channel] = *value as u8;
            }
        }
    }

    image.replace_pixel_data(out);
    Ok(())
}
