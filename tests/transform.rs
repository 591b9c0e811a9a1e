use zenbmp::*;

/// Build a bottom-up 24-bit image from per-pixel channel triples,
/// `pixels[y * width + x]` with row 0 at the visual bottom.
fn image_24bit(width: i32, height: i32, pixels: &[[u8; 3]]) -> Image {
    let header = BmpHeader::with_dimensions(width, height, 24).unwrap();
    let stride = header.row_stride().unwrap();
    let mut data = vec![0u8; header.pixel_data_len().unwrap()];
    for y in 0..height as usize {
        for x in 0..width as usize {
            let offset = y * stride + x * 3;
            data[offset..offset + 3].copy_from_slice(&pixels[y * width as usize + x]);
        }
    }
    Image::new(header, data).unwrap()
}

fn uniform_24bit(width: i32, height: i32, value: u8) -> Image {
    let count = (width * height) as usize;
    image_24bit(width, height, &vec![[value; 3]; count])
}

const RED: [u8; 3] = [255, 0, 0];
const GREEN: [u8; 3] = [0, 255, 0];
const BLUE: [u8; 3] = [0, 0, 255];
const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];

#[test]
fn rotate_clockwise_4x2() {
    // Buffer row 0 is the visual bottom row (all black); buffer row 1
    // is the visual top row.
    let image = image_24bit(
        4,
        2,
        &[
            BLACK, BLACK, BLACK, BLACK, // y = 0
            RED, GREEN, BLUE, WHITE, // y = 1
        ],
    );

    let rotated = rotate_clockwise(&image).unwrap();
    assert_eq!(rotated.width(), 2);
    assert_eq!(rotated.height(), 4);

    // old (x, y) -> new (y, new_height - 1 - x): the former top row
    // runs bottom-to-top along new column 1, last pixel first.
    assert_eq!(rotated.pixels().pixel(1, 0), WHITE);
    assert_eq!(rotated.pixels().pixel(1, 1), BLUE);
    assert_eq!(rotated.pixels().pixel(1, 2), GREEN);
    assert_eq!(rotated.pixels().pixel(1, 3), RED);
    for y in 0..4 {
        assert_eq!(rotated.pixels().pixel(0, y), BLACK);
    }

    // 2 pixels at 3 bytes round up to a stride of 8
    let header = rotated.header();
    assert_eq!(rotated.pixels().stride(), 8);
    assert_eq!(header.data_size, 32);
    assert_eq!(header.file_size, 54 + 32);
    for y in 0..4 {
        assert_eq!(&rotated.pixels().row(y)[6..8], &[0, 0]);
    }
}

#[test]
fn rotate_counterclockwise_4x2() {
    let image = image_24bit(
        4,
        2,
        &[
            BLACK, BLACK, BLACK, BLACK, // y = 0
            RED, GREEN, BLUE, WHITE, // y = 1
        ],
    );

    let rotated = rotate_counterclockwise(&image).unwrap();
    assert_eq!(rotated.width(), 2);
    assert_eq!(rotated.height(), 4);

    // old (x, y) -> new (new_width - 1 - y, x): the former top row runs
    // top-to-bottom along new column 0.
    assert_eq!(rotated.pixels().pixel(0, 0), RED);
    assert_eq!(rotated.pixels().pixel(0, 1), GREEN);
    assert_eq!(rotated.pixels().pixel(0, 2), BLUE);
    assert_eq!(rotated.pixels().pixel(0, 3), WHITE);
    for y in 0..4 {
        assert_eq!(rotated.pixels().pixel(1, y), BLACK);
    }
}

#[test]
fn rotate_involution() {
    let mut pixels = Vec::new();
    for y in 0..3u8 {
        for x in 0..5u8 {
            pixels.push([x * 40, y * 16, x * 10 + y]);
        }
    }
    let image = image_24bit(5, 3, &pixels);

    let there_and_back = rotate_counterclockwise(&rotate_clockwise(&image).unwrap()).unwrap();
    assert_eq!(there_and_back.width(), image.width());
    assert_eq!(there_and_back.height(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            assert_eq!(
                there_and_back.pixels().pixel(x, y),
                image.pixels().pixel(x, y),
                "pixel ({x}, {y})"
            );
        }
    }
    assert_eq!(there_and_back.header(), image.header());
}

#[test]
fn rotate_square_is_not_identity() {
    let image = image_24bit(2, 2, &[RED, GREEN, BLUE, WHITE]);

    let rotated = rotate_clockwise(&image).unwrap();
    assert_eq!(rotated.pixels().pixel(0, 1), RED); // from (0, 0)
    assert_eq!(rotated.pixels().pixel(0, 0), GREEN); // from (1, 0)
    assert_eq!(rotated.pixels().pixel(1, 1), BLUE); // from (0, 1)
    assert_eq!(rotated.pixels().pixel(1, 0), WHITE); // from (1, 1)
}

#[test]
fn rotate_preserves_unrelated_header_fields() {
    let mut header = BmpHeader::with_dimensions(3, 1, 24).unwrap();
    header.data_offset = 70;
    header.reserved = 0xDEAD_BEEF;
    header.v_resolution = 100;
    let data = vec![0u8; header.pixel_data_len().unwrap()];
    let image = Image::new(header, data).unwrap();

    let rotated = rotate_clockwise(&image).unwrap();
    let out = rotated.header();
    assert_eq!(out.width, 1);
    assert_eq!(out.height, 3);
    // 1 pixel at 3 bytes rounds up to a stride of 4
    assert_eq!(out.data_size, 12);
    // file_size counts header + pixel region only, gap excluded
    assert_eq!(out.file_size, 54 + 12);
    assert_eq!(out.data_offset, 70);
    assert_eq!(out.reserved, 0xDEAD_BEEF);
    assert_eq!(out.v_resolution, 100);
    assert_eq!(out.planes, 1);
}

#[test]
fn kernel_length_uses_truncating_arithmetic() {
    assert_eq!(gaussian_kernel(1.0).unwrap().len(), 7);
    assert_eq!(gaussian_kernel(7.0).unwrap().len(), 43);
    // 6 * 0.9 truncates to 5, not 6
    assert_eq!(gaussian_kernel(0.9).unwrap().len(), 6);
    assert_eq!(gaussian_kernel(0.1).unwrap().len(), 1);
}

#[test]
fn kernel_weights_sum_to_one() {
    for sigma in [0.5, 1.0, 2.7, 7.0] {
        let kernel = gaussian_kernel(sigma).unwrap();
        let sum: f64 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12, "sigma {sigma}: sum {sum}");
    }
}

#[test]
fn blur_rejects_bad_sigma() {
    let mut image = uniform_24bit(2, 2, 50);
    for sigma in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        match gaussian_blur(&mut image, sigma) {
            Err(BmpError::InvalidSigma(_)) => {}
            other => panic!("sigma {sigma}: expected InvalidSigma, got {other:?}"),
        }
    }
}

#[test]
fn blur_with_single_sample_kernel_is_identity() {
    let mut pixels = Vec::new();
    for i in 0..12u8 {
        pixels.push([i, 200 - i, i * 3]);
    }
    let original = image_24bit(4, 3, &pixels);

    // trunc(6 * 0.1) + 1 = 1 sample, normalized weight exactly 1.0
    let mut blurred = original.clone();
    gaussian_blur(&mut blurred, 0.1).unwrap();
    assert_eq!(blurred.pixels(), original.pixels());
}

#[test]
fn blur_uniform_image_unchanged() {
    for value in [0u8, 255] {
        let original = uniform_24bit(5, 3, value);
        let mut blurred = original.clone();
        gaussian_blur(&mut blurred, 1.0).unwrap();
        assert_eq!(blurred.pixels(), original.pixels(), "value {value}");
    }
}

#[test]
fn blur_is_horizontal_only() {
    // A black row under a white row: any vertical bleed would lift the
    // black row above zero.
    let image_pixels = [
        BLACK, BLACK, BLACK, BLACK, // y = 0
        WHITE, WHITE, WHITE, WHITE, // y = 1
    ];
    let mut image = image_24bit(4, 2, &image_pixels);
    gaussian_blur(&mut image, 1.0).unwrap();

    for x in 0..4 {
        assert_eq!(image.pixels().pixel(x, 0), BLACK);
        assert_eq!(image.pixels().pixel(x, 1), WHITE);
    }
}

#[test]
fn blur_clamps_at_row_edges() {
    let columns = [[10u8, 20, 30], [200, 100, 50], [40, 80, 120]];
    let mut image = image_24bit(3, 1, &columns);
    gaussian_blur(&mut image, 0.5).unwrap();

    // Recompute the expected edge columns with the same kernel and the
    // same clamped sample positions.
    let kernel = gaussian_kernel(0.5).unwrap();
    let center = (kernel.len() - 1) / 2;
    let width = 3isize;
    for x in [0usize, 2] {
        let mut expected = [0u8; 3];
        for channel in 0..3 {
            let mut sum = 0.0f64;
            for (i, weight) in kernel.iter().enumerate() {
                let pos = (x as isize + i as isize - center as isize).clamp(0, width - 1) as usize;
                sum += f64::from(columns[pos][channel]) * weight;
            }
            expected[channel] = sum as u8;
        }
        assert_eq!(image.pixels().pixel(x, 0), expected, "column {x}");
    }
}

#[test]
fn blur_leaves_header_untouched() {
    let original = uniform_24bit(4, 2, 90);
    let mut blurred = original.clone();
    gaussian_blur(&mut blurred, 2.0).unwrap();
    assert_eq!(blurred.header(), original.header());
    assert_eq!(blurred.header().to_bytes(), original.header().to_bytes());
}
