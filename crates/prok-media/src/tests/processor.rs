use crate::processor::{decode, encode_jpeg, fit_within, normalize};
use crate::MediaError;

use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage, Rgba, RgbaImage};

fn rgb_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([120, 40, 200])))
}

fn png_bytes(image: &DynamicImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageOutputFormat::Png)
        .unwrap();
    buffer
}

#[test]
fn decode_accepts_valid_png_bytes() {
    let bytes = png_bytes(&rgb_image(8, 6));

    let decoded = decode(&bytes).unwrap();

    assert_eq!((decoded.width(), decoded.height()), (8, 6));
}

#[test]
fn decode_rejects_garbage_bytes() {
    let result = decode(b"definitely not an image");

    assert!(matches!(result, Err(MediaError::Decode { .. })));
}

#[test]
fn normalize_flattens_alpha_to_three_channels() {
    let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 128])));

    let normalized = normalize(rgba);

    assert!(matches!(normalized, DynamicImage::ImageRgb8(_)));
}

#[test]
fn fit_within_downscales_preserving_aspect_ratio() {
    let wide = rgb_image(600, 300);

    let fitted = fit_within(&wide, 400, 400);

    assert_eq!((fitted.width(), fitted.height()), (400, 200));
}

#[test]
fn fit_within_never_upscales() {
    let small = rgb_image(50, 30);

    let fitted = fit_within(&small, 400, 400);

    assert_eq!((fitted.width(), fitted.height()), (50, 30));
}

#[test]
fn encode_jpeg_produces_decodable_output() {
    let jpeg = encode_jpeg(&rgb_image(16, 16), 85).unwrap();

    let round_tripped = decode(&jpeg).unwrap();

    assert_eq!((round_tripped.width(), round_tripped.height()), (16, 16));
}
