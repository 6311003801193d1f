mod common;

use common::checkerboard;
use pictor::prelude::*;

#[test]
fn test_png_round_trip() -> pictor::Result<()> {
    let image = checkerboard();
    let bytes = image.encode_to_bytes(ImageFormat::Png)?;
    assert_eq!(ImageFormat::infer_encoding(&bytes), ImageFormat::Png);

    let decoded = Image::<Rgba>::from_bytes(&bytes)?;
    assert_eq!(decoded.dimensions(), (16, 16));
    assert_eq!(decoded.format(), ImageFormat::Png);
    assert_eq!(decoded.data(), image.data());

    Ok(())
}

#[test]
fn test_png_luminance_round_trip() -> pictor::Result<()> {
    let image = Image::from_fn(8, 8, |x, y| L::new((x * 8 + y) as u8));
    let bytes = image.encode_to_bytes(ImageFormat::Png)?;

    let decoded = Image::<L>::from_bytes(&bytes)?;
    assert_eq!(decoded.data(), image.data());

    Ok(())
}

#[test]
fn test_png_preserves_translucency() -> pictor::Result<()> {
    let image = Image::new(4, 4, Rgba::new(255, 0, 0, 100));
    let bytes = image.encode_to_bytes(ImageFormat::Png)?;

    let decoded = Image::<Rgba>::from_bytes(&bytes)?;
    assert_eq!(decoded.pixel(0, 0).a, 100);

    Ok(())
}

#[test]
fn test_jpeg_round_trip_is_close() -> pictor::Result<()> {
    let image = Image::new(32, 32, Rgb::new(120, 80, 200));
    let bytes = image.encode_to_bytes(ImageFormat::Jpeg)?;
    assert_eq!(ImageFormat::infer_encoding(&bytes), ImageFormat::Jpeg);

    let decoded = Image::<Rgb>::from_bytes(&bytes)?;
    assert_eq!(decoded.dimensions(), (32, 32));
    assert_eq!(decoded.format(), ImageFormat::Jpeg);

    // Lossy codec, so compare within a tolerance
    let pixel = decoded.pixel(16, 16);
    assert!((i16::from(pixel.r) - 120).abs() <= 12);
    assert!((i16::from(pixel.g) - 80).abs() <= 12);
    assert!((i16::from(pixel.b) - 200).abs() <= 12);

    Ok(())
}

#[test]
fn test_jpeg_grayscale_encode() -> pictor::Result<()> {
    let image = Image::new(16, 16, L::new(180));
    let bytes = image.encode_to_bytes(ImageFormat::Jpeg)?;

    let decoded = Image::<L>::from_bytes(&bytes)?;
    assert!((i16::from(decoded.pixel(8, 8).value()) - 180).abs() <= 8);

    Ok(())
}

#[test]
fn test_gif_round_trip_is_close() -> pictor::Result<()> {
    let image = Image::new(16, 16, Rgba::new(128, 128, 128, 255));
    let bytes = image.encode_to_bytes(ImageFormat::Gif)?;
    assert_eq!(ImageFormat::infer_encoding(&bytes), ImageFormat::Gif);

    let decoded = Image::<Rgba>::from_bytes(&bytes)?;
    assert_eq!(decoded.dimensions(), (16, 16));
    assert_eq!(decoded.format(), ImageFormat::Gif);

    // The palette is quantized, so compare within a tolerance
    let pixel = decoded.pixel(8, 8);
    assert!((i16::from(pixel.r) - 128).abs() <= 16);
    assert!((i16::from(pixel.g) - 128).abs() <= 16);
    assert!((i16::from(pixel.b) - 128).abs() <= 16);

    Ok(())
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Image::<Rgba>::from_bytes(b"BM not an image").is_err());
    assert!(matches!(
        Image::new(2, 2, Rgba::black()).encode_to_bytes(ImageFormat::Unknown),
        Err(pictor::Error::UnknownEncodingFormat)
    ));
}

#[test]
fn test_empty_data_is_rejected() {
    let image = Image::from_pixels(4, Vec::<Rgba>::new());
    assert!(image.is_err());
}

#[test]
fn test_mime_types() {
    assert_eq!(ImageFormat::Png.mime_type(), Some("image/png"));
    assert_eq!(ImageFormat::from_mime_type("image/gif"), ImageFormat::Gif);
    assert_eq!(ImageFormat::from_mime_type("text/html"), ImageFormat::Unknown);
}
