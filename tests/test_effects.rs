use pictor::effect::{
    Blur, Brightness, Colorize, Contrast, Convolution, Desaturate, EdgeDetect, Emboss, Invert,
    Pixelate, Sepia, Sketch, Smooth,
};
use pictor::prelude::*;

#[test]
fn test_invert() {
    let image = Image::new(2, 2, Rgba::new(10, 20, 30, 128)).filtered(&Invert);
    assert_eq!(*image.pixel(0, 0), Rgba::new(245, 235, 225, 128));
}

#[test]
fn test_desaturate() {
    let image = Image::new(2, 2, Rgba::new(255, 0, 0, 255)).filtered(&Desaturate);
    assert_eq!(*image.pixel(0, 0), Rgba::new(76, 76, 76, 255));
}

#[test]
fn test_brightness() -> pictor::Result<()> {
    let image = Image::new(1, 1, Rgba::new(100, 250, 0, 255));
    let brightened = image.clone().filtered(&Brightness::from_level(10.0)?);
    assert_eq!(*brightened.pixel(0, 0), Rgba::new(126, 255, 26, 255));

    let darkened = image.filtered(&Brightness::from_level(-10.0)?);
    assert_eq!(*darkened.pixel(0, 0), Rgba::new(75, 225, 0, 255));

    assert!(Brightness::from_level(101.0).is_err());
    Ok(())
}

#[test]
fn test_contrast_fixes_midpoint() -> pictor::Result<()> {
    let image = Image::new(1, 1, Rgba::new(128, 64, 192, 255));
    let adjusted = image.filtered(&Contrast::from_level(50.0)?);
    let pixel = *adjusted.pixel(0, 0);

    // The midpoint is invariant; values on either side spread apart
    assert!(pixel.r >= 127 && pixel.r <= 129);
    assert!(pixel.g < 64);
    assert!(pixel.b > 192);

    Ok(())
}

#[test]
fn test_colorize_clamps() {
    let image = Image::new(1, 1, Rgba::new(100, 200, 50, 255)).filtered(&Colorize::new(-120, 80, 0));
    assert_eq!(*image.pixel(0, 0), Rgba::new(0, 255, 50, 255));
}

#[test]
fn test_zero_sum_kernels_flatten_to_gray() {
    let flat = Image::new(5, 5, Rgba::new(90, 120, 45, 255));

    let edges = flat.clone().filtered(&EdgeDetect);
    assert_eq!(*edges.pixel(2, 2), Rgba::new(127, 127, 127, 255));

    let embossed = flat.filtered(&Emboss);
    assert_eq!(*embossed.pixel(2, 2), Rgba::new(127, 127, 127, 255));
}

#[test]
fn test_normalized_kernels_preserve_flat_color() {
    let flat = Image::new(5, 5, Rgba::new(90, 120, 45, 255));

    for filtered in [
        flat.clone().filtered(&Blur::new(3)),
        flat.clone().filtered(&Smooth::new(6.0)),
        flat.clone().filtered(&Sketch),
    ] {
        assert_eq!(*filtered.pixel(2, 2), *flat.pixel(2, 2));
    }
}

#[test]
fn test_custom_convolution_identity() {
    let image = Image::from_fn(4, 4, |x, y| Rgba::new(x as u8 * 60, y as u8 * 60, 0, 255));
    let identity = Convolution::new([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);

    let filtered = image.clone().filtered(&identity);
    assert_eq!(filtered.data(), image.data());
}

#[test]
fn test_convolution_keeps_alpha() {
    let image = Image::new(3, 3, Rgba::new(50, 50, 50, 70)).filtered(&Blur::default());
    assert_eq!(image.pixel(1, 1).a, 70);
}

#[test]
fn test_pixelate() {
    let mut image = Image::new(4, 4, Rgba::black());
    image.set_pixel(0, 0, Rgba::white());
    image.set_pixel(1, 0, Rgba::white());

    let sampled = image.clone().filtered(&Pixelate::new(2));
    // Block color comes from the block's top-left pixel
    assert_eq!(*sampled.pixel(1, 1), Rgba::white());
    assert_eq!(*sampled.pixel(3, 3), Rgba::black());

    let averaged = image.filtered(&Pixelate::new(2).with_average(true));
    assert_eq!(*averaged.pixel(1, 1), Rgba::new(127, 127, 127, 255));
}

#[test]
fn test_sepia() {
    let image = Image::new(1, 1, Rgba::white()).filtered(&Sepia);
    assert_eq!(*image.pixel(0, 0), Rgba::new(255, 255, 112, 255));
}

#[test]
fn test_filter_in_place() {
    let mut image = Image::new(2, 2, Rgba::new(10, 20, 30, 255));
    image.filter_in_place(&Invert);
    assert_eq!(*image.pixel(1, 1), Rgba::new(245, 235, 225, 255));
}

#[test]
fn test_filters_work_on_rgb_and_l() {
    let image = Image::new(2, 2, Rgb::new(10, 20, 30)).filtered(&Invert);
    assert_eq!(*image.pixel(0, 0), Rgb::new(245, 235, 225));

    let image = Image::new(2, 2, L::new(100)).filtered(&Invert);
    assert_eq!(image.pixel(0, 0).value(), 155);
}
