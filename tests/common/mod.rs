use pictor::prelude::*;

pub const COLORS: [Rgba; 8] = [
    Rgba::new(255, 0, 0, 255),
    Rgba::new(255, 128, 0, 255),
    Rgba::new(255, 255, 0, 255),
    Rgba::new(0, 255, 0, 255),
    Rgba::new(0, 255, 255, 255),
    Rgba::new(0, 0, 255, 255),
    Rgba::new(128, 0, 255, 255),
    Rgba::new(255, 0, 128, 255),
];

/// A 16x16 red/white checkerboard.
pub fn checkerboard() -> Image<Rgba> {
    Image::from_fn(16, 16, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba::white()
        } else {
            Rgba::new(255, 0, 0, 255)
        }
    })
}
