//! Font loading and text rasterization.

use crate::error::{Error, Result};
use crate::pixel::{OverlayMode, Pixel, Rgba};
use crate::{Draw, Image};

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use fontdue::FontSettings;

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A TrueType or OpenType font used to render text.
#[derive(Clone)]
pub struct Font {
    inner: fontdue::Font,
    settings: FontSettings,
}

impl Font {
    /// Opens the font from the given path.
    ///
    /// The optimal size is not a fixed rendering size; it is the size the
    /// rasterizer is optimized for. It is best set to the size the font will
    /// most commonly be rendered at.
    ///
    /// # Errors
    /// * Failed to read or parse the font.
    pub fn open(path: impl AsRef<Path>, optimal_size: f32) -> Result<Self> {
        Self::from_reader(File::open(path)?, optimal_size)
    }

    /// Loads the font from the given byte slice. Useful with the
    /// `include_bytes!` macro.
    ///
    /// # Errors
    /// * Failed to parse the font.
    pub fn from_bytes(bytes: &[u8], optimal_size: f32) -> Result<Self> {
        let settings = FontSettings {
            scale: optimal_size,
            collection_index: 0,
        };
        let inner = fontdue::Font::from_bytes(bytes, settings).map_err(Error::FontError)?;

        Ok(Self { inner, settings })
    }

    /// Loads the font from the given byte reader.
    ///
    /// # Errors
    /// * Failed to read or parse the font.
    pub fn from_reader(mut stream: impl Read, optimal_size: f32) -> Result<Self> {
        let mut buffer = Vec::new();
        stream.read_to_end(&mut buffer)?;

        Self::from_bytes(&buffer, optimal_size)
    }

    /// Returns a reference to the underlying [`fontdue::Font`].
    #[must_use]
    pub const fn inner(&self) -> &fontdue::Font {
        &self.inner
    }

    /// Returns the size, in pixels, the font rasterizer is optimized for.
    #[must_use]
    pub const fn optimal_size(&self) -> f32 {
        self.settings.scale
    }
}

/// A single-styled run of text that can be drawn onto an image.
#[derive(Clone)]
pub struct TextSegment<'a, P: Pixel> {
    /// The position of the text's top-left corner.
    pub position: (u32, u32),
    /// The content of the text segment.
    pub text: String,
    /// The font to render the text with.
    pub font: &'a Font,
    /// The fill color of the text.
    pub fill: P,
    /// The size of the text, in pixels.
    pub size: f32,
    /// The overlay mode used to composite the glyphs. Anti-aliased edges only
    /// look right with [`OverlayMode::Merge`], which is the default.
    pub overlay: OverlayMode,
}

impl<'a, P: Pixel> TextSegment<'a, P> {
    /// Creates a new text segment at `(0, 0)` with the font's optimal size.
    #[must_use]
    pub fn new(font: &'a Font, text: impl AsRef<str>, fill: P) -> Self {
        Self {
            position: (0, 0),
            text: text.as_ref().to_string(),
            font,
            fill,
            size: font.optimal_size(),
            overlay: OverlayMode::Merge,
        }
    }

    #[must_use]
    pub const fn with_position(mut self, x: u32, y: u32) -> Self {
        self.position = (x, y);
        self
    }

    #[must_use]
    pub const fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn with_overlay_mode(mut self, mode: OverlayMode) -> Self {
        self.overlay = mode;
        self
    }
}

impl<P: Pixel> Draw<P> for TextSegment<'_, P> {
    #[allow(clippy::cast_precision_loss)]
    fn draw(&self, image: &mut Image<P>) {
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: self.position.0 as f32,
            y: self.position.1 as f32,
            ..LayoutSettings::default()
        });
        layout.append(
            &[self.font.inner()],
            &TextStyle::new(&self.text, self.size, 0),
        );

        let fill = self.fill.as_rgba();

        for glyph in layout.glyphs() {
            if glyph.char_data.is_whitespace() {
                continue;
            }

            let (metrics, bitmap) = self.font.inner().rasterize_config(glyph.key);
            if metrics.width == 0 || metrics.height == 0 {
                continue;
            }

            for (row, y) in bitmap.chunks_exact(metrics.width).zip(glyph.y as i32..) {
                for (&coverage, x) in row.iter().zip(glyph.x as i32..) {
                    if coverage == 0 || x < 0 || y < 0 {
                        continue;
                    }

                    let (x, y) = (x as u32, y as u32);
                    // Scale the fill's alpha by the glyph coverage
                    let alpha = (u16::from(fill.a) * u16::from(coverage) / 255) as u8;
                    let source = P::from_rgba(Rgba { a: alpha, ..fill });

                    if let Some(&pixel) = image.get_pixel(x, y) {
                        image.set_pixel(x, y, pixel.overlay(source, self.overlay));
                    }
                }
            }
        }
    }
}
