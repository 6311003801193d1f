use crate::draw::Draw;
use crate::error::{Error, Result};
use crate::format::ImageFormat;
use crate::pixel::{OverlayMode, Pixel, Rgba};
use crate::position::Anchor;
#[cfg(feature = "resize")]
use crate::resize::{self, FilterType};

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// The orientation of an image, derived from its aspect ratio.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The image is wider than it is tall.
    Landscape,
    /// The image is taller than it is wide.
    Portrait,
    /// The image is exactly as wide as it is tall.
    Square,
}

/// A high-level image representation.
///
/// This represents a static, single-frame image. The pixel type defaults to
/// [`Rgba`], the common truecolor domain.
#[derive(Clone)]
pub struct Image<P: Pixel = Rgba> {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<P>,
    pub(crate) format: ImageFormat,
    pub(crate) overlay: OverlayMode,
}

impl<P: Pixel> Image<P> {
    /// Creates a new image with the given dimensions, with every pixel set to
    /// `fill`.
    ///
    /// # Panics
    /// * Either dimension is zero.
    #[must_use]
    pub fn new(width: u32, height: u32, fill: P) -> Self {
        assert!(width > 0 && height > 0, "image dimensions cannot be zero");

        Self {
            width,
            height,
            data: vec![fill; (width as usize) * (height as usize)],
            format: ImageFormat::default(),
            overlay: OverlayMode::default(),
        }
    }

    /// Creates a new square image with the given side length.
    ///
    /// # Panics
    /// * The side length is zero.
    #[must_use]
    pub fn new_square(size: u32, fill: P) -> Self {
        Self::new(size, size, fill)
    }

    /// Creates a new image with the given dimensions, with each pixel produced
    /// by calling `f` with its coordinates.
    ///
    /// # Panics
    /// * Either dimension is zero.
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> P) -> Self {
        let mut image = Self::new(width, height, P::default());
        image.map_in_place(|x, y, pixel| *pixel = f(x, y));
        image
    }

    /// Creates an image from a row-major `Vec` of pixels and a row width. The
    /// height is inferred.
    ///
    /// # Errors
    /// * The pixel count is not a multiple of the width, or is zero.
    pub fn from_pixels(width: u32, data: Vec<P>) -> Result<Self> {
        if width == 0 || data.is_empty() || data.len() % width as usize != 0 {
            return Err(Error::IncompatibleImageData {
                width,
                height: (data.len() as u32).checked_div(width).unwrap_or(0),
                received: data.len(),
            });
        }

        Ok(Self {
            width,
            height: (data.len() / width as usize) as u32,
            data,
            format: ImageFormat::default(),
            overlay: OverlayMode::default(),
        })
    }

    /// Rebuilds an image around new data, keeping format and overlay metadata.
    pub(crate) fn with_data(&self, width: u32, height: u32, data: Vec<P>) -> Self {
        Self {
            width,
            height,
            data,
            format: self.format,
            overlay: self.overlay,
        }
    }

    /// Decodes an image from a byte slice, inferring its encoding format from
    /// the leading magic bytes.
    ///
    /// # Errors
    /// * The format could not be inferred or is not supported.
    /// * An error occured during decoding.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        let format = ImageFormat::infer_encoding(bytes);

        if format.is_unknown() {
            return Err(Error::UnknownEncodingFormat);
        }

        format.run_decoder(bytes)
    }

    /// Decodes an image from a reader, inferring its encoding format.
    ///
    /// # Errors
    /// * See [`from_bytes`][Self::from_bytes].
    pub fn from_reader(mut stream: impl Read) -> Result<Self> {
        let mut buffer = Vec::new();
        stream.read_to_end(&mut buffer)?;

        Self::from_bytes(buffer)
    }

    /// Decodes an image with an explicit encoding format.
    ///
    /// # Errors
    /// * An error occured during decoding.
    pub fn decode_from_bytes(format: ImageFormat, bytes: impl AsRef<[u8]>) -> Result<Self> {
        format.run_decoder(bytes.as_ref())
    }

    /// Opens a file and decodes it. The format is inferred from the file's
    /// magic bytes, falling back to its extension.
    ///
    /// # Errors
    /// * An error occured while reading or decoding.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut buffer = Vec::new();
        File::open(path)?.read_to_end(&mut buffer)?;

        let mut format = ImageFormat::infer_encoding(&buffer);
        if format.is_unknown() {
            format = ImageFormat::from_path(path)?;
        }
        if format.is_unknown() {
            return Err(Error::UnknownEncodingFormat);
        }

        format.run_decoder(buffer.as_slice())
    }

    /// Encodes the image into the given writer with an explicit encoding
    /// format.
    ///
    /// # Errors
    /// * An error occured during encoding or writing.
    pub fn encode(&self, format: ImageFormat, dest: impl Write) -> Result<()> {
        format.run_encoder(self, dest)
    }

    /// Encodes the image into a byte buffer with an explicit encoding format.
    ///
    /// # Errors
    /// * An error occured during encoding.
    pub fn encode_to_bytes(&self, format: ImageFormat) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.encode(format, &mut buffer)?;
        Ok(buffer)
    }

    /// Saves the image to a file with an explicit encoding format.
    ///
    /// # Errors
    /// * An error occured during encoding or writing.
    pub fn save(&self, format: ImageFormat, path: impl AsRef<Path>) -> Result<()> {
        self.encode(format, File::create(path)?)
    }

    /// Saves the image to a file, inferring the encoding format from the
    /// path's extension.
    ///
    /// # Errors
    /// * The format could not be inferred from the extension.
    /// * An error occured during encoding or writing.
    pub fn save_inferred(&self, path: impl AsRef<Path>) -> Result<()> {
        let format = ImageFormat::from_path(&path)?;

        if format.is_unknown() {
            return Err(Error::UnknownEncodingFormat);
        }

        self.save(format, path)
    }

    #[inline]
    fn resolve_coordinate(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "coordinate out of bounds");

        (y * self.width + x) as usize
    }

    /// Returns the width of the image.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions of the image.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the amount of pixels in the image.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.width * self.height
    }

    /// Returns true if the image contains no pixels.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the orientation of the image.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else if self.width < self.height {
            Orientation::Portrait
        } else {
            Orientation::Square
        }
    }

    /// Returns the encoding format of the image. This is nothing more than
    /// metadata about how the image was decoded, or how it should be saved.
    #[inline]
    #[must_use]
    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    /// Sets the encoding format of this image.
    pub fn set_format(&mut self, format: ImageFormat) {
        self.format = format;
    }

    /// Returns the default overlay mode used when compositing onto this image.
    #[inline]
    #[must_use]
    pub const fn overlay_mode(&self) -> OverlayMode {
        self.overlay
    }

    /// Sets the default overlay mode used when compositing onto this image.
    #[must_use]
    pub const fn with_overlay_mode(mut self, mode: OverlayMode) -> Self {
        self.overlay = mode;
        self
    }

    /// Returns a reference to the pixel at the given coordinates.
    ///
    /// # Panics
    /// * The coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> &P {
        &self.data[self.resolve_coordinate(x, y)]
    }

    /// Returns a reference to the pixel at the given coordinates, or `None`
    /// if the coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&P> {
        (x < self.width && y < self.height)
            .then(|| &self.data[(y * self.width + x) as usize])
    }

    /// Returns a mutable reference to the pixel at the given coordinates.
    ///
    /// # Panics
    /// * The coordinates are out of bounds.
    #[inline]
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut P {
        let pos = self.resolve_coordinate(x, y);

        &mut self.data[pos]
    }

    /// Sets the pixel at the given coordinates to the given pixel.
    ///
    /// # Panics
    /// * The coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: P) {
        let pos = self.resolve_coordinate(x, y);

        self.data[pos] = pixel;
    }

    /// Composites the given pixel over the pixel at the given coordinates,
    /// using the image's overlay mode. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn overlay_pixel(&mut self, x: u32, y: u32, pixel: P) {
        if x < self.width && y < self.height {
            let pos = (y * self.width + x) as usize;
            self.data[pos] = self.data[pos].overlay(pixel, self.overlay);
        }
    }

    /// Returns a Vec of slices representing the rows of the image.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> Vec<&[P]> {
        self.data.chunks_exact(self.width as usize).collect()
    }

    /// Returns the image data as a flat, row-major slice of pixels.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[P] {
        &self.data
    }

    /// Returns the image replaced with the given data. It is up to you to make
    /// sure the data is the correct size.
    ///
    /// The function should take the current image data and return the new data.
    pub fn map_data<T: Pixel>(self, f: impl FnOnce(Vec<P>) -> Vec<T>) -> Image<T> {
        Image {
            width: self.width,
            height: self.height,
            data: f(self.data),
            format: self.format,
            overlay: self.overlay,
        }
    }

    /// Returns the image with each pixel in the image mapped to the given
    /// function.
    pub fn map_pixels<T: Pixel>(self, f: impl Fn(P) -> T) -> Image<T> {
        self.map_data(|data| data.into_iter().map(f).collect())
    }

    /// Returns the image with each pixel mapped to the given function, with
    /// the function also receiving the pixel's coordinates.
    pub fn map_pixels_with_coords<T: Pixel>(self, f: impl Fn(u32, u32, P) -> T) -> Image<T> {
        let width = self.width;

        self.map_data(|data| {
            data.into_iter()
                .zip(0..)
                .map(|(p, i)| f(i % width, i / width, p))
                .collect()
        })
    }

    /// Mutates each pixel in place. The function receives the pixel's
    /// coordinates followed by a mutable reference to the pixel.
    pub fn map_in_place(&mut self, f: impl Fn(u32, u32, &mut P)) {
        let width = self.width;

        for (i, pixel) in self.data.iter_mut().enumerate() {
            f(i as u32 % width, i as u32 / width, pixel);
        }
    }

    /// Converts the image into an image with the given pixel type, going
    /// through the RGBA domain.
    pub fn convert<T: Pixel>(self) -> Image<T> {
        self.map_pixels(|pixel| T::from_rgba(pixel.as_rgba()))
    }

    /// Takes this image and inverts it. The alpha channel is untouched.
    #[must_use]
    pub fn inverted(self) -> Self {
        self.map_pixels(|pixel| pixel.inverted())
    }

    /// Draws an object onto this image. See the [`draw`][crate::draw] module
    /// for the provided drawables.
    pub fn draw(&mut self, entity: &impl Draw<P>) {
        entity.draw(self);
    }

    /// Crops the image to the given region. The region is clamped to the
    /// image bounds.
    ///
    /// # Errors
    /// * The clamped region contains no pixels.
    pub fn crop(&mut self, x: u32, y: u32, width: u32, height: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::EmptyImageError);
        }

        let width = width.min(self.width - x);
        let height = height.min(self.height - y);

        if width == 0 || height == 0 {
            return Err(Error::EmptyImageError);
        }

        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for row in y..y + height {
            let start = (row * self.width + x) as usize;
            data.extend_from_slice(&self.data[start..start + width as usize]);
        }

        *self = self.with_data(width, height, data);
        Ok(())
    }

    /// Crops the image to a centered region of the given dimensions.
    ///
    /// # Errors
    /// * The region contains no pixels.
    pub fn crop_centered(&mut self, width: u32, height: u32) -> Result<()> {
        let x = self.width.saturating_sub(width) / 2;
        let y = self.height.saturating_sub(height) / 2;

        self.crop(x, y, width, height)
    }

    /// Crops the image to a centered square region with the given side length.
    ///
    /// # Errors
    /// * The region contains no pixels.
    pub fn crop_square(&mut self, size: u32) -> Result<()> {
        self.crop_centered(size, size)
    }

    /// Flips the image horizontally, swapping the left and right edges.
    pub fn mirror(&mut self) {
        let width = self.width as usize;

        for row in self.data.chunks_exact_mut(width) {
            row.reverse();
        }
    }

    /// Flips the image vertically, swapping the top and bottom edges.
    pub fn flip(&mut self) {
        let width = self.width as usize;
        let height = self.height as usize;

        for y in 0..height / 2 {
            let (top, rest) = self.data.split_at_mut((height - y - 1) * width);
            top[y * width..(y + 1) * width].swap_with_slice(&mut rest[..width]);
        }
    }

    /// Composites another image onto this image with its top-left corner at
    /// the given coordinates, using this image's overlay mode. The pasted
    /// region is clipped to this image's bounds; coordinates may be negative.
    pub fn paste(&mut self, x: i64, y: i64, other: &Image<P>) {
        for sy in 0..other.height {
            let dy = y + i64::from(sy);
            if dy < 0 || dy >= i64::from(self.height) {
                continue;
            }

            for sx in 0..other.width {
                let dx = x + i64::from(sx);
                if dx < 0 || dx >= i64::from(self.width) {
                    continue;
                }

                self.overlay_pixel(dx as u32, dy as u32, *other.pixel(sx, sy));
            }
        }
    }

    /// Composites another image onto this image, positioned by an anchor.
    ///
    /// The offsets `dx` and `dy` move the inserted image *away* from its
    /// anchored edges: with [`Anchor::BottomRight`], increasing offsets move
    /// it up and to the left, while with [`Anchor::Center`] they move it right
    /// and down.
    pub fn insert(&mut self, other: &Image<P>, anchor: Anchor, dx: i64, dy: i64) {
        let (horizontal, vertical) = anchor.align();
        let x = horizontal.position(self.width, other.width, dx);
        let y = vertical.position(self.height, other.height, dy);

        self.paste(x, y, other);
    }

    /// Resizes the image canvas to the given dimensions without resampling,
    /// keeping the pixels aligned to the anchor. Newly exposed area is filled
    /// with `fill`; if a dimension shrinks, the image is cropped on the side
    /// away from the anchor.
    ///
    /// # Errors
    /// * Either target dimension is zero.
    pub fn canvas(&mut self, width: u32, height: u32, anchor: Anchor, fill: P) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImageError);
        }

        let (horizontal, vertical) = anchor.align();
        let (src_x, dst_x) = horizontal.offsets(self.width, width);
        let (src_y, dst_y) = vertical.offsets(self.height, height);

        let copy_width = self.width.min(width);
        let copy_height = self.height.min(height);

        let mut data = vec![fill; (width as usize) * (height as usize)];
        for row in 0..copy_height {
            let src_start = ((src_y + row) * self.width + src_x) as usize;
            let dst_start = ((dst_y + row) * width + dst_x) as usize;

            data[dst_start..dst_start + copy_width as usize]
                .copy_from_slice(&self.data[src_start..src_start + copy_width as usize]);
        }

        *self = self.with_data(width, height, data);
        Ok(())
    }
}

#[cfg(feature = "resize")]
impl<P: Pixel> Image<P> {
    /// The aspect-preserving dimensions that fit within the given maxima,
    /// using truncating integer arithmetic.
    fn fit_dimensions(&self, max_width: u32, max_height: u32) -> (u32, u32) {
        let (w, h) = (u64::from(self.width), u64::from(self.height));

        let mut width = u64::from(max_width);
        let mut height = width * h / w;

        if height > u64::from(max_height) {
            height = u64::from(max_height);
            width = height * w / h;
        }

        (width as u32, height as u32)
    }

    /// Resamples the image to the exact given dimensions, ignoring the aspect
    /// ratio.
    ///
    /// # Errors
    /// * Either target dimension is zero, or resampling failed.
    pub fn resize(&mut self, width: u32, height: u32, filter: FilterType) -> Result<()> {
        *self = resize::resample(self, width, height, filter)?;
        Ok(())
    }

    /// Resamples the image to fit within the given maxima, preserving the
    /// aspect ratio.
    ///
    /// # Errors
    /// * Either maximum is zero, or resampling failed.
    pub fn fit(&mut self, max_width: u32, max_height: u32, filter: FilterType) -> Result<()> {
        let (width, height) = self.fit_dimensions(max_width, max_height);
        self.resize(width, height, filter)
    }

    /// Resamples the image to the given width, deriving the height from the
    /// aspect ratio.
    ///
    /// # Errors
    /// * The width is zero, or resampling failed.
    pub fn resize_width(&mut self, width: u32, filter: FilterType) -> Result<()> {
        let height = u64::from(width) * u64::from(self.height) / u64::from(self.width.max(1));
        self.resize(width, height as u32, filter)
    }

    /// Resamples the image to the given height, deriving the width from the
    /// aspect ratio.
    ///
    /// # Errors
    /// * The height is zero, or resampling failed.
    pub fn resize_height(&mut self, height: u32, filter: FilterType) -> Result<()> {
        let width = u64::from(height) * u64::from(self.width) / u64::from(self.height.max(1));
        self.resize(width as u32, height, filter)
    }

    /// As [`fit`][Self::fit], but never upscales: if the image already fits
    /// within the maxima, it is left untouched.
    ///
    /// # Errors
    /// * Either maximum is zero, or resampling failed.
    pub fn shrink_to_fit(
        &mut self,
        max_width: u32,
        max_height: u32,
        filter: FilterType,
    ) -> Result<()> {
        let (width, height) = self.fit_dimensions(max_width, max_height);

        if width >= self.width || height >= self.height {
            return Ok(());
        }

        self.resize(width, height, filter)
    }

    /// Resamples the image by a uniform scale factor.
    ///
    /// # Errors
    /// * The resulting dimensions are zero, or resampling failed.
    pub fn scale(&mut self, factor: f64, filter: FilterType) -> Result<()> {
        let width = (f64::from(self.width) * factor) as u32;
        let height = (f64::from(self.height) * factor) as u32;

        self.resize(width, height, filter)
    }

    /// Cuts out the largest centered region matching the target aspect ratio,
    /// then resamples it to exactly the target dimensions. This is the usual
    /// "cover" thumbnail operation.
    ///
    /// # Errors
    /// * Either target dimension is zero, or resampling failed.
    pub fn grab(&mut self, width: u32, height: u32, filter: FilterType) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImageError);
        }

        let (w, h) = (f64::from(self.width), f64::from(self.height));
        let ratio = w / f64::from(width);

        let (grab_width, grab_height, src_x, src_y);
        if f64::from(height) * ratio <= h {
            grab_width = self.width;
            grab_height = (f64::from(height) * ratio).round() as u32;
            src_x = 0;
            src_y = ((h - f64::from(grab_height)) / 2.0).round() as u32;
        } else {
            grab_height = self.height;
            let ratio = h / f64::from(height);
            grab_width = (f64::from(width) * ratio).round() as u32;
            src_x = ((w - f64::from(grab_width)) / 2.0).round() as u32;
            src_y = 0;
        }

        self.crop(src_x, src_y, grab_width, grab_height)?;
        self.resize(width, height, filter)
    }
}

impl Image<Rgba> {
    /// Applies another image to this image as a per-pixel alpha mask.
    ///
    /// When `use_alpha` is true, the mask's alpha channel is used as coverage;
    /// otherwise its red channel is. A pixel's resulting alpha never exceeds
    /// the alpha it already had.
    ///
    /// # Errors
    /// * The mask's dimensions differ from this image's.
    pub fn mask<M: Pixel>(&mut self, mask: &Image<M>, use_alpha: bool) -> Result<()> {
        if mask.dimensions() != self.dimensions() {
            return Err(Error::MismatchedDimensions {
                expected: self.dimensions(),
                received: mask.dimensions(),
            });
        }

        for (pixel, mask_pixel) in self.data.iter_mut().zip(&mask.data) {
            let coverage = if use_alpha {
                mask_pixel.alpha()
            } else {
                mask_pixel.as_rgba().r
            };

            pixel.a = pixel.a.min(coverage);
        }

        Ok(())
    }
}
