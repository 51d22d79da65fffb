use image::RgbaImage;

/// A single RGBA sample, 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const WHITE: Pixel = Pixel::new(255, 255, 255, 255);
    pub const TRANSPARENT: Pixel = Pixel::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// True only for (255, 255, 255, 255). This is the sole "ink" value on a font sheet.
    pub fn is_opaque_white(self) -> bool {
        self == Self::WHITE
    }

    /// Color comparison that ignores alpha.
    pub fn rgb_eq(self, other: Pixel) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

impl From<image::Rgba<u8>> for Pixel {
    fn from(p: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self { r, g, b, a }
    }
}

impl From<Pixel> for image::Rgba<u8> {
    fn from(p: Pixel) -> Self {
        image::Rgba([p.r, p.g, p.b, p.a])
    }
}

/// Decoded pixel access. Coordinates are 0-based; callers keep them inside
/// `width() x height()`, implementations may panic otherwise.
pub trait ImageSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel_at(&self, x: u32, y: u32) -> Pixel;
}

impl ImageSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel_at(&self, x: u32, y: u32) -> Pixel {
        (*self.get_pixel(x, y)).into()
    }
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel_at(&self, x: u32, y: u32) -> Pixel {
        (**self).pixel_at(x, y)
    }
}

/// Row-major in-memory image, mostly used to build synthetic sheets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// A `width x height` buffer filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) {
        let idx = self.index(x, y);
        self.pixels[idx] = pixel;
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| self.pixel_at(x, y).into())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

impl ImageSource for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel_at(&self, x: u32, y: u32) -> Pixel {
        self.pixels[self.index(x, y)]
    }
}

impl From<&RgbaImage> for PixelBuffer {
    fn from(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.pixels().map(|p| Pixel::from(*p)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_opaque_white_is_white() {
        assert!(Pixel::WHITE.is_opaque_white());
        assert!(!Pixel::new(255, 255, 255, 254).is_opaque_white());
        assert!(!Pixel::rgb(254, 255, 255).is_opaque_white());
        assert!(Pixel::new(255, 255, 255, 0).rgb_eq(Pixel::WHITE));
    }

    #[test]
    fn buffer_and_rgba_image_agree() {
        let mut buf = PixelBuffer::new(3, 2, Pixel::TRANSPARENT);
        buf.set(2, 1, Pixel::WHITE);
        buf.set(0, 1, Pixel::rgb(10, 20, 30));
        let img = buf.to_rgba_image();
        assert_eq!(ImageSource::width(&img), 3);
        assert_eq!(ImageSource::height(&img), 2);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(img.pixel_at(x, y), buf.pixel_at(x, y));
            }
        }
        assert_eq!(PixelBuffer::from(&img), buf);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_read_panics() {
        let buf = PixelBuffer::new(2, 2, Pixel::TRANSPARENT);
        buf.pixel_at(2, 0);
    }
}
