//! Output raster.

use std::path::Path;

use image::{ColorType, Rgb};

use crate::bucket::BucketResult;

/// An 8-bit RGB pixel.
pub type Pixel = Rgb<u8>;

/// Background written where no primitive is hit.
pub const WHITE: Pixel = Rgb([255, 255, 255]);

/// Row-major RGB8 image produced by a render.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Pixel>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, row: u32, column: u32) -> usize {
        debug_assert!(row < self.height && column < self.width);
        row as usize * self.width as usize + column as usize
    }

    /// Get the pixel at (row, column).
    pub fn get(&self, row: u32, column: u32) -> Pixel {
        self.pixels[self.index(row, column)]
    }

    /// Set the pixel at (row, column).
    pub fn set(&mut self, row: u32, column: u32, pixel: Pixel) {
        let index = self.index(row, column);
        self.pixels[index] = pixel;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (local_row, row_pixels) in result
            .pixels
            .chunks_exact(bucket.width as usize)
            .enumerate()
        {
            let start = self.index(bucket.y + local_row as u32, bucket.x);
            self.pixels[start..start + row_pixels.len()].copy_from_slice(row_pixels);
        }
    }

    /// Convert to packed RGB bytes (for display or saving).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.0).collect()
    }

    /// Save the image. The format is chosen from the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgb_bytes(),
            self.width,
            self.height,
            ColorType::Rgb8,
        )
    }
}
