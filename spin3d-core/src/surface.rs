//! Pixel output surface and an in-memory frame buffer
use crate::color::ColorIndex;

/// The pixel sink the rasterizer draws into.
///
/// Implementations must treat writes outside `[0, width) x [0, height)` as
/// no-ops; the rasterizer does not clip.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Reset every pixel to the background color.
    fn clear(&mut self);
    fn set_pixel(&mut self, x: i32, y: i32, color: ColorIndex);
}

/// Off-screen palette-indexed frame buffer, row-major from the top left.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    background: ColorIndex,
    pixels: Vec<ColorIndex>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, ColorIndex::BACKGROUND)
    }

    pub fn with_background(width: u32, height: u32, background: ColorIndex) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    pub fn background(&self) -> ColorIndex {
        self.background
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<ColorIndex> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    pub fn pixels(&self) -> &[ColorIndex] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[ColorIndex]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Number of pixels whose color differs from `color`.
    pub fn count_not(&self, color: ColorIndex) -> usize {
        self.pixels.iter().filter(|&&c| c != color).count()
    }
}

impl Surface for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: ColorIndex) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn red() -> ColorIndex {
        ColorIndex::new(4).unwrap()
    }

    #[test]
    fn test_set_and_get() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.set_pixel(3, 2, red());
        assert_eq!(fb.get(3, 2), Some(red()));
        assert_eq!(fb.pixels()[11], red());
        assert_eq!(fb.count_not(ColorIndex::BACKGROUND), 1);

        fb.clear();
        assert_eq!(fb.count_not(ColorIndex::BACKGROUND), 0);
    }

    #[test]
    fn test_out_of_range_writes_are_ignored() {
        let mut fb = FrameBuffer::new(4, 3);
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (i32::MIN, i32::MAX)] {
            fb.set_pixel(x, y, red());
            assert_eq!(fb.get(x, y), None);
        }
        assert_eq!(fb.count_not(ColorIndex::BACKGROUND), 0);
    }

    #[test]
    fn test_fuzzed_coordinates_stay_in_bounds() {
        let (w, h) = (320, 240);
        let mut fb = FrameBuffer::new(w, h);
        let mut rng = StdRng::seed_from_u64(0x5eed);

        let mut expected = vec![ColorIndex::BACKGROUND; (w * h) as usize];
        for _ in 0..100_000 {
            let x = match rng.gen_range(0..3) {
                0 => rng.gen::<i32>(),
                1 => rng.gen_range(-8..w as i32 + 8),
                _ => rng.gen_range(0..w as i32),
            };
            let y = match rng.gen_range(0..3) {
                0 => rng.gen::<i32>(),
                1 => rng.gen_range(-8..h as i32 + 8),
                _ => rng.gen_range(0..h as i32),
            };
            let color = ColorIndex::new(rng.gen_range(0..16)).unwrap();

            fb.set_pixel(x, y, color);
            if (0..w as i32).contains(&x) && (0..h as i32).contains(&y) {
                expected[(y as u32 * w + x as u32) as usize] = color;
            }
        }

        assert_eq!(fb.pixels().len(), (w * h) as usize);
        assert_eq!(fb.pixels(), &expected[..]);
    }

    #[test]
    fn test_custom_background() {
        let bg = ColorIndex::new(8).unwrap();
        let mut fb = FrameBuffer::with_background(2, 2, bg);
        fb.set_pixel(0, 0, red());
        fb.clear();
        assert!(fb.pixels().iter().all(|&c| c == bg));
        assert_eq!(fb.rows().count(), 2);
    }
}
