//! CPU rasterization of the snow field
//!
//! The wallpaper draws at most a few hundred small discs per frame, so the
//! frame is rasterized on the CPU and blitted to the surface as a single
//! texture.

use snowfall_sim::Snowflake;

/// Opaque black, RGBA8 byte order
pub const CLEAR_COLOR: u32 = 0xff00_0000;
/// Opaque white
pub const FLAKE_COLOR: u32 = 0xffff_ffff;

/// Fixed-size frame the snow field is rasterized into
///
/// One `u32` per pixel, byte order matching
/// `wgpu::TextureFormat::Rgba8Unorm`. The dimensions are taken from the
/// primary monitor at startup and stay fixed for the process lifetime.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Create a frame of the given dimensions, cleared to opaque black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![CLEAR_COLOR; (width * height) as usize],
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixels, row-major
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel bytes as uploaded to the GPU
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Fill the whole frame with opaque black
    pub fn clear(&mut self) {
        self.pixels.fill(CLEAR_COLOR);
    }

    /// Rasterize the flakes over the current contents
    ///
    /// A flake whose truncated size is 1 or less plots a single pixel;
    /// larger flakes become a filled disc of half their size in radius.
    /// Plots falling outside the canvas are clipped.
    pub fn draw_flakes(&mut self, flakes: &[Snowflake]) {
        for flake in flakes {
            let size = flake.size as i32;
            let x = flake.x as i32;
            let y = flake.y as i32;

            if size <= 1 {
                self.plot(x, y);
            } else {
                let half = size / 2;
                let limit = size * size / 4;
                for dy in -half..=half {
                    for dx in -half..=half {
                        if dx * dx + dy * dy <= limit {
                            self.plot(x + dx, y + dy);
                        }
                    }
                }
            }
        }
    }

    fn plot(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize] = FLAKE_COLOR;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flake(x: f32, y: f32, size: f32) -> Snowflake {
        Snowflake {
            x,
            y,
            size,
            speed: 6.0,
            drift: 0.0,
        }
    }

    fn lit_pixels(frame: &FrameBuffer) -> Vec<(u32, u32)> {
        let mut lit = Vec::new();
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if frame.pixels()[(y * frame.width() + x) as usize] == FLAKE_COLOR {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_new_frame_is_opaque_black() {
        let frame = FrameBuffer::new(8, 8);
        assert!(frame.pixels().iter().all(|&p| p == CLEAR_COLOR));
    }

    #[test]
    fn test_clear_resets_lit_pixels() {
        let mut frame = FrameBuffer::new(8, 8);
        frame.draw_flakes(&[flake(4.0, 4.0, 1.0)]);
        frame.clear();
        assert!(frame.pixels().iter().all(|&p| p == CLEAR_COLOR));
    }

    #[test]
    fn test_tiny_flake_plots_single_pixel() {
        let mut frame = FrameBuffer::new(16, 16);
        frame.draw_flakes(&[flake(5.7, 9.2, 1.9)]);
        assert_eq!(lit_pixels(&frame), vec![(5, 9)]);
    }

    #[test]
    fn test_size_four_plots_radius_two_disc() {
        let mut frame = FrameBuffer::new(16, 16);
        frame.draw_flakes(&[flake(8.0, 8.0, 4.0)]);

        let lit = lit_pixels(&frame);
        // All offsets with dx*dx + dy*dy <= 4 around (8, 8)
        assert_eq!(lit.len(), 13);
        for (x, y) in lit {
            let dx = x as i32 - 8;
            let dy = y as i32 - 8;
            assert!(dx * dx + dy * dy <= 4);
        }
    }

    #[test]
    fn test_disc_clipped_at_corner() {
        let mut frame = FrameBuffer::new(16, 16);
        frame.draw_flakes(&[flake(0.0, 0.0, 4.0)]);

        // Only the in-bounds quadrant of the disc survives
        let lit = lit_pixels(&frame);
        assert!(!lit.is_empty());
        assert!(lit.len() < 13);
    }

    #[test]
    fn test_frame_bytes_length() {
        let frame = FrameBuffer::new(4, 3);
        assert_eq!(frame.bytes().len(), 4 * 3 * 4);
    }
}
