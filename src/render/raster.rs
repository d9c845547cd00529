//! Pixel-buffer helpers shared by raster backends.

/// Inclusive-exclusive pixel rectangle: `x..x + width`, `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    #[must_use]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Grows the rect by `pad` on every side, clamped to the surface.
    #[must_use]
    pub fn expanded(self, pad: u32, surface_width: u32, surface_height: u32) -> Self {
        let left = self.x.saturating_sub(pad);
        let top = self.y.saturating_sub(pad);
        let right = self
            .x
            .saturating_add(self.width)
            .saturating_add(pad)
            .min(surface_width);
        let bottom = self
            .y
            .saturating_add(self.height)
            .saturating_add(pad)
            .min(surface_height);
        Self::new(left, top, right - left, bottom - top)
    }
}

/// Smallest rect containing every pixel that differs from `background`.
///
/// `data` holds `height` rows of `stride` bytes with 4 bytes per pixel.
/// Returns `None` when the buffer is blank or shorter than described.
#[must_use]
pub fn tight_bounds(
    data: &[u8],
    width: u32,
    height: u32,
    stride: usize,
    background: [u8; 4],
) -> Option<PixelRect> {
    let row_bytes = width as usize * 4;
    if width == 0 || height == 0 || stride < row_bytes {
        return None;
    }
    if data.len() < stride * (height as usize - 1) + row_bytes {
        return None;
    }

    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0_u32;
    let mut max_y = 0_u32;
    let mut found = false;

    for y in 0..height {
        let row_start = y as usize * stride;
        let row = &data[row_start..row_start + row_bytes];
        for (x, pixel) in row.chunks_exact(4).enumerate() {
            if pixel != background {
                let x = x as u32;
                found = true;
                min_x = min_x.min(x);
                max_x = max_x.max(x);
                min_y = min_y.min(y);
                max_y = max_y.max(y);
            }
        }
    }

    found.then(|| PixelRect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}
