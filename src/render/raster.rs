//! Drawing bars into an oversampled canvas and downsampling to output size

use image::{Rgba, RgbaImage, imageops};

use super::BarRect;

/// Bars are drawn in opaque white on a transparent background.
const BAR_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Oversampled canvas holding premultiplied-alpha RGBA pixels.
struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
        }
    }

    /// Solid fill, replacing pixels rather than blending. The stored value is
    /// premultiplied. Portions of the rectangle outside the canvas are clipped.
    fn fill_rect(&mut self, rect: &BarRect, color: [u8; 4]) {
        let premul = premultiply(color);

        let x0 = rect.x.max(0) as u32;
        let y0 = rect.y.max(0) as u32;
        let x1 = rect.x.saturating_add(rect.width as i32).max(0) as u32;
        let y1 = rect.y.saturating_add(rect.height as i32).max(0) as u32;

        for y in y0..y1.min(self.height) {
            let row = y as usize * self.width as usize;
            for x in x0..x1.min(self.width) {
                self.pixels[row + x as usize] = premul;
            }
        }
    }

    /// Convert every pixel back to straight alpha. The fill primitive stores
    /// premultiplied channel values, but the encoder expects unassociated
    /// alpha for correct output.
    fn into_straight_alpha(self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let px = self.pixels[y as usize * self.width as usize + x as usize];
            Rgba(unpremultiply(px))
        })
    }
}

fn premultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    let scale = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
    [scale(r), scale(g), scale(b), a]
}

fn unpremultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let unscale = |c: u8| ((u16::from(c) * 255).div_ceil(u16::from(a)).min(255)) as u8;
    [unscale(r), unscale(g), unscale(b), a]
}

/// Draw the bar rectangles onto a blank oversampled canvas, normalize the
/// color representation, and shrink to the requested output size with a
/// 3-lobe Lanczos filter to anti-alias the hard rectangle edges.
pub(crate) fn rasterize(
    rects: &[BarRect],
    canvas_width: u32,
    canvas_height: u32,
    out_width: u32,
    out_height: u32,
) -> RgbaImage {
    let mut canvas = Canvas::new(canvas_width, canvas_height);
    for rect in rects {
        canvas.fill_rect(rect, BAR_COLOR);
    }

    let oversampled = canvas.into_straight_alpha();
    imageops::resize(
        &oversampled,
        out_width,
        out_height,
        imageops::FilterType::Lanczos3,
    )
}
