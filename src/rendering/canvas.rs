use macroquad::texture::Image;

/// A pixel surface the grid renderer can paint on
pub trait Canvas {
    /// Surface size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Fill an axis-aligned rectangle. Parts outside the surface are clipped.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: [u8; 4]);
}

/// CPU-side RGBA8 image, uploaded to a texture once per repaint
impl Canvas for Image {
    fn size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: [u8; 4]) {
        let (surface_w, surface_h) = Canvas::size(self);
        let x_end = x.saturating_add(width).min(surface_w);
        let y_end = y.saturating_add(height).min(surface_h);
        if x >= x_end || y >= y_end {
            return;
        }

        let stride = surface_w as usize * 4;
        for row in y as usize..y_end as usize {
            let start = row * stride + x as usize * 4;
            let end = row * stride + x_end as usize * 4;
            for pixel in self.bytes[start..end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&rgba);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::BLACK;

    fn pixel(image: &Image, x: usize, y: usize) -> [u8; 4] {
        let i = (y * image.width as usize + x) * 4;
        [image.bytes[i], image.bytes[i + 1], image.bytes[i + 2], image.bytes[i + 3]]
    }

    #[test]
    fn test_fill_rect_paints_only_inside() {
        let mut image = Image::gen_image_color(10, 10, BLACK);
        let red = [255, 0, 0, 255];
        image.fill_rect(2, 3, 4, 2, red);

        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..6).contains(&x) && (3..5).contains(&y);
                let expected = if inside { red } else { [0, 0, 0, 255] };
                assert_eq!(pixel(&image, x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_rect_clips_at_edges() {
        let mut image = Image::gen_image_color(4, 4, BLACK);
        let white = [255, 255, 255, 255];
        image.fill_rect(3, 3, 10, 10, white);
        image.fill_rect(9, 0, 1, 1, white);

        assert_eq!(pixel(&image, 3, 3), white);
        assert_eq!(pixel(&image, 2, 3), [0, 0, 0, 255]);
        assert_eq!(image.bytes.len(), 4 * 4 * 4);
    }
}
