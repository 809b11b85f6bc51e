use anyhow::{Result, anyhow};
use hero_carousel::stage::Motion;
use raylib::prelude::*;

// Opaque black RGBA pixels
fn black_frame(width: i32, height: i32) -> Vec<u8> {
    let pixel_count = (width.max(0) * height.max(0)) as usize;
    [0, 0, 0, 255].repeat(pixel_count)
}

pub struct SlideSprite {
    texture: Texture2D,
}

impl SlideSprite {
    pub fn new(texture: Texture2D) -> Self {
        Self { texture }
    }

    /// Replace the texture contents with one RGBA frame of the same size.
    pub fn upload_frame(&mut self, pixels: &[u8]) -> Result<()> {
        self.texture
            .update_texture(pixels)
            .map_err(|e| anyhow!("Failed to upload video frame: {}", e))
    }

    /// Blank the texture so a restarted video doesn't show its old last frame.
    pub fn clear(&mut self) -> Result<()> {
        let frame = black_frame(self.texture.width(), self.texture.height());
        self.upload_frame(&frame)
    }

    // Largest scale that keeps the whole texture on screen
    fn fit_scale(&self, screen_width: f32, screen_height: f32) -> f32 {
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;
        (screen_width / tex_width).min(screen_height / tex_height)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, motion: Option<&Motion>) {
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;

        let scale = self.fit_scale(screen_width, screen_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let offset = motion
            .map(|m| {
                let t = 1.0 - (1.0 - m.progress()).powi(3); // easeOutCubic
                m.kind.offset(t) * screen_width
            })
            .unwrap_or(0.0);

        let draw_pos = Vector2::new(
            (screen_width - scaled_width) * 0.5 + offset,
            (screen_height - scaled_height) * 0.5,
        );

        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(draw_pos.x, draw_pos.y, scaled_width, scaled_height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_frame_is_opaque_black() {
        let frame = black_frame(3, 2);
        assert_eq!(frame.len(), 3 * 2 * 4);
        assert!(frame.chunks(4).all(|pixel| pixel == [0, 0, 0, 255]));
    }

    #[test]
    fn black_frame_of_empty_texture_is_empty() {
        assert!(black_frame(0, 720).is_empty());
    }
}
