use image::RgbaImage;

/// Default pixels-per-unit for slot sprites.
pub const PIXELS_PER_UNIT: f32 = 100.0;

/// Sprite bounds within its texture, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A decoded slot image wrapped as a sprite.
#[derive(Debug, Clone)]
pub struct SlotSprite {
    /// Decoded texture, always RGBA8
    pub image: RgbaImage,
    /// Region of the texture the sprite covers (the whole texture)
    pub rect: SpriteRect,
    /// Normalized pivot; (0.5, 0.5) is the center
    pub pivot: (f32, f32),
    pub pixels_per_unit: f32,
}

impl SlotSprite {
    /// Wrap a texture as a full-size, center-pivoted sprite.
    pub fn from_image(image: RgbaImage) -> Self {
        let rect = SpriteRect {
            x: 0.0,
            y: 0.0,
            width: image.width() as f32,
            height: image.height() as f32,
        };
        Self {
            image,
            rect,
            pivot: (0.5, 0.5),
            pixels_per_unit: PIXELS_PER_UNIT,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
