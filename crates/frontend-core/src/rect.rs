use crate::constants::{
    TEXTURE_HEIGHT, TEXTURE_WIDTH, VISIBLE_HEIGHT, VISIBLE_WIDTH, VISIBLE_X, VISIBLE_Y,
};

/// Axis-aligned rectangle in normalized texture coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl NormalizedRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Builds a rectangle from its two corners.
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

/// The two cutouts the texture zoom moves between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureLayout {
    /// Whole emulator texture.
    pub entire: NormalizedRect,
    /// Part of the texture that holds the visible display window.
    pub visible: NormalizedRect,
}

impl Default for TextureLayout {
    fn default() -> Self {
        Self {
            entire: NormalizedRect::unit(),
            visible: NormalizedRect::new(
                VISIBLE_X / TEXTURE_WIDTH,
                VISIBLE_Y / TEXTURE_HEIGHT,
                VISIBLE_WIDTH / TEXTURE_WIDTH,
                VISIBLE_HEIGHT / TEXTURE_HEIGHT,
            ),
        }
    }
}

/// Drawable size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / (self.height as f32).max(1.0)
    }
}
