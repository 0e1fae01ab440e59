//! Table space: the logical coordinate system
//!
//! The table has a fixed width and a height derived from the canvas aspect
//! ratio, so table units stay square whatever the window shape. The origin is
//! the center of the canvas; y grows upward while screen y grows downward.

use efield_math::Vec2;

/// Default logical width of the table
pub const DEFAULT_TABLE_WIDTH: f32 = 3.0;

/// Logical table dimensions plus the canvas size they were derived from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableSpace {
    width: f32,
    height: f32,
    canvas_width: f32,
    canvas_height: f32,
}

impl TableSpace {
    /// Create a table of the given width for a canvas of the given pixel size
    ///
    /// A zero-sized canvas falls back to a square table.
    pub fn new(width: f32, canvas_width: u32, canvas_height: u32) -> Self {
        let mut table = Self {
            width,
            height: width,
            canvas_width: 1.0,
            canvas_height: 1.0,
        };
        table.resize(canvas_width, canvas_height);
        table
    }

    /// Recompute the table height for a new canvas size
    ///
    /// The width never changes. Returns `false` and keeps the previous
    /// dimensions when either side is zero (minimized window).
    pub fn resize(&mut self, canvas_width: u32, canvas_height: u32) -> bool {
        if canvas_width == 0 || canvas_height == 0 {
            return false;
        }
        self.canvas_width = canvas_width as f32;
        self.canvas_height = canvas_height as f32;
        let aspect = self.canvas_width / self.canvas_height;
        self.height = self.width / aspect;
        true
    }

    /// Map a screen-space point (pixels, y down) to table space (y up)
    pub fn screen_to_table(&self, screen_x: f32, screen_y: f32) -> Vec2 {
        Vec2::new(
            screen_x * self.width / self.canvas_width - self.width / 2.0,
            -screen_y * self.height / self.canvas_height + self.height / 2.0,
        )
    }

    /// Whether a screen-space point lies on the canvas
    pub fn contains_screen(&self, screen_x: f32, screen_y: f32) -> bool {
        (0.0..=self.canvas_width).contains(&screen_x)
            && (0.0..=self.canvas_height).contains(&screen_y)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Canvas size in pixels as (width, height)
    #[inline]
    pub fn canvas_size(&self) -> (f32, f32) {
        (self.canvas_width, self.canvas_height)
    }
}

impl Default for TableSpace {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_WIDTH, 1280, 720)
    }
}
