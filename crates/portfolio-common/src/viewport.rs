/// Window dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn aspect(&self) -> f64 {
        if self.is_empty() {
            1.0
        } else {
            self.width / self.height
        }
    }

    /// Normalized device coordinates in [-1, 1], y pointing up.
    pub fn to_ndc(&self, cursor: CursorPosition) -> (f64, f64) {
        if self.is_empty() {
            return (0.0, 0.0);
        }
        (
            (cursor.x / self.width) * 2.0 - 1.0,
            -(cursor.y / self.height) * 2.0 + 1.0,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Cursor position in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl CursorPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The same point measured from `origin` instead of the window corner.
    pub fn relative_to(self, origin: CursorPosition) -> CursorPosition {
        CursorPosition::new(self.x - origin.x, self.y - origin.y)
    }
}
