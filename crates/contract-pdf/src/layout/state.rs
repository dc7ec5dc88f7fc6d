use super::{CONTENT_BOTTOM, CONTENT_TOP};

/// Cursor and page bookkeeping for one render call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    /// Top of the next unit, in top-down page coordinates
    pub cursor_y: f32,
    /// Current page, 1-based
    pub page: u32,
    /// Footer already finalized for the current page
    pub footer_drawn: bool,
}

impl RenderState {
    pub fn new() -> Self {
        Self {
            cursor_y: CONTENT_TOP,
            page: 1,
            footer_drawn: false,
        }
    }

    /// Vertical space left before the bottom margin
    pub fn remaining(&self) -> f32 {
        CONTENT_BOTTOM - self.cursor_y
    }

    pub fn fits(&self, height: f32) -> bool {
        height <= self.remaining()
    }

    pub fn advance(&mut self, height: f32) {
        self.cursor_y += height;
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}
