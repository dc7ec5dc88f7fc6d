//! Page layout: display lists, geometry, and the pagination flow
//!
//! Layout works in top-down coordinates (origin at the top-left corner of
//! the page, y growing downwards). The writer flips them into PDF space.

pub mod draw;
pub mod flow;
pub mod state;

pub use flow::compose;
pub use state::RenderState;

use serde::{Deserialize, Serialize};

use crate::metrics::Font;

/// A4 portrait, in points
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

pub const MARGIN: f32 = 50.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

pub const HEADER_TOP: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 95.0;
/// First cursor position on every page
pub const CONTENT_TOP: f32 = HEADER_TOP + HEADER_HEIGHT + 20.0;

/// Top of the footer rule, about 56pt above the bottom edge
pub const FOOTER_TOP: f32 = 786.0;
/// Content must end above this line
pub const CONTENT_BOTTOM: f32 = FOOTER_TOP - 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const WHITE: Rgb = Rgb(1.0, 1.0, 1.0);

    /// Linear blend towards `other`, `t` in 0..=1
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        Rgb(
            self.0 + (other.0 - self.0) * t,
            self.1 + (other.1 - self.1) * t,
            self.2 + (other.2 - self.2) * t,
        )
    }
}

pub mod palette {
    use super::Rgb;

    pub const ACCENT: Rgb = Rgb(0.424, 0.361, 0.906);
    pub const ACCENT_LIGHT: Rgb = Rgb(0.635, 0.608, 0.996);
    pub const TEXT: Rgb = Rgb(0.176, 0.204, 0.212);
    pub const MUTED: Rgb = Rgb(0.388, 0.431, 0.447);
    pub const SHADE: Rgb = Rgb(0.945, 0.949, 0.965);
    pub const BORDER: Rgb = Rgb(0.875, 0.902, 0.914);
}

/// Axis-aligned rectangle, `y` is the top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A single run of text on one line. `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub font: Font,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
    /// Extra space added to each word gap (justification)
    pub word_spacing: f32,
}

/// Drawing command recorded into a page's display list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    FillRect {
        rect: Rect,
        color: Rgb,
    },
    StrokeRect {
        rect: Rect,
        color: Rgb,
        line_width: f32,
    },
    FillRoundedRect {
        rect: Rect,
        radius: f32,
        color: Rgb,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Rgb,
        line_width: f32,
    },
    Text(TextRun),
}

/// One laid-out page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based
    pub number: u32,
    pub commands: Vec<Command>,
}

impl Page {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            commands: Vec::new(),
        }
    }

    /// Text runs in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            Command::Text(run) => Some(run.text.as_str()),
            _ => None,
        })
    }

    /// Footer page labels ("Página N") drawn on this page
    pub fn footer_labels(&self) -> Vec<&str> {
        self.texts().filter(|t| t.starts_with("Página ")).collect()
    }
}

/// The finished layout of a whole contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub pages: Vec<Page>,
}

impl Composition {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text runs of all pages, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(|p| p.texts())
    }

    /// Full text of the document, one run per line
    pub fn plain_text(&self) -> String {
        self.texts().collect::<Vec<_>>().join("\n")
    }

    pub(crate) fn start_page(&mut self, number: u32) {
        self.pages.push(Page::new(number));
    }

    pub(crate) fn push(&mut self, command: Command) {
        if let Some(page) = self.pages.last_mut() {
            page.commands.push(command);
        }
    }
}
