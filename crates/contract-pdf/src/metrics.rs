//! Text measurement for the standard Helvetica faces
//!
//! Widths come from the Adobe Core14 AFM files, in 1/1000 em. Accented
//! Latin letters share the advance width of their base letter.

use serde::{Deserialize, Serialize};

/// Fonts available to the layout (standard Type1, WinAnsiEncoding)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    /// Resource name used in page content streams
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }

    pub fn base_font(&self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
        }
    }
}

/// Helvetica advance widths for 0x20..=0x7E
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for 0x20..=0x7E
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const DEFAULT_WIDTH: u16 = 556;

/// Base letter for accented Latin-1 characters
fn base_letter(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        other => other,
    }
}

/// Advance width of one character in 1/1000 em
pub fn char_width(font: Font, c: char) -> u16 {
    let table = match font {
        Font::Regular => &HELVETICA,
        Font::Bold => &HELVETICA_BOLD,
    };

    let c = base_letter(c);
    match c {
        ' '..='~' => table[c as usize - 0x20],
        '\u{a0}' => table[0],
        '–' => 556,
        '—' => 1000,
        '•' => 350,
        'º' => 365,
        'ª' => 370,
        '°' => 400,
        '·' => 278,
        '‘' | '’' => match font {
            Font::Regular => 222,
            Font::Bold => 278,
        },
        '“' | '”' => match font {
            Font::Regular => 333,
            Font::Bold => 500,
        },
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` in points at `size`
pub fn text_width(text: &str, font: Font, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(font, c) as u32).sum();
    units as f32 * size / 1000.0
}

/// One output line of wrapped text
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    /// Natural width in points
    pub width: f32,
    /// Last line of its paragraph (never justified)
    pub last: bool,
}

impl WrappedLine {
    /// Extra space per word gap so the line spans `max_width`
    pub fn word_spacing(&self, max_width: f32) -> f32 {
        let gaps = self.text.matches(' ').count();
        if self.last || gaps == 0 || self.width >= max_width {
            0.0
        } else {
            (max_width - self.width) / gaps as f32
        }
    }
}

/// Greedy word wrap. Embedded newlines start new paragraphs; a word wider
/// than `max_width` gets a line of its own.
pub fn wrap(text: &str, font: Font, size: f32, max_width: f32) -> Vec<WrappedLine> {
    let space = text_width(" ", font, size);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = text_width(word, font, size);

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(WrappedLine {
                    text: std::mem::take(&mut current),
                    width: current_width,
                    last: false,
                });
                current.push_str(word);
                current_width = word_width;
            }
        }

        if !current.is_empty() {
            lines.push(WrappedLine {
                text: current,
                width: current_width,
                last: true,
            });
        }
    }

    lines
}

/// Height of `text` wrapped at `max_width` with the given line height
pub fn measure(text: &str, font: Font, size: f32, max_width: f32, line_height: f32) -> f32 {
    wrap(text, font, size, max_width).len() as f32 * line_height
}
