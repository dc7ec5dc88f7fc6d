//! PDF serialization of a laid-out composition
//!
//! Uses the standard Helvetica faces with WinAnsiEncoding, so no font
//! programs are embedded. Output is deterministic: no timestamps or IDs.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::error::ContractError;
use crate::layout::{Command, Composition, Rect, Rgb, TextRun, PAGE_HEIGHT, PAGE_WIDTH};
use crate::metrics::Font;

/// Bezier control distance for quarter circles
const KAPPA: f32 = 0.552_284_8;

/// Map a character to its WinAnsiEncoding byte; `?` when unmapped
fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => b'?',
    }
}

pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn real(v: f32) -> Object {
    Object::Real(v)
}

fn name(n: &str) -> Object {
    Object::Name(n.as_bytes().to_vec())
}

/// Top-down y to PDF user space
fn flip(y: f32) -> f32 {
    PAGE_HEIGHT - y
}

fn fill_color(ops: &mut Vec<Operation>, color: Rgb) {
    ops.push(Operation::new(
        "rg",
        vec![real(color.0), real(color.1), real(color.2)],
    ));
}

fn stroke_color(ops: &mut Vec<Operation>, color: Rgb) {
    ops.push(Operation::new(
        "RG",
        vec![real(color.0), real(color.1), real(color.2)],
    ));
}

fn rect_op(rect: &Rect) -> Operation {
    Operation::new(
        "re",
        vec![
            real(rect.x),
            real(flip(rect.bottom())),
            real(rect.width),
            real(rect.height),
        ],
    )
}

/// Closed rounded-rectangle path, counter-clockwise from the bottom edge
fn rounded_rect(rect: &Rect, radius: f32) -> Vec<Operation> {
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    let k = r * KAPPA;
    let (left, right) = (rect.x, rect.x + rect.width);
    let (bottom, top) = (flip(rect.bottom()), flip(rect.y));

    let point = |op: &str, x: f32, y: f32| Operation::new(op, vec![real(x), real(y)]);
    let curve = |x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32| {
        Operation::new(
            "c",
            vec![real(x1), real(y1), real(x2), real(y2), real(x3), real(y3)],
        )
    };

    vec![
        point("m", left + r, bottom),
        point("l", right - r, bottom),
        curve(right - r + k, bottom, right, bottom + r - k, right, bottom + r),
        point("l", right, top - r),
        curve(right, top - r + k, right - r + k, top, right - r, top),
        point("l", left + r, top),
        curve(left + r - k, top, left, top - r + k, left, top - r),
        point("l", left, bottom + r),
        curve(left, bottom + r - k, left + r - k, bottom, left + r, bottom),
        Operation::new("h", vec![]),
    ]
}

fn text_ops(ops: &mut Vec<Operation>, run: &TextRun) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![name(run.font.resource_name()), real(run.size)],
    ));
    fill_color(ops, run.color);
    ops.push(Operation::new("Tw", vec![real(run.word_spacing)]));
    ops.push(Operation::new("Td", vec![real(run.x), real(flip(run.y))]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(
            encode_win_ansi(&run.text),
            StringFormat::Hexadecimal,
        )],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// Content stream operations for one page
pub fn page_operations(commands: &[Command]) -> Vec<Operation> {
    let mut ops = Vec::new();

    for command in commands {
        match command {
            Command::FillRect { rect, color } => {
                ops.push(Operation::new("q", vec![]));
                fill_color(&mut ops, *color);
                ops.push(rect_op(rect));
                ops.push(Operation::new("f", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            Command::StrokeRect {
                rect,
                color,
                line_width,
            } => {
                ops.push(Operation::new("q", vec![]));
                stroke_color(&mut ops, *color);
                ops.push(Operation::new("w", vec![real(*line_width)]));
                ops.push(rect_op(rect));
                ops.push(Operation::new("S", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            Command::FillRoundedRect {
                rect,
                radius,
                color,
            } => {
                ops.push(Operation::new("q", vec![]));
                fill_color(&mut ops, *color);
                ops.extend(rounded_rect(rect, *radius));
                ops.push(Operation::new("f", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            Command::Line {
                from,
                to,
                color,
                line_width,
            } => {
                ops.push(Operation::new("q", vec![]));
                stroke_color(&mut ops, *color);
                ops.push(Operation::new("w", vec![real(*line_width)]));
                ops.push(Operation::new("m", vec![real(from.0), real(flip(from.1))]));
                ops.push(Operation::new("l", vec![real(to.0), real(flip(to.1))]));
                ops.push(Operation::new("S", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            Command::Text(run) => text_ops(&mut ops, run),
        }
    }

    ops
}

fn font_dictionary(font: Font) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", name("Font"));
    dict.set("Subtype", name("Type1"));
    dict.set("BaseFont", name(font.base_font()));
    dict.set("Encoding", name("WinAnsiEncoding"));
    dict
}

/// Serialize a composition into PDF bytes
pub fn write_pdf(composition: &Composition, title: &str) -> Result<Vec<u8>, ContractError> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in [Font::Regular, Font::Bold] {
        let font_id = doc.add_object(Object::Dictionary(font_dictionary(font)));
        fonts.set(font.resource_name(), Object::Reference(font_id));
    }
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));
    let resources_id = doc.add_object(Object::Dictionary(resources));

    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(composition.pages.len());
    for page in &composition.pages {
        let content = Content {
            operations: page_operations(&page.commands),
        };
        let encoded = content
            .encode()
            .map_err(|e| ContractError::Serialization(e.to_string()))?;
        let content_id = doc.add_object(Object::Stream(Stream::new(Dictionary::new(), encoded)));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", name("Page"));
        page_dict.set("Parent", Object::Reference(pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![real(0.0), real(0.0), real(PAGE_WIDTH), real(PAGE_HEIGHT)]),
        );
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Reference(resources_id));
        page_ids.push(doc.add_object(Object::Dictionary(page_dict)));
    }

    let mut pages = Dictionary::new();
    pages.set("Type", name("Pages"));
    pages.set(
        "Kids",
        Object::Array(page_ids.iter().map(|&id| Object::Reference(id)).collect()),
    );
    pages.set("Count", Object::Integer(page_ids.len() as i64));
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let mut catalog = Dictionary::new();
    catalog.set("Type", name("Catalog"));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog));

    let mut info = Dictionary::new();
    info.set(
        "Title",
        Object::String(encode_win_ansi(title), StringFormat::Literal),
    );
    info.set(
        "Producer",
        Object::String(b"contract-pdf".to_vec(), StringFormat::Literal),
    );
    let info_id = doc.add_object(Object::Dictionary(info));

    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.trailer.set("Info", Object::Reference(info_id));

    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ContractError::Serialization(e.to_string()))?;

    Ok(buffer)
}
