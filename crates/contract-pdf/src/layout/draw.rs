//! Drawing primitives
//!
//! Every unit has a `*_height` measure and a `draw_*` routine. Draw
//! routines paint at `state.cursor_y` and advance the cursor by the unit's
//! height plus its trailing margin; they never decide about page breaks.

use std::ops::Range;

use super::state::RenderState;
use super::{
    palette, Command, Composition, Rect, Rgb, TextRun, CONTENT_WIDTH, FOOTER_TOP, HEADER_HEIGHT,
    HEADER_TOP, MARGIN, PAGE_WIDTH,
};
use crate::clauses::{Block, Masthead, SignatureParty};
use crate::metrics::{text_width, wrap, Font, WrappedLine};

pub const FOOTER_DISCLAIMER: &str =
    "Documento gerado eletronicamente. Sua validade depende do aceite de ambas as partes.";

const BODY_SIZE: f32 = 10.0;
const BODY_LINE: f32 = 14.0;
const NOTE_SIZE: f32 = 9.0;
const NOTE_LINE: f32 = 12.0;

const NUMBER_INDENT: f32 = 26.0;
const LETTER_INDENT: f32 = 42.0;

const SECTION_HEIGHT: f32 = 24.0;
const ACCENT_STRIPE: f32 = 4.0;

const BOX_PADDING: f32 = 10.0;
const BOX_LABEL_LINE: f32 = 16.0;
const BOX_FACT_SIZE: f32 = 9.0;
const BOX_FACT_LINE: f32 = 13.0;
const BOX_TEXT_INSET: f32 = 16.0;

const VALUE_BOX_HEIGHT: f32 = 56.0;
const GRADIENT_STEPS: usize = 32;

const SIGNATURE_GAP: f32 = 20.0;
const SIGNATURE_HEIGHT: f32 = 100.0;

/// Trailing space after each unit
pub fn margin_after(block: &Block) -> f32 {
    match block {
        Block::SectionHeader(_) => 8.0,
        Block::InfoBox { .. } | Block::ValueHighlight { .. } => 10.0,
        Block::Paragraph(_) | Block::Note(_) => 8.0,
        Block::Numbered { .. } => 6.0,
        Block::Lettered { .. } => 4.0,
        Block::Signatures { .. } => 0.0,
    }
}

/// Baseline of the first line of a text box whose top edge is `top`
fn baseline(top: f32, size: f32) -> f32 {
    top + size * 1.05
}

fn text(doc: &mut Composition, text: &str, font: Font, size: f32, x: f32, y: f32, color: Rgb) {
    doc.push(Command::Text(TextRun {
        text: text.to_string(),
        font,
        size,
        x,
        y,
        color,
        word_spacing: 0.0,
    }));
}

fn centered(doc: &mut Composition, content: &str, font: Font, size: f32, y: f32, color: Rgb) {
    centered_in(doc, content, font, size, MARGIN, CONTENT_WIDTH, y, color);
}

#[allow(clippy::too_many_arguments)]
fn centered_in(
    doc: &mut Composition,
    content: &str,
    font: Font,
    size: f32,
    left: f32,
    width: f32,
    y: f32,
    color: Rgb,
) {
    let x = left + (width - text_width(content, font, size)).max(0.0) / 2.0;
    text(doc, content, font, size, x, y, color);
}

/// Paint wrapped lines starting at `top`; justified unless `justify` is off
#[allow(clippy::too_many_arguments)]
fn lines(
    doc: &mut Composition,
    wrapped: &[WrappedLine],
    font: Font,
    size: f32,
    line_height: f32,
    x: f32,
    top: f32,
    width: f32,
    color: Rgb,
    justify: bool,
) {
    for (i, line) in wrapped.iter().enumerate() {
        doc.push(Command::Text(TextRun {
            text: line.text.clone(),
            font,
            size,
            x,
            y: baseline(top + i as f32 * line_height, size),
            color,
            word_spacing: if justify { line.word_spacing(width) } else { 0.0 },
        }));
    }
}

// -- Page furniture --------------------------------------------------------

/// Rounded header band with title, subtitle and reference line
pub fn draw_header(doc: &mut Composition, masthead: &Masthead) {
    doc.push(Command::FillRoundedRect {
        rect: Rect::new(MARGIN, HEADER_TOP, CONTENT_WIDTH, HEADER_HEIGHT),
        radius: 8.0,
        color: palette::ACCENT,
    });

    let title_size = 14.0;
    let title_line = 17.0;
    let mut y = baseline(HEADER_TOP + 12.0, title_size);
    for line in wrap(&masthead.title, Font::Bold, title_size, CONTENT_WIDTH - 40.0) {
        centered(doc, &line.text, Font::Bold, title_size, y, Rgb::WHITE);
        y += title_line;
    }

    y += 1.0;
    centered(doc, &masthead.subtitle, Font::Regular, 9.0, y, Rgb::WHITE);
    y += 14.0;
    centered(
        doc,
        &masthead.reference_line(),
        Font::Regular,
        9.0,
        y,
        palette::SHADE,
    );
}

/// Draw the footer unless this page already has one
pub fn finalize_footer(doc: &mut Composition, state: &mut RenderState) {
    if state.footer_drawn {
        return;
    }

    doc.push(Command::Line {
        from: (MARGIN, FOOTER_TOP),
        to: (PAGE_WIDTH - MARGIN, FOOTER_TOP),
        color: palette::BORDER,
        line_width: 0.5,
    });
    centered(
        doc,
        &format!("Página {}", state.page),
        Font::Regular,
        8.0,
        FOOTER_TOP + 14.0,
        palette::MUTED,
    );
    centered(
        doc,
        FOOTER_DISCLAIMER,
        Font::Regular,
        7.0,
        FOOTER_TOP + 25.0,
        palette::MUTED,
    );

    state.footer_drawn = true;
}

// -- Measuring -------------------------------------------------------------

fn info_box_lines(facts: &[String]) -> Vec<WrappedLine> {
    let width = CONTENT_WIDTH - 2.0 * BOX_TEXT_INSET;
    facts
        .iter()
        .flat_map(|fact| wrap(fact, Font::Regular, BOX_FACT_SIZE, width))
        .collect()
}

fn info_box_height(facts: &[String]) -> f32 {
    2.0 * BOX_PADDING + BOX_LABEL_LINE + info_box_lines(facts).len() as f32 * BOX_FACT_LINE
}

/// Wrapped text of a paragraph-like block, painted line by line
#[derive(Debug, Clone)]
pub struct TextBody {
    label: Option<(String, Font, f32)>,
    lines: Vec<WrappedLine>,
    size: f32,
    line_height: f32,
    x: f32,
    width: f32,
    color: Rgb,
    justify: bool,
}

impl TextBody {
    fn new(
        body: &str,
        (size, line_height): (f32, f32),
        x: f32,
        width: f32,
        color: Rgb,
        justify: bool,
    ) -> Self {
        Self {
            label: None,
            lines: wrap(body, Font::Regular, size, width),
            size,
            line_height,
            x,
            width,
            color,
            justify,
        }
    }

    fn with_label(mut self, label: &str, font: Font, x: f32) -> Self {
        self.label = Some((label.to_string(), font, x));
        self
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }
}

/// Text layout of the blocks that may continue across pages; `None` for
/// boxes, bars and signatures
pub fn text_body(block: &Block) -> Option<TextBody> {
    let body = match block {
        Block::Paragraph(body) => TextBody::new(
            body,
            (BODY_SIZE, BODY_LINE),
            MARGIN,
            CONTENT_WIDTH,
            palette::TEXT,
            true,
        ),
        Block::Note(body) => TextBody::new(
            body,
            (NOTE_SIZE, NOTE_LINE),
            MARGIN,
            CONTENT_WIDTH,
            palette::MUTED,
            false,
        ),
        Block::Numbered { label, text } => TextBody::new(
            text,
            (BODY_SIZE, BODY_LINE),
            MARGIN + NUMBER_INDENT,
            CONTENT_WIDTH - NUMBER_INDENT,
            palette::TEXT,
            true,
        )
        .with_label(label, Font::Bold, MARGIN),
        Block::Lettered { label, text } => TextBody::new(
            text,
            (BODY_SIZE, BODY_LINE),
            MARGIN + LETTER_INDENT,
            CONTENT_WIDTH - LETTER_INDENT,
            palette::TEXT,
            true,
        )
        .with_label(label, Font::Regular, MARGIN + NUMBER_INDENT),
        _ => return None,
    };
    Some(body)
}

/// Height a block needs on the page, excluding its trailing margin
pub fn block_height(block: &Block) -> f32 {
    match block {
        Block::SectionHeader(_) => SECTION_HEIGHT,
        Block::InfoBox { facts, .. } => info_box_height(facts),
        Block::ValueHighlight { .. } => VALUE_BOX_HEIGHT,
        Block::Signatures { .. } => SIGNATURE_GAP + SIGNATURE_HEIGHT,
        _ => text_body(block).map_or(0.0, |body| body.height()),
    }
}

// -- Drawing ---------------------------------------------------------------

/// Paint a block at the cursor and advance past it
pub fn draw_block(doc: &mut Composition, state: &mut RenderState, block: &Block) {
    match block {
        Block::SectionHeader(caption) => draw_section_header(doc, state, caption),
        Block::InfoBox { label, facts } => draw_info_box(doc, state, label, facts),
        Block::ValueHighlight { caption, value } => draw_value_box(doc, state, caption, value),
        Block::Signatures { left, right } => draw_signatures(doc, state, left, right),
        _ => {
            if let Some(body) = text_body(block) {
                draw_text_lines(doc, state, &body, 0..body.line_count());
            }
        }
    }

    state.advance(margin_after(block));
}

/// Paint `range` of the wrapped lines at the cursor. The label is drawn
/// with the first line only.
pub fn draw_text_lines(
    doc: &mut Composition,
    state: &mut RenderState,
    body: &TextBody,
    range: Range<usize>,
) {
    if range.start == 0 {
        if let Some((label, font, x)) = &body.label {
            let y = baseline(state.cursor_y, body.size);
            text(doc, label, *font, body.size, *x, y, palette::TEXT);
        }
    }

    let chunk = body.lines.get(range).unwrap_or(&[]);
    lines(
        doc,
        chunk,
        Font::Regular,
        body.size,
        body.line_height,
        body.x,
        state.cursor_y,
        body.width,
        body.color,
        body.justify,
    );
    state.advance(chunk.len() as f32 * body.line_height);
}

/// Shaded bar with accent stripe and bold caption
pub fn draw_section_header(doc: &mut Composition, state: &mut RenderState, caption: &str) {
    let top = state.cursor_y;
    doc.push(Command::FillRect {
        rect: Rect::new(MARGIN, top, CONTENT_WIDTH, SECTION_HEIGHT),
        color: palette::SHADE,
    });
    doc.push(Command::FillRect {
        rect: Rect::new(MARGIN, top, ACCENT_STRIPE, SECTION_HEIGHT),
        color: palette::ACCENT,
    });
    text(
        doc,
        caption,
        Font::Bold,
        BODY_SIZE,
        MARGIN + 12.0,
        top + 16.0,
        palette::TEXT,
    );
    state.advance(SECTION_HEIGHT);
}

/// Bordered identification panel, one line per fact
pub fn draw_info_box(doc: &mut Composition, state: &mut RenderState, label: &str, facts: &[String]) {
    let top = state.cursor_y;
    let height = info_box_height(facts);

    doc.push(Command::StrokeRect {
        rect: Rect::new(MARGIN, top, CONTENT_WIDTH, height),
        color: palette::BORDER,
        line_width: 1.0,
    });
    doc.push(Command::FillRect {
        rect: Rect::new(MARGIN, top, ACCENT_STRIPE, height),
        color: palette::ACCENT,
    });

    let x = MARGIN + BOX_TEXT_INSET;
    text(
        doc,
        label,
        Font::Bold,
        BODY_SIZE,
        x,
        baseline(top + BOX_PADDING, BODY_SIZE),
        palette::ACCENT,
    );
    lines(
        doc,
        &info_box_lines(facts),
        Font::Regular,
        BOX_FACT_SIZE,
        BOX_FACT_LINE,
        x,
        top + BOX_PADDING + BOX_LABEL_LINE,
        CONTENT_WIDTH - 2.0 * BOX_TEXT_INSET,
        palette::TEXT,
        false,
    );

    state.advance(height);
}

/// Gradient callout with caption and large value
pub fn draw_value_box(doc: &mut Composition, state: &mut RenderState, caption: &str, value: &str) {
    let top = state.cursor_y;
    let step = CONTENT_WIDTH / GRADIENT_STEPS as f32;

    for i in 0..GRADIENT_STEPS {
        let t = i as f32 / (GRADIENT_STEPS - 1) as f32;
        doc.push(Command::FillRect {
            // Slight overlap hides seams between strips
            rect: Rect::new(MARGIN + i as f32 * step, top, step + 0.5, VALUE_BOX_HEIGHT),
            color: palette::ACCENT.mix(palette::ACCENT_LIGHT, t),
        });
    }

    let x = MARGIN + BOX_TEXT_INSET;
    text(doc, caption, Font::Regular, 8.0, x, top + 18.0, Rgb::WHITE);
    text(doc, value, Font::Bold, 20.0, x, top + 44.0, Rgb::WHITE);

    state.advance(VALUE_BOX_HEIGHT);
}

/// Largest size up to `size` at which `content` fits in `width`
fn fit_size(content: &str, font: Font, size: f32, width: f32) -> f32 {
    let natural = text_width(content, font, size);
    if natural <= width {
        size
    } else {
        (size * width / natural).max(6.0)
    }
}

fn draw_signature_box(doc: &mut Composition, rect: Rect, party: &SignatureParty) {
    doc.push(Command::StrokeRect {
        rect,
        color: palette::BORDER,
        line_width: 1.0,
    });

    let inner_left = rect.x + 20.0;
    let inner_width = rect.width - 40.0;
    doc.push(Command::Line {
        from: (inner_left, rect.y + 55.0),
        to: (inner_left + inner_width, rect.y + 55.0),
        color: palette::TEXT,
        line_width: 0.75,
    });

    let name_size = fit_size(&party.name, Font::Bold, 9.0, inner_width);
    centered_in(
        doc,
        &party.name,
        Font::Bold,
        name_size,
        rect.x,
        rect.width,
        rect.y + 70.0,
        palette::TEXT,
    );
    centered_in(
        doc,
        &party.role,
        Font::Regular,
        8.0,
        rect.x,
        rect.width,
        rect.y + 82.0,
        palette::MUTED,
    );
    if let Some(detail) = &party.detail {
        let size = fit_size(detail, Font::Regular, 8.0, inner_width);
        centered_in(
            doc,
            detail,
            Font::Regular,
            size,
            rect.x,
            rect.width,
            rect.y + 93.0,
            palette::MUTED,
        );
    }
}

/// Two signature boxes side by side
pub fn draw_signatures(
    doc: &mut Composition,
    state: &mut RenderState,
    left: &SignatureParty,
    right: &SignatureParty,
) {
    let top = state.cursor_y + SIGNATURE_GAP;
    let width = (CONTENT_WIDTH - 20.0) / 2.0;

    draw_signature_box(doc, Rect::new(MARGIN, top, width, SIGNATURE_HEIGHT), left);
    draw_signature_box(
        doc,
        Rect::new(MARGIN + width + 20.0, top, width, SIGNATURE_HEIGHT),
        right,
    );

    state.advance(SIGNATURE_GAP + SIGNATURE_HEIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn one_page() -> (Composition, RenderState) {
        let mut doc = Composition::default();
        doc.start_page(1);
        (doc, RenderState::new())
    }

    #[test]
    fn test_footer_is_drawn_once_per_page() {
        let (mut doc, mut state) = one_page();
        finalize_footer(&mut doc, &mut state);
        finalize_footer(&mut doc, &mut state);
        assert_eq!(doc.pages[0].footer_labels(), vec!["Página 1"]);
        assert!(state.footer_drawn);
    }

    #[test]
    fn test_draw_advances_by_measured_height_plus_margin() {
        let blocks = [
            Block::SectionHeader("CLÁUSULA PRIMEIRA – DO OBJETO".into()),
            Block::InfoBox {
                label: "CONTRATANTE".into(),
                facts: vec!["Razão social: Marca".into(), "CNPJ: 1".into()],
            },
            Block::ValueHighlight {
                caption: "VALOR".into(),
                value: "R$ 10,00".into(),
            },
            Block::Paragraph("Texto curto.".into()),
            Block::Numbered {
                label: "1.1.".into(),
                text: "Texto ".repeat(60),
            },
            Block::Lettered {
                label: "a)".into(),
                text: "Item".into(),
            },
        ];

        for block in &blocks {
            let (mut doc, mut state) = one_page();
            let before = state.cursor_y;
            draw_block(&mut doc, &mut state, block);
            let advanced = state.cursor_y - before;
            assert!(
                (advanced - block_height(block) - margin_after(block)).abs() < 0.001,
                "{:?}",
                block
            );
        }
    }

    #[test]
    fn test_info_box_height_grows_with_facts() {
        let two = info_box_height(&["a".into(), "b".into()]);
        let three = info_box_height(&["a".into(), "b".into(), "c".into()]);
        assert!((three - two - BOX_FACT_LINE).abs() < 0.001);
    }

    #[test]
    fn test_numbered_item_draws_label_then_text() {
        let (mut doc, mut state) = one_page();
        draw_block(
            &mut doc,
            &mut state,
            &Block::Numbered {
                label: "2.1.".into(),
                text: "Prazo de entrega.".into(),
            },
        );
        let texts: Vec<&str> = doc.pages[0].texts().collect();
        assert_eq!(texts, vec!["2.1.", "Prazo de entrega."]);
    }

    #[test]
    fn test_label_drawn_with_first_chunk_only() {
        let block = Block::Lettered {
            label: "c)".into(),
            text: "entrega ".repeat(200),
        };
        let body = text_body(&block).unwrap();
        assert!(body.line_count() > 4);

        let (mut doc, mut state) = one_page();
        draw_text_lines(&mut doc, &mut state, &body, 0..2);
        draw_text_lines(&mut doc, &mut state, &body, 2..body.line_count());

        let texts: Vec<&str> = doc.pages[0].texts().collect();
        assert_eq!(texts.iter().filter(|t| **t == "c)").count(), 1);
        assert_eq!(texts[0], "c)");
        assert_eq!(texts.len(), body.line_count() + 1);
        assert!((state.cursor_y - crate::layout::CONTENT_TOP - body.height()).abs() < 0.001);
    }

    #[test]
    fn test_boxes_have_no_text_body() {
        assert!(text_body(&Block::SectionHeader("X".into())).is_none());
        assert!(text_body(&Block::ValueHighlight {
            caption: "VALOR".into(),
            value: "R$ 1,00".into(),
        })
        .is_none());
        assert!(text_body(&Block::Note("Nota.".into())).is_some());
    }

    #[test]
    fn test_justified_lines_except_last() {
        let (mut doc, mut state) = one_page();
        draw_block(
            &mut doc,
            &mut state,
            &Block::Paragraph("palavra ".repeat(120)),
        );
        let runs: Vec<&TextRun> = doc.pages[0]
            .commands
            .iter()
            .filter_map(|c| match c {
                Command::Text(run) => Some(run),
                _ => None,
            })
            .collect();
        assert!(runs.len() > 1);
        assert!(runs[..runs.len() - 1].iter().all(|r| r.word_spacing > 0.0));
        assert_eq!(runs.last().unwrap().word_spacing, 0.0);
    }

    #[test]
    fn test_header_contains_reference_line() {
        let mut doc = Composition::default();
        doc.start_page(1);
        let masthead = Masthead {
            title: "CONTRATO".into(),
            subtitle: "Subtítulo".into(),
            contract_number: "000007".into(),
            issued_on: "01/02/2026".into(),
        };
        draw_header(&mut doc, &masthead);
        let texts: Vec<&str> = doc.pages[0].texts().collect();
        assert_eq!(
            texts,
            vec!["CONTRATO", "Subtítulo", "Contrato nº 000007 • 01/02/2026"]
        );
    }

    #[test]
    fn test_fit_size_shrinks_long_names() {
        assert_eq!(fit_size("Ana", Font::Bold, 9.0, 200.0), 9.0);
        let long = "Nome Extremamente Longo de Empresa Comercial e Industrial LTDA";
        let size = fit_size(long, Font::Bold, 9.0, 100.0);
        assert!(size < 9.0);
        assert!(size >= 6.0);
    }
}
