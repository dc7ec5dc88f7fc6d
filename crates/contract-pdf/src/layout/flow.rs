//! Pagination
//!
//! Each block is measured first. If it does not fit above the bottom
//! margin, the current page is finalized (footer once), a new page with a
//! fresh header is started, and the block is drawn there. Text taller than
//! a whole page is instead continued line by line over as many pages as it
//! needs.

use tracing::debug;

use super::draw::{
    block_height, draw_block, draw_header, draw_text_lines, finalize_footer, margin_after,
    text_body, TextBody,
};
use super::state::RenderState;
use super::{Composition, CONTENT_BOTTOM, CONTENT_TOP};
use crate::clauses::{Block, Masthead};

/// Usable height between header and footer
pub const PAGE_CAPACITY: f32 = CONTENT_BOTTOM - CONTENT_TOP;

/// Open a page: header first, cursor just below it
pub fn begin_page(doc: &mut Composition, state: &mut RenderState, masthead: &Masthead) {
    doc.start_page(state.page);
    draw_header(doc, masthead);
    state.cursor_y = CONTENT_TOP;
    state.footer_drawn = false;
}

/// Finalize the current page and open the next one
pub fn page_break(doc: &mut Composition, state: &mut RenderState, masthead: &Masthead) {
    finalize_footer(doc, state);
    state.page += 1;
    debug!(page = state.page, "Contract page break");
    begin_page(doc, state, masthead);
}

/// Break the page unless `needed` fits below the cursor. A page that
/// holds nothing yet is never broken. Returns whether a break happened.
pub fn ensure_space(
    doc: &mut Composition,
    state: &mut RenderState,
    masthead: &Masthead,
    needed: f32,
) -> bool {
    if state.fits(needed) || state.cursor_y <= CONTENT_TOP {
        return false;
    }
    page_break(doc, state, masthead);
    true
}

/// Paint wrapped text from the cursor on, breaking pages between lines.
/// The label stays with the first chunk.
pub fn draw_split_text(
    doc: &mut Composition,
    state: &mut RenderState,
    masthead: &Masthead,
    body: &TextBody,
) {
    let total = body.line_count();
    let mut start = 0;

    while start < total {
        let room = (state.remaining() / body.line_height()).floor().max(0.0) as usize;
        if room == 0 && state.cursor_y > CONTENT_TOP {
            page_break(doc, state, masthead);
            continue;
        }

        let end = (start + room.max(1)).min(total);
        draw_text_lines(doc, state, body, start..end);
        start = end;

        if start < total {
            page_break(doc, state, masthead);
        }
    }
}

/// Lay out all blocks into pages
pub fn compose(blocks: &[Block], masthead: &Masthead) -> Composition {
    let mut doc = Composition::default();
    let mut state = RenderState::new();

    begin_page(&mut doc, &mut state, masthead);

    for block in blocks {
        let height = block_height(block);
        match text_body(block) {
            Some(body) if height > PAGE_CAPACITY => {
                draw_split_text(&mut doc, &mut state, masthead, &body);
                state.advance(margin_after(block));
            }
            _ => {
                ensure_space(&mut doc, &mut state, masthead, height);
                draw_block(&mut doc, &mut state, block);
            }
        }
    }

    finalize_footer(&mut doc, &mut state);
    doc
}
