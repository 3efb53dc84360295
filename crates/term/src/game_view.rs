//! GameView: maps a session snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape, COLS, ROWS};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, Phase};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb(30, 30, 40);

/// Color for a cell's color identifier (cyan, blue, orange, yellow, green,
/// purple, red); `None` for empty or unknown ids.
pub fn palette(color_id: Cell) -> Option<Rgb> {
    match color_id {
        1 => Some(Rgb(80, 220, 220)),
        2 => Some(Rgb(80, 120, 220)),
        3 => Some(Rgb(255, 165, 0)),
        4 => Some(Rgb(240, 220, 80)),
        5 => Some(Rgb(100, 220, 120)),
        6 => Some(Rgb(180, 100, 220)),
        7 => Some(Rgb(220, 80, 80)),
        _ => None,
    }
}

/// Board renderer with a side panel.
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Size of the bordered well in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (COLS as u16 * self.cell_w + 2, ROWS as u16 + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w + 16) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for y in 0..ROWS {
            for x in 0..COLS {
                let glyph = match palette(snap.board[y][x]) {
                    Some(color) => block(color),
                    None => Glyph::new('·', Style::new(Rgb(90, 90, 100), WELL_BG)),
                };
                self.put_cell(fb, origin_x, origin_y, x as i16, y as i16, glyph);
            }
        }

        if let Some(active) = snap.active {
            let color = palette(active.color_id).unwrap_or_default();

            if let Some(ghost_y) = snap.ghost_y.filter(|&g| g != active.y) {
                let ghost = Glyph::new('░', Style::new(Rgb(140, 140, 140), WELL_BG));
                for (r, c) in active.shape.filled() {
                    let x = active.x as i16 + c as i16;
                    let y = ghost_y as i16 + r as i16;
                    self.put_cell(fb, origin_x, origin_y, x, y, ghost);
                }
            }

            for (r, c) in active.shape.filled() {
                let x = active.x as i16 + c as i16;
                let y = active.y as i16 + r as i16;
                self.put_cell(fb, origin_x, origin_y, x, y, block(color));
            }
        }

        self.draw_panel(fb, snap, origin_x + frame_w + 2, origin_y);

        if matches!(snap.phase, Phase::Paused | Phase::GameOver | Phase::Ready) {
            let label = snap.phase.status_label();
            let x = origin_x + frame_w.saturating_sub(label.len() as u16) / 2;
            let y = origin_y + frame_h / 2;
            fb.text(x, y, label, Style::new(Rgb(255, 255, 255), Rgb(0, 0, 0)).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::new(Rgb(200, 200, 200), Rgb(0, 0, 0));
        let right = x + w - 1;
        let bottom = y + h - 1;

        for dx in 1..w - 1 {
            fb.put(x + dx, y, Glyph::new('─', style));
            fb.put(x + dx, bottom, Glyph::new('─', style));
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, Glyph::new('│', style));
            fb.put(right, y + dy, Glyph::new('│', style));
        }
        fb.put(x, y, Glyph::new('┌', style));
        fb.put(right, y, Glyph::new('┐', style));
        fb.put(x, bottom, Glyph::new('└', style));
        fb.put(right, bottom, Glyph::new('┘', style));
    }

    /// Paint one board cell; cells outside the well (above the top) are skipped.
    fn put_cell(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: i16, y: i16, glyph: Glyph) {
        if x < 0 || y < 0 || x >= COLS as i16 || y >= ROWS as i16 {
            return;
        }
        let px = ox + 1 + x as u16 * self.cell_w;
        fb.rect(px, oy + 1 + y as u16, self.cell_w, 1, glyph);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = Style::new(Rgb(150, 150, 160), Rgb(0, 0, 0));
        let value = Style::default().bold();

        fb.text(x, y + 1, "NEXT", label);
        if let Some(next) = snap.next {
            let color = palette(next.color_id).unwrap_or_default();
            self.draw_preview(fb, &next.shape, color, x, y + 2);
        }

        let rows = [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ];
        for (i, (name, v)) in rows.iter().enumerate() {
            let line_y = y + 8 + i as u16 * 2;
            fb.text(x, line_y, name, label);
            fb.text(x, line_y + 1, &v.to_string(), value);
        }

        fb.text(x, y + 15, snap.phase.status_label(), value);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, shape: &Shape, color: Rgb, x: u16, y: u16) {
        for (r, c) in shape.filled() {
            let px = x + c as u16 * self.cell_w;
            fb.rect(px, y + r as u16, self.cell_w, 1, block(color));
        }
    }
}

fn block(color: Rgb) -> Glyph {
    Glyph::new('█', Style::new(color, WELL_BG).bold())
}
