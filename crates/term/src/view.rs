//! GameView: maps an engine [`Snapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so every drawing rule is unit-testable. The layout puts
//! the bordered board in the center of the viewport with each board cell
//! rendered 2 columns wide to compensate for terminal glyph aspect ratio,
//! and the score banner in a side panel when the viewport allows it.

use blockfall_core::Snapshot;
use blockfall_types::{ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

use crate::effects::EffectSystem;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Neon display color for each catalog shape.
pub fn shape_color(id: ShapeId) -> Rgb {
    match id {
        ShapeId::I => Rgb::new(255, 13, 114),
        ShapeId::J => Rgb::new(13, 194, 255),
        ShapeId::L => Rgb::new(13, 255, 114),
        ShapeId::O => Rgb::new(245, 56, 255),
        ShapeId::S => Rgb::new(255, 142, 13),
        ShapeId::T => Rgb::new(255, 225, 56),
        ShapeId::Z => Rgb::new(56, 119, 255),
    }
}

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

/// Snapshot-to-framebuffer renderer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame: board, ghost, active piece, clear flash, effects,
    /// and the score banner.
    pub fn render(
        &self,
        snap: &Snapshot,
        effects: &EffectSystem,
        banner: &str,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(10, 10, 14),
            bold: false,
            dim: false,
        };
        let border = CellStyle::fg(Rgb::new(200, 200, 200));

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Grid dots on empty cells, locked cells in their shape color.
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match ShapeId::from_id(snap.board[y as usize][x as usize]) {
                    Some(id) => {
                        self.draw_block(&mut fb, start_x, start_y, x as i8, y as i8, id, false)
                    }
                    None => self.draw_empty_cell(&mut fb, start_x, start_y, x, y),
                }
            }
        }

        self.draw_ghost(&mut fb, snap, start_x, start_y);
        self.draw_active(&mut fb, snap, start_x, start_y);
        self.draw_flash(&mut fb, snap, start_x, start_y, board_px_w);
        self.draw_effects(&mut fb, effects, start_x, start_y);

        self.draw_panel(&mut fb, banner, viewport, start_x, start_y, frame_w);

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u8, y: u8) {
        let style = CellStyle {
            fg: Rgb::new(60, 60, 72),
            bg: Rgb::new(10, 10, 14),
            bold: false,
            dim: true,
        };
        self.fill_cell(fb, start_x, start_y, x as i8, y as i8, '·', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        id: ShapeId,
        glow: bool,
    ) {
        let color = shape_color(id);
        let style = CellStyle {
            fg: color,
            // A slightly lit background gives the block face some depth.
            bg: color.scaled(0.25),
            bold: glow,
            dim: false,
        };
        self.fill_cell(fb, start_x, start_y, x, y, '█', style);
    }

    fn draw_ghost(&self, fb: &mut FrameBuffer, snap: &Snapshot, start_x: u16, start_y: u16) {
        if snap.ghost_y == snap.active.y {
            return;
        }
        let ghost = CellStyle {
            fg: shape_color(snap.active.id).scaled(0.35),
            bg: Rgb::new(10, 10, 14),
            bold: false,
            dim: true,
        };
        let matrix = snap.active.matrix;
        for cy in 0..matrix.size() {
            for cx in 0..matrix.size() {
                if matrix.get(cx, cy) != 0 {
                    self.fill_cell(
                        fb,
                        start_x,
                        start_y,
                        snap.active.x + cx as i8,
                        snap.ghost_y + cy as i8,
                        '░',
                        ghost,
                    );
                }
            }
        }
    }

    fn draw_active(&self, fb: &mut FrameBuffer, snap: &Snapshot, start_x: u16, start_y: u16) {
        let matrix = snap.active.matrix;
        for cy in 0..matrix.size() {
            for cx in 0..matrix.size() {
                if matrix.get(cx, cy) != 0 {
                    self.draw_block(
                        fb,
                        start_x,
                        start_y,
                        snap.active.x + cx as i8,
                        snap.active.y + cy as i8,
                        snap.active.id,
                        true,
                    );
                }
            }
        }
    }

    /// White band expanding from the center of each clearing row, fading
    /// as the flash progresses.
    fn draw_flash(
        &self,
        fb: &mut FrameBuffer,
        snap: &Snapshot,
        start_x: u16,
        start_y: u16,
        board_px_w: u16,
    ) {
        if snap.flash_rows.is_empty() {
            return;
        }
        let progress = snap.flash_progress();
        let band_w = ((board_px_w as f32) * progress).round() as u16;
        if band_w == 0 {
            return;
        }
        // The band fades toward the playfield background as it expands.
        let white = Rgb::new(255, 255, 255);
        let style = CellStyle::fg(white.mixed(Rgb::new(10, 10, 14), progress * 0.7));

        for &row in snap.flash_rows.iter() {
            let px = start_x + 1 + (board_px_w - band_w) / 2;
            let py = start_y + 1 + (row as u16) * self.cell_h;
            fb.fill_rect(px, py, band_w, self.cell_h, '█', style);
        }
    }

    fn draw_effects(
        &self,
        fb: &mut FrameBuffer,
        effects: &EffectSystem,
        start_x: u16,
        start_y: u16,
    ) {
        for smoke in effects.smokes() {
            if let Some((px, py)) = self.cell_to_terminal(start_x, start_y, smoke.x, smoke.y) {
                let glyph = if smoke.size > 1.2 { '▒' } else { '░' };
                let style = CellStyle {
                    fg: Rgb::new(160, 160, 160).scaled(smoke.life * 0.6),
                    bg: Rgb::new(10, 10, 14),
                    bold: false,
                    dim: true,
                };
                fb.put_char(px, py, glyph, style);
            }
        }

        for particle in effects.particles() {
            if let Some((px, py)) = self.cell_to_terminal(start_x, start_y, particle.x, particle.y)
            {
                let glyph = if particle.life > 0.5 { '●' } else { '•' };
                let style = CellStyle {
                    fg: particle.color.scaled(particle.life),
                    bg: Rgb::new(10, 10, 14),
                    bold: particle.life > 0.5,
                    dim: false,
                };
                fb.put_char(px, py, glyph, style);
            }
        }
    }

    /// Map fractional board-cell coordinates to a terminal cell inside the
    /// playfield, or `None` once the sprite drifts off the board.
    fn cell_to_terminal(
        &self,
        start_x: u16,
        start_y: u16,
        x: f32,
        y: f32,
    ) -> Option<(u16, u16)> {
        if x < 0.0 || x >= BOARD_WIDTH as f32 || y < 0.0 || y >= BOARD_HEIGHT as f32 {
            return None;
        }
        let px = start_x + 1 + (x * self.cell_w as f32) as u16;
        let py = start_y + 1 + (y * self.cell_h as f32) as u16;
        Some((px, py))
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        banner: &str,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 12 {
            return;
        }

        let style = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(panel_x, start_y, banner, style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: i8,
        cell_y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if cell_x < 0
            || cell_x >= BOARD_WIDTH as i8
            || cell_y < 0
            || cell_y >= BOARD_HEIGHT as i8
        {
            return;
        }
        let px = start_x + 1 + (cell_x as u16) * self.cell_w;
        let py = start_y + 1 + (cell_y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}
