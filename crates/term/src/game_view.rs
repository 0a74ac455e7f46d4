//! GameView: maps a `core::GameSnapshot` into a terminal frame.
//!
//! This module is pure (no I/O). It can be unit-tested, and the same layout
//! math that places cells also resolves mouse clicks back to coordinates.

use tui_gemswap_core::GameSnapshot;
use tui_gemswap_types::{Coord, GRID_SIZE};

use crate::fb::{Frame, Glyph, Rgb};

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

/// Where the board lands inside a viewport.
///
/// `origin` is the top-left of the border frame; cells start one glyph in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl BoardLayout {
    /// Top-left glyph position of a cell.
    pub fn cell_pos(&self, coord: Coord) -> (u16, u16) {
        (
            self.origin_x + 1 + (coord.col as u16) * self.cell_w,
            self.origin_y + 1 + (coord.row as u16) * self.cell_h,
        )
    }

    /// Map a terminal position to the board cell under it.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Coord> {
        let left = self.origin_x + 1;
        let top = self.origin_y + 1;
        if x < left || y < top {
            return None;
        }
        let col = (x - left) / self.cell_w;
        let row = (y - top) / self.cell_h;
        if row >= GRID_SIZE as u16 || col >= GRID_SIZE as u16 {
            return None;
        }
        Some(Coord::new(row as u8, col as u8))
    }
}

/// A lightweight terminal renderer for the match-3 board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps tiles roughly square in typical terminal fonts and
        // chunky enough to click.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

const SYMBOL_COLORS: [Rgb; 6] = [
    Rgb::new(214, 48, 49),   // ruby
    Rgb::new(253, 203, 110), // amber
    Rgb::new(0, 184, 148),   // jade
    Rgb::new(9, 132, 227),   // sapphire
    Rgb::new(162, 155, 254), // amethyst
    Rgb::new(225, 112, 85),  // topaz
];

const SYMBOL_CHARS: [char; 6] = ['R', 'A', 'J', 'S', 'M', 'T'];

fn symbol_color(id: u8) -> Rgb {
    SYMBOL_COLORS[(id as usize - 1) % SYMBOL_COLORS.len()]
}

fn symbol_char(id: u8) -> char {
    SYMBOL_CHARS[(id as usize - 1) % SYMBOL_CHARS.len()]
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Compute the board placement for a viewport (centered, border included).
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let frame_w = (GRID_SIZE as u16) * self.cell_w + 2;
        let frame_h = (GRID_SIZE as u16) * self.cell_h + 2;
        BoardLayout {
            origin_x: viewport.width.saturating_sub(frame_w) / 2,
            origin_y: viewport.height.saturating_sub(frame_h) / 2,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Map a mouse position to the board cell under it.
    pub fn hit_test(&self, x: u16, y: u16, viewport: Viewport) -> Option<Coord> {
        self.layout(viewport).hit_test(x, y)
    }

    /// Render a snapshot (plus the UI-side cursor) into a frame.
    pub fn render(
        &self,
        snapshot: &GameSnapshot,
        cursor: Option<Coord>,
        viewport: Viewport,
    ) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);
        frame.fill(Glyph::default());

        let layout = self.layout(viewport);
        let frame_w = (GRID_SIZE as u16) * self.cell_w + 2;
        let frame_h = (GRID_SIZE as u16) * self.cell_h + 2;

        self.draw_border(&mut frame, &layout, frame_w, frame_h);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let coord = Coord::new(row, col);
                let id = snapshot.board[row as usize][col as usize];
                let clearing = snapshot.clearing & (1u64 << coord.index()) != 0;
                let selected = snapshot.selection == Some((row, col));
                let under_cursor = cursor == Some(coord);
                self.draw_cell(&mut frame, &layout, coord, id, clearing, selected, under_cursor);
            }
        }

        self.draw_hud(&mut frame, snapshot, &layout, frame_w);
        frame
    }

    fn draw_border(&self, frame: &mut Frame, layout: &BoardLayout, w: u16, h: u16) {
        let style_fg = Rgb::new(200, 200, 200);
        let style_bg = Rgb::new(0, 0, 0);
        let (x, y) = (layout.origin_x, layout.origin_y);

        for dx in 0..w {
            frame.set(x + dx, y, Glyph::new('─', style_fg, style_bg));
            frame.set(x + dx, y + h - 1, Glyph::new('─', style_fg, style_bg));
        }
        for dy in 0..h {
            frame.set(x, y + dy, Glyph::new('│', style_fg, style_bg));
            frame.set(x + w - 1, y + dy, Glyph::new('│', style_fg, style_bg));
        }
        frame.set(x, y, Glyph::new('┌', style_fg, style_bg));
        frame.set(x + w - 1, y, Glyph::new('┐', style_fg, style_bg));
        frame.set(x, y + h - 1, Glyph::new('└', style_fg, style_bg));
        frame.set(x + w - 1, y + h - 1, Glyph::new('┘', style_fg, style_bg));
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        frame: &mut Frame,
        layout: &BoardLayout,
        coord: Coord,
        id: u8,
        clearing: bool,
        selected: bool,
        under_cursor: bool,
    ) {
        let (x, y) = layout.cell_pos(coord);

        let (fill, center) = if clearing {
            // Flash: inverted, bright.
            (
                Glyph::new(' ', Rgb::new(0, 0, 0), Rgb::new(250, 250, 250)),
                Glyph::new('*', Rgb::new(0, 0, 0), Rgb::new(250, 250, 250)).bold(),
            )
        } else if id == 0 {
            let bg = Rgb::new(25, 25, 35);
            (
                Glyph::new(' ', Rgb::new(70, 70, 80), bg),
                Glyph::new('·', Rgb::new(70, 70, 80), bg),
            )
        } else {
            let bg = symbol_color(id);
            let fg = Rgb::new(15, 15, 15);
            (
                Glyph::new(' ', fg, bg),
                Glyph::new(symbol_char(id), fg, bg).bold(),
            )
        };

        frame.fill_region(x, y, self.cell_w, self.cell_h, fill);
        frame.set(x + self.cell_w / 2, y + self.cell_h / 2, center);

        // Edge markers: selection brackets win over the cursor.
        let marker_y = y + self.cell_h / 2;
        let marker_fg = Rgb::new(255, 255, 255);
        if selected {
            frame.set(x, marker_y, Glyph::new('[', marker_fg, fill.bg).bold());
            frame.set(
                x + self.cell_w - 1,
                marker_y,
                Glyph::new(']', marker_fg, fill.bg).bold(),
            );
        } else if under_cursor {
            frame.set(x, marker_y, Glyph::new('>', marker_fg, fill.bg).bold());
            frame.set(
                x + self.cell_w - 1,
                marker_y,
                Glyph::new('<', marker_fg, fill.bg).bold(),
            );
        }
    }

    fn draw_hud(&self, frame: &mut Frame, snapshot: &GameSnapshot, layout: &BoardLayout, frame_w: u16) {
        let x = layout.origin_x + frame_w + 2;
        let y = layout.origin_y;
        let fg = Rgb::new(220, 220, 220);
        let dim = Rgb::new(130, 130, 140);
        let bg = Rgb::new(0, 0, 0);

        frame.write_str(x, y, "GEMSWAP", Rgb::new(255, 255, 255), bg);
        frame.write_str(x, y + 2, &format!("score  {}", snapshot.score), fg, bg);
        frame.write_str(x, y + 3, &format!("moves  {}", snapshot.moves), fg, bg);

        let status = if snapshot.busy {
            "resolving..."
        } else {
            "your move"
        };
        frame.write_str(x, y + 5, status, fg, bg);

        frame.write_str(x, y + 7, "arrows/hjkl move", dim, bg);
        frame.write_str(x, y + 8, "enter/space pick", dim, bg);
        frame.write_str(x, y + 9, "click       pick", dim, bg);
        frame.write_str(x, y + 10, "n        new game", dim, bg);
        frame.write_str(x, y + 11, "r         shuffle", dim, bg);
        frame.write_str(x, y + 12, "q            quit", dim, bg);
    }
}
