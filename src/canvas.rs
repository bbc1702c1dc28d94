// canvas.rs - Cell states as seen by the screen
//
// Fed only through the Renderer interface, so it lags the engine by at most
// one repaint interval.

use eframe::egui;
use egui::{Pos2, Rect, Vec2};

use ant_core::{CellChange, CellState, GridSize, Palette, Renderer};

use crate::to_color32;

pub struct Canvas {
    size: GridSize,
    cells: Vec<CellState>,
    painted: usize, // cells currently in a non-zero state
}

impl Canvas {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![0; size.cell_count()],
            painted: 0,
        }
    }

    pub fn resize(&mut self, size: GridSize) {
        *self = Self::new(size);
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn painted_cells(&self) -> usize {
        self.painted
    }

    /// Paints the grid into `rect`. State 0 is the background, so only
    /// non-zero cells get their own rectangle.
    pub fn paint(&self, painter: &egui::Painter, rect: Rect, palette: &Palette) {
        let background = palette.color(0).map(to_color32).unwrap_or_default();
        painter.rect_filled(rect, 0.0, background);

        let cell = Vec2::new(
            rect.width() / self.size.width as f32,
            rect.height() / self.size.height as f32,
        );
        for (i, &state) in self.cells.iter().enumerate() {
            if state == 0 {
                continue;
            }
            let Some(color) = palette.color(state as usize) else {
                continue; // palette is resynced on the next start
            };
            let (x, y) = (i % self.size.width, i / self.size.width);
            let min = Pos2::new(
                rect.min.x + x as f32 * cell.x,
                rect.min.y + y as f32 * cell.y,
            );
            painter.rect_filled(Rect::from_min_size(min, cell), 0.0, to_color32(color));
        }
    }
}

impl Renderer for Canvas {
    fn on_cell_changed(&mut self, change: CellChange) {
        if !self.size.contains(change.x, change.y) {
            return;
        }
        let cell = &mut self.cells[change.y * self.size.width + change.x];
        match (*cell == 0, change.state == 0) {
            (true, false) => self.painted += 1,
            (false, true) => self.painted -= 1,
            _ => {}
        }
        *cell = change.state;
    }

    fn clear_all(&mut self) {
        self.cells.fill(0);
        self.painted = 0;
    }
}
