//! Board rendering for the Cubic GUI
//!
//! The cube is drawn as its four layers, side by side in a 2x2 arrangement.

use crate::board::{Board, Mark, Pos, BOARD_SIZE};
use crate::eval::center_cells;
use crate::rules::Line;
use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the four layer grids
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Drawing area of the whole cube
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Mark,
        suggested_move: Option<Pos>,
        winning_line: Option<&Line>,
        game_over: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();

        // Two layers across, two down, each with a label strip above it
        let by_width = (available.x - LAYER_GAP - 20.0) / 2.0;
        let by_height = (available.y - LAYER_GAP - 2.0 * LAYER_LABEL_HEIGHT - 20.0) / 2.0;
        let layer_size = by_width.min(by_height).max(80.0);
        self.cell_size = layer_size / BOARD_SIZE as f32;

        let total = Vec2::new(
            2.0 * layer_size + LAYER_GAP,
            2.0 * (layer_size + LAYER_LABEL_HEIGHT) + LAYER_GAP,
        );
        let (response, painter) = ui.allocate_painter(total, Sense::click());
        self.board_rect = response.rect;

        for layer in 0..BOARD_SIZE as u8 {
            self.draw_layer(&painter, layer);
        }

        self.draw_marks(&painter, board);

        if let Some(pos) = board.last_move() {
            painter.circle_filled(self.cell_rect(pos).right_top() + Vec2::new(-7.0, 7.0), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if let Some(pos) = suggested_move {
            self.draw_suggestion(&painter, pos);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.is_empty(pos);
                    let hover_color = if is_valid { hover_valid() } else { hover_invalid() };
                    painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(3), hover_color);
                    if is_valid {
                        self.draw_mark(&painter, pos, current_turn, 0.35);
                    }

                    if response.clicked() && is_valid {
                        clicked_pos = Some(pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Top-left corner of a layer's grid
    fn layer_origin(&self, layer: u8) -> Pos2 {
        let layer_size = self.cell_size * BOARD_SIZE as f32;
        let col = f32::from(layer % 2);
        let row = f32::from(layer / 2);
        self.board_rect.min
            + Vec2::new(
                col * (layer_size + LAYER_GAP),
                row * (layer_size + LAYER_LABEL_HEIGHT + LAYER_GAP) + LAYER_LABEL_HEIGHT,
            )
    }

    fn layer_rect(&self, layer: u8) -> Rect {
        let size = self.cell_size * BOARD_SIZE as f32;
        Rect::from_min_size(self.layer_origin(layer), Vec2::splat(size))
    }

    /// Screen rectangle of one cell
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let origin = self.layer_origin(pos.layer);
        Rect::from_min_size(
            origin + Vec2::new(f32::from(pos.col), f32::from(pos.row)) * self.cell_size,
            Vec2::splat(self.cell_size),
        )
    }

    /// Draw one layer's background, grid and label
    fn draw_layer(&self, painter: &Painter, layer: u8) {
        let rect = self.layer_rect(layer);
        painter.rect_filled(rect, CornerRadius::same(4), LAYER_BG);

        for pos in center_cells().into_iter().filter(|p| p.layer == layer) {
            painter.rect_filled(self.cell_rect(pos).shrink(1.0), CornerRadius::ZERO, CENTER_CELL);
        }

        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment([rect.min + Vec2::new(offset, 0.0), rect.min + Vec2::new(offset, rect.height())], stroke);
            painter.line_segment([rect.min + Vec2::new(0.0, offset), rect.min + Vec2::new(rect.width(), offset)], stroke);
        }
        painter.rect_stroke(rect, CornerRadius::same(4), Stroke::new(2.0, LAYER_BORDER), StrokeKind::Inside);

        painter.text(
            rect.left_top() - Vec2::new(0.0, 4.0),
            Align2::LEFT_BOTTOM,
            format!("Layer {layer}"),
            FontId::proportional(13.0),
            LAYER_LABEL,
        );
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            let mark = board.get(pos);
            if mark != Mark::Empty {
                self.draw_mark(painter, pos, mark, 1.0);
            }
        }
    }

    /// Draw an X or O, `alpha` in 0..=1
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, alpha: f32) {
        let center = self.cell_rect(pos).center();
        let r = self.cell_size * MARK_RATIO;
        let stroke_width = MARK_STROKE.min(self.cell_size * 0.12);

        match mark {
            Mark::X => {
                let stroke = Stroke::new(stroke_width, X_MARK.gamma_multiply(alpha));
                painter.line_segment([center + Vec2::new(-r, -r), center + Vec2::new(r, r)], stroke);
                painter.line_segment([center + Vec2::new(-r, r), center + Vec2::new(r, -r)], stroke);
            }
            Mark::O => {
                painter.circle_stroke(center, r, Stroke::new(stroke_width, O_MARK.gamma_multiply(alpha)));
            }
            Mark::Empty => {}
        }
    }

    /// Outline the cells of the winning line
    fn draw_winning_line(&self, painter: &Painter, line: &Line) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);
        for pos in line.cells {
            painter.rect_stroke(self.cell_rect(pos).shrink(2.0), CornerRadius::same(4), stroke, StrokeKind::Inside);
        }

        // Connect cells that share a layer
        for pair in line.cells.windows(2) {
            if pair[0].layer == pair[1].layer {
                painter.line_segment([self.cell_rect(pair[0]).center(), self.cell_rect(pair[1]).center()], stroke);
            }
        }
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(3.0);
        painter.rect_stroke(rect, CornerRadius::same(4), Stroke::new(2.0, SUGGESTION), StrokeKind::Inside);
        painter.text(rect.center(), Align2::CENTER_CENTER, "?", FontId::proportional(16.0), SUGGESTION);
    }

    /// Convert screen coordinates to a cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        (0..BOARD_SIZE as u8).find_map(|layer| {
            let rect = self.layer_rect(layer);
            if !rect.contains(screen_pos) {
                return None;
            }
            let rel = (screen_pos - rect.min) / self.cell_size;
            let col = (rel.x.floor() as i32).clamp(0, BOARD_SIZE as i32 - 1);
            let row = (rel.y.floor() as i32).clamp(0, BOARD_SIZE as i32 - 1);
            Some(Pos::new(layer, row as u8, col as u8))
        })
    }
}
