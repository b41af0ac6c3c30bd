use common::engine::tictactoe::{BOARD_SIDE, Board, CELL_COUNT, Mark, Position, WinningLine};
use eframe::egui;

pub struct BoardView {
    last_hover: Option<usize>,
}

impl BoardView {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let side = available_width.min(available_height) / BOARD_SIDE as f32;
        side.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn position_rect(board_rect: egui::Rect, cell_size: f32, position: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + position.x as f32 * cell_size,
                board_rect.top() + position.y as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn cell_rect(board_rect: egui::Rect, cell_size: f32, index: usize) -> Option<egui::Rect> {
        Position::from_index(index).map(|position| Self::position_rect(board_rect, cell_size, position))
    }

    fn cell_at(board_rect: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<usize> {
        if !board_rect.contains(pos) {
            return None;
        }
        let x = ((pos.x - board_rect.left()) / cell_size) as usize;
        let y = ((pos.y - board_rect.top()) / cell_size) as usize;
        Position::new(x, y).to_index()
    }

    /// Draws the board and returns the cell the human clicked, if any.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<WinningLine>,
        accepts_input: bool,
    ) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_side = cell_size * BOARD_SIDE as f32;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(board_side, board_side),
            egui::Sense::click(),
        );
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        if let Some(line) = winning_line {
            for index in (0..CELL_COUNT).filter(|&index| line.contains(index)) {
                if let Some(cell_rect) = Self::cell_rect(rect, cell_size, index) {
                    painter.rect_filled(cell_rect, 0.0, egui::Color32::from_rgb(190, 235, 190));
                }
            }
        }

        self.last_hover = None;
        if accepts_input
            && let Some(hover_pos) = response.hover_pos()
            && let Some(index) = Self::cell_at(rect, cell_size, hover_pos)
            && board.is_empty_at(index)
            && let Some(cell_rect) = Self::cell_rect(rect, cell_size, index)
        {
            painter.rect_filled(
                cell_rect,
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
            self.last_hover = Some(index);
        }

        for i in 0..=BOARD_SIDE {
            let offset = i as f32 * cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                stroke,
            );
        }

        for (index, &mark) in board.cells().iter().enumerate() {
            let Some(cell_rect) = Self::cell_rect(rect, cell_size, index) else {
                continue;
            };
            match mark {
                Mark::X => Self::draw_x(painter, cell_rect),
                Mark::O => Self::draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        if let Some(line) = winning_line {
            let start = Self::position_rect(rect, cell_size, line.start()).center();
            let end = Self::position_rect(rect, cell_size, line.end()).center();
            painter.line_segment(
                [start, end],
                egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }

        if response.clicked() {
            return self.last_hover;
        }
        None
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 300.0))
    }

    #[test]
    fn test_cell_at_maps_points_to_indices() {
        assert_eq!(BoardView::cell_at(board_rect(), 100.0, egui::pos2(15.0, 25.0)), Some(0));
        assert_eq!(BoardView::cell_at(board_rect(), 100.0, egui::pos2(160.0, 170.0)), Some(4));
        assert_eq!(BoardView::cell_at(board_rect(), 100.0, egui::pos2(305.0, 315.0)), Some(8));
        assert_eq!(BoardView::cell_at(board_rect(), 100.0, egui::pos2(5.0, 25.0)), None);
    }

    #[test]
    fn test_cell_rect_is_inverse_of_cell_at() {
        for index in 0..CELL_COUNT {
            let center = BoardView::cell_rect(board_rect(), 100.0, index).unwrap().center();
            assert_eq!(BoardView::cell_at(board_rect(), 100.0, center), Some(index));
        }
        assert!(BoardView::cell_rect(board_rect(), 100.0, CELL_COUNT).is_none());
    }

    #[test]
    fn test_winning_line_endpoints_are_its_outer_cells() {
        let line = WinningLine::new(Mark::O, [2, 4, 6]);
        let start = BoardView::position_rect(board_rect(), 100.0, line.start());
        let end = BoardView::position_rect(board_rect(), 100.0, line.end());
        assert_eq!(start, BoardView::cell_rect(board_rect(), 100.0, 2).unwrap());
        assert_eq!(end, BoardView::cell_rect(board_rect(), 100.0, 6).unwrap());
        assert!(line.contains(4));
        assert!(!line.contains(0));
    }

    #[test]
    fn test_cell_size_is_clamped() {
        assert_eq!(BoardView::calculate_cell_size(90.0, 500.0), 60.0);
        assert_eq!(BoardView::calculate_cell_size(900.0, 900.0), 140.0);
        assert_eq!(BoardView::calculate_cell_size(300.0, 360.0), 100.0);
    }
}
