use gtk4 as gtk;
use libadwaita as adw;

use crate::game::{CardView, GameController};

pub struct UiState {
    pub controller: GameController,
    pub window: Option<adw::ApplicationWindow>,
    pub title_subtitle: Option<gtk::Label>,
    pub board_container: Option<gtk::Box>,
    pub victory_dialog: Option<adw::AlertDialog>,

    // Board
    pub views: Vec<CardView>,
    pub grid_buttons: Vec<gtk::Button>,
    pub grid_cols: i32,
    pub grid_rows: i32,
}

impl UiState {
    pub fn new(controller: GameController) -> Self {
        let total_cards = controller.config().symbols.len() * 2;
        let (grid_cols, grid_rows) = grid_shape(total_cards);
        UiState {
            controller,
            window: None,
            title_subtitle: None,
            board_container: None,
            victory_dialog: None,
            views: Vec::new(),
            grid_buttons: Vec::new(),
            grid_cols,
            grid_rows,
        }
    }

    pub fn view_at(&self, index: usize) -> Option<&CardView> {
        self.views.get(index)
    }
}

/// Smallest square-ish grid that fits every card, wider than tall.
pub fn grid_shape(total_cards: usize) -> (i32, i32) {
    if total_cards == 0 {
        return (1, 1);
    }
    let mut cols = 1;
    while cols * cols < total_cards {
        cols += 1;
    }
    let rows = total_cards.div_ceil(cols);
    (cols as i32, rows as i32)
}

#[cfg(test)]
mod tests {
    use super::grid_shape;

    #[test]
    fn classic_board_is_four_by_four() {
        assert_eq!(grid_shape(16), (4, 4));
    }

    #[test]
    fn uneven_boards_add_rows() {
        assert_eq!(grid_shape(4), (2, 2));
        assert_eq!(grid_shape(6), (3, 2));
        assert_eq!(grid_shape(12), (4, 3));
        assert_eq!(grid_shape(0), (1, 1));
    }
}
