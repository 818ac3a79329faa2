// view.rs - Binds the mark grid to the puzzle page

use egui::Color32;
use grid_model::{Grid, IndexError, PuzzleConfig, grid};
use tracing::{debug, error};

/// User intent gathered while a frame is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    Activate { row: usize, column: usize },
    Clear,
}

/// Puzzle page state: the fixed configuration and the grid currently shown.
pub struct GridView {
    config: PuzzleConfig,
    grid: Grid,

    pub check_color: Color32,
    pub cross_color: Color32,
    pub blank_color: Color32,
    pub cell_size: f32,
    pub heading_width: f32,
}

impl GridView {
    pub fn new(config: PuzzleConfig) -> Self {
        let grid = config.blank_grid();
        debug!(rows = grid.rows(), columns = grid.columns(), title = %config.title, "grid view ready");

        Self {
            config,
            grid,
            check_color: Color32::from_rgb(46, 160, 67),
            cross_color: Color32::from_rgb(207, 34, 46),
            blank_color: Color32::from_gray(40),
            cell_size: 64.0,
            heading_width: 200.0,
        }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn apply(&mut self, action: GridAction) -> Result<(), IndexError> {
        match action {
            GridAction::Activate { row, column } => self.activate_cell(row, column),
            GridAction::Clear => {
                self.clear_grid();
                Ok(())
            }
        }
    }

    /// Advance one cell. A rejected index leaves the held grid as it was.
    pub fn activate_cell(&mut self, row: usize, column: usize) -> Result<(), IndexError> {
        match grid::cycle(&self.grid, row, column) {
            Ok(next) => {
                debug!(row, column, state = ?next.get(row, column), "cell activated");
                self.grid = next;
                Ok(())
            }
            Err(err) => {
                error!(%err, "activation outside the grid");
                Err(err)
            }
        }
    }

    pub fn clear_grid(&mut self) {
        let (rows, columns) = self.config.shape();
        self.grid = grid::clear(rows, columns);
        debug!(rows, columns, "grid cleared");
    }

    /// Glyph for the cell at `(row, column)`, `None` for blank or out of range.
    pub fn marker(&self, row: usize, column: usize) -> Option<&'static str> {
        self.grid.get(row, column).and_then(|state| state.glyph())
    }

    /// Text describing what activating the cell marks.
    pub fn cell_label(&self, row: usize, column: usize) -> String {
        let row_label = self.config.row_category.items.get(row).map_or("?", |item| item.label.as_str());
        let column_label = self.config.column_category.items.get(column).map_or("?", |item| item.label.as_str());
        format!("Mark relationship between {row_label} and {column_label}")
    }

    /// Rules paired with their 1-based position.
    pub fn numbered_rules(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.config.rules.iter().enumerate().map(|(i, rule)| (i + 1, rule.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_model::{CellState, presets};

    fn vault() -> GridView {
        GridView::new(presets::load(presets::DEFAULT_PRESET).unwrap())
    }

    #[test]
    fn starts_blank_with_config_shape() {
        let view = vault();
        assert_eq!(view.grid().shape(), (4, 4));
        assert!(view.grid().is_blank());
        assert_eq!(view.marker(0, 0), None);
    }

    #[test]
    fn activation_cycles_markers() {
        let mut view = vault();
        view.apply(GridAction::Activate { row: 1, column: 2 }).unwrap();
        assert_eq!(view.marker(1, 2), Some("✓"));
        view.apply(GridAction::Activate { row: 1, column: 2 }).unwrap();
        assert_eq!(view.marker(1, 2), Some("✕"));
        view.apply(GridAction::Activate { row: 1, column: 2 }).unwrap();
        assert_eq!(view.marker(1, 2), None);
        assert!(view.grid().is_blank());
    }

    #[test]
    fn clear_discards_every_mark() {
        let mut view = vault();
        for (row, column) in [(0, 0), (0, 0), (2, 3), (3, 1)] {
            view.activate_cell(row, column).unwrap();
        }
        assert_eq!(view.grid().count(CellState::Crossed), 1);
        assert_eq!(view.grid().count(CellState::Checked), 2);

        view.apply(GridAction::Clear).unwrap();
        assert!(view.grid().is_blank());
        assert_eq!(view.grid().shape(), (4, 4));
    }

    #[test]
    fn rejected_activation_keeps_grid() {
        let mut view = vault();
        view.activate_cell(0, 1).unwrap();
        let before = view.grid().clone();

        let err = view.apply(GridAction::Activate { row: 4, column: 0 }).unwrap_err();
        assert_eq!((err.row, err.column), (4, 0));
        assert_eq!(view.grid(), &before);
    }

    #[test]
    fn cell_label_names_both_items() {
        let view = vault();
        assert_eq!(
            view.cell_label(1, 3),
            "Mark relationship between Lyra (Linguist) and Frost Bloom"
        );
    }

    #[test]
    fn rules_are_numbered_from_one() {
        let view = vault();
        let numbered: Vec<_> = view.numbered_rules().collect();
        assert_eq!(numbered.len(), 8);
        assert_eq!(numbered[0].0, 1);
        assert!(numbered[0].1.starts_with("The explorer who studies the Lumen Prism"));
        assert_eq!(numbered[7].0, 8);
    }

    #[test]
    fn activation_does_not_touch_config() {
        let mut view = vault();
        let config = view.config().clone();
        view.activate_cell(2, 2).unwrap();
        view.clear_grid();
        assert_eq!(view.config(), &config);
    }
}
