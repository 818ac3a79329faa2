// cell.rs - The three marks a solver can put on a cell

/// Mark held by one row/column intersection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Checked,
    Crossed,
}

impl CellState {
    /// Order a cell walks through on repeated activation.
    pub const CYCLE: [CellState; 3] = [CellState::Empty, CellState::Checked, CellState::Crossed];

    /// Next mark in the fixed cycle `Empty -> Checked -> Crossed -> Empty`.
    pub const fn next(self) -> Self {
        match self {
            CellState::Empty   => CellState::Checked,
            CellState::Checked => CellState::Crossed,
            CellState::Crossed => CellState::Empty,
        }
    }

    /// Glyph drawn inside the cell, `None` for a blank cell.
    pub const fn glyph(self) -> Option<&'static str> {
        match self {
            CellState::Empty   => None,
            CellState::Checked => Some("✓"),
            CellState::Crossed => Some("✕"),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }
}
