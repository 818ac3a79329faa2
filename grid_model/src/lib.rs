// lib.rs - Cell states, the mark grid and puzzle configuration

pub mod cell;      // Tri-state cell marks
pub mod config;    // Categories, items and rules loaded from TOML
pub mod grid;      // Copy-on-write mark grid
pub mod presets;   // Built-in puzzles
pub mod shared;    // Lock-guarded grid handle

pub use cell::CellState;
pub use config::{Category, ConfigError, Item, PuzzleConfig};
pub use grid::{Grid, IndexError, clear, cycle};
pub use shared::SharedGrid;
