// shared.rs - Grid handle for hosts that feed input from more than one thread

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::grid::{self, Grid, IndexError};

/// Cloneable handle that serializes every transition through one lock.
///
/// Each call reads the held grid, computes the successor and stores it
/// before releasing the lock, so concurrent activations never lose a write
/// or touch a cell other than their target.
#[derive(Debug, Clone)]
pub struct SharedGrid {
    inner: Arc<Mutex<Grid>>,
}

impl SharedGrid {
    pub fn new(grid: Grid) -> Self {
        Self { inner: Arc::new(Mutex::new(grid)) }
    }

    /// Copy of the current grid.
    pub fn snapshot(&self) -> Grid {
        self.inner.lock().clone()
    }

    /// Advance one cell and return the grid that is now held.
    pub fn cycle(&self, row: usize, column: usize) -> Result<Grid, IndexError> {
        let mut held = self.inner.lock();
        let next = held.cycle(row, column).inspect_err(|err| warn!(%err, "rejected activation"))?;
        *held = next.clone();
        debug!(row, column, "cell advanced");
        Ok(next)
    }

    /// Replace the held grid with a blank one of the same shape.
    pub fn clear(&self) -> Grid {
        let mut held = self.inner.lock();
        let (rows, columns) = held.shape();
        *held = grid::clear(rows, columns);
        debug!(rows, columns, "grid cleared");
        held.clone()
    }
}
