//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{EngineConfig, Mark};
use crate::engine::{Game, GameSnapshot, MoveOutcome};

use super::py_core::{PyMoveDescriptor, PyViewState};

/// Python wrapper for the game engine.
#[pyclass(name = "Game", unsendable)]
pub struct PyGame {
    game: Game,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - o_first: if true, O moves first instead of X
    #[new]
    #[pyo3(signature = (o_first = false))]
    fn new(o_first: bool) -> Self {
        let first = if o_first { Mark::O } else { Mark::X };
        Self {
            game: Game::with_config(EngineConfig::new().with_first_mark(first)),
        }
    }

    /// Restore a game saved with `to_bytes`.
    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        let snapshot = GameSnapshot::from_bytes(bytes)?;
        Ok(Self {
            game: Game::from_snapshot(snapshot)?,
        })
    }

    /// Place the current player's mark on cell 0-8.
    ///
    /// Returns True if the move was recorded, False if it was ignored
    /// (occupied cell or finished game). Raises ValueError when the cell
    /// is out of range.
    fn apply_move(&mut self, cell: usize) -> PyResult<bool> {
        Ok(matches!(self.game.apply_move(cell)?, MoveOutcome::Applied { .. }))
    }

    /// View history snapshot `index`. Raises ValueError when out of range.
    fn jump_to(&mut self, index: usize) -> PyResult<()> {
        Ok(self.game.jump_to(index)?)
    }

    fn step_back(&mut self) -> bool {
        self.game.step_back()
    }

    fn step_forward(&mut self) -> bool {
        self.game.step_forward()
    }

    fn reset(&mut self) {
        self.game.reset();
    }

    fn view_state(&self) -> PyViewState {
        PyViewState(self.game.view_state())
    }

    fn list_moves(&self) -> Vec<PyMoveDescriptor> {
        self.game.list_moves().map(PyMoveDescriptor).collect()
    }

    fn legal_moves(&self) -> Vec<usize> {
        self.game.legal_moves().iter().map(|c| c.index()).collect()
    }

    #[getter]
    fn current_index(&self) -> usize {
        self.game.current_index()
    }

    #[getter]
    fn history_len(&self) -> usize {
        self.game.history_len()
    }

    /// Save the game as bytes.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        Ok(self.game.snapshot().to_bytes()?)
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(move={}/{}, status={:?})",
            self.game.current_index(),
            self.game.history_len() - 1,
            self.game.status().to_string()
        )
    }
}
