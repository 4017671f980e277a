//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Cell, EngineError};
use crate::engine::ViewState;
use crate::history::MoveDescriptor;

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for one move list entry.
#[pyclass(name = "MoveDescriptor")]
#[derive(Clone, Debug)]
pub struct PyMoveDescriptor(pub MoveDescriptor);

#[pymethods]
impl PyMoveDescriptor {
    /// History index to pass to `Game.jump_to`.
    #[getter]
    fn index(&self) -> usize {
        self.0.index
    }

    #[getter]
    fn label(&self) -> String {
        self.0.label.clone()
    }

    /// Cell index (0-8) played to reach this snapshot, None at game start.
    #[getter]
    fn cell(&self) -> Option<usize> {
        self.0.placement.map(|p| p.cell.index())
    }

    #[getter]
    fn is_current(&self) -> bool {
        self.0.is_current
    }

    fn __repr__(&self) -> String {
        format!("MoveDescriptor(index={}, label={:?})", self.0.index, self.0.label)
    }
}

/// Python wrapper for the renderer view.
#[pyclass(name = "ViewState")]
#[derive(Clone, Debug)]
pub struct PyViewState(pub ViewState);

#[pymethods]
impl PyViewState {
    /// Nine entries in row-major order: "X", "O" or None.
    #[getter]
    fn board(&self) -> Vec<Option<String>> {
        self.0
            .board
            .cells()
            .iter()
            .map(|cell| match cell {
                Cell::Empty => None,
                Cell::Marked(mark) => Some(mark.to_string()),
            })
            .collect()
    }

    /// Status line, e.g. "Next player: X", "Winner: O" or "Draw".
    #[getter]
    fn status(&self) -> String {
        self.0.status_text()
    }

    #[getter]
    fn winner(&self) -> Option<String> {
        self.0.status.winner().map(|m| m.to_string())
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.0.status.is_over()
    }

    #[getter]
    fn moves(&self) -> Vec<PyMoveDescriptor> {
        self.0.moves.iter().cloned().map(PyMoveDescriptor).collect()
    }

    #[getter]
    fn current_index(&self) -> usize {
        self.0.current_index
    }

    /// Cells of the completed line, if the board is won.
    #[getter]
    fn winning_line(&self) -> Option<[usize; 3]> {
        self.0.winning_line.map(|line| line.map(|c| c.index()))
    }

    fn __repr__(&self) -> String {
        format!(
            "ViewState(current_index={}, status={:?})",
            self.0.current_index,
            self.0.status_text()
        )
    }
}
