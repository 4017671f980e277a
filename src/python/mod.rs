//! Python bindings for the tic-tac-toe engine.
//!
//! # Quick Start
//!
//! ```python
//! import tictactoe_engine as ttt
//!
//! game = ttt.Game()
//! game.apply_move(4)
//! game.apply_move(0)
//! game.jump_to(1)           # back to after X's first move
//! game.apply_move(8)        # O plays elsewhere, move #2 is replaced
//!
//! view = game.view_state()
//! print(view.status, [m.label for m in view.moves])
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// tictactoe_engine: tic-tac-toe state engine with time travel.
#[pymodule]
fn tictactoe_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyViewState>()?;
    m.add_class::<PyMoveDescriptor>()?;
    Ok(())
}
