//! The game state engine.

use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use super::observer::{ObserverId, ObserverRegistry, ViewObserver};
use super::snapshot::GameSnapshot;
use super::view::ViewState;
use crate::core::{Board, CellIndex, EngineConfig, Mark, Placement, Result, CELL_COUNT};
use crate::history::{MoveList, Timeline};
use crate::rules::{evaluate_status_with, winning_line, GameStatus};

/// Why a move left the game unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The current board is already won or drawn.
    GameOver,
    /// The target cell already holds a mark.
    Occupied,
}

/// Result of a well-formed move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was recorded as history index `index`.
    Applied {
        index: usize,
        placement: Placement,
        status: GameStatus,
    },
    /// The move was ignored; history and cursor are unchanged.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Tic-tac-toe engine with time travel.
///
/// Owns the snapshot history, the cursor into it, and any registered
/// observers. All operations are synchronous and either succeed, do nothing
/// (ignored moves), or fail with the state untouched.
///
/// ## Example
///
/// ```
/// use tictactoe_engine::engine::Game;
/// use tictactoe_engine::rules::GameStatus;
/// use tictactoe_engine::core::Mark;
///
/// let mut game = Game::new();
/// game.apply_move(0).unwrap();
/// game.apply_move(4).unwrap();
/// assert_eq!(game.history_len(), 3);
///
/// // Go back to the start and play a different first move.
/// game.jump_to(0).unwrap();
/// game.apply_move(8).unwrap();
/// assert_eq!(game.history_len(), 2);
/// assert_eq!(game.status(), GameStatus::InProgress(Mark::O));
/// ```
pub struct Game {
    config: EngineConfig,
    timeline: Timeline,
    observers: ObserverRegistry,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("timeline", &self.timeline)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Game {
    /// New game with the default configuration (X moves first).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            timeline: Timeline::new(),
            observers: ObserverRegistry::default(),
        }
    }

    /// Rebuild a game from a snapshot, validating its history.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self> {
        let timeline = Timeline::from_boards(snapshot.boards, snapshot.current, snapshot.config.first_mark)?;
        Ok(Self {
            config: snapshot.config,
            timeline,
            observers: ObserverRegistry::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    // === Moves ===

    /// Place the current player's mark on `cell` (0-8).
    ///
    /// Out-of-range cells are an error. A finished game or an occupied cell
    /// is not: the move is ignored and reported as `MoveOutcome::Ignored`.
    pub fn apply_move(&mut self, cell: usize) -> Result<MoveOutcome> {
        let cell = CellIndex::new(cell)?;
        Ok(self.play(cell))
    }

    /// Typed form of `apply_move`.
    pub fn play(&mut self, cell: CellIndex) -> MoveOutcome {
        let board = self.timeline.current_board();

        if self.status().is_over() {
            trace!(%cell, "move ignored: game over");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !board.is_empty_at(cell) {
            trace!(%cell, "move ignored: cell occupied");
            return MoveOutcome::Ignored(IgnoreReason::Occupied);
        }

        let mark = self.config.mover_at(self.timeline.current_index());
        let next = board.with_mark(cell, mark);
        let discarded = self.timeline.push(next);
        let index = self.timeline.current_index();
        let status = self.status();

        debug!(index, %mark, %cell, discarded, %status, "move applied");
        self.notify();

        MoveOutcome::Applied {
            index,
            placement: Placement { cell, mark },
            status,
        }
    }

    // === Time travel ===

    /// View snapshot `index`. Later snapshots are kept until the next move.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        self.timeline.jump_to(index)?;
        debug!(index, len = self.timeline.len(), "jumped");
        self.notify();
        Ok(())
    }

    /// Jump one snapshot back. Returns `false` at game start.
    pub fn step_back(&mut self) -> bool {
        match self.timeline.current_index().checked_sub(1) {
            Some(index) => self.jump_to(index).is_ok(),
            None => false,
        }
    }

    /// Jump one snapshot forward. Returns `false` at the latest snapshot.
    pub fn step_forward(&mut self) -> bool {
        if self.timeline.is_at_latest() {
            return false;
        }
        self.jump_to(self.timeline.current_index() + 1).is_ok()
    }

    /// Start over from the empty board. Observers stay registered.
    pub fn reset(&mut self) {
        self.timeline.reset();
        info!("game reset");
        self.notify();
    }

    // === Queries ===

    #[must_use]
    pub fn current_board(&self) -> Board {
        self.timeline.current_board()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.timeline.current_index()
    }

    /// Number of snapshots, including game start.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.timeline.len()
    }

    #[must_use]
    pub fn is_at_latest(&self) -> bool {
        self.timeline.is_at_latest()
    }

    pub fn board_at(&self, index: usize) -> Result<Board> {
        self.timeline.board_at(index)
    }

    /// Status of the current board.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        evaluate_status_with(&self.timeline.current_board(), self.config.first_mark)
    }

    /// Player to move, or `None` once the current board is decided.
    #[must_use]
    pub fn next_mark(&self) -> Option<Mark> {
        self.status().next_mark()
    }

    /// Cells that would be accepted by `play` right now.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[CellIndex; CELL_COUNT]> {
        if self.status().is_over() {
            SmallVec::new()
        } else {
            self.timeline.current_board().empty_cells()
        }
    }

    /// One descriptor per snapshot, regenerated on every call.
    #[must_use]
    pub fn list_moves(&self) -> MoveList<'_> {
        MoveList::new(&self.timeline, &self.config)
    }

    /// Everything a renderer needs for the current snapshot.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        let board = self.timeline.current_board();
        ViewState {
            board,
            status: self.status(),
            moves: self.list_moves().collect(),
            current_index: self.timeline.current_index(),
            winning_line: winning_line(&board).map(|(_, line)| line),
        }
    }

    // === Observers ===

    /// Register an observer, called with the new view after every change.
    pub fn subscribe(&mut self, observer: impl ViewObserver + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Returns whether the observer was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.view_state();
        self.observers.notify(&view);
    }

    // === Snapshots ===

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            boards: self.timeline.to_vec(),
            current: self.timeline.current_index(),
        }
    }

    /// Replace this game's config and history with a validated snapshot.
    ///
    /// Observers stay registered and are notified. On error nothing changes.
    pub fn restore(&mut self, snapshot: GameSnapshot) -> Result<()> {
        let timeline = match Timeline::from_boards(snapshot.boards, snapshot.current, snapshot.config.first_mark) {
            Ok(timeline) => timeline,
            Err(e) => {
                warn!(error = %e, "snapshot rejected");
                return Err(e);
            }
        };

        self.config = snapshot.config;
        self.timeline = timeline;
        info!(len = self.timeline.len(), current = self.timeline.current_index(), "snapshot restored");
        self.notify();
        Ok(())
    }
}
