//! Random move selection and automated games.

use crate::core::{CellIndex, GameRng};
use crate::engine::Game;
use crate::rules::GameStatus;

/// Chooses the next move for the player to act.
pub trait MovePolicy {
    /// Pick one of `game.legal_moves()`, or `None` if there are none.
    fn choose_move(&mut self, game: &Game) -> Option<CellIndex>;
}

/// Uniformly random legal moves from a seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }
}

impl MovePolicy for RandomPlayer {
    fn choose_move(&mut self, game: &Game) -> Option<CellIndex> {
        let moves = game.legal_moves();
        self.rng.choose(&moves).copied()
    }
}

/// Play from the current snapshot until the game is decided.
///
/// Returns the final status. Both sides are driven by `policy`.
pub fn play_out(game: &mut Game, policy: &mut impl MovePolicy) -> GameStatus {
    while let Some(cell) = policy.choose_move(game) {
        if !game.play(cell).is_applied() {
            break;
        }
    }
    game.status()
}

/// Random walk through the game tree, mixing moves with time travel.
///
/// Each step either jumps to a uniformly random snapshot (with probability
/// `rewind_probability`, or always once the game is decided) or plays a
/// random legal move. Every jump target is valid, so the walk never errors.
/// A probability outside `[0, 1]` is clamped; NaN never rewinds.
pub fn wander(game: &mut Game, player: &mut RandomPlayer, steps: usize, rewind_probability: f64) {
    for _ in 0..steps {
        let rewind = game.status().is_over() || player.rng_mut().gen_bool(rewind_probability);
        if rewind {
            let target = player.rng_mut().gen_index(game.history_len());
            // In range by construction.
            let _ = game.jump_to(target);
        } else if let Some(cell) = player.choose_move(game) {
            game.play(cell);
        }
    }
}
