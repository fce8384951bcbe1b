use log::{debug, trace};

use crate::{
    board::Board,
    common::{ConfigError, MoveError},
    config::{GameConfig, PassPolicy},
    input::Move,
    player::{validate_players, Player},
    rules::{self, Applied},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over,
}

/// Final result, by seat index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Winner(usize),
    Tie,
}

/// What a successful call to [`GameEngine::play`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Seat `player` placed a disc.
    Moved { player: usize, applied: Applied },
    /// Seat `player` passed.
    Passed { player: usize },
    /// The active player resigned.
    Ended,
}

/// Turn order, board and players for one game.
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    turn: usize,
    status: GameStatus,
    pass_policy: PassPolicy,
}

impl GameEngine {
    /// Start a game on `board`. Seat `first` (0 or 1) moves first.
    pub fn new(
        board: Board,
        players: [Player; 2],
        first: usize,
        pass_policy: PassPolicy,
    ) -> Result<Self, ConfigError> {
        validate_players(&players)?;
        Ok(Self {
            board,
            players,
            turn: first % 2,
            status: GameStatus::InProgress,
            pass_policy,
        })
    }

    /// Build the board described by `config` and start a game on it.
    pub fn from_config(
        config: &GameConfig,
        players: [Player; 2],
        first: usize,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::for_opening(config.rows, config.cols, config.opening)?;
        Self::new(board, players, first, config.pass_policy)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Seat index of the player to move.
    pub fn active(&self) -> usize {
        self.turn
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Apply `mv` for the active player.
    ///
    /// A rejected move keeps the same player on turn and the board unchanged.
    pub fn play(&mut self, mv: Move) -> Result<Turn, MoveError> {
        if self.status == GameStatus::Over {
            return Err(MoveError::GameOver);
        }
        let player = self.turn;
        let side = self.players[player].side();
        match mv {
            Move::Quit => {
                debug!("{} resigned", self.players[player].name());
                self.status = GameStatus::Over;
                Ok(Turn::Ended)
            }
            Move::Skip => {
                if self.pass_policy == PassPolicy::WhenBlocked
                    && rules::has_legal_move(&self.board, side)
                {
                    trace!("{} tried to pass with moves available", self.players[player].name());
                    return Err(MoveError::PassNotAllowed);
                }
                debug!("{} passed", self.players[player].name());
                self.turn = 1 - player;
                Ok(Turn::Passed { player })
            }
            Move::Place { row, col } => {
                let applied = rules::try_move(&mut self.board, side, row, col).map_err(|e| {
                    trace!("rejected ({}, {}) for {:?}: {}", row, col, side, e);
                    e
                })?;
                debug!(
                    "{} placed at ({}, {}), {} cells changed",
                    self.players[player].name(),
                    row,
                    col,
                    applied.flipped
                );
                self.turn = 1 - player;
                Ok(Turn::Moved { player, applied })
            }
        }
    }

    /// Disc count for seat `player`. Seats wrap like `first` in [`Self::new`].
    pub fn score(&self, player: usize) -> usize {
        rules::score(&self.board, self.players[player % 2].side())
    }

    /// Disc counts for both seats.
    pub fn scores(&self) -> [usize; 2] {
        [self.score(0), self.score(1)]
    }

    /// Returns `true` when seat `player` has a legal placement.
    pub fn can_move(&self, player: usize) -> bool {
        rules::has_legal_move(&self.board, self.players[player % 2].side())
    }

    /// Neither seat can place a disc; only `skip` and `quit` remain.
    pub fn is_blocked(&self) -> bool {
        !self.can_move(0) && !self.can_move(1)
    }

    /// Result by current disc counts.
    pub fn outcome(&self) -> Outcome {
        let [a, b] = self.scores();
        match a.cmp(&b) {
            core::cmp::Ordering::Greater => Outcome::Winner(0),
            core::cmp::Ordering::Less => Outcome::Winner(1),
            core::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}
