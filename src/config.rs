use crate::common::{ConfigError, Side};

/// Smallest board dimension accepted on either axis.
pub const MIN_DIMENSION: usize = 4;
/// Largest board dimension accepted on either axis (one letter per index).
pub const MAX_DIMENSION: usize = 26;
pub const DEFAULT_ROWS: usize = 8;
pub const DEFAULT_COLS: usize = 8;

/// Marker used when rendering an empty cell. Player symbols may not use it.
pub const EMPTY_SYMBOL: char = ' ';

/// Default `(colour, symbol, name, side)` for the two seats.
pub const DEFAULT_PLAYERS: [(&str, char, &str, Side); 2] = [
    ("black", 'X', "Black", Side::Black),
    ("white", 'O', "White", Side::White),
];

/// When a player may pass instead of placing a disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassPolicy {
    /// `skip` is accepted on any turn.
    #[default]
    Always,
    /// `skip` is accepted only when the player has no legal placement.
    WhenBlocked,
}

/// Board starting position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opening {
    /// Four discs in the centre, white on the main diagonal.
    #[default]
    Standard,
    /// No discs at all.
    Empty,
}

/// Settings collected before a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub pass_policy: PassPolicy,
    pub opening: Opening,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            pass_policy: PassPolicy::default(),
            opening: Opening::default(),
        }
    }
}

impl GameConfig {
    /// Check both dimensions against the board limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimension(self.rows)?;
        validate_dimension(self.cols)
    }
}

/// A dimension must be even and within `MIN_DIMENSION..=MAX_DIMENSION`.
pub fn validate_dimension(size: usize) -> Result<(), ConfigError> {
    if size < MIN_DIMENSION || size > MAX_DIMENSION || size % 2 != 0 {
        return Err(ConfigError::InvalidDimension(size));
    }
    Ok(())
}
