//! Common types for Othello: sides, cell contents and error enums.

/// One of the two players' colours as stored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// The other side.
    pub const fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Disc(Side),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        Cell::Disc(side)
    }
}

/// Errors returned by board accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates fall outside `[0, rows) x [0, cols)`.
    OutOfRange { row: usize, col: usize },
}

/// Reasons a move is refused. All of them leave the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Target cell is off the board.
    OutOfRange,
    /// Target cell already holds a disc.
    CellOccupied,
    /// No direction brackets an opponent run.
    NoCaptureAvailable,
    /// Passing is refused while a legal placement exists.
    PassNotAllowed,
    /// The game has already ended.
    GameOver,
}

/// Malformed move token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Token is not exactly two characters long.
    WrongLength(usize),
    /// A character is not an ASCII letter.
    NotALetter(char),
}

/// Invalid game setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board dimension is odd or outside the allowed range.
    InvalidDimension(usize),
    /// Both players chose the same symbol.
    DuplicateSymbol(char),
    /// Symbol collides with the empty marker or is not printable.
    ReservedSymbol(char),
    /// Both players were assigned the same side.
    DuplicateSide(Side),
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfRange { .. } => MoveError::OutOfRange,
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfRange { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
        }
    }
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::OutOfRange => write!(f, "Input out of grid"),
            MoveError::CellOccupied => write!(f, "That cell is already filled"),
            MoveError::NoCaptureAvailable => write!(f, "That move does not capture any discs"),
            MoveError::PassNotAllowed => write!(f, "You cannot skip while a legal move exists"),
            MoveError::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::WrongLength(len) => {
                write!(f, "Input must be two letters, got {} characters", len)
            }
            FormatError::NotALetter(ch) => write!(f, "'{}' is not a letter", ch),
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidDimension(size) => {
                write!(f, "Board dimension {} must be even and between 4 and 26", size)
            }
            ConfigError::DuplicateSymbol(ch) => {
                write!(f, "Both players use the symbol '{}'", ch)
            }
            ConfigError::ReservedSymbol(ch) => {
                write!(f, "Symbol {:?} cannot be used for a player", ch)
            }
            ConfigError::DuplicateSide(side) => {
                write!(f, "Both players are assigned to {:?}", side)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
#[cfg(feature = "std")]
impl std::error::Error for FormatError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
