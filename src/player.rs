use alloc::string::String;

use crate::common::{ConfigError, Side};
use crate::config::{DEFAULT_PLAYERS, EMPTY_SYMBOL};

/// A seat at the table. Created once at setup and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    colour: String,
    symbol: char,
    name: String,
    side: Side,
}

impl Player {
    pub fn new(colour: impl Into<String>, symbol: char, name: impl Into<String>, side: Side) -> Self {
        Player {
            colour: colour.into(),
            symbol,
            name: name.into(),
            side,
        }
    }

    /// Default player for seat `0` (black) or `1` (white), optionally renamed.
    pub fn default_for(seat: usize, name: Option<&str>) -> Self {
        let (colour, symbol, default_name, side) = DEFAULT_PLAYERS[seat % 2];
        Player::new(colour, symbol, name.unwrap_or(default_name), side)
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

/// Check that two players can share a board.
pub fn validate_players(players: &[Player; 2]) -> Result<(), ConfigError> {
    for p in players {
        if p.symbol == EMPTY_SYMBOL || p.symbol.is_whitespace() || p.symbol.is_control() {
            return Err(ConfigError::ReservedSymbol(p.symbol));
        }
    }
    if players[0].symbol == players[1].symbol {
        return Err(ConfigError::DuplicateSymbol(players[0].symbol));
    }
    if players[0].side == players[1].side {
        return Err(ConfigError::DuplicateSide(players[0].side));
    }
    Ok(())
}
