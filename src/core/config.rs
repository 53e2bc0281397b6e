//! Board dimensions and the fleet catalog shared by both boards.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::common::{ConfigError, Position};
use super::ship::{ShipId, ShipSpec};

pub const MAX_ROWS: usize = 10;
pub const MAX_COLS: usize = 10;

/// Marks a ship symbol may never use: hit, miss, water and obstruction.
pub const RESERVED_SYMBOLS: [char; 4] = ['X', 'o', '.', '#'];

/// The standard fleet as (length, symbol, name).
pub const STANDARD_FLEET: [(usize, char, &str); 5] = [
    (5, 'A', "aircraft carrier"),
    (4, 'B', "battleship"),
    (3, 'D', "destroyer"),
    (3, 'S', "submarine"),
    (2, 'P', "patrol boat"),
];

/// Game setup: board size plus the ordered list of ships each player places.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    fleet: Vec<ShipSpec>,
}

impl GameConfig {
    /// Create a configuration with an empty fleet.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || rows > MAX_ROWS || cols == 0 || cols > MAX_COLS {
            return Err(ConfigError::BadDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            fleet: Vec::new(),
        })
    }

    /// 10×10 board with the five standard ships.
    pub fn standard() -> Self {
        let mut config = Self {
            rows: MAX_ROWS,
            cols: MAX_COLS,
            fleet: Vec::with_capacity(STANDARD_FLEET.len()),
        };
        for (length, symbol, name) in STANDARD_FLEET {
            config.fleet.push(ShipSpec::new(length, symbol, name.to_string()));
        }
        config
    }

    /// Board of the given size carrying the standard fleet, validated ship by
    /// ship.
    pub fn with_standard_fleet(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let mut config = Self::new(rows, cols)?;
        for (length, symbol, name) in STANDARD_FLEET {
            config.add_ship(length, symbol, name)?;
        }
        Ok(config)
    }

    /// Register a ship and return its id.
    pub fn add_ship(
        &mut self,
        length: usize,
        symbol: char,
        name: impl Into<String>,
    ) -> Result<ShipId, ConfigError> {
        if length == 0 {
            return Err(ConfigError::BadLength(length));
        }
        if length > self.rows && length > self.cols {
            return Err(ConfigError::ShipTooLong(length));
        }
        if !symbol.is_ascii() || symbol.is_ascii_control() {
            return Err(ConfigError::UnprintableSymbol(symbol as u32));
        }
        if RESERVED_SYMBOLS.contains(&symbol) {
            return Err(ConfigError::ReservedSymbol(symbol));
        }
        if self.fleet.iter().any(|s| s.symbol() == symbol) {
            return Err(ConfigError::DuplicateSymbol(symbol));
        }
        if self.total_ship_cells() + length > self.rows * self.cols {
            return Err(ConfigError::FleetTooLarge);
        }
        self.fleet.push(ShipSpec::new(length, symbol, name.into()));
        Ok(self.fleet.len() - 1)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn fleet(&self) -> &[ShipSpec] {
        &self.fleet
    }

    pub fn num_ships(&self) -> usize {
        self.fleet.len()
    }

    /// Spec of a registered ship, `None` for an unknown id.
    pub fn ship(&self, id: ShipId) -> Option<&ShipSpec> {
        self.fleet.get(id)
    }

    /// Sum of all ship lengths.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().map(ShipSpec::length).sum()
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
}
