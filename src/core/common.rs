//! Common types: positions, shot outcomes and the error enums.

use core::fmt;

use super::ship::ShipId;

/// A (row, column) cell coordinate. Bounds are checked by the board it is used on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `distance` cells in `dir`, `None` when that leaves the board.
    pub fn offset(self, dir: Direction, distance: usize, rows: usize, cols: usize) -> Option<Self> {
        let (row, col) = match dir {
            Direction::Up => (self.row.checked_sub(distance)?, self.col),
            Direction::Down => (self.row.checked_add(distance)?, self.col),
            Direction::Left => (self.row, self.col.checked_sub(distance)?),
            Direction::Right => (self.row, self.col.checked_add(distance)?),
        };
        (row < rows && col < cols).then_some(Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the four axis directions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Result of an accepted attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed in water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit { ship: ShipId },
    /// Shot struck the last intact cell of a ship.
    Destroyed { ship: ShipId },
}

impl ShotOutcome {
    pub fn hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    pub fn destroyed(&self) -> bool {
        matches!(self, ShotOutcome::Destroyed { .. })
    }

    pub fn ship_id(&self) -> Option<ShipId> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit { ship } | ShotOutcome::Destroyed { ship } => Some(ship),
        }
    }
}

/// Errors returned by board operations. None of them mutate the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Position lies outside the board.
    OutOfBounds(Position),
    /// Cell was already shot at.
    AlreadyAttacked(Position),
    /// Ship id is not part of the fleet.
    InvalidShipId(ShipId),
    /// Ship is already on the board.
    ShipAlreadyPlaced(ShipId),
    /// Ship would run off the board.
    DoesNotFit,
    /// Ship would cover a cell that is not empty.
    Overlaps,
    /// Removal covers a cell that holds nothing.
    NotOccupied,
    /// Placement search gave up.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(p) => write!(f, "Position {} is off the board", p),
            BoardError::AlreadyAttacked(p) => write!(f, "Position {} was already attacked", p),
            BoardError::InvalidShipId(id) => write!(f, "Ship id {} is not in the fleet", id),
            BoardError::ShipAlreadyPlaced(id) => write!(f, "Ship {} is already placed", id),
            BoardError::DoesNotFit => write!(f, "Ship does not fit on the board there"),
            BoardError::Overlaps => write!(f, "Ship placement overlaps another cell in use"),
            BoardError::NotOccupied => write!(f, "Ship cells to remove are not occupied"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// Setup-time validation failures for a [`GameConfig`](super::config::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    BadDimensions { rows: usize, cols: usize },
    BadLength(usize),
    ShipTooLong(usize),
    UnprintableSymbol(u32),
    ReservedSymbol(char),
    DuplicateSymbol(char),
    FleetTooLarge,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BadDimensions { rows, cols } => write!(
                f,
                "Board size {}x{} is invalid; rows and columns must be between 1 and {}",
                rows,
                cols,
                super::config::MAX_ROWS
            ),
            ConfigError::BadLength(len) => write!(f, "Bad ship length {}; it must be >= 1", len),
            ConfigError::ShipTooLong(len) => {
                write!(f, "Bad ship length {}; it won't fit on the board", len)
            }
            ConfigError::UnprintableSymbol(code) => write!(
                f,
                "Unprintable character with value {} must not be used as a ship symbol",
                code
            ),
            ConfigError::ReservedSymbol(c) => {
                write!(f, "Character {} must not be used as a ship symbol", c)
            }
            ConfigError::DuplicateSymbol(c) => {
                write!(f, "Ship symbol {} must not be used for more than one ship", c)
            }
            ConfigError::FleetTooLarge => write!(f, "Board is too small to fit all ships"),
        }
    }
}

/// Failures a player can report while placing ships or choosing a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    Board(BoardError),
    /// Interactive input ended before the player answered.
    InputClosed,
}

impl From<BoardError> for PlayerError {
    fn from(err: BoardError) -> Self {
        PlayerError::Board(err)
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::Board(e) => write!(f, "Board error: {}", e),
            PlayerError::InputClosed => write!(f, "Input closed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}
