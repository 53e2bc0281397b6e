//! Ship specifications and placed-ship bookkeeping.

use alloc::string::String;

use super::common::Position;

/// Zero-based index of a ship in the fleet, in registration order.
pub type ShipId = usize;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the columns of its origin row.
    Horizontal,
    /// Extends along the rows of its origin column.
    Vertical,
}

impl Orientation {
    /// Cells covered by a ship of `length` starting at `origin`. Cells may lie
    /// off the board; callers check bounds.
    pub fn cells(self, origin: Position, length: usize) -> impl Iterator<Item = Position> {
        (0..length).map(move |i| match self {
            Orientation::Horizontal => Position::new(origin.row, origin.col + i),
            Orientation::Vertical => Position::new(origin.row + i, origin.col),
        })
    }

    /// Axis joining two distinct cells that share a row or a column.
    pub fn between(a: Position, b: Position) -> Option<Self> {
        if a == b {
            None
        } else if a.row == b.row {
            Some(Orientation::Horizontal)
        } else if a.col == b.col {
            Some(Orientation::Vertical)
        } else {
            None
        }
    }
}

/// Type of ship: length, display symbol and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipSpec {
    length: usize,
    symbol: char,
    name: String,
}

impl ShipSpec {
    pub fn new(length: usize, symbol: char, name: String) -> Self {
        Self {
            length,
            symbol,
            name,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A ship sitting on a board together with the hits it has taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedShip {
    id: ShipId,
    length: usize,
    symbol: char,
    hits: usize,
}

impl PlacedShip {
    pub(crate) fn new(id: ShipId, spec: &ShipSpec) -> Self {
        Self {
            id,
            length: spec.length(),
            symbol: spec.symbol(),
            hits: 0,
        }
    }

    /// Register one hit; returns `true` when this hit sinks the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.hits < self.length {
            self.hits += 1;
        }
        self.is_destroyed()
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_destroyed(&self) -> bool {
        self.hits == self.length
    }
}
