//! Game board state: ship occupancy, shot marks and per-ship hit counters.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use super::common::{BoardError, Position, ShotOutcome};
use super::config::GameConfig;
use super::ship::{Orientation, PlacedShip, ShipId};

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Intact segment of a ship.
    Ship(ShipId),
    Miss,
    /// Shot segment of a ship.
    Hit(ShipId),
    /// Temporary blocker used while searching for a placement.
    Obstructed,
}

impl Cell {
    pub fn is_shot(self) -> bool {
        matches!(self, Cell::Miss | Cell::Hit(_))
    }
}

/// One player's board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    cells: Vec<Cell>,
    placed: Vec<Option<PlacedShip>>,
}

impl Board {
    /// Create an empty board sized and stocked by `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cells: vec![Cell::Empty; config.rows() * config.cols()],
            placed: vec![None; config.num_ships()],
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows()
    }

    pub fn cols(&self) -> usize {
        self.config.cols()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.config
            .is_valid(pos)
            .then(|| pos.row * self.cols() + pos.col)
    }

    /// Cell at `pos`, `None` when off the board.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Placement record of ship `id`, if it is on the board.
    pub fn placed_ship(&self, id: ShipId) -> Option<&PlacedShip> {
        self.placed.get(id).and_then(Option::as_ref)
    }

    /// Reset every cell to water and forget all placed ships.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.placed.fill(None);
    }

    /// Obstruct half of the board's cells, chosen at random among empty ones.
    pub fn block<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut empty: Vec<usize> = (0..self.cells.len())
            .filter(|&i| self.cells[i] == Cell::Empty)
            .collect();
        let amount = (self.cells.len() / 2).min(empty.len());
        for _ in 0..amount {
            let pick = empty.swap_remove(rng.random_range(0..empty.len()));
            self.cells[pick] = Cell::Obstructed;
        }
    }

    /// Turn every obstruction back into water.
    pub fn unblock(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| **c == Cell::Obstructed) {
            *cell = Cell::Empty;
        }
    }

    /// Cells a ship would cover, or `DoesNotFit` if any lies off the board.
    fn footprint(
        &self,
        origin: Position,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<Vec<usize>, BoardError> {
        let spec = self.config.ship(id).ok_or(BoardError::InvalidShipId(id))?;
        if !self.config.is_valid(origin) {
            return Err(BoardError::OutOfBounds(origin));
        }
        orientation
            .cells(origin, spec.length())
            .map(|p| self.index(p).ok_or(BoardError::DoesNotFit))
            .collect()
    }

    /// Whether [`Board::place`] would succeed, without touching the board.
    pub fn can_place(&self, origin: Position, id: ShipId, orientation: Orientation) -> bool {
        self.placed.get(id).is_some_and(Option::is_none)
            && self
                .footprint(origin, id, orientation)
                .is_ok_and(|cells| cells.iter().all(|&i| self.cells[i] == Cell::Empty))
    }

    /// Place ship `id` with its top or leftmost cell at `origin`.
    pub fn place(
        &mut self,
        origin: Position,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let footprint = self.footprint(origin, id, orientation)?;
        if self.placed[id].is_some() {
            return Err(BoardError::ShipAlreadyPlaced(id));
        }
        if footprint.iter().any(|&i| self.cells[i] != Cell::Empty) {
            return Err(BoardError::Overlaps);
        }
        for &i in &footprint {
            self.cells[i] = Cell::Ship(id);
        }
        // footprint() already proved the id is in the fleet
        let spec = &self.config.fleet()[id];
        self.placed[id] = Some(PlacedShip::new(id, spec));
        Ok(())
    }

    /// Inverse of [`Board::place`]: clears the covered cells and forgets the ship.
    pub fn remove(
        &mut self,
        origin: Position,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let footprint = self.footprint(origin, id, orientation)?;
        if footprint.iter().any(|&i| self.cells[i] == Cell::Empty) {
            return Err(BoardError::NotOccupied);
        }
        for &i in &footprint {
            self.cells[i] = Cell::Empty;
        }
        self.placed[id] = None;
        Ok(())
    }

    /// Resolve a shot at `pos`. Rejected shots leave the board untouched.
    pub fn attack(&mut self, pos: Position) -> Result<ShotOutcome, BoardError> {
        let i = self.index(pos).ok_or(BoardError::OutOfBounds(pos))?;
        match self.cells[i] {
            Cell::Miss | Cell::Hit(_) => Err(BoardError::AlreadyAttacked(pos)),
            Cell::Empty | Cell::Obstructed => {
                self.cells[i] = Cell::Miss;
                Ok(ShotOutcome::Miss)
            }
            Cell::Ship(ship) => {
                self.cells[i] = Cell::Hit(ship);
                let sunk = self.placed[ship]
                    .as_mut()
                    .is_some_and(PlacedShip::register_hit);
                if sunk {
                    Ok(ShotOutcome::Destroyed { ship })
                } else {
                    Ok(ShotOutcome::Hit { ship })
                }
            }
        }
    }

    /// Number of ship cells not yet shot.
    pub fn ship_cells_remaining(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Ship(_)))
            .count()
    }

    /// Returns `true` when no intact ship cell is left.
    pub fn all_destroyed(&self) -> bool {
        self.ship_cells_remaining() == 0
    }

    /// Returns `true` when no obstruction is left on the board.
    pub fn is_unblocked(&self) -> bool {
        !self.cells.contains(&Cell::Obstructed)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.rows(), self.cols())?;
        for row in self.cells.chunks(self.cols()) {
            f.write_str("  ")?;
            for cell in row {
                let ch = match *cell {
                    Cell::Empty => '.',
                    Cell::Ship(id) => self.config.fleet()[id].symbol(),
                    Cell::Miss => 'o',
                    Cell::Hit(_) => 'X',
                    Cell::Obstructed => '#',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "  placed: {:?}\n}}", self.placed)
    }
}
