//! Fleet placement routines used by the scripted players.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use super::board::Board;
use super::common::{BoardError, Position};
use super::ship::{Orientation, ShipId};

/// Attempts at a blocked backtracking search before giving up.
pub const BACKTRACK_ATTEMPTS: usize = 50;

const ORIENTATIONS: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

fn try_orientations(board: &mut Board, origin: Position, id: ShipId) -> Option<Orientation> {
    ORIENTATIONS
        .into_iter()
        .find(|&o| board.place(origin, id, o).is_ok())
}

/// Ship `k` goes horizontally at `(k, 0)`.
pub fn place_in_rows(board: &mut Board) -> Result<(), BoardError> {
    for id in 0..board.config().num_ships() {
        board.place(Position::new(id, 0), id, Orientation::Horizontal)?;
    }
    Ok(())
}

/// Obstruct half of the board, then search for a layout that avoids the
/// obstructions; repeated up to [`BACKTRACK_ATTEMPTS`] times. The board is
/// always left unblocked.
pub fn place_with_backtracking<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<(), BoardError> {
    for attempt in 0..BACKTRACK_ATTEMPTS {
        board.block(rng);
        let found = backtrack(board);
        board.unblock();
        if found? {
            debug!("backtracking placement found on attempt {}", attempt + 1);
            return Ok(());
        }
    }
    Err(BoardError::UnableToPlaceShip)
}

/// Exhaustive search over origins in raster order, placing ships from the
/// last id down. A ship that cannot follow its predecessors makes the
/// predecessor move to its next origin. Returns `Ok(false)` when no layout
/// exists; every ship placed during the search is removed again.
fn backtrack(board: &mut Board) -> Result<bool, BoardError> {
    let cols = board.cols();
    let cells = board.rows() * cols;
    let at = |index: usize| Position::new(index / cols, index % cols);

    let mut remaining = board.config().num_ships();
    // a ship with no spot at all dooms every branch; skip the search
    for id in 0..remaining {
        let fits = (0..cells).any(|i| {
            ORIENTATIONS
                .into_iter()
                .any(|o| board.can_place(at(i), id, o))
        });
        if !fits {
            return Ok(false);
        }
    }

    let mut stack: Vec<(usize, Orientation)> = Vec::new();
    let mut cursor = 0;
    while remaining > 0 {
        if cursor >= cells {
            let Some((index, orientation)) = stack.pop() else {
                return Ok(false);
            };
            board.remove(at(index), remaining, orientation)?;
            remaining += 1;
            cursor = index + 1;
            continue;
        }
        match try_orientations(board, at(cursor), remaining - 1) {
            Some(orientation) => {
                stack.push((cursor, orientation));
                remaining -= 1;
                cursor = 0;
            }
            None => cursor += 1,
        }
    }
    Ok(true)
}

/// Place ships in id order, each at a random origin drawn from the cells no
/// earlier ship used as its origin; horizontal is tried before vertical.
pub fn place_from_random_origins<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<(), BoardError> {
    let mut pool: Vec<Position> = (0..board.rows())
        .flat_map(|r| (0..board.cols()).map(move |c| Position::new(r, c)))
        .collect();
    for id in 0..board.config().num_ships() {
        let mut untried = pool.clone();
        loop {
            if untried.is_empty() {
                debug!("no origin left for ship {}", id);
                return Err(BoardError::UnableToPlaceShip);
            }
            let origin = untried.swap_remove(rng.random_range(0..untried.len()));
            if try_orientations(board, origin, id).is_some() {
                pool.retain(|&p| p != origin);
                break;
            }
        }
    }
    Ok(())
}
