use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{Board, BoardError, Cell, GameConfig, Orientation, Position, ShotOutcome};

fn config(rows: usize, cols: usize, ships: &[(usize, char, &str)]) -> GameConfig {
    let mut config = GameConfig::new(rows, cols).unwrap();
    for &(len, sym, name) in ships {
        config.add_ship(len, sym, name).unwrap();
    }
    config
}

#[test]
fn test_tug_on_single_cell_board() {
    let config = config(1, 1, &[(1, 'T', "Tug")]);
    let mut board = Board::new(&config);
    board
        .place(Position::new(0, 0), 0, Orientation::Horizontal)
        .unwrap();
    assert!(!board.all_destroyed());

    let outcome = board.attack(Position::new(0, 0)).unwrap();
    assert_eq!(outcome, ShotOutcome::Destroyed { ship: 0 });
    assert!(outcome.hit());
    assert!(outcome.destroyed());
    assert_eq!(outcome.ship_id(), Some(0));
    assert!(board.all_destroyed());
}

#[test]
fn test_destroyer_hit_then_sink_then_reject() {
    let config = config(3, 3, &[(2, 'D', "Destroyer")]);
    let mut board = Board::new(&config);
    board
        .place(Position::new(1, 0), 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(board.cell(Position::new(1, 0)), Some(Cell::Ship(0)));
    assert_eq!(board.cell(Position::new(1, 1)), Some(Cell::Ship(0)));
    assert_eq!(board.cell(Position::new(1, 2)), Some(Cell::Empty));

    assert_eq!(
        board.attack(Position::new(1, 0)).unwrap(),
        ShotOutcome::Hit { ship: 0 }
    );
    assert_eq!(
        board.attack(Position::new(1, 1)).unwrap(),
        ShotOutcome::Destroyed { ship: 0 }
    );
    assert_eq!(
        board.attack(Position::new(1, 0)).unwrap_err(),
        BoardError::AlreadyAttacked(Position::new(1, 0))
    );
    assert_eq!(board.placed_ship(0).unwrap().hits(), 2);
    assert!(board.all_destroyed());
}

#[test]
fn test_miss_marks_cell_and_is_rejected_twice() {
    let config = config(3, 3, &[(2, 'D', "Destroyer")]);
    let mut board = Board::new(&config);
    board
        .place(Position::new(0, 0), 0, Orientation::Vertical)
        .unwrap();
    assert_eq!(board.attack(Position::new(2, 2)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.cell(Position::new(2, 2)), Some(Cell::Miss));
    assert_eq!(
        board.attack(Position::new(2, 2)).unwrap_err(),
        BoardError::AlreadyAttacked(Position::new(2, 2))
    );
    assert!(!board.all_destroyed());
}

#[test]
fn test_attack_out_of_bounds_changes_nothing() {
    let config = config(3, 3, &[(2, 'D', "Destroyer")]);
    let mut board = Board::new(&config);
    board
        .place(Position::new(0, 0), 0, Orientation::Horizontal)
        .unwrap();
    let before = board.clone();
    for pos in [Position::new(3, 0), Position::new(0, 3), Position::new(9, 9)] {
        assert_eq!(board.attack(pos).unwrap_err(), BoardError::OutOfBounds(pos));
    }
    assert_eq!(board, before);
}

#[test]
fn test_place_rejections() {
    let config = config(3, 3, &[(3, 'C', "Cruiser"), (2, 'D', "Destroyer")]);
    let mut board = Board::new(&config);

    assert_eq!(
        board.place(Position::new(0, 1), 0, Orientation::Horizontal),
        Err(BoardError::DoesNotFit)
    );
    assert_eq!(
        board.place(Position::new(1, 0), 0, Orientation::Vertical),
        Err(BoardError::DoesNotFit)
    );
    assert_eq!(
        board.place(Position::new(3, 0), 0, Orientation::Vertical),
        Err(BoardError::OutOfBounds(Position::new(3, 0)))
    );
    assert_eq!(
        board.place(Position::new(0, 0), 7, Orientation::Vertical),
        Err(BoardError::InvalidShipId(7))
    );

    board
        .place(Position::new(0, 1), 0, Orientation::Vertical)
        .unwrap();
    assert_eq!(
        board.place(Position::new(2, 0), 0, Orientation::Horizontal),
        Err(BoardError::ShipAlreadyPlaced(0))
    );
    assert_eq!(
        board.place(Position::new(1, 0), 1, Orientation::Horizontal),
        Err(BoardError::Overlaps)
    );
    // failed placements leave no trace
    assert_eq!(board.cell(Position::new(1, 0)), Some(Cell::Empty));
    assert!(board.placed_ship(1).is_none());

    board
        .place(Position::new(0, 2), 1, Orientation::Vertical)
        .unwrap();
    assert_eq!(board.ship_cells_remaining(), 5);
}

#[test]
fn test_remove_is_inverse_of_place() {
    let config = config(4, 4, &[(3, 'C', "Cruiser")]);
    let mut board = Board::new(&config);
    let empty = board.clone();
    board
        .place(Position::new(1, 1), 0, Orientation::Horizontal)
        .unwrap();
    assert!(board.placed_ship(0).is_some());

    assert_eq!(
        board.remove(Position::new(1, 0), 0, Orientation::Horizontal),
        Err(BoardError::NotOccupied)
    );
    assert_eq!(
        board.remove(Position::new(1, 2), 0, Orientation::Vertical),
        Err(BoardError::NotOccupied)
    );
    board
        .remove(Position::new(1, 1), 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(board, empty);

    // the ship can go down again after removal
    board
        .place(Position::new(0, 0), 0, Orientation::Vertical)
        .unwrap();
}

#[test]
fn test_block_and_unblock() {
    let config = config(4, 4, &[(2, 'D', "Destroyer")]);
    let mut board = Board::new(&config);
    let mut rng = SmallRng::seed_from_u64(7);
    board
        .place(Position::new(0, 0), 0, Orientation::Horizontal)
        .unwrap();
    board.block(&mut rng);

    let mut obstructed = 0;
    for r in 0..4 {
        for c in 0..4 {
            if board.cell(Position::new(r, c)) == Some(Cell::Obstructed) {
                obstructed += 1;
            }
        }
    }
    assert_eq!(obstructed, 8);
    assert!(!board.is_unblocked());
    // ships are never covered by obstructions
    assert_eq!(board.cell(Position::new(0, 0)), Some(Cell::Ship(0)));

    board.unblock();
    assert!(board.is_unblocked());
    assert_eq!(board.ship_cells_remaining(), 2);
}

#[test]
fn test_clear_forgets_ships_and_shots() {
    let config = config(3, 3, &[(2, 'D', "Destroyer")]);
    let mut board = Board::new(&config);
    board
        .place(Position::new(0, 0), 0, Orientation::Horizontal)
        .unwrap();
    board.attack(Position::new(0, 0)).unwrap();
    board.attack(Position::new(2, 2)).unwrap();
    board.clear();
    assert_eq!(board, Board::new(&config));
}
