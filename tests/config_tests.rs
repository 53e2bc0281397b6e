use salvo::{ConfigError, GameConfig, Position, MAX_COLS, MAX_ROWS, STANDARD_FLEET};

#[test]
fn test_dimensions_are_bounded() {
    assert!(GameConfig::new(1, 1).is_ok());
    assert!(GameConfig::new(MAX_ROWS, MAX_COLS).is_ok());
    assert_eq!(
        GameConfig::new(0, 5),
        Err(ConfigError::BadDimensions { rows: 0, cols: 5 })
    );
    assert_eq!(
        GameConfig::new(5, MAX_COLS + 1),
        Err(ConfigError::BadDimensions {
            rows: 5,
            cols: MAX_COLS + 1
        })
    );
}

#[test]
fn test_standard_config() {
    let config = GameConfig::standard();
    assert_eq!(config.rows(), 10);
    assert_eq!(config.cols(), 10);
    assert_eq!(config.num_ships(), 5);
    assert_eq!(config.total_ship_cells(), 17);
    for (id, (length, symbol, name)) in STANDARD_FLEET.iter().enumerate() {
        let ship = config.ship(id).unwrap();
        assert_eq!(ship.length(), *length);
        assert_eq!(ship.symbol(), *symbol);
        assert_eq!(ship.name(), *name);
    }
    assert!(config.ship(5).is_none());
    assert_eq!(GameConfig::with_standard_fleet(10, 10).unwrap(), config);
}

#[test]
fn test_standard_fleet_rejects_small_boards() {
    assert_eq!(
        GameConfig::with_standard_fleet(4, 4),
        Err(ConfigError::ShipTooLong(5))
    );
    assert!(GameConfig::with_standard_fleet(5, 4).is_ok());
}

#[test]
fn test_add_ship_assigns_sequential_ids() {
    let mut config = GameConfig::new(3, 3).unwrap();
    assert_eq!(config.add_ship(3, 'C', "cruiser"), Ok(0));
    assert_eq!(config.add_ship(1, 'T', "tug"), Ok(1));
    assert_eq!(config.fleet()[1].name(), "tug");
}

#[test]
fn test_add_ship_validation() {
    let mut config = GameConfig::new(3, 4).unwrap();
    assert_eq!(config.add_ship(0, 'Z', "zero"), Err(ConfigError::BadLength(0)));
    assert_eq!(config.add_ship(5, 'Z', "long"), Err(ConfigError::ShipTooLong(5)));
    // fits along the longer side only
    assert!(config.add_ship(4, 'L', "long").is_ok());
    assert_eq!(
        config.add_ship(2, '\n', "newline"),
        Err(ConfigError::UnprintableSymbol(10))
    );
    assert_eq!(
        config.add_ship(2, '\u{7f}', "delete"),
        Err(ConfigError::UnprintableSymbol(127))
    );
    assert_eq!(
        config.add_ship(2, 'é', "accent"),
        Err(ConfigError::UnprintableSymbol(233))
    );
    for reserved in ['X', 'o', '.', '#'] {
        assert_eq!(
            config.add_ship(2, reserved, "reserved"),
            Err(ConfigError::ReservedSymbol(reserved))
        );
    }
    assert_eq!(
        config.add_ship(2, 'L', "again"),
        Err(ConfigError::DuplicateSymbol('L'))
    );
    assert_eq!(config.num_ships(), 1);
}

#[test]
fn test_space_is_a_printable_symbol() {
    let mut config = GameConfig::new(3, 3).unwrap();
    assert_eq!(config.add_ship(2, ' ', "ghost"), Ok(0));
    assert_eq!(
        config.add_ship(2, ' ', "ghost again"),
        Err(ConfigError::DuplicateSymbol(' '))
    );
}

#[test]
fn test_fleet_must_fit_on_board() {
    let mut config = GameConfig::new(2, 2).unwrap();
    config.add_ship(2, 'A', "a").unwrap();
    config.add_ship(2, 'B', "b").unwrap();
    assert_eq!(config.add_ship(1, 'C', "c"), Err(ConfigError::FleetTooLarge));
    assert_eq!(config.total_ship_cells(), 4);
}

#[test]
fn test_is_valid() {
    let config = GameConfig::new(3, 5).unwrap();
    assert!(config.is_valid(Position::new(0, 0)));
    assert!(config.is_valid(Position::new(2, 4)));
    assert!(!config.is_valid(Position::new(3, 0)));
    assert!(!config.is_valid(Position::new(0, 5)));
}

#[test]
fn test_errors_display() {
    assert_eq!(
        ConfigError::ReservedSymbol('X').to_string(),
        "Character X must not be used as a ship symbol"
    );
    assert_eq!(
        ConfigError::FleetTooLarge.to_string(),
        "Board is too small to fit all ships"
    );
}
