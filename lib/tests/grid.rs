use seatsim_lib::{Error as SimError, Grid, State};
use std::error::Error;

#[test]
fn parse() -> Result<(), Box<dyn Error>> {
    let grid: Grid = "L.#\n#L.\n".parse()?;
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.get((0, 0)), Some(State::Vacant));
    assert_eq!(grid.get((0, 1)), Some(State::Floor));
    assert_eq!(grid.get((1, 0)), Some(State::Occupied));
    assert_eq!(grid.occupied_count(), 2);
    assert_eq!(grid.current(), grid.next());
    assert_eq!(grid.to_string(), "L.#\n#L.\n");
    assert_eq!(
        grid.rows().collect::<Vec<_>>(),
        vec![
            &[State::Vacant, State::Floor, State::Occupied][..],
            &[State::Occupied, State::Vacant, State::Floor][..],
        ]
    );
    Ok(())
}

#[test]
fn crlf() -> Result<(), Box<dyn Error>> {
    let grid: Grid = "LL\r\n##\r\n".parse()?;
    assert_eq!(grid.to_string(), "LL\n##\n");
    Ok(())
}

#[test]
fn invalid_char() {
    assert_eq!(
        "L.L\nL?L".parse::<Grid>(),
        Err(SimError::InvalidChar {
            row: 1,
            col: 1,
            ch: '?'
        })
    );
}

#[test]
fn ragged_rows() {
    assert_eq!(
        "L.L\nL.\nLLL".parse::<Grid>(),
        Err(SimError::RaggedRow {
            row: 1,
            expected: 3,
            found: 2
        })
    );
}

#[test]
fn empty() {
    assert_eq!("".parse::<Grid>(), Err(SimError::EmptyGrid));
    assert_eq!("\n".parse::<Grid>(), Err(SimError::EmptyGrid));
}

#[test]
fn size_mismatch() {
    assert_eq!(
        Grid::new(2, 2, vec![State::Vacant; 3]),
        Err(SimError::SizeMismatch {
            height: 2,
            width: 2,
            expected: 4,
            found: 3
        })
    );
    assert_eq!(
        Grid::new(usize::MAX / 2 + 1, 2, Vec::new()),
        Err(SimError::TooLarge {
            height: usize::MAX / 2 + 1,
            width: 2
        })
    );
}

#[test]
fn trailing_blank_lines() -> Result<(), Box<dyn Error>> {
    let grid: Grid = "LL\nLL\n\n\n".parse()?;
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.to_string(), "LL\nLL\n");
    assert_eq!(
        "LL\n\nLL\n".parse::<Grid>(),
        Err(SimError::RaggedRow {
            row: 1,
            expected: 2,
            found: 0
        })
    );
    Ok(())
}

#[test]
fn error_messages() {
    assert_eq!(
        SimError::InvalidChar {
            row: 0,
            col: 4,
            ch: 'x'
        }
        .to_string(),
        "Invalid character 'x' at row 0, column 4."
    );
    assert_eq!(
        SimError::NotConverged(10).to_string(),
        "No equilibrium was reached after 10 rounds."
    );
}
