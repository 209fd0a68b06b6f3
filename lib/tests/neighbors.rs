use seatsim_lib::{
    count_visible_occupied,
    neighbors::{par_count_visible_occupied, sees_occupied},
    Direction, Grid, Visibility,
};
use std::error::Error;

#[test]
fn eight_in_sight() -> Result<(), Box<dyn Error>> {
    let grid: Grid = ".......#.\n\
                      ...#.....\n\
                      .#.......\n\
                      .........\n\
                      ..#L....#\n\
                      ....#....\n\
                      .........\n\
                      #........\n\
                      ...#....."
        .parse()?;
    assert_eq!(grid.count_visible_occupied((4, 3), Visibility::LineOfSight), 8);
    assert_eq!(grid.count_visible_occupied((4, 3), Visibility::Adjacent), 2);
    Ok(())
}

#[test]
fn blocked_by_empty_seat() -> Result<(), Box<dyn Error>> {
    let grid: Grid = ".............\n\
                      .L.L.#.#.#.#.\n\
                      ............."
        .parse()?;
    assert_eq!(grid.count_visible_occupied((1, 1), Visibility::LineOfSight), 0);
    assert_eq!(grid.count_visible_occupied((1, 3), Visibility::LineOfSight), 1);
    Ok(())
}

#[test]
fn nothing_in_sight() -> Result<(), Box<dyn Error>> {
    let grid: Grid = ".##.##.\n\
                      #.#.#.#\n\
                      ##...##\n\
                      ...L...\n\
                      ##...##\n\
                      #.#.#.#\n\
                      .##.##."
        .parse()?;
    assert_eq!(grid.count_visible_occupied((3, 3), Visibility::LineOfSight), 0);
    assert_eq!(grid.count_visible_occupied((3, 3), Visibility::Adjacent), 0);
    Ok(())
}

#[test]
fn skips_floor() -> Result<(), Box<dyn Error>> {
    let grid: Grid = "L.....#".parse()?;
    let east = Direction { dr: 0, dc: 1 };
    assert!(sees_occupied(grid.view(), (0, 0), east, Visibility::LineOfSight));
    assert!(!sees_occupied(grid.view(), (0, 0), east, Visibility::Adjacent));
    assert_eq!(grid.count_visible_occupied((0, 0), Visibility::LineOfSight), 1);

    let grid: Grid = "L.....L".parse()?;
    assert!(!sees_occupied(grid.view(), (0, 0), east, Visibility::LineOfSight));
    assert_eq!(grid.count_visible_occupied((0, 0), Visibility::LineOfSight), 0);
    assert_eq!(grid.count_visible_occupied((0, 6), Visibility::LineOfSight), 0);
    Ok(())
}

#[test]
fn corners() -> Result<(), Box<dyn Error>> {
    let grid: Grid = "###\n###\n###".parse()?;
    for visibility in [Visibility::Adjacent, Visibility::LineOfSight] {
        for corner in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(grid.count_visible_occupied(corner, visibility), 3);
        }
        for edge in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            assert_eq!(grid.count_visible_occupied(edge, visibility), 5);
        }
        assert_eq!(grid.count_visible_occupied((1, 1), visibility), 8);
    }

    let grid: Grid = "#".parse()?;
    assert_eq!(grid.count_visible_occupied((0, 0), Visibility::LineOfSight), 0);
    Ok(())
}

#[test]
fn parallel_count_agrees() -> Result<(), Box<dyn Error>> {
    let grid: Grid = "#.##.##.##\n\
                      #######.##\n\
                      #.#.#..#..\n\
                      ####.##.##\n\
                      #.##.##.##\n\
                      #.#####.##\n\
                      ..#.#.....\n\
                      ##########\n\
                      #.######.#\n\
                      #.#####.##"
        .parse()?;
    let view = grid.view();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            for visibility in [Visibility::Adjacent, Visibility::LineOfSight] {
                let count = count_visible_occupied(view, (row, col), visibility);
                assert!(count <= 8);
                assert_eq!(
                    par_count_visible_occupied(view, (row, col), visibility),
                    count
                );
            }
        }
    }
    Ok(())
}

#[test]
fn out_of_bounds() -> Result<(), Box<dyn Error>> {
    let grid: Grid = "L#\n#L".parse()?;
    let view = grid.view();
    assert_eq!(view.offset((0, 0), Direction { dr: -1, dc: 0 }), None);
    assert_eq!(view.offset((1, 1), Direction { dr: 0, dc: 1 }), None);
    assert_eq!(view.offset((0, 0), Direction { dr: 1, dc: 1 }), Some((1, 1)));
    assert_eq!(grid.get((2, 0)), None);
    Ok(())
}
