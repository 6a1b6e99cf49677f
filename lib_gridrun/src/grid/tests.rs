use std::str::FromStr;

use crate::error::Error;

use super::CostGrid;

#[test]
fn loads_a_rectangular_grid() {
    let grid = CostGrid::from_lines(["123", "456"]).unwrap();

    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.cost(0, 0), 1);
    assert_eq!(grid.cost(0, 2), 3);
    assert_eq!(grid.cost(1, 2), 6);
}

#[test]
fn rejects_empty_input() {
    assert!(matches!(
        CostGrid::from_lines(Vec::<&str>::new()),
        Err(Error::EmptyGrid)
    ));
}

#[test]
fn rejects_an_empty_first_row() {
    assert!(matches!(
        CostGrid::from_lines([""]),
        Err(Error::EmptyRow { row: 0 })
    ));
}

#[test]
fn rejects_ragged_rows() {
    assert!(matches!(
        CostGrid::from_lines(["123", "45"]),
        Err(Error::RaggedRow {
            row: 1,
            expected: 3,
            found: 2,
        })
    ));
}

#[test]
fn rejects_non_digit_characters() {
    assert!(matches!(
        CostGrid::from_lines(["12x"]),
        Err(Error::InvalidDigit {
            row: 0,
            character: 'x',
        })
    ));
}

#[test]
fn parses_a_full_text() {
    let grid = CostGrid::from_str("12\n34\n").unwrap();

    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 2);
    assert_eq!(grid.cost(1, 1), 4);
}

#[test]
fn rejects_an_empty_text() {
    assert!(matches!(CostGrid::from_str(""), Err(Error::EmptyGrid)));
}

#[test]
fn accepts_numeric_rows_beyond_single_digits() {
    let grid = CostGrid::from_rows(vec![vec![10, 200], vec![3000, 4]]).unwrap();

    assert_eq!(grid.cost(0, 1), 200);
    assert_eq!(grid.cost(1, 0), 3000);
}

#[test]
fn rejects_ragged_numeric_rows() {
    assert!(matches!(
        CostGrid::from_rows(vec![vec![1], vec![2, 3]]),
        Err(Error::RaggedRow { row: 1, .. })
    ));
}
