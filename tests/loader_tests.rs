use gridsight::loader::{grid_from_layout, grid_from_rows, LoadError};
use gridsight::Cell;

#[test]
fn round_trip_from_rows() {
    let grid = grid_from_rows(&["-X", "--"]).unwrap();
    assert_eq!(grid.get_cell(0, 0), Cell::Empty);
    assert_eq!(grid.get_cell(1, 0), Cell::Blocking);
    assert_eq!(grid.get_cell(0, 1), Cell::Empty);
    assert_eq!(grid.get_cell(1, 1), Cell::Empty);
}

#[test]
fn mismatched_row_reports_its_index() {
    let err = grid_from_rows(&["----", "----", "-----"]).unwrap_err();
    assert_eq!(
        err,
        LoadError::RowLengthMismatch {
            row: 2,
            len: 5,
            expected: 4
        }
    );
    assert_eq!(err.to_string(), "row 2 has invalid length 5; expected 4");
}

#[test]
fn unknown_symbol_reports_its_coordinate() {
    let err = grid_from_rows(&["--", "#-"]).unwrap_err();
    assert_eq!(
        err,
        LoadError::UnknownSymbol {
            x: 0,
            y: 1,
            symbol: '#'
        }
    );
    assert_eq!(err.to_string(), "bad input at (0, 1): '#'");
}

#[test]
fn layout_text_with_indentation_and_blank_lines() {
    let layout = "
        --X
        ---
        X--
    ";
    let grid = grid_from_layout(layout).unwrap();
    assert_eq!(grid.width, 3);
    assert_eq!(grid.height, 3);
    assert_eq!(grid.get_cell(2, 0), Cell::Blocking);
    assert_eq!(grid.get_cell(0, 2), Cell::Blocking);
    assert_eq!(grid.get_cell(1, 1), Cell::Empty);
}
