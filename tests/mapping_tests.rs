//! Integration tests for coordinate mapping

use rgb_cube::{CELL_COUNT, CellIndex, GRID_SIZE, GridCoordinate, cell_index};

fn all_coordinates() -> impl Iterator<Item = (u8, u8, u8)> {
    let n = GRID_SIZE as u8;
    (0..n).flat_map(move |z| (0..n).flat_map(move |y| (0..n).map(move |x| (x, y, z))))
}

#[test]
fn even_layers_follow_row_major_formula() {
    for (x, y, z) in all_coordinates().filter(|(_, _, z)| z % 2 == 0) {
        let expected = x as usize + 5 * y as usize + 25 * z as usize;
        assert_eq!(cell_index(x, y, z), CellIndex(expected));
    }
}

#[test]
fn odd_layers_are_swapped_and_mirrored() {
    for (x, y, z) in all_coordinates().filter(|(_, _, z)| z % 2 == 1) {
        let (mx, my) = (4 - y as usize, 4 - x as usize);
        let expected = mx + 5 * my + 25 * z as usize;
        assert_eq!(cell_index(x, y, z), CellIndex(expected));
    }
}

#[test]
fn origin_of_first_odd_layer_is_last_cell_of_that_layer() {
    assert_eq!(cell_index(0, 0, 1), CellIndex(49));
    assert_eq!(cell_index(0, 0, 3), CellIndex(99));
}

#[test]
fn mapping_is_a_bijection() {
    let mut seen = [false; CELL_COUNT];

    for (x, y, z) in all_coordinates() {
        let index = cell_index(x, y, z);
        assert!(index.is_valid(), "({x}, {y}, {z}) mapped out of range");
        assert!(!seen[index.0], "({x}, {y}, {z}) collides at {}", index.0);
        seen[index.0] = true;
    }

    assert!(seen.iter().all(|s| *s));
}

#[test]
fn grid_coordinate_round_trips_through_index() {
    for (x, y, z) in all_coordinates() {
        let coordinate = GridCoordinate::new(x, y, z);
        assert_eq!(coordinate.index().coordinate(), coordinate);
        assert_eq!(CellIndex::from(coordinate), cell_index(x, y, z));
    }
}
