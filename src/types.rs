//! Core cube addressing types.
//!
//! The cube is a 5x5x5 lattice of cells wired as one continuous strip. The strip
//! runs row by row through a layer, then snakes back through the next layer in
//! the opposite direction, so odd layers are addressed mirrored and transposed.

/// Number of cells along each edge of the cube.
pub const GRID_SIZE: usize = 5;

/// Number of cells in one horizontal layer.
pub const LAYER_SIZE: usize = GRID_SIZE * GRID_SIZE;

/// Total number of cells in the cube.
pub const CELL_COUNT: usize = LAYER_SIZE * GRID_SIZE;

const MAX_AXIS: u8 = (GRID_SIZE - 1) as u8;

/// Position of a cell in the lattice. Each axis is in `0..GRID_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridCoordinate {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl GridCoordinate {
    /// Creates a coordinate. Axes are not validated.
    #[inline]
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Maps this coordinate to its position on the strip.
    #[inline]
    pub const fn index(&self) -> CellIndex {
        cell_index(self.x, self.y, self.z)
    }
}

/// Flat address of a cell on the strip, in `0..CELL_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CellIndex(pub usize);

impl CellIndex {
    /// Returns true if this index addresses a cell of the cube.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 < CELL_COUNT
    }

    /// Recovers the lattice coordinate for this index.
    ///
    /// Inverse of [`cell_index`] for every valid index.
    pub const fn coordinate(&self) -> GridCoordinate {
        let z = (self.0 / LAYER_SIZE) as u8;
        let in_layer = self.0 % LAYER_SIZE;
        let col = (in_layer % GRID_SIZE) as u8;
        let row = (in_layer / GRID_SIZE) as u8;

        if z % 2 == 1 {
            GridCoordinate::new(MAX_AXIS - row, MAX_AXIS - col, z)
        } else {
            GridCoordinate::new(col, row, z)
        }
    }
}

impl From<usize> for CellIndex {
    fn from(index: usize) -> Self {
        CellIndex(index)
    }
}

impl From<CellIndex> for usize {
    fn from(index: CellIndex) -> Self {
        index.0
    }
}

impl From<GridCoordinate> for CellIndex {
    fn from(coordinate: GridCoordinate) -> Self {
        coordinate.index()
    }
}

/// Logical lit/unlit flag of a cell.
///
/// Tracks whether a cell is considered on, independent of the brightness an
/// in-flight fade is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CellState {
    #[default]
    Idle,
    Active,
}

/// Maps a lattice coordinate to its strip index.
///
/// Even layers are addressed `x + 5y + 25z`. Odd layers are wired back the other
/// way, so `x` and `y` are swapped and mirrored before applying the same formula.
/// Inputs are expected in `0..GRID_SIZE` and are not checked.
pub const fn cell_index(x: u8, y: u8, z: u8) -> CellIndex {
    let (x, y) = if z % 2 == 1 {
        (MAX_AXIS - y, MAX_AXIS - x)
    } else {
        (x, y)
    };

    CellIndex(x as usize + y as usize * GRID_SIZE + z as usize * LAYER_SIZE)
}
