use ndarray::Array2;

/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Coordinates of the `index`-th cell in row-major order on a board that is
/// `cols` wide.
pub(crate) fn from_linear_index(index: usize, cols: Coord) -> Coord2 {
    let cols = usize::from(cols);
    // both parts are bounded by the board size, which fits `Coord`
    ((index / cols) as Coord, (index % cols) as Coord)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        NeighborIter::new(index, (rows as Coord, cols as Coord))
    }
}

/// Iterates the up-to-8 cells surrounding a center cell, clipped at the board
/// edges, in row-major order.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    row_end: Coord,
    col_start: Coord,
    col_end: Coord,
    next: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (row, col) = center;
        let (rows, cols) = bounds;

        let row_start = row.saturating_sub(1);
        let row_end = row.saturating_add(1).min(rows.saturating_sub(1));
        let col_start = col.saturating_sub(1);
        let col_end = col.saturating_add(1).min(cols.saturating_sub(1));

        let next = (rows > 0 && cols > 0 && row < rows && col < cols)
            .then_some((row_start, col_start));

        Self {
            center,
            row_end,
            col_start,
            col_end,
            next,
        }
    }

    fn advance(&self, (row, col): Coord2) -> Option<Coord2> {
        if col < self.col_end {
            Some((row, col + 1))
        } else if row < self.row_end {
            Some((row + 1, self.col_start))
        } else {
            None
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.next?;
            self.next = self.advance(current);

            if current != self.center {
                return Some(current);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();

        assert_eq!(
            neighbors,
            [
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }

    #[test]
    fn corner_cells_are_clipped() {
        let top_left: Vec<_> = NeighborIter::new((0, 0), (3, 4)).collect();
        let bottom_right: Vec<_> = NeighborIter::new((2, 3), (3, 4)).collect();

        assert_eq!(top_left, [(0, 1), (1, 0), (1, 1)]);
        assert_eq!(bottom_right, [(1, 2), (1, 3), (2, 2)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn single_row_board() {
        let neighbors: Vec<_> = NeighborIter::new((0, 2), (1, 5)).collect();

        assert_eq!(neighbors, [(0, 1), (0, 3)]);
    }

    #[test]
    fn cell_at_max_coord_does_not_overflow() {
        let bounds = (Coord::MAX, Coord::MAX);
        let center = (Coord::MAX - 1, Coord::MAX - 1);

        assert_eq!(NeighborIter::new(center, bounds).count(), 3);
    }

    #[test]
    fn linear_index_is_row_major() {
        assert_eq!(from_linear_index(0, 5), (0, 0));
        assert_eq!(from_linear_index(13, 5), (2, 3));
    }
}
