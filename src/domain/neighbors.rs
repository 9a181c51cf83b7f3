use super::GridSnapshot;

/// Offsets of the 8 Moore neighbors
#[rustfmt::skip]
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Count alive Moore neighbors of (x, y) in the snapshot.
///
/// Offsets that fall outside the world are skipped, so edge and corner cells
/// simply have fewer candidates. There is no wrapping.
pub fn count_alive_neighbors(snapshot: &GridSnapshot, x: i32, y: i32) -> u8 {
    MOORE_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| {
            let nx = x.checked_add(dx)?;
            let ny = y.checked_add(dy)?;
            snapshot.get(nx, ny)
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoundedGrid;

    #[test]
    fn test_full_ring_counts_eight() {
        let mut grid = BoundedGrid::new(5, 5).unwrap();
        for y in 1..=3 {
            for x in 1..=3 {
                if (x, y) != (2, 2) {
                    grid.set(x, y);
                }
            }
        }
        assert_eq!(count_alive_neighbors(&grid.snapshot(), 2, 2), 8);
    }

    #[test]
    fn test_center_cell_not_counted() {
        let mut grid = BoundedGrid::new(3, 3).unwrap();
        grid.set(1, 1);
        assert_eq!(count_alive_neighbors(&grid.snapshot(), 1, 1), 0);
    }

    #[test]
    fn test_corner_excludes_outside_offsets() {
        let mut grid = BoundedGrid::new(5, 5).unwrap();
        grid.set(1, 0);
        grid.set(0, 1);
        grid.set(1, 1);
        assert_eq!(count_alive_neighbors(&grid.snapshot(), 0, 0), 3);
    }

    #[test]
    fn test_far_corner_and_outside_coordinates() {
        let mut grid = BoundedGrid::new(4, 4).unwrap();
        grid.set(3, 3);
        let snapshot = grid.snapshot();

        assert_eq!(count_alive_neighbors(&snapshot, 2, 2), 1);
        // A position just outside the world still sees in-bounds neighbors.
        assert_eq!(count_alive_neighbors(&snapshot, 4, 4), 1);
        assert_eq!(count_alive_neighbors(&snapshot, i32::MAX, i32::MIN), 0);
    }
}
