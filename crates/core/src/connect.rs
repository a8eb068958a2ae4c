//! Connectivity check for the figure
//!
//! The parser only accepts figures that form a single 4-connected
//! region. The check is a breadth-first traversal from an arbitrary
//! member cell, restricted to the set; the figure is connected iff the
//! traversal reaches every cell.

use std::collections::{BTreeSet, VecDeque};

use arrayvec::ArrayVec;

use crate::types::Point;

/// The up/down/left/right neighbours of a cell.
///
/// Up and left are absent on the top row / left column (coordinates are
/// unsigned). Diagonals are never neighbours.
fn neighbours(p: Point) -> ArrayVec<Point, 4> {
    let mut out = ArrayVec::new();
    if let Some(row) = p.row.checked_sub(1) {
        out.push(Point::new(row, p.column));
    }
    out.push(Point::new(p.row + 1, p.column));
    if let Some(column) = p.column.checked_sub(1) {
        out.push(Point::new(p.row, column));
    }
    out.push(Point::new(p.row, p.column + 1));
    out
}

/// Check whether a set of cells forms one 4-connected region.
///
/// The empty set is vacuously connected; callers that require a
/// non-empty figure check that separately.
pub fn is_connected(cells: &BTreeSet<Point>) -> bool {
    let Some(&start) = cells.iter().next() else {
        return true;
    };

    let mut visited = BTreeSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        for n in neighbours(current) {
            if cells.contains(&n) && !visited.contains(&n) {
                queue.push_back(n);
            }
        }
    }

    visited.len() == cells.len()
}
