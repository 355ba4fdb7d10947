//! Depth-first successor walk over the whole cell tree.
//!
//! Used to enumerate siblings/descendants without recursion: starting from
//! any cell, repeatedly calling [`next_cell`] visits every cell in the
//! hierarchy exactly once, in digit order, skipping the child digit deleted
//! beneath pentagons.

use super::CellIndex;
use crate::{BaseCell, Direction};

/// Digit value used to mark a position deeper than a cell's resolution.
const INVALID_DIGIT: u8 = 7;

/// Returns the lexicographic successor of `cell` in a depth-first traversal
/// of the cell tree (virtual root = parent of all base cells, children
/// listed in digit order with the pentagon-deleted digit skipped).
///
/// Returns `None` once the walk runs past the last base cell.
pub(crate) fn next_cell(cell: CellIndex) -> Option<CellIndex> {
    let mut res = cell.resolution();
    let mut bits = u64::from(cell);

    loop {
        let Some(parent_res) = res.pred() else {
            return next_base_cell(CellIndex::new_unchecked(bits).base_cell());
        };

        let parent = CellIndex::new_unchecked(bits)
            .parent(parent_res)
            .expect("parent resolution");
        let digit = super::bits::get_direction(bits, res);

        if digit < INVALID_DIGIT - 1 {
            let skip = parent.is_pentagon() && digit == u8::from(Direction::Center);
            let next_digit = digit + 1 + u8::from(skip);
            return Some(CellIndex::new_unchecked(super::bits::set_direction(
                bits, next_digit, res,
            )));
        }

        bits = u64::from(parent);
        res = parent_res;
    }
}

/// Returns the resolution-0 cell one base cell past `current`, or `None` if
/// `current` is the last base cell.
fn next_base_cell(current: BaseCell) -> Option<CellIndex> {
    let next = u8::from(current).checked_add(1)?;

    (usize::from(next) < usize::from(BaseCell::count()))
        .then(|| CellIndex::base_cells().nth(usize::from(next)))
        .flatten()
}

#[cfg(test)]
#[path = "./polyfill_tests.rs"]
mod tests;
