//! The canonical Left rule for a single row.
//!
//! Every direction on the board is reduced to this one function, so merge
//! semantics cannot drift between directions.

use smallvec::SmallVec;

use crate::core::board::{Row, MAX_TILE, SIZE};

/// Result of compacting one row toward index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowCompaction {
    /// The row after sliding and merging.
    pub row: Row,
    /// Sum of the tiles created by merges.
    pub score: u64,
    /// Whether `row` differs from the input.
    pub moved: bool,
}

/// Slide non-zero values toward index 0 and merge equal neighbours once.
///
/// A merged tile cannot merge again in the same pass, so `[2, 2, 2, 2]`
/// becomes `[4, 4, 0, 0]` and `[4, 4, 4, 0]` becomes `[8, 4, 0, 0]`.
///
/// ```
/// use rust_2048::rules::compact_left;
///
/// let out = compact_left([2, 2, 2, 2]);
/// assert_eq!(out.row, [4, 4, 0, 0]);
/// assert_eq!(out.score, 8);
/// assert!(out.moved);
/// ```
#[must_use]
pub fn compact_left(row: Row) -> RowCompaction {
    let tiles: SmallVec<[u32; SIZE]> = row.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0; SIZE];
    let mut len = 0;
    let mut score = 0u64;
    let mut i = 0;
    while i < tiles.len() {
        let value = tiles[i];
        if tiles.get(i + 1).is_some_and(|&next| can_merge(value, next)) {
            let merged = value * 2;
            out[len] = merged;
            score += u64::from(merged);
            // the partner is consumed
            i += 2;
        } else {
            out[len] = value;
            i += 1;
        }
        len += 1;
    }

    RowCompaction {
        row: out,
        score,
        moved: out != row,
    }
}

/// True if two neighbouring cells would combine.
pub(crate) fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// Mirror image of [`compact_left`]: slide toward the last index.
#[must_use]
pub fn compact_right(row: Row) -> RowCompaction {
    let mut reversed = row;
    reversed.reverse();
    let mut result = compact_left(reversed);
    result.row.reverse();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_double_merge() {
        let out = compact_left([2, 2, 2, 2]);
        assert_eq!(out.row, [4, 4, 0, 0]);
        assert_eq!(out.score, 8);
        assert!(out.moved);
    }

    #[test]
    fn test_triple_merges_leading_pair() {
        let out = compact_left([4, 4, 4, 0]);
        assert_eq!(out.row, [8, 4, 0, 0]);
        assert_eq!(out.score, 8);
    }

    #[test]
    fn test_merge_across_gaps() {
        let out = compact_left([2, 0, 0, 2]);
        assert_eq!(out.row, [4, 0, 0, 0]);
        assert_eq!(out.score, 4);
    }

    #[test]
    fn test_slide_without_merge() {
        let out = compact_left([0, 2, 0, 4]);
        assert_eq!(out.row, [2, 4, 0, 0]);
        assert_eq!(out.score, 0);
        assert!(out.moved);
    }

    #[test]
    fn test_merged_tile_does_not_chain() {
        // 2+2 makes a 4 that must not then absorb the following 4
        let out = compact_left([2, 2, 4, 0]);
        assert_eq!(out.row, [4, 4, 0, 0]);
        assert_eq!(out.score, 4);
    }

    #[test]
    fn test_unchanged_rows() {
        for row in [[0, 0, 0, 0], [2, 0, 0, 0], [2, 4, 8, 16], [4, 2, 0, 0]] {
            let out = compact_left(row);
            assert_eq!(out.row, row);
            assert_eq!(out.score, 0);
            assert!(!out.moved);
        }
    }

    #[test]
    fn test_idempotent() {
        let once = compact_left([2, 2, 4, 4]);
        assert_eq!(once.row, [4, 8, 0, 0]);
        let twice = compact_left(once.row);
        assert_eq!(twice.row, once.row);
        assert!(!twice.moved);
        assert_eq!(twice.score, 0);
    }

    #[test]
    fn test_largest_tiles() {
        let half = MAX_TILE / 2;
        let out = compact_left([half, half, 0, 0]);
        assert_eq!(out.row, [MAX_TILE, 0, 0, 0]);
        assert_eq!(out.score, u64::from(MAX_TILE));

        // capped tiles slide but stay apart
        let out = compact_left([0, MAX_TILE, MAX_TILE, 0]);
        assert_eq!(out.row, [MAX_TILE, MAX_TILE, 0, 0]);
        assert_eq!(out.score, 0);
        assert!(out.moved);
        assert!(!compact_left(out.row).moved);
    }

    #[test]
    fn test_compact_right() {
        let out = compact_right([2, 2, 2, 0]);
        assert_eq!(out.row, [0, 0, 2, 4]);
        assert_eq!(out.score, 4);

        let out = compact_right([2, 2, 2, 2]);
        assert_eq!(out.row, [0, 0, 4, 4]);
        assert_eq!(out.score, 8);
    }
}
