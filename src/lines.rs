//! Winning-line matching on the 4x4 board.
//!
//! Ports `winningLines` and `isWinningBoard()` from the game page: ten lines
//! in a fixed order (rows top to bottom, then columns left to right, then
//! the two diagonals), scanned front to back.

/// Four board positions forming a line.
pub type WinningLine = [usize; 4];

/// The ten winning lines, in the host's enumeration order.
pub const WINNING_LINES: [WinningLine; 10] = [
    // rows
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15],
    // columns
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    // diagonals
    [0, 5, 10, 15],
    [3, 6, 9, 12],
];

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch {
    /// Board position of each target, in the order the targets were given.
    pub positions: [usize; 4],
    /// The completed line, as listed in [`WINNING_LINES`].
    pub line: WinningLine,
}

/// First line in [`WINNING_LINES`] whose cells are exactly the positions of
/// the four `targets` on `cells`.
///
/// `None` if any target is missing or no line is covered. Positions are
/// first occurrences, unambiguous on the duplicate-free boards the shuffle
/// produces. Generic so the search loop matches on pool indices and callers
/// on rendered words through the same code path.
pub fn find_winning_line<T: PartialEq>(cells: &[T], targets: &[T; 4]) -> Option<LineMatch> {
    let mut positions = [0usize; 4];
    for (slot, target) in targets.iter().enumerate() {
        positions[slot] = cells.iter().position(|c| c == target)?;
    }
    let line = *WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|idx| positions.contains(idx)))?;
    Some(LineMatch { positions, line })
}
