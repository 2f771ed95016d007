//! Cells of a subdivided icosahedron and bitsets over them.

use crate::error::DecodeError;

/// Deepest subdivision level whose cells all have a `u32` index.
pub const MAX_LEVEL: u8 = 14;

/// Returns the number of cells on a geodesic sphere of the given subdivision level.
///
/// A level-`L` grid has `10 * 4^L + 2` cells: the twelve pentagons of the base
/// icosahedron plus the hexagons introduced by each subdivision.
///
/// # Panics
///
/// Panics if `level` is above [`MAX_LEVEL`].
#[must_use]
pub const fn cell_count(level: u8) -> usize {
    assert!(level <= MAX_LEVEL, "subdivision level above MAX_LEVEL");
    10 * (1usize << (2 * level as usize)) + 2
}

/// Index of one cell on a geodesic sphere.
///
/// Indices are opaque; neighbourhood and position are owned by the host's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u32);

impl Cell {
    /// Creates a cell from its raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl From<u32> for Cell {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "cell#{}", self.0)
    }
}

/// Set of cells on a geodesic sphere, one bit per cell.
///
/// Bits are stored in `u64` words. Padding bits above the cell count are kept
/// zero so equality, counting and serialization never need masking.
#[derive(Clone, PartialEq, Eq)]
pub struct CellSet {
    level: u8,
    len: usize,
    words: Vec<u64>,
}

impl core::fmt::Debug for CellSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CellSet")
            .field("level", &self.level)
            .field("len", &self.len)
            .field("revealed", &self.count_revealed())
            .finish()
    }
}

impl CellSet {
    /// Creates an empty set sized for the given subdivision level.
    ///
    /// # Panics
    ///
    /// Panics if `level` is above [`MAX_LEVEL`].
    #[must_use]
    pub fn new(level: u8) -> Self {
        let len = cell_count(level);
        Self {
            level,
            len,
            words: vec![0; len.div_ceil(64)],
        }
    }

    /// Decodes a packed bitmap produced by [`to_bytes`](Self::to_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnsupportedLevel`] if `level` is above
    /// [`MAX_LEVEL`], or [`DecodeError::Length`] if `bytes` is not exactly the
    /// size implied by `level`.
    pub fn from_bytes(level: u8, bytes: &[u8]) -> Result<Self, DecodeError> {
        if level > MAX_LEVEL {
            return Err(DecodeError::UnsupportedLevel { level });
        }
        let mut set = Self::new(level);
        let expected = set.byte_len();
        if bytes.len() != expected {
            return Err(DecodeError::Length {
                level,
                expected,
                actual: bytes.len(),
            });
        }

        for (i, byte) in bytes.iter().enumerate() {
            set.words[i / 8] |= u64::from(*byte) << ((i % 8) * 8);
        }
        set.clear_padding();
        Ok(set)
    }

    /// Encodes the set as a packed bitmap, least significant bit first.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        (0..self.byte_len())
            .map(|i| (self.words[i / 8] >> ((i % 8) * 8)) as u8)
            .collect()
    }

    /// Returns the subdivision level.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Returns the number of cells (revealed or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no cell is revealed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Returns whether `cell` is revealed. Out-of-range cells are never revealed.
    #[must_use]
    pub fn get(&self, cell: Cell) -> bool {
        let idx = cell.index() as usize;
        if idx >= self.len {
            return false;
        }
        self.words[idx / 64] & (1 << (idx % 64)) != 0
    }

    /// Marks `cell` as revealed or hidden.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    pub fn set(&mut self, cell: Cell, revealed: bool) {
        let idx = cell.index() as usize;
        assert!(
            idx < self.len,
            "{cell} out of range for level {} ({} cells)",
            self.level,
            self.len
        );
        let mask = 1u64 << (idx % 64);
        if revealed {
            self.words[idx / 64] |= mask;
        } else {
            self.words[idx / 64] &= !mask;
        }
    }

    /// Returns the number of revealed cells.
    #[must_use]
    pub fn count_revealed(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates revealed cells in ascending index order.
    pub fn iter_revealed(&self) -> impl Iterator<Item = Cell> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let mut bits = word;
            core::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let tz = bits.trailing_zeros();
                bits &= bits - 1;
                Some(Cell::new((wi * 64) as u32 + tz))
            })
        })
    }

    /// Hides every cell.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    fn byte_len(&self) -> usize {
        self.len.div_ceil(8)
    }

    fn clear_padding(&mut self) {
        let tail = self.len % 64;
        if tail != 0
            && let Some(last) = self.words.last_mut()
        {
            *last &= (1u64 << tail) - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_counts_follow_icosahedral_subdivision() {
        assert_eq!(cell_count(0), 12);
        assert_eq!(cell_count(1), 42);
        assert_eq!(cell_count(5), 10_242);
    }

    #[test]
    fn deepest_level_fits_u32_indices() {
        assert!(cell_count(MAX_LEVEL) - 1 <= u32::MAX as usize);
    }

    #[test]
    #[should_panic(expected = "MAX_LEVEL")]
    fn new_rejects_levels_past_max() {
        let _ = CellSet::new(MAX_LEVEL + 1);
    }

    #[test]
    fn from_bytes_rejects_levels_past_max() {
        assert!(matches!(
            CellSet::from_bytes(40, &[0; 4]),
            Err(DecodeError::UnsupportedLevel { level: 40 })
        ));
    }

    #[test]
    fn new_set_is_empty() {
        let set = CellSet::new(5);
        assert_eq!(set.len(), 10_242);
        assert!(set.is_empty());
        assert_eq!(set.count_revealed(), 0);
        assert_eq!(set.to_bytes().len(), 1281);
    }

    #[test]
    fn set_and_get() {
        let mut set = CellSet::new(2);
        set.set(Cell::new(0), true);
        set.set(Cell::new(63), true);
        set.set(Cell::new(64), true);
        set.set(Cell::new(161), true);

        assert!(set.get(Cell::new(0)));
        assert!(set.get(Cell::new(63)));
        assert!(set.get(Cell::new(64)));
        assert!(set.get(Cell::new(161)));
        assert!(!set.get(Cell::new(1)));
        assert_eq!(set.count_revealed(), 4);

        set.set(Cell::new(63), false);
        assert!(!set.get(Cell::new(63)));
        assert_eq!(set.count_revealed(), 3);
    }

    #[test]
    fn get_out_of_range_is_false() {
        let set = CellSet::new(0);
        assert!(!set.get(Cell::new(12)));
        assert!(!set.get(Cell::new(u32::MAX)));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_out_of_range_panics() {
        let mut set = CellSet::new(0);
        set.set(Cell::new(12), true);
    }

    #[test]
    fn bytes_are_lsb_first() {
        let mut set = CellSet::new(0);
        set.set(Cell::new(0), true);
        set.set(Cell::new(9), true);
        set.set(Cell::new(11), true);

        assert_eq!(set.to_bytes(), vec![0b0000_0001, 0b0000_1010]);
    }

    #[test]
    fn from_bytes_restores_bits() {
        let mut set = CellSet::new(3);
        for idx in [1, 7, 8, 100, 641] {
            set.set(Cell::new(idx), true);
        }

        let decoded = CellSet::from_bytes(3, &set.to_bytes()).unwrap();
        assert_eq!(decoded, set);
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        let err = CellSet::from_bytes(5, &[0u8; 10]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Length {
                level: 5,
                expected: 1281,
                actual: 10
            }
        ));
    }

    #[test]
    fn from_bytes_masks_padding_bits() {
        // Level 0 has 12 cells; the top four bits of the second byte are padding.
        let set = CellSet::from_bytes(0, &[0x00, 0xF0]).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn iter_revealed_is_ascending() {
        let mut set = CellSet::new(2);
        for idx in [130, 3, 64, 65] {
            set.set(Cell::new(idx), true);
        }

        let cells: Vec<u32> = set.iter_revealed().map(Cell::index).collect();
        assert_eq!(cells, vec![3, 64, 65, 130]);
    }

    #[test]
    fn clear_hides_everything() {
        let mut set = CellSet::new(1);
        set.set(Cell::new(5), true);
        set.clear();
        assert!(set.is_empty());
    }
}
