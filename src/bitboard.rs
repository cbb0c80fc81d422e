//! Square bit grids packed into a single unsigned integer.
//!
//! Bit `row * N + col` stands for cell `(row, col)`. The shot ledger and the
//! reference board's ship, hit and miss masks all use the `10×10` alias
//! [`GridBits`], so membership is one shift and one mask.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};
use num_traits::{PrimInt, Unsigned};

use crate::common::Coordinate;
use crate::config::GRID_SIZE;

/// Storage word for a [`BitBoard`].
pub trait Word: PrimInt + Unsigned {}

impl<T: PrimInt + Unsigned> Word for T {}

/// The game grid, one bit per cell.
pub type GridBits = BitBoard<u128, GRID_SIZE>;

const _: () = assert!(GRID_SIZE * GRID_SIZE <= u128::BITS as usize);

/// `N×N` cells stored in the low `N*N` bits of `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T: Word, const N: usize> {
    bits: T,
}

impl<T: Word, const N: usize> BitBoard<T, N> {
    const CELLS: usize = N * N;

    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    fn bit(idx: usize) -> T {
        T::one() << idx
    }

    fn is_set(&self, idx: usize) -> bool {
        !(self.bits & Self::bit(idx)).is_zero()
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    /// `(row, col)` of every set bit, row-major.
    pub fn iter_set_bits(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..Self::CELLS)
            .filter(move |&idx| self.is_set(idx))
            .map(|idx| (idx / N, idx % N))
    }
}

impl GridBits {
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.is_set(coord.index())
    }

    /// Sets the cell; `true` if it was clear before.
    #[inline]
    pub fn mark(&mut self, coord: Coordinate) -> bool {
        let fresh = !self.contains(coord);
        self.bits |= Self::bit(coord.index());
        fresh
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter_set_bits()
            .filter_map(|(r, c)| Coordinate::new(r, c).ok())
    }
}

impl<T: Word, const N: usize> Default for BitBoard<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Word, const N: usize> fmt::Debug for BitBoard<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBoard<{}>[{} set]", N, self.count_ones())
    }
}

/// One row per line, `#` for set cells and `.` otherwise.
impl<T: Word, const N: usize> fmt::Display for BitBoard<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for idx in 0..Self::CELLS {
            if idx > 0 && idx % N == 0 {
                writeln!(f)?;
            }
            f.write_str(if self.is_set(idx) { "#" } else { "." })?;
        }
        Ok(())
    }
}

impl<T: Word, const N: usize> BitAnd for BitBoard<T, N> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T: Word, const N: usize> BitOr for BitBoard<T, N> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T: Word, const N: usize> BitOrAssign for BitBoard<T, N> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
