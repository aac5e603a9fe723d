//! `Net`: a rectangular bitmap of unit cells.
//!
//! Cells hold occupancy counts: `0` is empty, `1` is one face of paper, and
//! anything above `1` only ever appears when [`crate::net::builder::build_net`]
//! lays a self-overlapping tree flat. A valid net is strictly 0/1.
//!
//! Reported nets are always trimmed to their minimal bounding box, and
//! [`Net::canonical`] picks the lexicographically smallest of the eight
//! mirror/rotation variants so equal nets dedup to one representative.

use std::fmt;

use crate::box_net_error::BoxNetError;
use crate::debug_invariants::DebugInvariants;

/// A rectangular grid of cell occupancy counts. Rows all share one width.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Net {
    rows: Vec<Vec<u8>>,
}

impl Net {
    /// The empty net: zero rows, zero cells.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build a net from raw rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, BoxNetError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            for (row, cells) in rows.iter().enumerate().skip(1) {
                if cells.len() != expected {
                    return Err(BoxNetError::RaggedBitmap {
                        row,
                        expected,
                        found: cells.len(),
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.width() == 0
    }

    /// Occupancy count at `(row, col)`.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    /// Whether `(row, col)` holds at least one face.
    #[inline]
    pub fn filled(&self, row: usize, col: usize) -> bool {
        self.rows[row][col] > 0
    }

    /// Signed-coordinate variant of [`Net::filled`]; out of bounds is empty.
    #[inline]
    pub fn filled_at(&self, row: isize, col: isize) -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < self.height()
            && (col as usize) < self.width()
            && self.filled(row as usize, col as usize)
    }

    /// Number of cells holding at least one face.
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&c| c > 0).count())
            .sum()
    }

    /// Whether any cell holds more than one face (an overlapped layout).
    pub fn has_stacked_cells(&self) -> bool {
        self.rows.iter().any(|row| row.iter().any(|&c| c > 1))
    }

    /// The minimal bounding box around the filled cells; all-empty trims to
    /// the empty net.
    pub fn trimmed(&self) -> Net {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell > 0 {
                    let (min_r, max_r, min_c, max_c) =
                        bounds.unwrap_or((r, r, c, c));
                    bounds = Some((min_r.min(r), max_r.max(r), min_c.min(c), max_c.max(c)));
                }
            }
        }
        match bounds {
            None => Net::empty(),
            Some((min_r, max_r, min_c, max_c)) => Net {
                rows: self.rows[min_r..=max_r]
                    .iter()
                    .map(|row| row[min_c..=max_c].to_vec())
                    .collect(),
            },
        }
    }

    /// Quarter-turn rotation.
    pub fn rotated(&self) -> Net {
        if self.is_empty() {
            return Net::empty();
        }
        let (h, w) = (self.height(), self.width());
        Net {
            rows: (0..w)
                .rev()
                .map(|c| (0..h).map(|r| self.rows[r][c]).collect())
                .collect(),
        }
    }

    /// Horizontal mirror image.
    pub fn mirrored(&self) -> Net {
        Net {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().rev().copied().collect())
                .collect(),
        }
    }

    /// Canonical representative: the lexicographic minimum of the trimmed
    /// net and its mirror under all four rotations.
    pub fn canonical(&self) -> Net {
        let trimmed = self.trimmed();
        let mut best = trimmed.clone();
        for start in [trimmed.clone(), trimmed.mirrored()] {
            let mut variant = start;
            for _ in 0..4 {
                if variant < best {
                    best = variant.clone();
                }
                variant = variant.rotated();
            }
        }
        best
    }

    /// Printable rendering: `[]` for one face, two spaces for an empty cell,
    /// `[n` for a stack of `n`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            for &cell in row {
                match cell {
                    0 => out.push_str("  "),
                    1 => out.push_str("[]"),
                    n => out.push_str(&format!("[{n}")),
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Net {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl DebugInvariants for Net {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Net");
    }

    fn validate_invariants(&self) -> Result<(), BoxNetError> {
        let expected = self.width();
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(BoxNetError::RaggedBitmap {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }
        Ok(())
    }
}
