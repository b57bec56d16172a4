//! The 76 winning lines of the 4x4x4 cube
//!
//! Lines are enumerated once in a fixed order:
//! 1. rows within a layer (16)
//! 2. columns within a layer (16)
//! 3. through-layer columns (16)
//! 4. diagonals within each layer (8)
//! 5. diagonals within each row plane (8)
//! 6. diagonals within each column plane (8)
//! 7. space diagonals (4)

use std::sync::OnceLock;

use crate::board::{Bitboard, Pos, BOARD_SIZE};

/// Number of winning lines in the cube
pub const LINE_COUNT: usize = 76;

/// One winning line: four cells plus their mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub cells: [Pos; 4],
    pub mask: Bitboard,
}

impl Line {
    fn new(cells: [Pos; 4]) -> Self {
        Self {
            cells,
            mask: Bitboard::from_positions(&cells),
        }
    }

    /// Describe the line the way a player would read it
    pub fn describe(&self) -> String {
        let same = |axis: usize| self.cells.iter().all(|p| p.coords()[axis] == self.cells[0].coords()[axis]);
        let first = self.cells[0];
        if same(1) && same(2) {
            format!("Pillar ({}, {})", first.row, first.col)
        } else if same(0) {
            format!("Layer {}", first.layer)
        } else if same(1) {
            format!("Row {}", first.row)
        } else if same(2) {
            format!("Column {}", first.col)
        } else {
            "3D diagonal".to_string()
        }
    }
}

/// Immutable catalog of all winning lines.
#[derive(Debug, Clone)]
pub struct LineCatalog {
    lines: Vec<Line>,
}

impl LineCatalog {
    /// Generate the catalog in its canonical order.
    #[must_use]
    pub fn new() -> Self {
        let n = BOARD_SIZE as u8;
        let last = n - 1;
        let mut lines = Vec::with_capacity(LINE_COUNT);
        let mut push = |f: &dyn Fn(u8) -> Pos| {
            lines.push(Line::new([f(0), f(1), f(2), f(3)]));
        };

        for layer in 0..n {
            for row in 0..n {
                push(&|i| Pos::new(layer, row, i));
            }
        }
        for layer in 0..n {
            for col in 0..n {
                push(&|i| Pos::new(layer, i, col));
            }
        }
        for row in 0..n {
            for col in 0..n {
                push(&|i| Pos::new(i, row, col));
            }
        }
        for layer in 0..n {
            push(&|i| Pos::new(layer, i, i));
            push(&|i| Pos::new(layer, i, last - i));
        }
        for row in 0..n {
            push(&|i| Pos::new(i, row, i));
            push(&|i| Pos::new(i, row, last - i));
        }
        for col in 0..n {
            push(&|i| Pos::new(i, i, col));
            push(&|i| Pos::new(i, last - i, col));
        }
        push(&|i| Pos::new(i, i, i));
        push(&|i| Pos::new(i, i, last - i));
        push(&|i| Pos::new(i, last - i, i));
        push(&|i| Pos::new(i, last - i, last - i));

        debug_assert_eq!(lines.len(), LINE_COUNT);
        Self { lines }
    }

    /// Process-wide catalog, built on first use
    pub fn shared() -> &'static LineCatalog {
        static CATALOG: OnceLock<LineCatalog> = OnceLock::new();
        CATALOG.get_or_init(LineCatalog::new)
    }

    /// Lines in catalog order
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for LineCatalog {
    fn default() -> Self {
        Self::new()
    }
}
